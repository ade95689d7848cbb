use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt;

use crate::config::SiteConfig;
use crate::model::RecipeDocument;

const STYLES: &str = r#"        .recipe-detail {
            max-width: 800px;
            margin: 0 auto;
        }

        .recipe-header {
            padding: 3rem 0 2rem;
            border-bottom: 2px solid var(--cooking-secondary);
            margin-bottom: 2rem;
        }

        .recipe-header h1 {
            font-family: var(--font-serif);
            font-size: 2.5rem;
            color: var(--cooking-dark);
            margin-bottom: 1rem;
        }

        .recipe-intro {
            color: var(--text-medium);
            font-size: 1.1rem;
            line-height: 1.7;
            margin-bottom: 1.5rem;
        }

        .recipe-stats {
            display: flex;
            gap: 2rem;
            flex-wrap: wrap;
            padding: 1.5rem;
            background-color: var(--cooking-bg);
            border-radius: 8px;
        }

        .stat {
            display: flex;
            flex-direction: column;
        }

        .stat-label {
            font-size: 0.85rem;
            color: var(--text-light);
            text-transform: uppercase;
            letter-spacing: 0.05em;
            margin-bottom: 0.25rem;
        }

        .stat-value {
            font-size: 1.1rem;
            color: var(--cooking-dark);
            font-weight: 600;
        }

        .recipe-section {
            margin: 3rem 0;
        }

        .recipe-section h2 {
            font-size: 1.75rem;
            color: var(--cooking-dark);
            margin-bottom: 1rem;
            border-bottom: 2px solid var(--cooking-secondary);
            padding-bottom: 0.5rem;
        }

        .ingredients-list {
            list-style: none;
            padding: 0;
        }

        .ingredients-list li {
            padding: 0.75rem;
            border-bottom: 1px solid var(--border-color);
            color: var(--text-dark);
        }

        .ingredients-list li:hover {
            background-color: var(--cooking-bg);
        }

        .instructions-list {
            list-style: none;
            counter-reset: step-counter;
            padding: 0;
        }

        .instructions-list li {
            counter-increment: step-counter;
            position: relative;
            padding: 1.5rem 0 1.5rem 4rem;
            border-bottom: 1px solid var(--border-color);
            color: var(--text-dark);
            line-height: 1.7;
        }

        .instructions-list li:before {
            content: counter(step-counter);
            position: absolute;
            left: 0;
            top: 1.25rem;
            width: 2.5rem;
            height: 2.5rem;
            background-color: var(--cooking-primary);
            color: white;
            border-radius: 50%;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: 600;
            font-size: 1.1rem;
        }

        .recipe-notes {
            background-color: var(--cooking-bg);
            padding: 1.5rem;
            border-left: 4px solid var(--cooking-secondary);
            border-radius: 4px;
            margin: 2rem 0;
        }

        .recipe-notes h3 {
            color: var(--cooking-dark);
            margin-bottom: 0.75rem;
            font-size: 1.2rem;
        }

        .recipe-notes p, .recipe-notes ul {
            color: var(--text-medium);
            line-height: 1.7;
            margin-bottom: 0.75rem;
        }

        .recipe-notes ul {
            padding-left: 1.5rem;
        }

        .recipe-notes p:last-child {
            margin-bottom: 0;
        }

        .back-link {
            display: inline-block;
            margin-bottom: 2rem;
            color: var(--cooking-primary);
            text-decoration: none;
            font-weight: 500;
        }

        .back-link:hover {
            text-decoration: underline;
        }

        .portioning-guide {
            background-color: var(--bg-light);
            padding: 1.5rem;
            border-radius: 8px;
            margin: 2rem 0;
        }

        .portioning-guide h3 {
            color: var(--cooking-dark);
            margin-bottom: 1rem;
            font-size: 1.2rem;
        }

        .portioning-guide p {
            color: var(--text-medium);
            line-height: 1.7;
            margin-bottom: 0.5rem;
        }
"#;

/// Render a recipe page with the default site settings
pub fn render(doc: &RecipeDocument) -> String {
    render_with(doc, &SiteConfig::default())
}

/// Render a recipe page using the given site settings
pub fn render_with(doc: &RecipeDocument, site: &SiteConfig) -> String {
    RecipePage::new(doc, site).to_string()
}

/// A complete HTML page for one recipe.
///
/// Every recipe and site value is HTML-escaped on the way out; list
/// regions are only written when their list has entries.
pub struct RecipePage<'a> {
    doc: &'a RecipeDocument,
    site: &'a SiteConfig,
}

impl<'a> RecipePage<'a> {
    pub fn new(doc: &'a RecipeDocument, site: &'a SiteConfig) -> Self {
        Self { doc, site }
    }

    fn write_head(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self.doc.stats().title;
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\">")?;
        writeln!(f, "<head>")?;
        writeln!(f, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            f,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(
            f,
            "    <title>{} - {}</title>",
            encode_text(title),
            encode_text(&self.site.author)
        )?;
        writeln!(
            f,
            "    <link rel=\"stylesheet\" href=\"{}\">",
            attr(&self.site.stylesheet)
        )?;
        writeln!(f, "    <style>")?;
        f.write_str(STYLES)?;
        writeln!(f, "    </style>")?;
        writeln!(f, "</head>")
    }

    fn write_nav(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    <nav class=\"navbar cooking-nav\">")?;
        writeln!(f, "        <div class=\"nav-container\">")?;
        writeln!(
            f,
            "            <div class=\"nav-brand\"><a href=\"{}\">{}</a></div>",
            attr(&self.site.index_page),
            encode_text(&self.site.author)
        )?;
        writeln!(f, "            <ul class=\"nav-menu\">")?;
        writeln!(
            f,
            "                <li><a href=\"{}\">← Back to Cooking</a></li>",
            attr(&self.site.listing_page)
        )?;
        writeln!(f, "            </ul>")?;
        writeln!(f, "        </div>")?;
        writeln!(f, "    </nav>")
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.doc.stats();
        writeln!(f, "            <div class=\"recipe-header\">")?;
        writeln!(f, "                <h1>{}</h1>", encode_text(stats.title))?;
        writeln!(
            f,
            "                <p class=\"recipe-intro\">{}</p>",
            encode_text(self.doc.intro())
        )?;
        writeln!(f)?;
        writeln!(f, "                <div class=\"recipe-stats\">")?;
        for (label, value) in [
            ("Prep Time", stats.prep_time),
            ("Cook Time", stats.cook_time),
            ("Total Time", stats.total_time),
            ("Servings", stats.servings),
        ] {
            writeln!(f, "                    <div class=\"stat\">")?;
            writeln!(
                f,
                "                        <span class=\"stat-label\">{label}</span>"
            )?;
            writeln!(
                f,
                "                        <span class=\"stat-value\">{}</span>",
                encode_text(value)
            )?;
            writeln!(f, "                    </div>")?;
        }
        writeln!(f, "                </div>")?;
        writeln!(f, "            </div>")
    }

    fn write_portioning_guide(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.doc.portioning_guide();
        if lines.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "            <div class=\"portioning-guide\">")?;
        writeln!(f, "                <h3>🧮 Portioning Guide</h3>")?;
        for line in lines {
            writeln!(f, "                <p>{}</p>", encode_text(line))?;
        }
        writeln!(f, "            </div>")
    }

    fn write_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        heading: &str,
        list_tag: &str,
        list_class: &str,
        items: &[String],
    ) -> fmt::Result {
        if items.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "            <section class=\"recipe-section\">")?;
        writeln!(f, "                <h2>{heading}</h2>")?;
        writeln!(f, "                <{list_tag} class=\"{list_class}\">")?;
        for item in items {
            writeln!(f, "                    <li>{}</li>", encode_text(item))?;
        }
        writeln!(f, "                </{list_tag}>")?;
        writeln!(f, "            </section>")
    }

    fn write_tips(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tips = self.doc.tips();
        if tips.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "            <div class=\"recipe-notes\">")?;
        writeln!(f, "                <h3>✨ Tips</h3>")?;
        writeln!(f, "                <ul>")?;
        for tip in tips {
            writeln!(f, "                    <li>{}</li>", encode_text(tip))?;
        }
        writeln!(f, "                </ul>")?;
        writeln!(f, "            </div>")
    }

    fn write_footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    <footer class=\"cooking-footer\">")?;
        writeln!(f, "        <div class=\"container\">")?;
        writeln!(
            f,
            "            <p><a href=\"{}\">← Back to all recipes</a></p>",
            attr(&self.site.listing_page)
        )?;
        writeln!(f, "        </div>")?;
        writeln!(f, "    </footer>")
    }
}

impl fmt::Display for RecipePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_head(f)?;
        writeln!(f, "<body class=\"cooking-page\">")?;
        self.write_nav(f)?;
        writeln!(f)?;
        writeln!(f, "    <div class=\"container\">")?;
        writeln!(f, "        <article class=\"recipe-detail\">")?;
        writeln!(
            f,
            "            <a href=\"{}#recipes\" class=\"back-link\">← All Recipes</a>",
            attr(&self.site.listing_page)
        )?;
        writeln!(f)?;
        self.write_header(f)?;
        self.write_portioning_guide(f)?;
        self.write_section(
            f,
            "Ingredients",
            "ul",
            "ingredients-list",
            self.doc.ingredients(),
        )?;
        self.write_section(
            f,
            "Instructions",
            "ol",
            "instructions-list",
            self.doc.steps(),
        )?;
        self.write_tips(f)?;
        writeln!(f, "        </article>")?;
        writeln!(f, "    </div>")?;
        writeln!(f)?;
        self.write_footer(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn attr(value: &str) -> std::borrow::Cow<'_, str> {
    encode_double_quoted_attribute(value)
}
