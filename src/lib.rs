pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod parser;
pub mod render;

use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub use config::SiteConfig;
pub use error::ConvertError;
pub use model::RecipeDocument;
pub use parser::parse;
pub use render::{render, render_with};

/// Outcome of converting one recipe file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub ingredients: usize,
    pub tools: usize,
    pub steps: usize,
}

impl fmt::Display for ConversionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "✅ Converted {} → {}",
            self.input.display(),
            self.output.display()
        )?;
        writeln!(f, "📊 Ingredients: {}", self.ingredients)?;
        writeln!(f, "🔧 Tools: {}", self.tools)?;
        write!(f, "📝 Steps: {}", self.steps)
    }
}

/// Sibling of `input` with the same stem and an `.html` extension
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("html")
}

/// Parse `content` and render it as a page for `site`
pub fn convert_str(content: &str, site: &SiteConfig) -> String {
    let doc = parse(content);
    debug!("{:#?}", doc);
    render_with(&doc, site)
}

/// Convert a recipe file into an HTML page written next to it.
///
/// # Example
/// ```no_run
/// use cooklang_html::{convert_file, SiteConfig};
///
/// let summary = convert_file("pasta.cook", &SiteConfig::default())?;
/// println!("{summary}");
/// # Ok::<(), cooklang_html::ConvertError>(())
/// ```
pub fn convert_file(
    input: impl AsRef<Path>,
    site: &SiteConfig,
) -> Result<ConversionSummary, ConvertError> {
    let input = input.as_ref();
    if !input.exists() {
        return Err(ConvertError::NotFound(input.to_path_buf()));
    }

    let content = fs::read_to_string(input).map_err(|source| ConvertError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let doc = parse(&content);
    let html = render_with(&doc, site);

    let output = output_path(input);
    fs::write(&output, html).map_err(|source| ConvertError::Write {
        path: output.clone(),
        source,
    })?;
    info!("Wrote {}", output.display());

    Ok(ConversionSummary {
        input: input.to_path_buf(),
        output,
        ingredients: doc.ingredients().len(),
        tools: doc.tools().len(),
        steps: doc.steps().len(),
    })
}
