use log::{debug, warn};

use crate::markup::{extract_tool, format_ingredients, strip_list_marker};
use crate::model::RecipeDocument;

/// Section selected by the most recent `## ` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    PortioningGuide,
    Ingredients,
    Tools,
    Instructions,
    Tips,
    /// Any other header; lines under it are dropped
    Other(String),
}

impl From<&str> for Section {
    fn from(header: &str) -> Self {
        match header {
            "Portioning Guide" => Section::PortioningGuide,
            "Ingredients" => Section::Ingredients,
            "Tools" => Section::Tools,
            "Instructions" => Section::Instructions,
            "Tips" => Section::Tips,
            other => Section::Other(other.to_string()),
        }
    }
}

/// Parse a recipe file into a [`RecipeDocument`].
///
/// Never fails: lines that match nothing are dropped, or become intro
/// text when they appear before the first section header. A `>>` line
/// without a `:` is skipped with a warning.
pub fn parse(content: &str) -> RecipeDocument {
    let state = content
        .lines()
        .enumerate()
        .fold(ParseState::default(), |mut state, (index, line)| {
            state.feed(index + 1, line);
            state
        });
    state.finish()
}

#[derive(Default)]
struct ParseState {
    section: Option<Section>,
    doc: RecipeDocument,
}

impl ParseState {
    fn feed(&mut self, line_number: usize, line: &str) {
        if let Some(entry) = line.strip_prefix(">>") {
            match entry.split_once(':') {
                Some((key, value)) => {
                    self.doc
                        .metadata
                        .insert(key.trim().to_string(), value.trim().to_string());
                }
                None => warn!(
                    "Skipping metadata line {} without ':' separator: {:?}",
                    line_number, line
                ),
            }
            return;
        }

        if let Some(title) = line.strip_prefix("# ") {
            self.doc
                .metadata
                .insert("title".to_string(), title.trim().to_string());
            return;
        }

        if let Some(header) = line.strip_prefix("## ") {
            let section = Section::from(header.trim());
            debug!("Line {}: entering section {:?}", line_number, section);
            self.section = Some(section);
            return;
        }

        if line.trim().is_empty() {
            return;
        }

        let doc = &mut self.doc;
        match &self.section {
            None => {
                doc.intro.push_str(line.trim());
                doc.intro.push(' ');
            }
            Some(Section::PortioningGuide) => doc.portioning_guide.push(line.trim().to_string()),
            Some(Section::Ingredients) => {
                let ingredient = format_ingredients(strip_list_marker(line));
                if !ingredient.is_empty() {
                    doc.ingredients.push(ingredient);
                }
            }
            Some(Section::Tools) => {
                if let Some(tool) = extract_tool(strip_list_marker(line)) {
                    doc.tools.push(tool.to_string());
                }
            }
            Some(Section::Instructions) => doc.steps.push(line.trim().to_string()),
            Some(Section::Tips) => doc.tips.push(strip_list_marker(line).to_string()),
            Some(Section::Other(_)) => {}
        }
    }

    fn finish(mut self) -> RecipeDocument {
        let trimmed = self.doc.intro.trim_end().len();
        self.doc.intro.truncate(trimmed);
        debug!(
            "Parsed recipe: {} ingredients, {} tools, {} steps, {} tips",
            self.doc.ingredients.len(),
            self.doc.tools.len(),
            self.doc.steps.len(),
            self.doc.tips.len()
        );
        self.doc
    }
}
