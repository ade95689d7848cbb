use serde::Serialize;
use std::collections::HashMap;

pub const DEFAULT_TITLE: &str = "Recipe";
pub const DEFAULT_SERVINGS: &str = "2-4";
pub const DEFAULT_TOTAL_TIME: &str = "30 minutes";
pub const DEFAULT_PREP_TIME: &str = "15 minutes";

/// Structured contents of a single recipe file.
///
/// Built in one pass by [`crate::parser::parse`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeDocument {
    pub(crate) metadata: HashMap<String, String>,
    pub(crate) intro: String,
    pub(crate) portioning_guide: Vec<String>,
    pub(crate) ingredients: Vec<String>,
    pub(crate) tools: Vec<String>,
    pub(crate) steps: Vec<String>,
    pub(crate) tips: Vec<String>,
}

impl RecipeDocument {
    /// All `>>key: value` entries plus `title` from the `# Title` line
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.meta("title")
    }

    /// Free text before the first section header, space-joined
    pub fn intro(&self) -> &str {
        &self.intro
    }

    pub fn portioning_guide(&self) -> &[String] {
        &self.portioning_guide
    }

    /// Ingredient lines with their markers already formatted
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    /// Instruction lines as written, inline markup included
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    /// Header values with the fallbacks used when a key is missing
    pub fn stats(&self) -> RecipeStats<'_> {
        let total_time = self.meta("time").unwrap_or(DEFAULT_TOTAL_TIME);
        RecipeStats {
            title: self.title().unwrap_or(DEFAULT_TITLE),
            servings: self.meta("servings").unwrap_or(DEFAULT_SERVINGS),
            prep_time: self.meta("prep_time").unwrap_or(DEFAULT_PREP_TIME),
            cook_time: self.meta("cook_time").unwrap_or(total_time),
            total_time,
        }
    }
}

/// Resolved values for the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeStats<'a> {
    pub title: &'a str,
    pub servings: &'a str,
    pub prep_time: &'a str,
    pub cook_time: &'a str,
    pub total_time: &'a str,
}
