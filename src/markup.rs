//! Inline Cooklang markers used inside section lines.
//!
//! An ingredient marker is `@name{quantity%unit}` with an optional
//! `{notes}` group directly after it. A tool marker is `#name{}`.

use std::fmt;

/// One `@name{quantity%unit}{notes}` occurrence within a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientMarker<'a> {
    pub name: &'a str,
    /// Raw text of the first brace group, `%` separator included
    pub amount: &'a str,
    pub notes: &'a str,
    start: usize,
    end: usize,
}

impl<'a> IngredientMarker<'a> {
    /// Finds the first marker in `text`.
    ///
    /// The name is at least one character and runs up to the first `{`;
    /// the amount runs up to the next `}`.
    pub fn find(text: &'a str) -> Option<Self> {
        let mut from = 0;
        loop {
            let at = from + text[from..].find('@')?;
            let open = at + 1 + text[at + 1..].find('{')?;
            if open == at + 1 {
                from = at + 1;
                continue;
            }
            let close = open + 1 + text[open + 1..].find('}')?;

            let mut end = close + 1;
            let mut notes = "";
            if text[end..].starts_with('{') {
                if let Some(len) = text[end + 1..].find('}') {
                    notes = &text[end + 1..end + 1 + len];
                    end += len + 2;
                }
            }

            return Some(Self {
                name: &text[at + 1..open],
                amount: &text[open + 1..close],
                notes,
                start: at,
                end,
            });
        }
    }

    /// Quantity and unit, split on the first `%`
    pub fn quantity_unit(&self) -> Option<(&'a str, &'a str)> {
        self.amount
            .split_once('%')
            .map(|(quantity, rest)| {
                (quantity, rest.split_once('%').map_or(rest, |(unit, _)| unit))
            })
    }
}

impl fmt::Display for IngredientMarker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.trim();
        match self.quantity_unit() {
            Some((quantity, unit)) => f.write_str(format!("{quantity} {unit} {name}").trim())?,
            None if !self.amount.is_empty() => {
                f.write_str(format!("{} {name}", self.amount).trim())?
            }
            None => f.write_str(name)?,
        }
        if !self.notes.is_empty() {
            write!(f, ", {}", self.notes)?;
        }
        Ok(())
    }
}

/// Replaces every ingredient marker in `line` with its readable form,
/// leaving the text around the markers untouched.
pub fn format_ingredients(line: &str) -> String {
    let mut formatted = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(marker) = IngredientMarker::find(rest) {
        formatted.push_str(&rest[..marker.start]);
        formatted.push_str(&marker.to_string());
        rest = &rest[marker.end..];
    }
    formatted.push_str(rest);
    formatted
}

/// Name of the first `#name{}` tool marker in `line`, trimmed
pub fn extract_tool(line: &str) -> Option<&str> {
    let mut from = 0;
    loop {
        let hash = from + line[from..].find('#')?;
        let open = hash + 1 + line[hash + 1..].find('{')?;
        if open > hash + 1 && line[open + 1..].starts_with('}') {
            return Some(line[hash + 1..open].trim());
        }
        from = hash + 1;
    }
}

/// Drops leading `-` and space characters, then trims
pub fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches(['-', ' ']).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_only() {
        assert_eq!(format_ingredients("@eggs{2}"), "2 eggs");
    }

    #[test]
    fn test_quantity_and_unit() {
        assert_eq!(format_ingredients("@flour{200%g}"), "200 g flour");
    }

    #[test]
    fn test_empty_amount_with_notes() {
        assert_eq!(format_ingredients("@salt{}{to taste}"), "salt, to taste");
    }

    #[test]
    fn test_quantity_unit_and_notes() {
        assert_eq!(format_ingredients("@flour{200%g}{sifted}"), "200 g flour, sifted");
    }

    #[test]
    fn test_multi_word_name() {
        assert_eq!(
            format_ingredients("@olive oil{2%tbsp}"),
            "2 tbsp olive oil"
        );
    }

    #[test]
    fn test_every_marker_in_line_is_replaced() {
        assert_eq!(
            format_ingredients("@salt{}{to taste} and @pepper{1%pinch}"),
            "salt, to taste and 1 pinch pepper"
        );
    }

    #[test]
    fn test_surrounding_text_untouched() {
        assert_eq!(
            format_ingredients("about @butter{50%g}, softened (optional)"),
            "about 50 g butter, softened (optional)"
        );
    }

    #[test]
    fn test_missing_quantity_before_unit() {
        assert_eq!(format_ingredients("@water{%ml}"), "ml water");
    }

    #[test]
    fn test_extra_percent_fields_ignored() {
        assert_eq!(format_ingredients("@milk{1%cup%extra}"), "1 cup milk");
    }

    #[test]
    fn test_empty_notes_group_consumed() {
        assert_eq!(format_ingredients("@basil{}{}"), "basil");
    }

    #[test]
    fn test_unterminated_marker_left_alone() {
        assert_eq!(format_ingredients("@sugar{100%g"), "@sugar{100%g");
        assert_eq!(format_ingredients("plain text"), "plain text");
    }

    #[test]
    fn test_empty_name_is_not_a_marker() {
        assert_eq!(format_ingredients("@{1} @rice{1%cup}"), "@{1} 1 cup rice");
    }

    #[test]
    fn test_unterminated_notes_group() {
        assert_eq!(format_ingredients("@oil{1%tbsp}{for frying"), "1 tbsp oil{for frying");
    }

    #[test]
    fn test_marker_fields() {
        let marker = IngredientMarker::find("add @ flour {200%g}{sifted}!").unwrap();
        assert_eq!(marker.name, " flour ");
        assert_eq!(marker.amount, "200%g");
        assert_eq!(marker.notes, "sifted");
        assert_eq!(marker.quantity_unit(), Some(("200", "g")));
        assert_eq!(marker.to_string(), "200 g flour, sifted");
    }

    #[test]
    fn test_quantity_unit_split() {
        let unit_of = |text: &'static str| IngredientMarker::find(text).unwrap().quantity_unit();
        assert_eq!(unit_of("@milk{1%cup%extra}"), Some(("1", "cup")));
        assert_eq!(unit_of("@milk{1%}"), Some(("1", "")));
        assert_eq!(unit_of("@milk{%%}"), Some(("", "")));
        assert_eq!(unit_of("@milk{1 cup}"), None);
    }

    #[test]
    fn test_extract_tool() {
        assert_eq!(extract_tool("#whisk{}"), Some("whisk"));
        assert_eq!(extract_tool("a large #mixing bowl{}"), Some("mixing bowl"));
        assert_eq!(extract_tool("whisk"), None);
        assert_eq!(extract_tool("#pan{large}"), None);
        assert_eq!(extract_tool("#{} then #pot{}"), Some("pot"));
    }

    #[test]
    fn test_strip_list_marker() {
        assert_eq!(strip_list_marker("- #whisk{}"), "#whisk{}");
        assert_eq!(strip_list_marker("-- - item  "), "item");
        assert_eq!(strip_list_marker("plain"), "plain");
        assert_eq!(strip_list_marker("-"), "");
    }
}
