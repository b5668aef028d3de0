//! Formatting utilities for definitions and result lines

use crate::core::{QueryMode, SearchResult};

/// A definition split into its summary line and its senses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition<'a> {
    pub summary: &'a str,
    pub senses: Vec<&'a str>,
}

/// Split a multi-line definition
///
/// Blank lines are dropped. The first remaining line is the summary; the rest are
/// senses with any leading `1.`-style numbering removed.
///
/// # Examples
/// ```
/// use scrabbled::output::formatters::format_definition;
///
/// let def = format_definition("A deed.\n1. A law.\n\n2. Part of a play.");
/// assert_eq!(def.summary, "A deed.");
/// assert_eq!(def.senses, ["A law.", "Part of a play."]);
/// ```
#[must_use]
pub fn format_definition(text: &str) -> Definition<'_> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let summary = lines.next().unwrap_or_default();
    let senses = lines.map(strip_numbering).collect();
    Definition { summary, senses }
}

/// Remove a leading `12.` marker and the whitespace after it
#[must_use]
pub fn strip_numbering(line: &str) -> &str {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 && line[digits..].starts_with('.') {
        line[digits + 1..].trim_start()
    } else {
        line
    }
}

/// One-line summary of a result: `3: word : summary`
#[must_use]
pub fn result_line(index: usize, result: &SearchResult) -> String {
    let summary = format_definition(&result.definition).summary;
    if summary.is_empty() {
        format!("{}: {}", index + 1, result.word)
    } else {
        format!("{}: {} : {summary}", index + 1, result.word)
    }
}

/// Mode selector with the active mode bracketed
#[must_use]
pub fn mode_selector(active: QueryMode) -> String {
    QueryMode::ALL
        .iter()
        .map(|&mode| {
            if mode == active {
                format!("[{}]", mode.label())
            } else {
                mode.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_definition_has_no_senses() {
        let def = format_definition("Past tense of eat.");
        assert_eq!(def.summary, "Past tense of eat.");
        assert!(def.senses.is_empty());
    }

    #[test]
    fn empty_definition() {
        let def = format_definition("\n  \n");
        assert_eq!(def.summary, "");
        assert!(def.senses.is_empty());
    }

    #[test]
    fn senses_lose_numbering_but_keep_text() {
        let def = format_definition("Summary\n 10.  Tenth sense\nUnnumbered\n3.14 is pi");
        assert_eq!(def.senses, ["Tenth sense", "Unnumbered", "14 is pi"]);
    }

    #[test]
    fn strip_numbering_requires_dot() {
        assert_eq!(strip_numbering("2. Two"), "Two");
        assert_eq!(strip_numbering("2 Two"), "2 Two");
        assert_eq!(strip_numbering("Two"), "Two");
    }

    #[test]
    fn result_line_is_one_based_and_uses_summary() {
        let result = SearchResult::new("act", "A deed.\n1. A law.");
        assert_eq!(result_line(0, &result), "1: act : A deed.");
        assert_eq!(result_line(4, &SearchResult::new("tac", "")), "5: tac");
    }

    #[test]
    fn mode_selector_brackets_active_mode() {
        assert_eq!(
            mode_selector(QueryMode::Suffix),
            "Normal Prefix [Suffix] Pattern"
        );
    }
}
