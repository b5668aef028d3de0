//! Dictionary loading utilities
//!
//! Reads tab-separated `word<TAB>definition` files or converts the embedded constant.
//! Blank lines and lines starting with `#` are skipped, and a literal `\n` inside a
//! definition becomes a line break.

use crate::core::SearchResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading a dictionary
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected 'word<TAB>definition'")]
    MissingSeparator { line: usize },
    #[error("line {line}: word is empty")]
    EmptyWord { line: usize },
}

/// Load dictionary entries from a file
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read, or a line-level error
/// if any non-comment line is malformed.
///
/// # Examples
/// ```no_run
/// use scrabbled::dictionary::loader::load_from_file;
///
/// let entries = load_from_file("data/dictionary.tsv").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SearchResult>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_tsv(&content)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded dictionary file");
    Ok(entries)
}

/// Parse tab-separated dictionary content
///
/// # Errors
///
/// Returns an error naming the first malformed line (1-based).
pub fn parse_tsv(content: &str) -> Result<Vec<SearchResult>, DictionaryError> {
    let mut entries = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let line_no = i + 1;
        let trimmed = line.trim_end();
        if trimmed.trim_start().is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (word, definition) = trimmed
            .split_once('\t')
            .ok_or(DictionaryError::MissingSeparator { line: line_no })?;
        let word = word.trim();
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord { line: line_no });
        }

        entries.push(SearchResult::new(
            word.to_lowercase(),
            definition.trim().replace("\\n", "\n"),
        ));
    }

    Ok(entries)
}

/// Convert embedded `(word, definition)` pairs to entries
///
/// # Examples
/// ```
/// use scrabbled::dictionary::loader::entries_from_slice;
/// use scrabbled::dictionary::EMBEDDED;
///
/// let entries = entries_from_slice(EMBEDDED);
/// assert_eq!(entries.len(), EMBEDDED.len());
/// ```
#[must_use]
pub fn entries_from_slice(slice: &[(&str, &str)]) -> Vec<SearchResult> {
    slice
        .iter()
        .map(|&(word, definition)| SearchResult::new(word, definition))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let content = "# header\n\ncat\tA feline.\n   \nact\tA deed.\n";
        let entries = parse_tsv(content).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], SearchResult::new("cat", "A feline."));
        assert_eq!(entries[1], SearchResult::new("act", "A deed."));
    }

    #[test]
    fn parse_unescapes_line_breaks() {
        let entries = parse_tsv("bat\tA club.\\n1. A mammal.\\n2. To hit.").unwrap();
        assert_eq!(entries[0].definition, "A club.\n1. A mammal.\n2. To hit.");
    }

    #[test]
    fn parse_lowercases_words() {
        let entries = parse_tsv("CAT\tA feline.").unwrap();
        assert_eq!(entries[0].word, "cat");
    }

    #[test]
    fn parse_reports_missing_separator() {
        let err = parse_tsv("cat\tA feline.\ndog a canine").unwrap_err();
        assert!(matches!(err, DictionaryError::MissingSeparator { line: 2 }));
    }

    #[test]
    fn parse_reports_empty_word() {
        let err = parse_tsv("\tno word here").unwrap_err();
        assert!(matches!(err, DictionaryError::EmptyWord { line: 1 }));
    }

    #[test]
    fn load_from_file_reads_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tea\tA hot drink.").unwrap();
        writeln!(file, "eat\tTo consume food.").unwrap();

        let entries = load_from_file(file.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word, "eat");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_file(dir.path().join("absent.tsv")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("absent.tsv"));
    }

    #[test]
    fn entries_from_slice_converts_pairs() {
        let entries = entries_from_slice(&[("cat", "A feline."), ("act", "A deed.")]);
        assert_eq!(entries[0].word, "cat");
        assert_eq!(entries[1].definition, "A deed.");
    }
}
