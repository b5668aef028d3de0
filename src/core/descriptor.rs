//! Query descriptor construction
//!
//! A descriptor is the canonical request value handed to a matching engine. It is
//! rebuilt from the current input and mode whenever it is read, and carries no
//! identity beyond its two fields.

use super::QueryMode;
use std::fmt;

/// Immutable query request: the trimmed text and the selected mode
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryDescriptor {
    text: String,
    mode: QueryMode,
}

impl QueryDescriptor {
    /// Build a descriptor from raw input and a mode
    ///
    /// Surrounding whitespace is trimmed. Construction never fails: blank input yields a
    /// descriptor with empty text, which [`is_blank`](Self::is_blank) reports.
    ///
    /// # Examples
    /// ```
    /// use scrabbled::core::{QueryDescriptor, QueryMode};
    ///
    /// let d = QueryDescriptor::build("  cat ", QueryMode::Normal);
    /// assert_eq!(d.text(), "cat");
    /// assert_eq!(d, QueryDescriptor::build("cat", QueryMode::Normal));
    /// ```
    #[must_use]
    pub fn build(raw: &str, mode: QueryMode) -> Self {
        Self {
            text: raw.trim().to_string(),
            mode,
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> QueryMode {
        self.mode
    }

    /// True when there is nothing to search for
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for QueryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.mode, self.text)
    }
}
