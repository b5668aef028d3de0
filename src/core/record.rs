//! Search result records

use std::fmt;

/// A dictionary entry returned by a matching engine
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchResult {
    pub word: String,
    pub definition: String,
}

impl SearchResult {
    #[must_use]
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
