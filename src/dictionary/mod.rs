//! Dictionary index for word lookup
//!
//! A [`Dictionary`] is built once from `(word, definition)` entries and answers every
//! [`QueryMode`]:
//!
//! - `Normal`: anagram index keyed by the word's sorted letters
//! - `Prefix`: trie over the words
//! - `Suffix`: trie over the reversed words
//! - `Pattern`: wildcard walk of the prefix trie
//!
//! Entries are de-duplicated by word and kept in alphabetical order, so every lookup
//! returns results alphabetically.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
pub use loader::DictionaryError;
pub use trie::{Trie, WILDCARDS};

use crate::core::{QueryMode, SearchResult};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Indexed word list
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<SearchResult>,
    anagrams: FxHashMap<String, Vec<usize>>,
    prefixes: Trie,
    suffixes: Trie,
}

/// Sorted-letter key shared by all anagrams of a word
#[must_use]
pub fn anagram_key(letters: &str) -> String {
    let mut chars: Vec<char> = letters.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

impl Dictionary {
    /// Build the indexes from entries
    ///
    /// Words are lowercased; when a word appears more than once the first definition wins.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = SearchResult>) -> Self {
        let mut entries: Vec<SearchResult> = entries
            .into_iter()
            .map(|mut entry| {
                entry.word = entry.word.trim().to_lowercase();
                entry
            })
            .filter(|entry| !entry.word.is_empty())
            .collect();

        // Stable sort keeps the first definition ahead of later duplicates
        entries.par_sort_by(|a, b| a.word.cmp(&b.word));
        entries.dedup_by(|later, earlier| later.word == earlier.word);

        let keys: Vec<String> = entries
            .par_iter()
            .map(|entry| anagram_key(&entry.word))
            .collect();

        let mut anagrams: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut prefixes = Trie::new();
        let mut suffixes = Trie::new();

        for (i, (entry, key)) in entries.iter().zip(keys).enumerate() {
            anagrams.entry(key).or_default().push(i);
            prefixes.insert(entry.word.chars(), i);
            suffixes.insert(entry.word.chars().rev(), i);
        }

        Self {
            entries,
            anagrams,
            prefixes,
            suffixes,
        }
    }

    /// Dictionary built from the entries compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_entries(loader::entries_from_slice(EMBEDDED))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by exact word
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&SearchResult> {
        let word = word.to_lowercase();
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(&word))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Run a query and return matching entries in alphabetical order
    ///
    /// Text is lowercased first. Empty text matches nothing in every mode.
    ///
    /// # Examples
    /// ```
    /// use scrabbled::core::{QueryMode, SearchResult};
    /// use scrabbled::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_entries([
    ///     SearchResult::new("cat", "A feline."),
    ///     SearchResult::new("act", "A deed."),
    ///     SearchResult::new("cot", "A small bed."),
    /// ]);
    /// let words: Vec<_> = dict
    ///     .search("tca", QueryMode::Normal)
    ///     .into_iter()
    ///     .map(|r| r.word)
    ///     .collect();
    /// assert_eq!(words, ["act", "cat"]);
    /// ```
    #[must_use]
    pub fn search(&self, text: &str, mode: QueryMode) -> Vec<SearchResult> {
        let text = text.to_lowercase();
        if text.is_empty() {
            return Vec::new();
        }

        let mut hits = match mode {
            QueryMode::Normal => self
                .anagrams
                .get(&anagram_key(&text))
                .cloned()
                .unwrap_or_default(),
            QueryMode::Prefix => {
                let mut out = Vec::new();
                self.prefixes.collect_prefixed(text.chars(), &mut out);
                out
            }
            QueryMode::Suffix => {
                let mut out = Vec::new();
                self.suffixes.collect_prefixed(text.chars().rev(), &mut out);
                out
            }
            QueryMode::Pattern => {
                let pattern: Vec<char> = text.chars().collect();
                let mut out = Vec::new();
                self.prefixes.collect_matching(&pattern, &mut out);
                out
            }
        };

        // Entry indices follow alphabetical order
        hits.sort_unstable();
        hits.dedup();
        hits.into_iter().map(|i| self.entries[i].clone()).collect()
    }
}
