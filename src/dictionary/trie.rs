//! Character trie over dictionary entry indices
//!
//! Keys are sequences of `char`; each terminal node stores the index of the entry it
//! spells. The suffix index is the same structure fed with reversed words.

use rustc_hash::FxHashMap;

/// Wildcards accepted by pattern matching
pub const WILDCARDS: [char; 2] = ['_', '?'];

#[derive(Debug, Default)]
struct TrieNode {
    children: FxHashMap<char, TrieNode>,
    entry: Option<usize>,
}

/// Prefix tree mapping character keys to entry indices
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key, keeping the first entry if the key is already present
    pub fn insert(&mut self, key: impl IntoIterator<Item = char>, entry: usize) {
        let mut current = &mut self.root;
        for c in key {
            current = current.children.entry(c).or_default();
        }
        if current.entry.is_none() {
            current.entry = Some(entry);
            self.len += 1;
        }
    }

    /// Number of keys stored
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Collect every entry whose key starts with `prefix`
    ///
    /// An empty prefix collects the whole trie.
    pub fn collect_prefixed(&self, prefix: impl IntoIterator<Item = char>, out: &mut Vec<usize>) {
        let mut current = &self.root;
        for c in prefix {
            match current.children.get(&c) {
                Some(node) => current = node,
                None => return,
            }
        }
        collect_subtree(current, out);
    }

    /// Collect every entry whose key has the pattern's length and agrees with it at
    /// each non-wildcard position
    pub fn collect_matching(&self, pattern: &[char], out: &mut Vec<usize>) {
        match_from(&self.root, pattern, out);
    }
}

fn collect_subtree(node: &TrieNode, out: &mut Vec<usize>) {
    if let Some(entry) = node.entry {
        out.push(entry);
    }
    for child in node.children.values() {
        collect_subtree(child, out);
    }
}

fn match_from(node: &TrieNode, pattern: &[char], out: &mut Vec<usize>) {
    let Some((&c, rest)) = pattern.split_first() else {
        if let Some(entry) = node.entry {
            out.push(entry);
        }
        return;
    };

    if WILDCARDS.contains(&c) {
        for child in node.children.values() {
            match_from(child, rest, out);
        }
    } else if let Some(next) = node.children.get(&c) {
        match_from(next, rest, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for (i, word) in words.iter().enumerate() {
            trie.insert(word.chars(), i);
        }
        trie
    }

    fn sorted(mut v: Vec<usize>) -> Vec<usize> {
        v.sort_unstable();
        v
    }

    #[test]
    fn prefix_collects_subtree() {
        let trie = trie_of(&["cat", "car", "cart", "dog"]);
        let mut out = Vec::new();
        trie.collect_prefixed("ca".chars(), &mut out);
        assert_eq!(sorted(out), vec![0, 1, 2]);
    }

    #[test]
    fn prefix_includes_exact_word() {
        let trie = trie_of(&["car", "cart"]);
        let mut out = Vec::new();
        trie.collect_prefixed("cart".chars(), &mut out);
        assert_eq!(out, vec![1]);
    }

    #[test]
    fn missing_prefix_collects_nothing() {
        let trie = trie_of(&["cat"]);
        let mut out = Vec::new();
        trie.collect_prefixed("x".chars(), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn duplicate_key_keeps_first_entry() {
        let mut trie = Trie::new();
        trie.insert("cat".chars(), 0);
        trie.insert("cat".chars(), 7);
        assert_eq!(trie.len(), 1);

        let mut out = Vec::new();
        trie.collect_prefixed("cat".chars(), &mut out);
        assert_eq!(out, vec![0]);
    }

    #[test]
    fn pattern_wildcards_match_one_character() {
        let trie = trie_of(&["cat", "cot", "cut", "cart", "at"]);
        let pattern: Vec<char> = "c_t".chars().collect();
        let mut out = Vec::new();
        trie.collect_matching(&pattern, &mut out);
        assert_eq!(sorted(out), vec![0, 1, 2]);

        let pattern: Vec<char> = "?a?".chars().collect();
        let mut out = Vec::new();
        trie.collect_matching(&pattern, &mut out);
        assert_eq!(out, vec![0]);
    }

    #[test]
    fn pattern_without_wildcards_is_exact() {
        let trie = trie_of(&["cat", "cart"]);
        let pattern: Vec<char> = "cat".chars().collect();
        let mut out = Vec::new();
        trie.collect_matching(&pattern, &mut out);
        assert_eq!(out, vec![0]);
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        let mut out = Vec::new();
        trie.collect_prefixed("".chars(), &mut out);
        assert!(out.is_empty());
    }
}
