//! Query mode selection

use std::fmt;
use std::str::FromStr;

/// How the typed letters are matched against the dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum QueryMode {
    /// Words built from exactly the given letters
    #[default]
    Normal,
    /// Words beginning with the given characters
    Prefix,
    /// Words ending with the given characters
    Suffix,
    /// Same-length words where `_` or `?` matches any one character
    Pattern,
}

/// Error returned when a mode name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown query mode '{0}' (expected normal, prefix, suffix or pattern)")]
pub struct ModeError(String);

impl QueryMode {
    /// Every mode, in selector order
    pub const ALL: [Self; 4] = [Self::Normal, Self::Prefix, Self::Suffix, Self::Pattern];

    /// Lowercase name used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Prefix => "prefix",
            Self::Suffix => "suffix",
            Self::Pattern => "pattern",
        }
    }

    /// Capitalised label for selectors
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
            Self::Pattern => "Pattern",
        }
    }

    /// One-line description shown in help text
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Normal => "words made from exactly these letters",
            Self::Prefix => "words beginning with these characters",
            Self::Suffix => "words ending with these characters",
            Self::Pattern => "same-length words, '_' or '?' matches any one character",
        }
    }

    /// The mode after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::Prefix,
            Self::Prefix => Self::Suffix,
            Self::Suffix => Self::Pattern,
            Self::Pattern => Self::Normal,
        }
    }
}

impl FromStr for QueryMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| ModeError(s.to_string()))
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_any_case() {
        assert_eq!("prefix".parse::<QueryMode>(), Ok(QueryMode::Prefix));
        assert_eq!("SUFFIX".parse::<QueryMode>(), Ok(QueryMode::Suffix));
        assert_eq!(" Pattern ".parse::<QueryMode>(), Ok(QueryMode::Pattern));
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "anagram".parse::<QueryMode>().unwrap_err();
        assert!(err.to_string().contains("anagram"));
    }

    #[test]
    fn next_cycles_through_all_modes() {
        let mut mode = QueryMode::Normal;
        for expected in QueryMode::ALL.iter().cycle().skip(1).take(4) {
            mode = mode.next();
            assert_eq!(mode, *expected);
        }
        assert_eq!(mode, QueryMode::Normal);
    }

    #[test]
    fn display_matches_name() {
        for mode in QueryMode::ALL {
            assert_eq!(mode.to_string(), mode.name());
            assert_eq!(mode.label().to_lowercase(), mode.name());
        }
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(QueryMode::default(), QueryMode::Normal);
    }
}
