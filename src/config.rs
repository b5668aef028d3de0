//! Engine configuration
//!
//! Turns command-line settings into a ready [`MatchingEngine`]: which dictionary to
//! load, how much artificial latency to add, and an optional time limit.

use crate::dictionary::{Dictionary, DictionaryError, loader};
use crate::engine::{LocalEngine, MatchingEngine, TimeoutEngine};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Where dictionary entries come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// Entries compiled into the binary
    Embedded,
    /// Tab-separated file on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--dictionary` argument: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }

    /// Load and index the entries
    ///
    /// # Errors
    ///
    /// Returns a [`DictionaryError`] if a dictionary file cannot be read or parsed.
    pub fn load(&self) -> Result<Dictionary, DictionaryError> {
        let dictionary = match self {
            Self::Embedded => Dictionary::embedded(),
            Self::File(path) => Dictionary::from_entries(loader::load_from_file(path)?),
        };

        if dictionary.is_empty() {
            warn!(source = ?self, "dictionary has no entries; every lookup will be empty");
        } else {
            info!(source = ?self, entries = dictionary.len(), "dictionary ready");
        }
        Ok(dictionary)
    }
}

/// Settings for the lookup engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub dictionary: DictionarySource,
    /// Artificial delay before each lookup
    pub latency: Duration,
    /// Fail lookups that take longer than this
    pub timeout: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary: DictionarySource::Embedded,
            latency: Duration::ZERO,
            timeout: None,
        }
    }
}

impl EngineConfig {
    /// Load the dictionary and assemble the engine stack
    ///
    /// # Errors
    ///
    /// Returns a [`DictionaryError`] if the dictionary cannot be loaded.
    pub fn build(&self) -> Result<Arc<dyn MatchingEngine>, DictionaryError> {
        let dictionary = Arc::new(self.dictionary.load()?);
        let local = LocalEngine::new(dictionary).with_latency(self.latency);

        let engine: Arc<dyn MatchingEngine> = match self.timeout {
            Some(limit) => Arc::new(TimeoutEngine::new(local, limit)),
            None => Arc::new(local),
        };
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{QueryDescriptor, QueryMode};
    use crate::engine::EngineError;
    use std::io::Write;

    #[test]
    fn from_arg_recognises_embedded() {
        assert_eq!(DictionarySource::from_arg("embedded"), DictionarySource::Embedded);
        assert_eq!(
            DictionarySource::from_arg("words.tsv"),
            DictionarySource::File(PathBuf::from("words.tsv"))
        );
    }

    #[test]
    fn missing_file_fails_to_build() {
        let config = EngineConfig {
            dictionary: DictionarySource::File(PathBuf::from("/nonexistent/words.tsv")),
            ..EngineConfig::default()
        };
        assert!(matches!(config.build(), Err(DictionaryError::Io { .. })));
    }

    #[tokio::test]
    async fn file_dictionary_answers_lookups() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\tA feline.").unwrap();
        writeln!(file, "act\tA deed.").unwrap();

        let config = EngineConfig {
            dictionary: DictionarySource::File(file.path().to_path_buf()),
            ..EngineConfig::default()
        };
        let engine = config.build().unwrap();
        let results = engine
            .search(&QueryDescriptor::build("tac", QueryMode::Normal))
            .await
            .unwrap();

        let words: Vec<_> = results.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, ["act", "cat"]);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_wraps_slow_engine() {
        let config = EngineConfig {
            latency: Duration::from_secs(5),
            timeout: Some(Duration::from_millis(200)),
            ..EngineConfig::default()
        };
        let engine = config.build().unwrap();
        let err = engine
            .search(&QueryDescriptor::build("cat", QueryMode::Normal))
            .await
            .unwrap_err();

        assert_eq!(err, EngineError::Timeout(Duration::from_millis(200)));
    }
}
