//! In-process engine backed by a [`Dictionary`]

use super::{EngineError, MatchingEngine};
use crate::core::{QueryDescriptor, SearchResult};
use crate::dictionary::Dictionary;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Engine that answers lookups from a shared dictionary
///
/// Matching runs on tokio's blocking pool so large dictionaries never stall the
/// runtime. An optional artificial latency is applied before each lookup.
#[derive(Debug, Clone)]
pub struct LocalEngine {
    dictionary: Arc<Dictionary>,
    latency: Duration,
}

impl LocalEngine {
    #[must_use]
    pub const fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            latency: Duration::ZERO,
        }
    }

    /// Delay every lookup by `latency`
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

#[async_trait]
impl MatchingEngine for LocalEngine {
    async fn search(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<SearchResult>, EngineError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let dictionary = Arc::clone(&self.dictionary);
        let text = descriptor.text().to_string();
        let mode = descriptor.mode();
        let started = Instant::now();

        let results = tokio::task::spawn_blocking(move || dictionary.search(&text, mode))
            .await
            .map_err(|e| EngineError::Unavailable(e.to_string()))?;

        debug!(
            %descriptor,
            results = results.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "local lookup finished"
        );
        Ok(results)
    }
}
