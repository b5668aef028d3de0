//! Time limit layered around another engine

use super::{EngineError, MatchingEngine};
use crate::core::{QueryDescriptor, SearchResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Wraps an engine and fails lookups that take longer than `limit`
///
/// The expired lookup surfaces as [`EngineError::Timeout`] and then follows the same
/// supersession rules as any other answer.
#[derive(Debug, Clone)]
pub struct TimeoutEngine<E> {
    inner: E,
    limit: Duration,
}

impl<E> TimeoutEngine<E> {
    #[must_use]
    pub const fn new(inner: E, limit: Duration) -> Self {
        Self { inner, limit }
    }

    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }
}

#[async_trait]
impl<E: MatchingEngine> MatchingEngine for TimeoutEngine<E> {
    async fn search(
        &self,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<SearchResult>, EngineError> {
        if let Ok(outcome) = tokio::time::timeout(self.limit, self.inner.search(descriptor)).await {
            outcome
        } else {
            debug!(%descriptor, limit_ms = self.limit.as_millis() as u64, "lookup expired");
            Err(EngineError::Timeout(self.limit))
        }
    }
}
