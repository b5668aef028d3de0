//! Matching engine boundary
//!
//! The query controller only knows the [`MatchingEngine`] trait: one asynchronous
//! round trip from a [`QueryDescriptor`] to an ordered list of [`SearchResult`]s.
//! Engines must be idempotent; the same descriptor yields the same results as long
//! as the dictionary is unchanged.

mod local;
mod timeout;

#[cfg(test)]
pub(crate) mod testing;

pub use local::LocalEngine;
pub use timeout::TimeoutEngine;

use crate::core::{QueryDescriptor, SearchResult};
use async_trait::async_trait;
use std::time::Duration;

/// Why a lookup produced no results
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The request or response was lost in transit
    #[error("{0}")]
    Transport(String),
    /// The engine answered with something that is not a result list
    #[error("malformed response: {0}")]
    Malformed(String),
    /// No answer arrived within the configured limit
    #[error("lookup timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// The engine could not run the lookup at all
    #[error("engine unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous word-matching backend
#[async_trait]
pub trait MatchingEngine: Send + Sync {
    /// Run one lookup
    ///
    /// Result order is significant and is preserved by every consumer.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when the lookup cannot be completed.
    async fn search(&self, descriptor: &QueryDescriptor)
    -> Result<Vec<SearchResult>, EngineError>;
}
