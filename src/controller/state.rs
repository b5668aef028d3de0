//! Fetch lifecycle values

use crate::core::{QueryDescriptor, SearchResult};
use crate::engine::EngineError;

/// The single source of truth for what the result area shows
///
/// Every descriptor stored here is the one that was active when its fetch was
/// issued, not whatever the user has typed since.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    /// No fetch has been issued yet
    #[default]
    Idle,
    /// The latest fetch is still running
    Pending(QueryDescriptor),
    /// The latest fetch answered
    Fulfilled(QueryDescriptor, Vec<SearchResult>),
    /// The latest fetch failed; carries a human-readable message
    Failed(QueryDescriptor, String),
}

impl FetchState {
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// Descriptor of the fetch this state belongs to
    #[must_use]
    pub const fn descriptor(&self) -> Option<&QueryDescriptor> {
        match self {
            Self::Idle => None,
            Self::Pending(d) | Self::Fulfilled(d, _) | Self::Failed(d, _) => Some(d),
        }
    }

    #[must_use]
    pub fn results(&self) -> Option<&[SearchResult]> {
        match self {
            Self::Fulfilled(_, results) => Some(results),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(_, message) => Some(message),
            _ => None,
        }
    }
}

/// Report sent by a finished fetch task
#[derive(Debug, Clone)]
pub struct Completion {
    /// Generation the fetch was issued under
    pub generation: u64,
    pub descriptor: QueryDescriptor,
    pub outcome: Result<Vec<SearchResult>, EngineError>,
}

/// What the controller did with a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The completion belonged to the latest fetch and updated the state
    Applied,
    /// A newer fetch was issued first; the completion was dropped
    Stale,
}
