//! Core domain types for word lookup
//!
//! This module contains the query vocabulary shared by every layer: the query mode,
//! the immutable query descriptor, and the result record returned by matching engines.
//! All types here are plain values with no I/O.

mod descriptor;
mod mode;
mod record;

pub use descriptor::QueryDescriptor;
pub use mode::{ModeError, QueryMode};
pub use record::SearchResult;
