//! Terminal output formatting
//!
//! Display utilities for lookup results and pretty-printing definitions.

pub mod display;
pub mod formatters;

pub use display::{print_lookup_header, print_results, print_summary, print_view};
