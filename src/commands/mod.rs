//! Command implementations

pub mod lookup;
pub mod simple;

pub use lookup::{LookupConfig, lookup, run_lookup};
pub use simple::{ReplCommand, parse_command, run_simple};
