//! Embedded dictionary
//!
//! Entries compiled into the binary at build time.

// Include generated dictionary from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
