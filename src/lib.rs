//! Scrabbled
//!
//! A word finder: type some letters, pick a mode, get matching dictionary entries with
//! their definitions. Lookups run asynchronously and only the most recently requested
//! one is ever shown.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scrabbled::config::EngineConfig;
//! use scrabbled::controller::QueryController;
//! use scrabbled::core::QueryMode;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let engine = EngineConfig::default().build()?;
//! let mut controller = QueryController::new(engine, tokio::runtime::Handle::current());
//!
//! controller.set_input("tac");
//! controller.set_mode(QueryMode::Normal);
//! controller.trigger();
//!
//! let state = controller.settle().await;
//! println!("{state:?}");
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// Dictionary indexes
pub mod dictionary;

// Matching engines
pub mod engine;

// Query orchestration
pub mod controller;

// Fetch state projection
pub mod view;

// Engine configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
