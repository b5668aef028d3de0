//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: failed lookups, empty dictionaries
//! - `info`: dictionary loading
//! - `debug`: triggers, issued lookups, discarded superseded answers
//! - `trace`: everything else
//!
//! The TUI owns the terminal, so in `play` mode logs only go to `--log-file`.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter for this crate.
    pub level: Level,
    /// Whether to use ANSI colors on stderr.
    pub with_ansi: bool,
    /// Optional log file path. When set, logs are appended to the file.
    pub log_file: Option<PathBuf>,
    /// Whether stderr may be used when no log file is set.
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            log_file: None,
            console: true,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    ///
    /// - 0 (no `-v`): warn level
    /// - 1 (`-v`): info level
    /// - 2 (`-vv`): debug level
    /// - 3+ (`-vvv`): trace level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    /// Set the log file path (stderr is used when None).
    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Allow or forbid logging to stderr.
    #[must_use]
    pub fn with_console(mut self, enable: bool) -> Self {
        self.console = enable;
        self
    }

    /// Where log lines will end up, if anywhere.
    #[must_use]
    pub fn sink(&self) -> LogSink {
        match (&self.log_file, self.console) {
            (Some(path), _) => LogSink::File(path.clone()),
            (None, true) => LogSink::Stderr,
            (None, false) => LogSink::Disabled,
        }
    }
}

/// Destination chosen for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr,
    Disabled,
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let filter = build_env_filter(config.level);

    let result = match config.sink() {
        LogSink::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogSink::Stderr => {
            let layer = fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(config.with_ansi)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
        }
        LogSink::Disabled => return Ok(()),
    };

    result.map_err(io::Error::other)
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // External crates stay at warn level to reduce noise
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,scrabbled={level}"))
    })
}
