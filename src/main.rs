//! Scrabbled - CLI
//!
//! Word finder with TUI and CLI modes: anagrams, prefixes, suffixes and wildcard patterns.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use scrabbled::{
    commands::{LookupConfig, run_lookup, run_simple},
    config::{DictionarySource, EngineConfig},
    controller::QueryController,
    core::QueryMode,
    logging::{LogConfig, init_logging},
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "scrabbled",
    about = "Find words from letters: anagrams, prefixes, suffixes and wildcard patterns",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word<TAB>definition file
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Query mode to start in
    #[arg(short, long, global = true, value_enum, default_value_t = QueryMode::Normal)]
    mode: QueryMode,

    /// Fail lookups that take longer than this many milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Delay every lookup by this many milliseconds
    #[arg(long, global = true, default_value = "0")]
    latency_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Append logs to this file (the only log output in TUI mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Look up letters once and print the matches
    Lookup {
        /// Letters, prefix, suffix or pattern to look up
        letters: String,

        /// Print words only, without definitions
        #[arg(short, long)]
        brief: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_log_file(cli.log_file.clone())
        .with_console(!matches!(command, Commands::Play));
    init_logging(&log_config).context("failed to initialise logging")?;

    let engine_config = EngineConfig {
        dictionary: DictionarySource::from_arg(&cli.dictionary),
        latency: Duration::from_millis(cli.latency_ms),
        timeout: cli.timeout_ms.map(Duration::from_millis),
    };
    let engine = engine_config
        .build()
        .with_context(|| format!("failed to load dictionary '{}'", cli.dictionary))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let mut controller = QueryController::new(engine, runtime.handle().clone());
    controller.set_mode(cli.mode);

    match command {
        Commands::Play => run_play_command(controller),
        Commands::Simple => {
            run_simple(runtime.handle(), &mut controller).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Lookup { letters, brief } => {
            let config = LookupConfig {
                letters,
                mode: cli.mode,
                show_definitions: !brief,
            };
            run_lookup(runtime.handle(), &mut controller, &config)
        }
    }
}

fn run_play_command(controller: QueryController) -> Result<()> {
    use scrabbled::interactive::{App, run_tui};

    run_tui(App::new(controller))
}
