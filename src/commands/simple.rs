//! Simple interactive CLI mode
//!
//! Line-based lookups without the TUI

use crate::controller::QueryController;
use crate::core::QueryMode;
use crate::output::{print_summary, print_view};
use crate::view::View;
use std::io::{self, Write};
use tokio::runtime::Handle;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    ToggleDefinitions,
    SetMode(QueryMode),
    UnknownMode(String),
    /// Anything else is the new input, looked up immediately
    Lookup(String),
}

/// Parse a REPL line
///
/// Lines starting with `:` are commands; every other line is lookup input.
#[must_use]
pub fn parse_command(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return ReplCommand::Lookup(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit" | "exit"), _) => ReplCommand::Quit,
        (Some("h" | "help"), _) => ReplCommand::Help,
        (Some("d" | "defs"), _) => ReplCommand::ToggleDefinitions,
        (Some("m" | "mode"), Some(name)) => name
            .parse()
            .map_or_else(|_| ReplCommand::UnknownMode(name.to_string()), ReplCommand::SetMode),
        (Some("m" | "mode"), None) => ReplCommand::UnknownMode(String::new()),
        // Not a known command; treat the whole line as letters
        _ => ReplCommand::Lookup(line.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(runtime: &Handle, controller: &mut QueryController) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Scrabbled - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut show_definitions = true;

    loop {
        let prompt = format!("[{}] letters", controller.mode().label());
        let Some(line) = get_user_input(&prompt)? else {
            println!();
            return Ok(());
        };

        match parse_command(&line) {
            ReplCommand::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
            ReplCommand::Help => print_help(),
            ReplCommand::ToggleDefinitions => {
                show_definitions = !show_definitions;
                let shown = if show_definitions { "shown" } else { "hidden" };
                println!("Definitions {shown}\n");
            }
            ReplCommand::SetMode(mode) => {
                controller.set_mode(mode);
                println!("Mode: {} ({})\n", mode.label(), mode.describe());
            }
            ReplCommand::UnknownMode(name) => {
                println!("❌ Unknown mode '{name}'. Use normal, prefix, suffix or pattern.\n");
            }
            ReplCommand::Lookup(letters) => {
                controller.set_input(letters);
                // Blank input is silently ignored
                if controller.trigger().is_none() {
                    continue;
                }

                let state = runtime.block_on(controller.settle());
                let view = View::project(state);
                print_view(view, show_definitions);
                if let View::Results(results) = view {
                    print_summary(results.len());
                }
                println!();
            }
        }
    }
}

fn print_help() {
    println!("Type letters and press Enter to look them up.");
    for mode in QueryMode::ALL {
        println!("  {:<8} {}", mode.label(), mode.describe());
    }
    println!("\nCommands: ':mode <name>', ':defs' to toggle definitions, ':help', ':quit'\n");
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_lookups() {
        assert_eq!(parse_command("cat"), ReplCommand::Lookup("cat".into()));
        assert_eq!(parse_command("  "), ReplCommand::Lookup("  ".into()));
        assert_eq!(parse_command("c?t"), ReplCommand::Lookup("c?t".into()));
    }

    #[test]
    fn colon_commands() {
        assert_eq!(parse_command(":q"), ReplCommand::Quit);
        assert_eq!(parse_command(" :quit "), ReplCommand::Quit);
        assert_eq!(parse_command(":help"), ReplCommand::Help);
        assert_eq!(parse_command(":defs"), ReplCommand::ToggleDefinitions);
    }

    #[test]
    fn mode_command_parses_name() {
        assert_eq!(
            parse_command(":mode suffix"),
            ReplCommand::SetMode(QueryMode::Suffix)
        );
        assert_eq!(
            parse_command(":m PATTERN"),
            ReplCommand::SetMode(QueryMode::Pattern)
        );
        assert_eq!(
            parse_command(":mode anagram"),
            ReplCommand::UnknownMode("anagram".into())
        );
        assert_eq!(parse_command(":mode"), ReplCommand::UnknownMode(String::new()));
    }

    #[test]
    fn unknown_command_is_looked_up_verbatim() {
        assert_eq!(parse_command(":xyz"), ReplCommand::Lookup(":xyz".into()));
    }
}
