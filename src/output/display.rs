//! Display functions for lookup outcomes

use super::formatters::format_definition;
use crate::core::{QueryDescriptor, SearchResult};
use crate::view::View;
use colored::Colorize;

/// Print whatever the view currently shows
pub fn print_view(view: View<'_>, show_definitions: bool) {
    match view {
        View::Loading => println!("{}", "Loading...".bright_black()),
        View::Error(message) => println!("{} {message}", "Error:".red().bold()),
        View::Results([]) => println!("{}", "No data...".yellow()),
        View::Results(results) => print_results(results, show_definitions),
    }
}

/// Print numbered results, optionally with their full definitions
pub fn print_results(results: &[SearchResult], show_definitions: bool) {
    for (i, result) in results.iter().enumerate() {
        let number = format!("{:>3}:", i + 1);
        if !show_definitions {
            println!("{} {}", number.bright_black(), result.word.bright_white().bold());
            continue;
        }

        let definition = format_definition(&result.definition);
        println!(
            "{} {} : {}",
            number.bright_black(),
            result.word.bright_white().bold(),
            definition.summary
        );
        for sense in &definition.senses {
            println!("       {} {sense}", "•".cyan());
        }
    }
}

/// Header line naming the lookup that produced the output
pub fn print_lookup_header(descriptor: &QueryDescriptor) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} {} ({})",
        "Lookup:".bright_cyan().bold(),
        descriptor.text().bright_yellow().bold(),
        descriptor.mode().label()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Footer with the result count
pub fn print_summary(count: usize) {
    let noun = if count == 1 { "match" } else { "matches" };
    println!("\n{}", format!("{count} {noun}").green().bold());
}
