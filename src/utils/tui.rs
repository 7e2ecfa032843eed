//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{StrategyRegistry, StrategyRunner};
use crate::utils::bench::BenchmarkSample;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// One output line per sample: size and whole microseconds.
pub fn format_sample(sample: &BenchmarkSample) -> String {
    format!(
        "Vector size: {}, Time taken: {} microseconds",
        sample.size,
        sample.micros()
    )
}

/// Print strategy info box
pub fn print_strategy_info_box(runner: &dyn StrategyRunner) {
    let term_width = get_term_width();
    let max_content_width = term_width.saturating_sub(4).max(40);

    let lines = [
        format!("Strategy: {}", runner.name()),
        format!("Lanes:    {}", runner.lanes()),
        format!("Backend:  {}", runner.backend()),
        runner.description().to_string(),
        format!("Input:    {}", runner.input_description()),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!(
            "│ {:<width$} │",
            truncate(line, content_width),
            width = content_width
        );
    }
    println!("└{}┘", border);
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " SIMD Dot-Product Sweep ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: simd-dot [OPTIONS] [STRATEGY]");
    println!();
    println!("Options:");
    println!("  --list, -l     List all available strategies");
    println!("  --help, -h     Show this help message");
    println!("  --seed N       Seed the input generator for a reproducible run (default: OS entropy)");
    println!("  --verify       Check every strategy against the scalar reference and exit");
    println!();
    println!("Arguments:");
    println!("  STRATEGY       Name of a single strategy to sweep (omit for all)");
    println!();
    println!("Examples:");
    println!("  simd-dot                      # Sweep all strategies, 16..65536");
    println!("  simd-dot x86_64-avx           # Sweep only the 8-lane strategy");
    println!("  simd-dot --seed 12345         # Reproducible inputs");
    println!("  RUST_LOG=debug simd-dot       # Log every sample's result");
}

/// Print the list of available strategies
pub fn print_available_strategies(registry: &StrategyRegistry) {
    println!("Available strategies:");
    println!();
    for runner in registry.all() {
        println!(
            "  {:<20} [{} lanes, {}] - {}",
            runner.name(),
            runner.lanes(),
            runner.backend(),
            runner.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_sample_contains_both_numbers() {
        let sample = BenchmarkSample {
            size: 4096,
            elapsed: Duration::from_micros(17),
            result: 0.0,
        };
        assert_eq!(
            format_sample(&sample),
            "Vector size: 4096, Time taken: 17 microseconds"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
