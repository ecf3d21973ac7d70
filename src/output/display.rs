//! Display functions for command results

use super::formatters::{frequency_bar, percentage};
use crate::analysis::DecryptionCandidate;
use crate::commands::{AnalysisReport, TransformResult};
use crate::core::Direction;
use colored::Colorize;

/// Print the result of an encrypt or decrypt run
pub fn print_transform_result(result: &TransformResult) {
    let (verb, done) = match result.direction {
        Direction::Encrypt => ("Encrypted", "Text encrypted successfully!"),
        Direction::Decrypt => ("Decrypted", "Text decrypted successfully!"),
    };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} with shift {}",
        verb,
        result.shift.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("\n{}", result.output);
    println!("\n{}", done.green().bold());
}

/// Print text statistics and a letter frequency histogram
pub fn print_analysis_report(report: &AnalysisReport) {
    let stats = &report.statistics;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TEXT ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Statistics:".bright_cyan().bold());
    println!("   Total characters:      {}", stats.total_chars);
    println!(
        "   Alphabetic:            {} ({})",
        stats.alphabetic_chars,
        percentage(stats.alphabetic_chars, stats.total_chars)
    );
    println!("   Non-alphabetic:        {}", stats.non_alphabetic_chars);
    println!("   Uppercase:             {}", stats.uppercase_chars);
    println!("   Lowercase:             {}", stats.lowercase_chars);
    println!("   Words:                 {}", stats.word_count);

    if report.frequency.is_empty() {
        return;
    }

    // Most frequent letters first; equal counts fall back to alphabetical
    let mut entries: Vec<(char, usize)> = report
        .frequency
        .iter()
        .map(|(&letter, &count)| (letter, count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let max_count = entries[0].1;

    println!("\n{}", "Letter frequency:".bright_cyan().bold());
    for (letter, count) in entries {
        println!(
            "   {} [{}] {:>4}  {}",
            letter.to_string().bright_yellow(),
            frequency_bar(count, max_count, 30).green(),
            count,
            percentage(count, stats.alphabetic_chars).dimmed()
        );
    }
}

/// Print ranked decryption candidates, best first
pub fn print_candidates(candidates: &[DecryptionCandidate], top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BRUTE-FORCE DECRYPTION".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\nShowing top {} of {} candidates (best guess first):\n",
        top.min(candidates.len()),
        candidates.len()
    );

    for (rank, candidate) in candidates.iter().take(top).enumerate() {
        let header = format!(
            "#{:<2} shift {:>2}  score {:>3}",
            rank + 1,
            candidate.shift.value(),
            candidate.score
        );

        if rank == 0 {
            println!("{}", header.green().bold());
        } else {
            println!("{}", header.bright_yellow());
        }
        println!("    {}\n", candidate.text);
    }
}

/// Print a user-facing error notification
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
