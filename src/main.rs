//! Caesar Cipher Toolkit - CLI
//!
//! Encrypt, decrypt, analyze, and brute-force Caesar-ciphered text.

use anyhow::{Context, Result};
use caesar_toolkit::{
    commands::{analyze_text, crack_text, run_transform},
    core::Direction,
    output::{print_analysis_report, print_candidates, print_error, print_transform_result},
};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "caesar_toolkit",
    about = "Caesar cipher tool with frequency analysis and brute-force cracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a given shift
    Encrypt {
        /// Text to encrypt (reads stdin when omitted)
        text: Option<String>,

        /// Shift value, 1-25
        #[arg(short, long, default_value = "3")]
        shift: i32,
    },

    /// Decrypt text with a known shift
    Decrypt {
        /// Text to decrypt (reads stdin when omitted)
        text: Option<String>,

        /// Shift value, 1-25
        #[arg(short, long, default_value = "3")]
        shift: i32,
    },

    /// Show character statistics and letter frequencies
    Analyze {
        /// Text to analyze (reads stdin when omitted)
        text: Option<String>,
    },

    /// Try every shift and rank candidates by readability
    Crack {
        /// Ciphertext to crack (reads stdin when omitted)
        text: Option<String>,

        /// Number of candidates to show, best first
        #[arg(short, long, default_value = "5")]
        top: usize,
    },
}

/// Use the positional argument when given, otherwise read all of stdin
fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            Ok(buffer)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Encrypt { text, shift } => {
            let text = read_input(text)?;
            let result = run_transform(&text, shift, Direction::Encrypt)?;
            print_transform_result(&result);
        }
        Commands::Decrypt { text, shift } => {
            let text = read_input(text)?;
            let result = run_transform(&text, shift, Direction::Decrypt)?;
            print_transform_result(&result);
        }
        Commands::Analyze { text } => {
            let text = read_input(text)?;
            let report = analyze_text(&text)?;
            print_analysis_report(&report);
        }
        Commands::Crack { text, top } => {
            let text = read_input(text)?;
            let candidates = crack_text(&text)?;
            print_candidates(&candidates, top);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        print_error(&format!("{err:#}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
