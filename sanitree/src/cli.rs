//! This file defines the command-line interface (CLI) for the sanitree application.

use clap::Parser;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "sanitree",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sanitize file names and content in the current directory.",
    long_about = "Sanitree walks the current working directory recursively, lowercases every file name and strips special characters from it, then rewrites the content of recognized text files (txt, py, md, html, css, js, csv) with the same rule. Changes are made in place and cannot be undone.",
)]
pub struct Cli {
    /// Remove a chosen word when renaming files.
    #[arg(long, short = 'r', value_name = "WORD")]
    pub remove: Option<String>,
}
