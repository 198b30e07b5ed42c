// sanitree/src/main.rs
//! sanitree entry point.
//!
//! Parses the command line, sets up logging and runs one sanitize pass over
//! the current working directory.

use anyhow::Result;
use clap::Parser;

use sanitree::cli::Cli;
use sanitree::commands::sanitize::{error_msg, run_sanitize, SanitizeOptions};
use sanitree::logger;
use sanitree::ui::theme::default_theme_map;

fn main() -> Result<()> {
    let args = Cli::parse();
    logger::init_logger(None);

    let theme_map = default_theme_map();
    let opts = SanitizeOptions::for_current_dir(args.remove)?;

    if let Err(e) = run_sanitize(opts, &theme_map) {
        error_msg(format!("Error: {e:#}"), &theme_map);
        std::process::exit(1);
    }

    Ok(())
}
