//! The sanitize command: one pass over the current working directory.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};

use sanitree_core::{ContentOutcome, FileOutcome, RunSummary, Sanitizer, SanitizerConfig};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Printed to stdout after a successful run.
pub const COMPLETION_MESSAGE: &str = "Files and content sanitized successfully in the current directory.";

/// Options for the sanitize command.
pub struct SanitizeOptions {
    pub root: PathBuf,
    pub word_to_remove: Option<String>,
}

impl SanitizeOptions {
    /// Options for a run over the process's current working directory.
    pub fn for_current_dir(word_to_remove: Option<String>) -> Result<Self> {
        let root = std::env::current_dir().context("Failed to determine the current directory")?;
        Ok(Self { root, word_to_remove })
    }
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stdout.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stdout_supports_color = io::stdout().is_terminal();
    let _ = output_format::print_success_message(&mut io::stdout(), msg.as_ref(), theme, stdout_supports_color);
}

/// The message shown when a file's content could not be read.
pub fn skipped_file_message(outcome: &FileOutcome) -> Option<String> {
    match &outcome.content {
        ContentOutcome::Skipped(err) => Some(format!(
            "Could not read file {}: {}",
            display_name(&outcome.path),
            err
        )),
        _ => None,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs the sanitizer over `opts.root`, reporting skipped files as they happen.
pub fn run_sanitize(opts: SanitizeOptions, theme_map: &ThemeMap) -> Result<RunSummary> {
    info!("Starting sanitize operation in '{}'.", opts.root.display());

    let config = SanitizerConfig::default().with_word_to_remove(opts.word_to_remove);
    if let Some(word) = &config.word_to_remove {
        debug!("Removing the word '{}' from file names.", word);
    }
    let sanitizer = Sanitizer::new(config).context("Invalid --remove value")?;

    let summary = sanitizer
        .run_with(&opts.root, |outcome| {
            if let Some(msg) = skipped_file_message(outcome) {
                error_msg(msg, theme_map);
            }
        })
        .with_context(|| format!("Failed to sanitize files under {}", opts.root.display()))?;

    success_msg(COMPLETION_MESSAGE, theme_map);
    info!("Sanitize operation completed.");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sanitree_core::{SanitizeError, TextEncoding};

    #[test]
    fn skipped_message_names_the_file() {
        let outcome = FileOutcome {
            original: PathBuf::from("dir/Bad.TXT"),
            path: PathBuf::from("dir/bad.txt"),
            content: ContentOutcome::Skipped(SanitizeError::Decode {
                path: PathBuf::from("dir/bad.txt"),
                primary: TextEncoding::Utf8,
                fallback: Some(TextEncoding::Ascii),
            }),
        };
        assert_eq!(
            skipped_file_message(&outcome).as_deref(),
            Some("Could not read file bad.txt: content is not valid utf-8 or ascii")
        );
    }

    #[test]
    fn other_outcomes_print_nothing() {
        let outcome = FileOutcome {
            original: PathBuf::from("a.bin"),
            path: PathBuf::from("a.bin"),
            content: ContentOutcome::NotText,
        };
        assert!(skipped_file_message(&outcome).is_none());
    }
}
