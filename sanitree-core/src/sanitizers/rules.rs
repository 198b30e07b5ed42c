//! rules.rs - The filename and content sanitization rules.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

use crate::errors::SanitizeError;

lazy_static! {
    /// Every character outside the permitted set: letters, numbers, `_`,
    /// whitespace (including the `\x1c`-`\x1f` separators), `.` and `-`.
    /// Combining marks and connector punctuation other than `_` are dropped.
    static ref DISALLOWED_CHARS: Regex =
        Regex::new(r"[^\p{L}\p{N}_\s\x1c-\x1f.\-]").expect("static pattern is valid");
}

// Lowercasing can introduce a combining mark (`İ` becomes `i` + U+0307),
// so the class is applied again afterwards.
fn strip_and_lowercase(input: &str) -> String {
    let lowered = DISALLOWED_CHARS.replace_all(input, "").to_lowercase();
    if DISALLOWED_CHARS.is_match(&lowered) {
        DISALLOWED_CHARS.replace_all(&lowered, "").into_owned()
    } else {
        lowered
    }
}

/// Sanitizes the full text of a file: strips disallowed characters and lowercases.
///
/// No word removal is ever applied to content.
pub fn sanitize_content(content: &str) -> String {
    strip_and_lowercase(content)
}

/// A compiled whole-word matcher for the word removed from file names.
///
/// The match is case-sensitive and runs against the already-lowercased name,
/// so only lowercase removal words can ever match.
#[derive(Debug, Clone)]
pub struct WordRemover {
    word: String,
    regex: Regex,
}

impl WordRemover {
    pub fn new(word: &str) -> Result<Self, SanitizeError> {
        let pattern = format!(r"\b{}\b", regex::escape(word));
        let regex = RegexBuilder::new(&pattern)
            .build()
            .map_err(|e| SanitizeError::InvalidRemovalWord(word.to_string(), e))?;
        debug!("Compiled removal pattern '{}' for word '{}'", pattern, word);
        Ok(Self { word: word.to_string(), regex })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn remove_from<'a>(&self, name: &'a str) -> Cow<'a, str> {
        self.regex.replace_all(name, "")
    }
}

/// The filename rule with its removal word already compiled.
///
/// Build it once per run and apply it to every file name.
#[derive(Debug, Clone, Default)]
pub struct FilenameRule {
    remover: Option<WordRemover>,
}

impl FilenameRule {
    /// An empty removal word behaves like no removal word.
    pub fn new(word_to_remove: Option<&str>) -> Result<Self, SanitizeError> {
        let remover = match word_to_remove {
            Some(word) if !word.is_empty() => Some(WordRemover::new(word)?),
            _ => None,
        };
        Ok(Self { remover })
    }

    pub fn word_to_remove(&self) -> Option<&str> {
        self.remover.as_ref().map(WordRemover::word)
    }

    /// Strips disallowed characters, lowercases, turns `-` and `_` into
    /// spaces, then deletes whole-word occurrences of the removal word.
    ///
    /// Runs of spaces are kept as they are, and the result may be empty.
    pub fn apply(&self, filename: &str) -> String {
        let sanitized = strip_and_lowercase(filename).replace(['-', '_'], " ");
        match &self.remover {
            Some(remover) => remover.remove_from(&sanitized).into_owned(),
            None => sanitized,
        }
    }
}

/// One-shot convenience wrapper around [`FilenameRule`].
pub fn sanitize_filename(filename: &str, word_to_remove: Option<&str>) -> Result<String, SanitizeError> {
    Ok(FilenameRule::new(word_to_remove)?.apply(filename))
}
