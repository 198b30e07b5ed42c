//! Configuration management for `sanitree-core`.
//!
//! There is no configuration file: a [`SanitizerConfig`] is built in code,
//! starting from its defaults, and handed to the [`crate::Sanitizer`] that owns
//! it for the rest of the run.
//!
//! License: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::path::Path;

use crate::encoding::TextEncoding;

/// Extensions whose content is sanitized unless the caller supplies its own set.
pub const DEFAULT_TEXT_EXTENSIONS: [&str; 7] = ["txt", "py", "md", "html", "css", "js", "csv"];

/// The set of file extensions eligible for content sanitization.
///
/// Entries are stored lowercase and without a leading dot; lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextExtensionSet {
    extensions: BTreeSet<String>,
}

impl TextExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// An empty set: no file has its content touched.
    pub fn empty() -> Self {
        Self { extensions: BTreeSet::new() }
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions
            .contains(&extension.trim_start_matches('.').to_lowercase())
    }

    /// Returns `true` if the final extension of `path` is in the set.
    /// Names without an extension, or dotfiles like `.bashrc`, never match.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.contains(ext))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for TextExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_EXTENSIONS)
    }
}

/// What to do when a file's sanitized name is already taken by another file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Abort the run with [`crate::SanitizeError::RenameCollision`].
    #[default]
    Fail,
    /// Let the platform rename replace the existing file (last writer wins).
    Overwrite,
}

/// Everything a [`crate::Sanitizer`] needs to know for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizerConfig {
    /// Whole word removed from file names (never from content).
    pub word_to_remove: Option<String>,
    pub text_extensions: TextExtensionSet,
    pub primary_encoding: TextEncoding,
    pub fallback_encoding: Option<TextEncoding>,
    pub collision_policy: CollisionPolicy,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            word_to_remove: None,
            text_extensions: TextExtensionSet::default(),
            primary_encoding: TextEncoding::Utf8,
            fallback_encoding: Some(TextEncoding::Latin1),
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl SanitizerConfig {
    /// Sets the word to strip from file names. An empty word is the same as none.
    pub fn with_word_to_remove(mut self, word: Option<impl Into<String>>) -> Self {
        self.word_to_remove = word.map(Into::into).filter(|w| !w.is_empty());
        self
    }

    pub fn with_text_extensions(mut self, extensions: TextExtensionSet) -> Self {
        self.text_extensions = extensions;
        self
    }

    pub fn with_encodings(mut self, primary: TextEncoding, fallback: Option<TextEncoding>) -> Self {
        self.primary_encoding = primary;
        self.fallback_encoding = fallback;
        self
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }
}
