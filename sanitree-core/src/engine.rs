// sanitree-core/src/engine.rs
//! The `Sanitizer`: renames files and rewrites the content of text files.
//!
//! A run is one synchronous pass over a directory tree. For each file the
//! name is sanitized and the file renamed in place if needed; afterwards, if
//! the new name has a recognized text extension, its content is read,
//! sanitized and written back as UTF-8.
//!
//! Errors come in two classes. Content read/decode failures are recoverable:
//! the file keeps its new name, its content is left untouched, and the run
//! moves on. Every other failure (walking, renaming, writing) aborts the run.
//! A rename is never reverted, even if reading the content fails afterwards.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{CollisionPolicy, SanitizerConfig};
use crate::encoding::{read_text, TextEncoding};
use crate::errors::SanitizeError;
use crate::sanitizers::rules::{sanitize_content, FilenameRule};
use crate::traversal::{collect_files, FileEntry};

/// What happened to a file's content.
#[derive(Debug)]
pub enum ContentOutcome {
    /// The extension is not in the text allow-list.
    NotText,
    /// Content was sanitized and written back as UTF-8.
    Sanitized { encoding: TextEncoding },
    /// Content was already sanitized UTF-8; nothing was written.
    Unchanged,
    /// Content could not be read or decoded and was left as is.
    Skipped(SanitizeError),
}

/// The result of processing one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub original: PathBuf,
    /// Where the file lives after processing.
    pub path: PathBuf,
    pub content: ContentOutcome,
}

impl FileOutcome {
    pub fn renamed(&self) -> bool {
        self.original != self.path
    }
}

/// Totals for a completed run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn visited(&self) -> usize {
        self.files.len()
    }

    pub fn renamed(&self) -> usize {
        self.files.iter().filter(|f| f.renamed()).count()
    }

    pub fn content_sanitized(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.content, ContentOutcome::Sanitized { .. }))
            .count()
    }

    /// Files whose content was skipped, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (&Path, &SanitizeError)> {
        self.files.iter().filter_map(|f| match &f.content {
            ContentOutcome::Skipped(err) => Some((f.path.as_path(), err)),
            _ => None,
        })
    }
}

/// Applies a [`SanitizerConfig`] to files and directory trees.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    config: SanitizerConfig,
    filename_rule: FilenameRule,
}

impl Sanitizer {
    /// Fails only if the removal word cannot be compiled into a pattern.
    pub fn new(config: SanitizerConfig) -> Result<Self, SanitizeError> {
        let filename_rule = FilenameRule::new(config.word_to_remove.as_deref())?;
        Ok(Self { config, filename_rule })
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Returns the sanitized leaf name for `entry`.
    pub fn sanitized_name(&self, entry: &FileEntry) -> String {
        self.filename_rule.apply(&entry.name_lossy())
    }

    /// Processes every regular file under `root`.
    pub fn run(&self, root: &Path) -> Result<RunSummary, SanitizeError> {
        self.run_with(root, |_| {})
    }

    /// Like [`Sanitizer::run`], calling `on_file` after each file is processed.
    pub fn run_with<F>(&self, root: &Path, mut on_file: F) -> Result<RunSummary, SanitizeError>
    where
        F: FnMut(&FileOutcome),
    {
        info!("Sanitizing files under '{}'", root.display());
        let entries = collect_files(root)?;
        let mut summary = RunSummary::default();

        for entry in &entries {
            let outcome = self.process_file(entry)?;
            on_file(&outcome);
            summary.files.push(outcome);
        }

        info!(
            "Visited {} file(s): {} renamed, {} content-sanitized, {} skipped.",
            summary.visited(),
            summary.renamed(),
            summary.content_sanitized(),
            summary.skipped().count()
        );
        Ok(summary)
    }

    /// Renames one file if its sanitized name differs, then sanitizes its
    /// content if the new name has a text extension.
    pub fn process_file(&self, entry: &FileEntry) -> Result<FileOutcome, SanitizeError> {
        let original = entry.path();
        let new_name = self.sanitized_name(entry);

        if matches!(new_name.as_str(), "" | "." | "..") {
            return Err(SanitizeError::UnusableName { path: original, name: new_name });
        }

        let path = entry.dir.join(&new_name);
        if path != original {
            self.rename(&original, &path)?;
        }

        let content = if self.config.text_extensions.matches_path(&path) {
            self.sanitize_file_content(&path)?
        } else {
            ContentOutcome::NotText
        };

        Ok(FileOutcome { original, path, content })
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), SanitizeError> {
        if self.config.collision_policy == CollisionPolicy::Fail && occupied_by_other_file(from, to) {
            return Err(SanitizeError::RenameCollision {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
            });
        }

        debug!("Renaming '{}' -> '{}'", from.display(), to.display());
        fs::rename(from, to).map_err(|source| SanitizeError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }

    fn sanitize_file_content(&self, path: &Path) -> Result<ContentOutcome, SanitizeError> {
        let decoded = match read_text(path, self.config.primary_encoding, self.config.fallback_encoding) {
            Ok(decoded) => decoded,
            Err(e) if e.is_recoverable() => {
                warn!("Leaving content of '{}' untouched: {}", path.display(), e);
                return Ok(ContentOutcome::Skipped(e));
            }
            Err(e) => return Err(e),
        };

        let sanitized = sanitize_content(&decoded.text);
        if decoded.encoding == TextEncoding::Utf8 && sanitized == decoded.text {
            debug!("Content of '{}' is already sanitized", path.display());
            return Ok(ContentOutcome::Unchanged);
        }

        fs::write(path, sanitized).map_err(|source| SanitizeError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Rewrote content of '{}' (read as {})", path.display(), decoded.encoding);
        Ok(ContentOutcome::Sanitized { encoding: decoded.encoding })
    }
}

/// `true` if `to` exists and is not the same file as `from`.
///
/// A case-only rename on a case-insensitive filesystem resolves `to` to
/// `from` itself, which is not a collision.
fn occupied_by_other_file(from: &Path, to: &Path) -> bool {
    let Ok(target) = fs::symlink_metadata(to) else {
        return false;
    };
    !same_file(from, &target, to)
}

#[cfg(unix)]
fn same_file(from: &Path, target: &fs::Metadata, _to: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    fs::symlink_metadata(from)
        .map(|source| source.dev() == target.dev() && source.ino() == target.ino())
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn same_file(from: &Path, _target: &fs::Metadata, to: &Path) -> bool {
    from.to_string_lossy().to_lowercase() == to.to_string_lossy().to_lowercase()
}
