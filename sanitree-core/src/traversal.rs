//! Directory traversal.
//!
//! The whole tree is listed before anything is renamed, so renames never
//! disturb an in-progress directory listing. Entries are sorted by file name
//! and symbolic links are never followed.

use log::debug;
use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::SanitizeError;

/// A file discovered during traversal: its directory and its leaf name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub dir: PathBuf,
    pub name: OsString,
}

impl FileEntry {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<OsString>) -> Self {
        Self { dir: dir.into(), name: name.into() }
    }

    /// Splits a file path into its directory and leaf name.
    /// Returns `None` for paths without a file name, such as `/` or `..`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        Some(Self::new(dir, name))
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// The leaf name as UTF-8; invalid sequences become U+FFFD.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Recursively lists every regular file under `root`.
pub fn collect_files(root: &Path) -> Result<Vec<FileEntry>, SanitizeError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|source| SanitizeError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type();

        if file_type.is_file() {
            if let Some(file) = FileEntry::from_path(entry.path()) {
                files.push(file);
            }
        } else if file_type.is_symlink() {
            debug!("Skipping symbolic link '{}'", entry.path().display());
        }
    }

    debug!("Collected {} file(s) under '{}'", files.len(), root.display());
    Ok(files)
}
