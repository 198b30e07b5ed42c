//! errors.rs - Custom error types for the sanitree-core library.
//!
//! This module defines a structured error enum for the library. Errors are
//! split into two classes: content read/decode failures, which only skip the
//! affected file, and everything else, which aborts the run.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

use crate::encoding::TextEncoding;

/// This enum represents all possible error types in the `sanitree-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitizeError {
    #[error("Failed to walk directory '{}': {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to rename '{}' to '{}': {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot rename '{}' to '{}': target already exists", .from.display(), .to.display())]
    RenameCollision { from: PathBuf, to: PathBuf },

    #[error("Sanitized name '{name}' of '{}' cannot be used as a file name", .path.display())]
    UnusableName { path: PathBuf, name: String },

    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content is not valid {primary}{}", .fallback.map(|f| format!(" or {f}")).unwrap_or_default())]
    Decode {
        path: PathBuf,
        primary: TextEncoding,
        fallback: Option<TextEncoding>,
    },

    #[error("Failed to write sanitized content to '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid word to remove '{0}': {1}")]
    InvalidRemovalWord(String, regex::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

impl SanitizeError {
    /// Returns `true` when the error only affects the content of a single file
    /// and the traversal should carry on with the next one.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SanitizeError::Read { .. } | SanitizeError::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_errors_are_recoverable() {
        let read = SanitizeError::Read {
            path: PathBuf::from("a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let decode = SanitizeError::Decode {
            path: PathBuf::from("a.txt"),
            primary: TextEncoding::Utf8,
            fallback: Some(TextEncoding::Ascii),
        };
        assert!(read.is_recoverable());
        assert!(decode.is_recoverable());
    }

    #[test]
    fn name_errors_are_fatal() {
        let collision = SanitizeError::RenameCollision {
            from: PathBuf::from("A.txt"),
            to: PathBuf::from("a.txt"),
        };
        let empty = SanitizeError::UnusableName {
            path: PathBuf::from("!!!"),
            name: String::new(),
        };
        assert!(!collision.is_recoverable());
        assert!(!empty.is_recoverable());
    }

    #[test]
    fn decode_message_names_both_encodings() {
        let err = SanitizeError::Decode {
            path: PathBuf::from("a.txt"),
            primary: TextEncoding::Utf8,
            fallback: Some(TextEncoding::Ascii),
        };
        assert_eq!(err.to_string(), "content is not valid utf-8 or ascii");
    }
}
