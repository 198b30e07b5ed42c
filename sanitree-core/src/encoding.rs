//! Text encodings used when reading file content.
//!
//! Content is decoded with a primary encoding first and, if that fails, with an
//! optional fallback. Whatever succeeded on read, sanitized content is always
//! written back as UTF-8.

use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::SanitizeError;

/// A text encoding that can decode raw file bytes into a `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Strict UTF-8.
    Utf8,
    /// ISO-8859-1. Every byte maps to the code point of the same value, so
    /// decoding never fails.
    Latin1,
    /// Strict 7-bit ASCII.
    Ascii,
}

impl TextEncoding {
    /// Decodes `bytes`, returning `None` if they are not valid in this encoding.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextEncoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            TextEncoding::Ascii => {
                if bytes.is_ascii() {
                    Some(bytes.iter().map(|&b| char::from(b)).collect())
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Ascii => "ascii",
        };
        f.write_str(name)
    }
}

/// Text read from disk together with the encoding that decoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Reads the file at `path` and decodes it with `primary`, then `fallback`.
///
/// The file handle is released before decoding starts, so no handle outlives
/// this call on any path.
pub fn read_text(
    path: &Path,
    primary: TextEncoding,
    fallback: Option<TextEncoding>,
) -> Result<DecodedText, SanitizeError> {
    let bytes = fs::read(path).map_err(|source| SanitizeError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(text) = primary.decode(&bytes) {
        return Ok(DecodedText { text, encoding: primary });
    }

    if let Some(encoding) = fallback {
        debug!("'{}' is not valid {}, retrying as {}", path.display(), primary, encoding);
        if let Some(text) = encoding.decode(&bytes) {
            return Ok(DecodedText { text, encoding });
        }
    }

    Err(SanitizeError::Decode {
        path: path.to_path_buf(),
        primary,
        fallback,
    })
}
