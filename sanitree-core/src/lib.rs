// sanitree-core/src/lib.rs
//! # sanitree Core Library
//!
//! `sanitree-core` holds the platform-independent logic behind `sanitree`: the
//! rules that normalize file names and file content, and the traversal that
//! applies them to a directory tree in place.
//!
//! ## Modules
//!
//! * `sanitizers`: The filename and content sanitization rules.
//! * `config`: [`SanitizerConfig`], the text-extension allow-list and the rename collision policy.
//! * `encoding`: Text encodings and the primary/fallback read path.
//! * `traversal`: Recursive, sorted, symlink-safe file listing.
//! * `engine`: The [`Sanitizer`] that renames files and rewrites text content.
//! * `errors`: [`SanitizeError`] and its recoverable/fatal split.
//!
//! ## Usage Example
//!
//! ```rust
//! use sanitree_core::{sanitize_content, sanitize_filename};
//!
//! assert_eq!(sanitize_filename("My-File_Name.TXT", None).unwrap(), "my file name.txt");
//! assert_eq!(sanitize_filename("Report_Draft.md", Some("draft")).unwrap(), "report .md");
//! assert_eq!(sanitize_content("Hello, World! 100% done."), "hello world 100 done.");
//! ```
//!
//! Running over a directory:
//!
//! ```rust,no_run
//! use sanitree_core::{Sanitizer, SanitizerConfig};
//! use std::path::Path;
//!
//! let config = SanitizerConfig::default().with_word_to_remove(Some("draft"));
//! let summary = Sanitizer::new(config)?.run(Path::new("."))?;
//! println!("renamed {} file(s)", summary.renamed());
//! # Ok::<(), sanitree_core::SanitizeError>(())
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod encoding;
pub mod engine;
pub mod errors;
pub mod sanitizers;
pub mod traversal;

pub use config::{CollisionPolicy, SanitizerConfig, TextExtensionSet, DEFAULT_TEXT_EXTENSIONS};
pub use encoding::{read_text, DecodedText, TextEncoding};
pub use engine::{ContentOutcome, FileOutcome, RunSummary, Sanitizer};
pub use errors::SanitizeError;
pub use sanitizers::rules::{sanitize_content, sanitize_filename, FilenameRule, WordRemover};
pub use traversal::{collect_files, FileEntry};
