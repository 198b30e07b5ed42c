// sanitree/src/lib.rs
//! # sanitree CLI Application
//!
//! Command-line front end for `sanitree-core`: argument parsing, logging
//! setup and terminal output.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::sanitize::{run_sanitize, SanitizeOptions, COMPLETION_MESSAGE};
