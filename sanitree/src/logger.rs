//! Logger setup for the sanitree binary.
//!
//! `RUST_LOG` takes precedence when set; otherwise the given default level
//! applies to the sanitree crates only.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`. Calling it more than once is harmless.
pub fn init_logger(default_level: Option<LevelFilter>) {
    let level = default_level.unwrap_or(LevelFilter::Warn);
    let default_filter = format!("sanitree={level},sanitree_core={level}");

    let _ = Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}
