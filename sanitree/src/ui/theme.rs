//! Colors used for sanitree's terminal messages.
//!
//! There is no theme file; [`default_theme_map`] is the only source of styles.

use owo_colors::AnsiColors;
use std::collections::HashMap;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The kinds of message sanitree prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    /// The completion message.
    Success,
    /// Per-file read failures and fatal errors.
    Error,
}

/// The style for one [`ThemeEntry`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeStyle {
    pub fg: Option<AnsiColors>,
}

/// Returns the built-in color mapping.
pub fn default_theme_map() -> ThemeMap {
    HashMap::from([
        (ThemeEntry::Success, ThemeStyle { fg: Some(AnsiColors::Green) }),
        (ThemeEntry::Error, ThemeStyle { fg: Some(AnsiColors::Red) }),
    ])
}
