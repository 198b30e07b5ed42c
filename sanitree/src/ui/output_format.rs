//! Writes themed one-line messages to any `Write` sink.
//!
//! Color is applied only when the caller says the sink supports it, so the
//! same functions serve terminals, pipes and tests.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

fn print_styled(
    writer: &mut dyn Write,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    let color = theme.get(&entry).and_then(|style| style.fg);
    match color {
        Some(color) if supports_color => writeln!(writer, "{}", msg.color(color)),
        _ => writeln!(writer, "{}", msg),
    }
}

pub fn print_success_message(writer: &mut dyn Write, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_styled(writer, msg, ThemeEntry::Success, theme, supports_color)
}

pub fn print_error_message(writer: &mut dyn Write, msg: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    print_styled(writer, msg, ThemeEntry::Error, theme, supports_color)
}
