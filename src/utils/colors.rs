//! ANSI color helper utilities for terminal output.

use crate::models::break_window::BreakKind;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

/// Lunch → yellow, dinner → magenta, none → grey.
pub fn color_for_break(kind: Option<BreakKind>) -> &'static str {
    match kind {
        Some(BreakKind::Lunch) => YELLOW,
        Some(BreakKind::Dinner) => MAGENTA,
        None => GREY,
    }
}

/// Conflict → red, clear → green.
pub fn color_for_conflict(conflict: bool) -> &'static str {
    if conflict { RED } else { GREEN }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
