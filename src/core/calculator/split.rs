//! Splits a booking into the parts before and after a break window.

use crate::errors::AppResult;
use crate::models::break_window::BreakWindow;
use crate::models::interval::Interval;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SplitResult {
    NoSplit,
    /// `first` runs up to the break, `second` resumes after it. A part is
    /// `None` when the booking has no time on that side of the break; both
    /// are `None` when the booking lies entirely inside the break.
    Split {
        first: Option<Interval>,
        second: Option<Interval>,
        break_window: BreakWindow,
    },
}

impl SplitResult {
    pub fn is_split(&self) -> bool {
        matches!(self, SplitResult::Split { .. })
    }

    /// Non-empty parts, in order.
    pub fn parts(&self) -> Vec<Interval> {
        match self {
            SplitResult::NoSplit => Vec::new(),
            SplitResult::Split { first, second, .. } => {
                first.iter().chain(second.iter()).copied().collect()
            }
        }
    }
}

/// Split `interval` around `break_window`.
///
/// A disabled window or a booking that does not touch it needs no split.
/// Parts are clamped to the booking, so a part never has `start >= end`.
pub fn calculate_schedule_split(interval: &Interval, break_window: &BreakWindow) -> SplitResult {
    if !break_window.enabled {
        return SplitResult::NoSplit;
    }

    if interval.end <= break_window.start || interval.start >= break_window.end {
        return SplitResult::NoSplit;
    }

    let first = (interval.start < break_window.start)
        .then(|| Interval::new(interval.start, break_window.start));
    let second =
        (interval.end > break_window.end).then(|| Interval::new(break_window.end, interval.end));

    SplitResult::Split {
        first,
        second,
        break_window: *break_window,
    }
}

/// `HH:MM` entry point for [`calculate_schedule_split`].
pub fn calculate_schedule_split_str(
    start: &str,
    end: &str,
    break_window: &BreakWindow,
) -> AppResult<SplitResult> {
    let interval = Interval::parse(start, end)?;
    Ok(calculate_schedule_split(&interval, break_window))
}
