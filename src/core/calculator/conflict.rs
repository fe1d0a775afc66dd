//! Detects bookings that run into a configured break window.

use crate::errors::AppResult;
use crate::models::break_window::{BreakKind, BreakSchedule, BreakWindow};
use crate::models::interval::Interval;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConflictResult {
    NoConflict,
    Conflict {
        kind: BreakKind,
        suggestion: BreakWindow,
    },
}

impl ConflictResult {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictResult::Conflict { .. })
    }

    pub fn suggestion(&self) -> Option<BreakWindow> {
        match self {
            ConflictResult::Conflict { suggestion, .. } => Some(*suggestion),
            ConflictResult::NoConflict => None,
        }
    }
}

/// Check `interval` against lunch, then dinner. First match wins, so a
/// booking spanning both windows is reported as a lunch conflict only.
pub fn check_break_time_conflict(interval: &Interval, schedule: &BreakSchedule) -> ConflictResult {
    for window in schedule.windows() {
        if interval.overlaps(&window.interval()) {
            return ConflictResult::Conflict {
                kind: window.kind,
                suggestion: window,
            };
        }
    }
    ConflictResult::NoConflict
}

/// `HH:MM` entry point for [`check_break_time_conflict`].
pub fn check_break_time_conflict_str(
    start: &str,
    end: &str,
    schedule: &BreakSchedule,
) -> AppResult<ConflictResult> {
    let interval = Interval::parse(start, end)?;
    Ok(check_break_time_conflict(&interval, schedule))
}

/// Every window `interval` touches, lunch before dinner.
pub fn find_all_break_conflicts(interval: &Interval, schedule: &BreakSchedule) -> Vec<BreakWindow> {
    schedule
        .windows()
        .into_iter()
        .filter(|w| interval.overlaps(&w.interval()))
        .collect()
}
