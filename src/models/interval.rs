use super::time_of_day::TimeOfDay;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Half-open `[start, end)` range on a single day.
///
/// `start < end` is not enforced here: the calculators work on raw minute
/// arithmetic and pass zero or negative lengths through. Callers that need a
/// well-formed range use [`Interval::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Interval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parse both ends from `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Ok(Self::new(TimeOfDay::parse(start)?, TimeOfDay::parse(end)?))
    }

    /// Signed length in minutes (`end - start`).
    pub fn length_minutes(&self) -> i64 {
        self.end.minutes() - self.start.minutes()
    }

    /// Strict half-open overlap: touching ranges do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Minutes shared with `other`, never negative.
    pub fn overlap_minutes(&self, other: &Interval) -> i64 {
        let lo = self.start.minutes().max(other.start.minutes());
        let hi = self.end.minutes().min(other.end.minutes());
        (hi - lo).max(0)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.end <= self.start {
            return Err(AppError::InvalidInterval(format!(
                "end {} must be after start {}",
                self.end, self.start
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
