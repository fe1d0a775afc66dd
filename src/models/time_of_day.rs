use crate::errors::AppResult;
use crate::utils::time::{MINUTES_PER_DAY, minutes_to_time, time_to_minutes};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Wall-clock time on a single day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from a minute offset; `None` outside `0..1440`.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(Self(minutes as u16))
        } else {
            None
        }
    }

    /// Build from a minute offset, capping at 23:59.
    pub fn saturating(minutes: u32) -> Self {
        Self(minutes.min(MINUTES_PER_DAY - 1) as u16)
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        let m = time_to_minutes(s)?;
        Ok(Self(m as u16))
    }

    pub fn minutes(self) -> i64 {
        self.0 as i64
    }

    pub fn as_hhmm(self) -> String {
        minutes_to_time(self.minutes())
    }
}

impl FromStr for TimeOfDay {
    type Err = crate::errors::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hhmm())
    }
}

// "HH:MM" on the wire, same as the `bookings` table.
impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_hhmm())
    }
}
