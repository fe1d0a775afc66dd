//! Time utilities: parsing HH:MM, minute offsets, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Minutes in one day. Valid minute offsets are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a zero-padded 24h `HH:MM` string into minutes since midnight.
///
/// Exactly two digits, a colon and two digits are accepted, with hours in
/// `00..=23` and minutes in `00..=59`. Anything else is `InvalidTime`.
pub fn time_to_minutes(time: &str) -> AppResult<u32> {
    let invalid = || AppError::InvalidTime(time.to_string());

    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }

    // chrono's `%H` also takes a single digit; zero padding is checked here.
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let t = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| invalid())?;
    Ok(t.hour() * 60 + t.minute())
}

/// Inverse of [`time_to_minutes`]: zero-pads hours and minutes.
///
/// Values outside a single day are not wrapped (`1500` → `"25:00"`).
pub fn minutes_to_time(minutes: i64) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let m = minutes.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Parse an `HH:MM-HH:MM` window as used in the configuration file.
pub fn parse_window(s: &str) -> AppResult<(u32, u32)> {
    let (a, b) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidBreak(s.to_string()))?;

    let start = time_to_minutes(a.trim())?;
    let end = time_to_minutes(b.trim())?;

    if end <= start {
        return Err(AppError::InvalidBreak(format!(
            "{} (end must be after start)",
            s
        )));
    }

    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_every_minute_of_the_day() {
        for h in 0..24 {
            for m in 0..60 {
                let s = format!("{h:02}:{m:02}");
                let mins = time_to_minutes(&s).unwrap();
                assert_eq!(mins, h * 60 + m);
                assert_eq!(minutes_to_time(mins as i64), s);
            }
        }
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["9:00", "24:00", "12:60", "ab:cd", "", "12-30", "12:3", "+1:00", "12:300"] {
            assert!(
                matches!(time_to_minutes(bad), Err(AppError::InvalidTime(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn out_of_range_minutes_are_not_wrapped() {
        assert_eq!(minutes_to_time(1500), "25:00");
        assert_eq!(minutes_to_time(-90), "-01:30");
    }

    #[test]
    fn parses_config_windows() {
        assert_eq!(parse_window("12:00-13:00").unwrap(), (720, 780));
        assert_eq!(parse_window(" 18:00 - 19:30 ").unwrap(), (1080, 1170));
        assert!(parse_window("13:00-12:00").is_err());
        assert!(parse_window("12:00").is_err());
    }
}
