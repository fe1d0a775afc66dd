use crate::errors::AppResult;
use crate::models::break_window::BreakWindow;
use crate::models::interval::Interval;

/// Worked minutes = `end - start` minus overlap with an enabled break.
///
/// Only the overlap is clamped at zero; a reversed interval yields a
/// negative total and that is returned as is.
pub fn calculate_effective_work_time(interval: &Interval, break_window: Option<&BreakWindow>) -> i64 {
    let total = interval.length_minutes();

    match break_window {
        Some(b) if b.enabled => total - interval.overlap_minutes(&b.interval()),
        _ => total,
    }
}

/// `HH:MM` entry point for [`calculate_effective_work_time`].
pub fn calculate_effective_work_time_str(
    start: &str,
    end: &str,
    break_window: Option<&BreakWindow>,
) -> AppResult<i64> {
    let interval = Interval::parse(start, end)?;
    Ok(calculate_effective_work_time(&interval, break_window))
}
