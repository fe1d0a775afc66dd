//! Date helpers: today, period strings (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
//! `A:B`, `all`) resolved to inclusive date ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn invalid(p: &str) -> AppError {
    AppError::InvalidDate(format!("Invalid period: {}", p))
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

/// First and last day covered by a single period token.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some(dm) = parse_date(&format!("{p}-01")) {
        return month_bounds(dm.year(), dm.month()).ok_or_else(|| invalid(p));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| invalid(p))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(|| invalid(p))?;
        return Ok((first, last));
    }

    Err(invalid(p))
}

/// Resolve an optional period filter. `None` means the current month,
/// `"all"` means no bound at all (returned as `None`).
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let Some(p) = period else {
        let t = today();
        return month_bounds(t.year(), t.month())
            .map(Some)
            .ok_or_else(|| invalid("current month"));
    };

    if p == "all" {
        return Ok(None);
    }

    if let Some((a, b)) = p.split_once(':') {
        let (from, _) = period_bounds(a)?;
        let (_, to) = period_bounds(b)?;
        if to < from {
            return Err(invalid(p));
        }
        return Ok(Some((from, to)));
    }

    period_bounds(p).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn single_tokens() {
        assert_eq!(period_bounds("2025-02").unwrap(), (d("2025-02-01"), d("2025-02-28")));
        assert_eq!(period_bounds("2024-12").unwrap(), (d("2024-12-01"), d("2024-12-31")));
        assert_eq!(period_bounds("2025").unwrap(), (d("2025-01-01"), d("2025-12-31")));
        assert_eq!(period_bounds("2025-03-07").unwrap(), (d("2025-03-07"), d("2025-03-07")));
    }

    #[test]
    fn ranges_and_all() {
        assert_eq!(
            resolve_period(Some("2024-09:2025-09")).unwrap(),
            Some((d("2024-09-01"), d("2025-09-30")))
        );
        assert_eq!(resolve_period(Some("all")).unwrap(), None);
        assert!(resolve_period(Some("2025-09:2024-09")).is_err());
        assert!(resolve_period(Some("yesterday")).is_err());
    }
}
