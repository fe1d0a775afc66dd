use super::interval::Interval;
use super::time_of_day::TimeOfDay;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_window;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Lunch,
    Dinner,
}

impl BreakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::Lunch => "lunch",
            BreakKind::Dinner => "dinner",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "lunch" => Some(BreakKind::Lunch),
            "dinner" => Some(BreakKind::Dinner),
            _ => None,
        }
    }
}

impl fmt::Display for BreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named break during which bookings may need to be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakWindow {
    pub kind: BreakKind,
    pub enabled: bool,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl BreakWindow {
    pub fn new(kind: BreakKind, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            kind,
            enabled: true,
            start,
            end,
        }
    }

    /// 12:00–13:00
    pub fn default_lunch() -> Self {
        Self::from_minutes(BreakKind::Lunch, 12 * 60, 13 * 60)
    }

    /// 18:00–19:00
    pub fn default_dinner() -> Self {
        Self::from_minutes(BreakKind::Dinner, 18 * 60, 19 * 60)
    }

    fn from_minutes(kind: BreakKind, start: u32, end: u32) -> Self {
        Self::new(kind, TimeOfDay::saturating(start), TimeOfDay::saturating(end))
    }

    /// Parse an `HH:MM-HH:MM` window.
    pub fn parse(kind: BreakKind, window: &str) -> AppResult<Self> {
        let (start, end) = parse_window(window)?;
        Ok(Self::from_minutes(kind, start, end))
    }

    pub fn disabled(self) -> Self {
        Self {
            enabled: false,
            ..self
        }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    pub fn duration_minutes(&self) -> i64 {
        self.interval().length_minutes()
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

impl fmt::Display for BreakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}-{} ({} min){}",
            self.kind,
            self.start,
            self.end,
            self.duration_minutes(),
            if self.enabled { "" } else { " [disabled]" }
        )
    }
}

/// The configured lunch and dinner windows.
///
/// Built once from [`Config`] and handed to the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakSchedule {
    pub lunch: BreakWindow,
    pub dinner: BreakWindow,
}

impl Default for BreakSchedule {
    fn default() -> Self {
        Self {
            lunch: BreakWindow::default_lunch(),
            dinner: BreakWindow::default_dinner(),
        }
    }
}

impl BreakSchedule {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let lunch = BreakWindow::parse(BreakKind::Lunch, &cfg.lunch_window)
            .map_err(|e| AppError::Config(format!("lunch_window: {e}")))?
            .with_enabled(cfg.lunch_enabled);
        let dinner = BreakWindow::parse(BreakKind::Dinner, &cfg.dinner_window)
            .map_err(|e| AppError::Config(format!("dinner_window: {e}")))?
            .with_enabled(cfg.dinner_enabled);

        Ok(Self { lunch, dinner })
    }

    pub fn get(&self, kind: BreakKind) -> BreakWindow {
        match kind {
            BreakKind::Lunch => self.lunch,
            BreakKind::Dinner => self.dinner,
        }
    }

    /// Windows in priority order (lunch first).
    pub fn windows(&self) -> [BreakWindow; 2] {
        [self.lunch, self.dinner]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_windows() {
        let s = BreakSchedule::default();
        assert_eq!(s.lunch.start.as_hhmm(), "12:00");
        assert_eq!(s.lunch.end.as_hhmm(), "13:00");
        assert_eq!(s.dinner.start.as_hhmm(), "18:00");
        assert_eq!(s.dinner.end.as_hhmm(), "19:00");
        assert_eq!(s.lunch.duration_minutes(), 60);
        assert_eq!(s.dinner.duration_minutes(), 60);
        assert!(s.lunch.enabled && s.dinner.enabled);
    }

    #[test]
    fn schedule_follows_config() {
        let cfg = Config {
            lunch_window: "12:30-13:15".into(),
            dinner_enabled: false,
            ..Config::default()
        };
        let s = BreakSchedule::from_config(&cfg).unwrap();
        assert_eq!(s.lunch.duration_minutes(), 45);
        assert!(!s.dinner.enabled);
    }

    #[test]
    fn bad_config_window_is_a_config_error() {
        let cfg = Config {
            dinner_window: "19:00-18:00".into(),
            ..Config::default()
        };
        assert!(matches!(
            BreakSchedule::from_config(&cfg),
            Err(AppError::Config(_))
        ));
    }
}
