use super::break_window::BreakKind;
use super::interval::Interval;
use super::role::Role;
use super::time_of_day::TimeOfDay;
use chrono::{Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: i32,
    pub date: NaiveDate,                // ⇔ bookings.date (TEXT "YYYY-MM-DD")
    pub start: TimeOfDay,               // ⇔ bookings.start_time (TEXT "HH:MM")
    pub end: TimeOfDay,                 // ⇔ bookings.end_time (TEXT "HH:MM")
    pub studio: String,                 // ⇔ bookings.studio
    pub title: String,                  // ⇔ bookings.title (TEXT, default '')
    pub role: Role,                     // ⇔ bookings.role
    pub break_kind: Option<BreakKind>,  // ⇔ bookings.break_kind (NULL when not split)
    pub segment: i32,                   // 0 = whole booking, 1/2 = before/after break
    pub group_id: i32,                  // ⇔ bookings.group_id
    pub effective_minutes: i64,         // ⇔ bookings.effective_minutes
    pub created_at: String,             // ⇔ bookings.created_at (TEXT, ISO8601)
}

impl Booking {
    /// New, not yet persisted row (`id = 0`).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        interval: Interval,
        studio: &str,
        title: &str,
        role: Role,
        break_kind: Option<BreakKind>,
        segment: i32,
        group_id: i32,
    ) -> Self {
        Self {
            id: 0,
            date,
            start: interval.start,
            end: interval.end,
            studio: studio.to_string(),
            title: title.to_string(),
            role,
            break_kind,
            segment,
            group_id,
            effective_minutes: interval.length_minutes(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn segment_label(&self) -> String {
        match (self.segment, self.break_kind) {
            (1, Some(k)) => format!("before {}", k),
            (2, Some(k)) => format!("after {}", k),
            _ => "-".to_string(),
        }
    }
}
