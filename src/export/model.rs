// src/export/model.rs

use crate::models::booking::Booking;
use serde::Serialize;

/// Flat row used by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BookingExport {
    pub id: i32,
    pub date: String,
    pub start: String,
    pub end: String,
    pub studio: String,
    pub title: String,
    pub role: String,
    pub break_kind: String,
    pub segment: i32,
    pub group_id: i32,
    pub effective_minutes: i64,
}

impl From<&Booking> for BookingExport {
    fn from(b: &Booking) -> Self {
        Self {
            id: b.id,
            date: b.date_str(),
            start: b.start.as_hhmm(),
            end: b.end.as_hhmm(),
            studio: b.studio.clone(),
            title: b.title.clone(),
            role: b.role.code().to_string(),
            break_kind: b
                .break_kind
                .map(|k| k.as_str().to_string())
                .unwrap_or_default(),
            segment: b.segment,
            group_id: b.group_id,
            effective_minutes: b.effective_minutes,
        }
    }
}
