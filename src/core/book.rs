use crate::core::calculator::split::SplitResult;
use crate::core::logic::{BookingPlan, BreakChoice, Core};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_studio_overlaps, insert_booking, next_group_id};
use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::break_window::BreakSchedule;
use crate::models::interval::Interval;
use crate::models::role::Role;
use chrono::NaiveDate;

/// Everything the `book` command needs, already parsed.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub interval: Interval,
    pub studio: String,
    pub title: String,
    pub role: Role,
    pub choice: BreakChoice,
}

/// High-level business logic for the `book` command.
pub struct BookLogic;

impl BookLogic {
    /// Validate, plan and store a booking. Returns the group id and the plan.
    pub fn apply(
        pool: &mut DbPool,
        schedule: &BreakSchedule,
        req: &BookingRequest,
    ) -> AppResult<(i32, BookingPlan)> {
        if !req.role.can_book() {
            return Err(AppError::PermissionDenied {
                role: req.role.to_string(),
                action: "book studios".into(),
            });
        }

        req.interval.validate()?;

        let plan = Core::plan_booking(&req.interval, schedule, req.choice);

        if plan.segments.is_empty() {
            let kind = plan
                .break_window
                .map(|w| w.kind.to_string())
                .unwrap_or_else(|| "break".into());
            return Err(AppError::InvalidInterval(format!(
                "{} lies entirely within the {} window",
                req.interval, kind
            )));
        }

        let date_str = req.date.format("%Y-%m-%d").to_string();

        let group_id = pool.with_tx(|tx| {
            // Check every segment, not the raw request: the break itself may be free.
            for seg in &plan.segments {
                if let Some(existing) = find_studio_overlaps(tx, &req.date, &req.studio, seg)?.first() {
                    return Err(AppError::StudioOccupied {
                        studio: req.studio.clone(),
                        date: date_str.clone(),
                        existing: format!("#{} {}", existing.id, existing.interval()),
                    });
                }
            }

            let group_id = next_group_id(tx)?;

            let (split_kind, rows): (_, Vec<(Interval, i32)>) = match plan.split {
                SplitResult::Split {
                    first,
                    second,
                    break_window,
                } => (
                    Some(break_window.kind),
                    first
                        .map(|i| (i, 1))
                        .into_iter()
                        .chain(second.map(|i| (i, 2)))
                        .collect(),
                ),
                SplitResult::NoSplit => (None, plan.segments.iter().map(|s| (*s, 0)).collect()),
            };

            for (seg, segment) in rows {
                let mut row = Booking::new(
                    req.date,
                    seg,
                    &req.studio,
                    &req.title,
                    req.role,
                    split_kind,
                    segment,
                    group_id,
                );
                if split_kind.is_none() {
                    row.effective_minutes = plan.effective_minutes;
                }
                insert_booking(tx, &row)?;
            }

            ttlog(
                tx,
                "book",
                &format!("{} studio {} group {}", date_str, req.studio, group_id),
                &format!(
                    "{} booked by {} ({} segment(s), {} min effective)",
                    req.interval,
                    req.role,
                    plan.segments.len(),
                    plan.effective_minutes
                ),
            )?;

            Ok(group_id)
        })?;

        Ok((group_id, plan))
    }
}
