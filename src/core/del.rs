use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_booking, delete_group, load_bookings_by_date};
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use chrono::NaiveDate;

/// What to remove on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Row(i32),
    Group(i32),
    All,
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete bookings on `date`. Rows and groups must belong to that date.
    /// Returns the number of rows removed.
    pub fn apply(
        pool: &mut DbPool,
        role: Role,
        date: NaiveDate,
        target: DeleteTarget,
    ) -> AppResult<usize> {
        if !role.can_delete() {
            return Err(AppError::PermissionDenied {
                role: role.to_string(),
                action: "delete bookings".into(),
            });
        }

        let date_str = date.format("%Y-%m-%d").to_string();
        let bookings = load_bookings_by_date(&pool.conn, &date)?;

        if bookings.is_empty() {
            return Err(AppError::NoBookingsForDate(date_str));
        }

        pool.with_tx(|tx| {
            let (removed, target_label) = match target {
                DeleteTarget::Row(id) => {
                    if !bookings.iter().any(|b| b.id == id) {
                        return Err(AppError::BookingNotFound(format!("id {} on {}", id, date_str)));
                    }
                    (delete_booking(tx, id)?, format!("{} id {}", date_str, id))
                }
                DeleteTarget::Group(g) => {
                    if !bookings.iter().any(|b| b.group_id == g) {
                        return Err(AppError::BookingNotFound(format!("group {} on {}", g, date_str)));
                    }
                    (delete_group(tx, g)?, format!("{} group {}", date_str, g))
                }
                DeleteTarget::All => {
                    let mut n = 0;
                    for b in &bookings {
                        n += delete_booking(tx, b.id)?;
                    }
                    (n, date_str.clone())
                }
            };

            ttlog(
                tx,
                "del",
                &target_label,
                &format!("Deleted {} booking row(s) as {}", removed, role),
            )?;

            Ok(removed)
        })
    }
}
