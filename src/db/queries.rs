use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::break_window::BreakKind;
use crate::models::interval::Interval;
use crate::models::role::Role;
use crate::models::time_of_day::TimeOfDay;
use chrono::NaiveDate;
use rusqlite::params;
use rusqlite::{Connection, Result, Row};

const SELECT_BOOKINGS: &str = "SELECT id, date, start_time, end_time, studio, title, role,
        break_kind, segment, group_id, effective_minutes, created_at
     FROM bookings";

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> Result<Booking> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let start_str: String = row.get("start_time")?;
    let start = TimeOfDay::parse(&start_str).map_err(|e| conversion_error(2, e))?;

    let end_str: String = row.get("end_time")?;
    let end = TimeOfDay::parse(&end_str).map_err(|e| conversion_error(3, e))?;

    let role_str: String = row.get("role")?;
    let role = Role::from_code(&role_str)
        .ok_or_else(|| conversion_error(6, AppError::InvalidRole(role_str.clone())))?;

    let break_str: Option<String> = row.get("break_kind")?;
    let break_kind = match break_str {
        Some(s) => Some(
            BreakKind::from_db_str(&s)
                .ok_or_else(|| conversion_error(7, AppError::InvalidBreak(s.clone())))?,
        ),
        None => None,
    };

    Ok(Booking {
        id: row.get("id")?,
        date,
        start,
        end,
        studio: row.get("studio")?,
        title: row.get("title")?,
        role,
        break_kind,
        segment: row.get("segment")?,
        group_id: row.get("group_id")?,
        effective_minutes: row.get("effective_minutes")?,
        created_at: row.get("created_at")?,
    })
}

fn collect(rows: impl Iterator<Item = Result<Booking>>) -> AppResult<Vec<Booking>> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_booking(conn: &Connection, b: &Booking) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO bookings (date, start_time, end_time, studio, title, role,
                               break_kind, segment, group_id, effective_minutes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            b.date_str(),
            b.start.as_hhmm(),
            b.end.as_hhmm(),
            b.studio,
            b.title,
            b.role.to_db_str(),
            b.break_kind.map(|k| k.to_db_str()),
            b.segment,
            b.group_id,
            b.effective_minutes,
            b.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Reserve a fresh group id. Ids come from an AUTOINCREMENT sequence, so a
/// deleted group's id is never handed out again.
pub fn next_group_id(conn: &Connection) -> AppResult<i32> {
    conn.execute(
        "INSERT INTO booking_groups (created_at) VALUES (datetime('now'))",
        [],
    )?;
    Ok(conn.last_insert_rowid() as i32)
}

pub fn load_bookings_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_BOOKINGS} WHERE date = ?1 ORDER BY studio ASC, start_time ASC"
    ))?;
    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_row)?;
    collect(rows)
}

/// Bookings with `from <= date <= to`, ordered by date, start time, studio.
pub fn load_bookings_in_range(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_BOOKINGS} WHERE date BETWEEN ?1 AND ?2 ORDER BY date ASC, start_time ASC, studio ASC"
    ))?;
    let rows = stmt.query_map(
        params![
            from.format("%Y-%m-%d").to_string(),
            to.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;
    collect(rows)
}

pub fn load_all_bookings(conn: &Connection) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_BOOKINGS} ORDER BY date ASC, start_time ASC, studio ASC"
    ))?;
    let rows = stmt.query_map([], map_row)?;
    collect(rows)
}

pub fn load_group(conn: &Connection, group_id: i32) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_BOOKINGS} WHERE group_id = ?1 ORDER BY segment ASC"
    ))?;
    let rows = stmt.query_map([group_id], map_row)?;
    collect(rows)
}

/// Existing rows for `studio` on `date` that overlap `interval`.
pub fn find_studio_overlaps(
    conn: &Connection,
    date: &NaiveDate,
    studio: &str,
    interval: &Interval,
) -> AppResult<Vec<Booking>> {
    // Stored times are zero-padded HH:MM, so text comparison is chronological.
    let mut stmt = conn.prepare(&format!(
        "{SELECT_BOOKINGS}
         WHERE date = ?1 AND studio = ?2 AND start_time < ?4 AND end_time > ?3
         ORDER BY start_time ASC"
    ))?;
    let rows = stmt.query_map(
        params![
            date.format("%Y-%m-%d").to_string(),
            studio,
            interval.start.as_hhmm(),
            interval.end.as_hhmm()
        ],
        map_row,
    )?;
    collect(rows)
}

pub fn delete_booking(conn: &Connection, id: i32) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM bookings WHERE id = ?1", [id])?)
}

pub fn delete_group(conn: &Connection, group_id: i32) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM bookings WHERE group_id = ?1", [group_id])?)
}
