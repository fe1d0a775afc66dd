use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
            [version],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `bookings` table and the `booking_groups` id sequence.
fn create_bookings_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bookings (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            date              TEXT NOT NULL,
            start_time        TEXT NOT NULL,
            end_time          TEXT NOT NULL,
            studio            TEXT NOT NULL,
            title             TEXT NOT NULL DEFAULT '',
            role              TEXT NOT NULL,
            break_kind        TEXT CHECK(break_kind IS NULL OR break_kind IN ('lunch','dinner')),
            segment           INTEGER NOT NULL DEFAULT 0 CHECK(segment IN (0, 1, 2)),
            group_id          INTEGER NOT NULL,
            effective_minutes INTEGER NOT NULL DEFAULT 0,
            created_at        TEXT NOT NULL,
            CHECK(start_time < end_time)
        );

        CREATE TABLE IF NOT EXISTS booking_groups (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_bookings_date_studio ON bookings(date, studio);
        CREATE INDEX IF NOT EXISTS idx_bookings_group ON bookings(group_id);
        "#,
    )?;
    Ok(())
}

type Step = fn(&Connection) -> Result<()>;

/// Schema steps in application order. Each runs once and is recorded in `log`.
const MIGRATIONS: &[(&str, &str, Step)] = &[(
    "0.1.0_initial_schema",
    "created bookings and booking_groups tables",
    create_bookings_table,
)];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {} → {}", version, message));
    }

    Ok(())
}
