use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{load_all_bookings, load_bookings_in_range};
use crate::errors::{AppError, AppResult};
use crate::export::{BookingExport, ExportFormat, ensure_writable, export_csv, export_json};
use crate::models::role::Role;
use crate::ui::messages::warning;
use crate::utils::date::resolve_period;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export bookings in `range` (default: everything) to `file`.
    /// Returns the number of rows written.
    pub fn export(
        pool: &mut DbPool,
        role: Role,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        if !role.can_export() {
            return Err(AppError::PermissionDenied {
                role: role.to_string(),
                action: "export bookings".into(),
            });
        }

        let path = Path::new(file);
        if path.is_dir() {
            return Err(AppError::Export(format!("{} is a directory", path.display())));
        }

        // No range → whole table, unlike `list` which defaults to this month.
        let bounds = match range {
            Some(r) => resolve_period(Some(r))?,
            None => None,
        };

        let bookings = match bounds {
            Some((from, to)) => load_bookings_in_range(&pool.conn, &from, &to)?,
            None => load_all_bookings(&pool.conn)?,
        };

        if bookings.is_empty() {
            warning("No bookings match the requested range; writing an empty export.");
        }

        ensure_writable(path, force)?;

        let rows: Vec<BookingExport> = bookings.iter().map(BookingExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} row(s) as {}", rows.len(), format.as_str()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(rows.len())
    }
}
