//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid break window: {0}")]
    InvalidBreak(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Role '{role}' is not allowed to {action}")]
    PermissionDenied { role: String, action: String },

    #[error("Studio {studio} is already booked on {date} ({existing})")]
    StudioOccupied {
        studio: String,
        date: String,
        existing: String,
    },

    #[error("No bookings found for date {0}")]
    NoBookingsForDate(String),

    #[error("Booking not found: {0}")]
    BookingNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
