//! Unified application error type.
//! All modules (core, db, config, cli, export) return AppError so the
//! error handling stays consistent from the state machine up to main().

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

    #[error("Malformed record from event store: {0}")]
    Mapping(String),

    #[error(
        "Concurrent update for staff '{staff_id}': expected sequence {expected_seq}, store is at {found_seq}"
    )]
    Conflict {
        staff_id: String,
        expected_seq: u64,
        found_seq: u64,
    },

    // ---------------------------
    // Geofence / attendance
    // ---------------------------
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Action no longer valid, please refresh ({attempted} attempted, allowed: {allowed}; {reason})")]
    IllegalTransition {
        attempted: String,
        allowed: String,
        reason: String,
    },

    #[error("Event at {attempted} is earlier than the last recorded event at {last}")]
    OutOfOrder { attempted: String, last: String },

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
