//! Time utilities: parsing local timestamps, formatting hours.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Parse "YYYY-MM-DD HH:MM" (or with seconds) as local time.
pub fn parse_local_datetime(s: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidTime(format!("{} does not exist in local time", s)))
}

/// `--at` override or the current instant.
pub fn now_or(at: Option<&String>) -> AppResult<DateTime<Local>> {
    match at {
        Some(s) => parse_local_datetime(s),
        None => Ok(Local::now()),
    }
}

/// Decimal hours as H:MM, e.g. 7.9 → "7:54".
pub fn format_hours(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{}:{:02}", mins / 60, mins % 60)
}
