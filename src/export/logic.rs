use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{EventExport, ExportFormat};
use crate::models::event::AttendanceEvent;
use crate::ui::messages::warning;
use crate::utils::date::range_bounds;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Keep events whose local date falls inside `range` (see `range_bounds`).
    pub fn filter_range(events: Vec<AttendanceEvent>, range: Option<&str>) -> AppResult<Vec<AttendanceEvent>> {
        let Some(r) = range else {
            return Ok(events);
        };
        let (start, end) = range_bounds(r)?;
        Ok(events
            .into_iter()
            .filter(|e| {
                let d = e.date();
                d >= start && d <= end
            })
            .collect())
    }

    /// Export events to `file`. Returns how many rows were written.
    pub fn export<S: EventStore>(
        store: &S,
        format: ExportFormat,
        file: &str,
        staff_id: Option<&str>,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let events = Self::filter_range(store.events(staff_id)?, range)?;
        if events.is_empty() {
            warning("No events match the requested filter; writing an empty export.");
        }

        ensure_writable(path, force)?;

        let rows: Vec<EventExport> = events.iter().map(EventExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
