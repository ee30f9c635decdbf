use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::event::AttendanceEvent;
use crate::models::event_type::EventType;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub const EVENT_COLUMNS: &str =
    "staff_id, seq, kind, occurred_at, latitude, longitude, distance_m";

fn mapping_failure(col: usize, msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        col,
        rusqlite::types::Type::Text,
        Box::new(AppError::Mapping(msg)),
    )
}

/// Map an `events` row. Anything malformed fails here, before it reaches the core.
pub fn map_row(row: &Row) -> Result<AttendanceEvent> {
    let seq: i64 = row.get("seq")?;
    if seq < 1 {
        return Err(mapping_failure(1, format!("invalid seq: {}", seq)));
    }

    let kind_str: String = row.get("kind")?;
    let kind = EventType::from_db_str(&kind_str)
        .ok_or_else(|| mapping_failure(2, format!("invalid kind: {}", kind_str)))?;

    let ts_str: String = row.get("occurred_at")?;
    let occurred_at = DateTime::parse_from_rfc3339(&ts_str)
        .map_err(|_| mapping_failure(3, format!("invalid timestamp: {}", ts_str)))?
        .with_timezone(&Local);

    let location = Coordinate {
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    };
    if !location.is_valid() {
        return Err(mapping_failure(4, format!("invalid coordinate: {}", location)));
    }

    let distance: f64 = row.get("distance_m")?;
    if !distance.is_finite() || distance < 0.0 {
        return Err(mapping_failure(6, format!("invalid distance: {}", distance)));
    }

    Ok(AttendanceEvent {
        actor_id: row.get("staff_id")?,
        seq: seq as u64,
        kind,
        occurred_at,
        location,
        distance_from_site: distance,
    })
}

pub fn insert_event(conn: &Connection, ev: &AttendanceEvent) -> AppResult<()> {
    conn.execute(
        "INSERT INTO events (staff_id, seq, kind, occurred_at, occurred_ms, latitude, longitude, distance_m, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            ev.actor_id,
            ev.seq as i64,
            ev.kind.to_db_str(),
            ev.occurred_at.to_rfc3339(),
            ev.occurred_at.timestamp_millis(),
            ev.location.latitude,
            ev.location.longitude,
            ev.distance_from_site,
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(())
}

pub fn max_seq(conn: &Connection, staff_id: &str) -> AppResult<u64> {
    let max: Option<i64> = conn.query_row(
        "SELECT MAX(seq) FROM events WHERE staff_id = ?1",
        [staff_id],
        |row| row.get(0),
    )?;
    Ok(max.unwrap_or(0).max(0) as u64)
}

pub fn load_last_event(conn: &Connection, staff_id: &str) -> AppResult<Option<AttendanceEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE staff_id = ?1 ORDER BY seq DESC LIMIT 1"
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([staff_id], map_row).optional()?)
}

pub fn load_events_between(
    conn: &Connection,
    staff_id: &str,
    from: DateTime<Local>,
    to: DateTime<Local>,
) -> AppResult<Vec<AttendanceEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE staff_id = ?1 AND occurred_ms >= ?2 AND occurred_ms < ?3
         ORDER BY occurred_ms ASC, seq ASC"
    );
    let mut stmt = conn.prepare_cached(&sql)?;

    let rows = stmt.query_map(
        params![staff_id, from.timestamp_millis(), to.timestamp_millis() + 1000],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_events(conn: &Connection, staff_id: Option<&str>) -> AppResult<Vec<AttendanceEvent>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events
         WHERE ?1 IS NULL OR staff_id = ?1
         ORDER BY occurred_ms ASC, seq ASC"
    );
    let mut stmt = conn.prepare_cached(&sql)?;

    let rows = stmt.query_map([staff_id], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
