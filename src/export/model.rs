use crate::models::event::AttendanceEvent;
use serde::Serialize;

/// Flat row shape shared by the CSV and JSON exporters.
#[derive(Debug, Clone, Serialize)]
pub struct EventExport {
    pub staff_id: String,
    pub seq: u64,
    pub kind: String,
    pub date: String,
    pub time: String,
    pub occurred_at: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_m: f64,
}

impl From<&AttendanceEvent> for EventExport {
    fn from(ev: &AttendanceEvent) -> Self {
        Self {
            staff_id: ev.actor_id.clone(),
            seq: ev.seq,
            kind: ev.kind.to_db_str().to_string(),
            date: ev.date_str(),
            time: ev.time_str(),
            occurred_at: ev.occurred_at.to_rfc3339(),
            latitude: ev.location.latitude,
            longitude: ev.location.longitude,
            distance_m: (ev.distance_from_site * 10.0).round() / 10.0,
        }
    }
}
