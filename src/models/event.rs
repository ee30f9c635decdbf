use super::{coordinate::Coordinate, event_type::EventType};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

/// One accepted clock action. Never mutated after `record` builds it;
/// corrections are new events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceEvent {
    pub actor_id: String,
    /// Per-actor sequence, 1-based. Used by stores as a concurrency token.
    pub seq: u64,
    pub kind: EventType,
    pub occurred_at: DateTime<Local>,
    pub location: Coordinate,
    pub distance_from_site: f64,
}

impl AttendanceEvent {
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date_naive()
    }

    pub fn date_str(&self) -> String {
        self.occurred_at.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.occurred_at.format("%H:%M").to_string()
    }

    pub fn get_date_time(&self) -> String {
        self.occurred_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
