//! Event store boundary. The hosted backend, the local SQLite adapter and
//! the in-memory store used by tests all sit behind `EventStore`.

use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use chrono::{DateTime, Local, TimeDelta};

pub trait EventStore {
    /// Most recent event (highest `seq`) for `staff_id`.
    fn last_event(&self, staff_id: &str) -> AppResult<Option<AttendanceEvent>>;

    /// Append `event`. Must fail with `AppError::Conflict` unless
    /// `event.seq` is exactly one past the stored sequence for that actor.
    fn append(&mut self, event: &AttendanceEvent) -> AppResult<()>;

    /// Events for `staff_id` inside `[from, to]` as defined by `in_window`, oldest first.
    fn events_between(
        &self,
        staff_id: &str,
        from: DateTime<Local>,
        to: DateTime<Local>,
    ) -> AppResult<Vec<AttendanceEvent>>;

    /// All events, optionally for one actor, oldest first.
    fn events(&self, staff_id: Option<&str>) -> AppResult<Vec<AttendanceEvent>>;
}

/// `to` is inclusive to the whole second: 23:59:59 also covers 23:59:59.4.
pub fn in_window(t: DateTime<Local>, from: DateTime<Local>, to: DateTime<Local>) -> bool {
    t >= from && t < to + TimeDelta::seconds(1)
}

/// Check the optimistic-concurrency token against the store's current seq.
pub fn check_next_seq(event: &AttendanceEvent, current: u64) -> AppResult<()> {
    event.location.validate()?;

    if event.seq == current + 1 {
        Ok(())
    } else {
        Err(AppError::Conflict {
            staff_id: event.actor_id.clone(),
            expected_seq: event.seq,
            found_seq: current,
        })
    }
}

/// Vec-backed store, mostly for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<AttendanceEvent>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventStore for MemoryStore {
    fn last_event(&self, staff_id: &str) -> AppResult<Option<AttendanceEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.actor_id == staff_id)
            .max_by_key(|e| e.seq)
            .cloned())
    }

    fn append(&mut self, event: &AttendanceEvent) -> AppResult<()> {
        let current = self.last_event(&event.actor_id)?.map_or(0, |e| e.seq);
        check_next_seq(event, current)?;
        self.events.push(event.clone());
        Ok(())
    }

    fn events_between(
        &self,
        staff_id: &str,
        from: DateTime<Local>,
        to: DateTime<Local>,
    ) -> AppResult<Vec<AttendanceEvent>> {
        let mut out: Vec<AttendanceEvent> = self
            .events
            .iter()
            .filter(|e| e.actor_id == staff_id && in_window(e.occurred_at, from, to))
            .cloned()
            .collect();
        out.sort_by_key(|e| (e.occurred_at, e.seq));
        Ok(out)
    }

    fn events(&self, staff_id: Option<&str>) -> AppResult<Vec<AttendanceEvent>> {
        let mut out: Vec<AttendanceEvent> = self
            .events
            .iter()
            .filter(|e| staff_id.is_none_or(|id| e.actor_id == id))
            .cloned()
            .collect();
        out.sort_by_key(|e| (e.occurred_at, e.seq));
        Ok(out)
    }
}
