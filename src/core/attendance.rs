//! Attendance state machine.
//!
//! Status is always derived from the last recorded event plus a fresh
//! proximity check; nothing is cached between calls. Rules are applied
//! in order and the first match wins:
//!
//! 1. no previous event, or last event is a clock-out → `ClockedOut`,
//!    clock-in allowed when inside the radius (or distance not enforced)
//! 2. last clock-in is from another calendar day → stale session,
//!    `ClockedOut`, clock-in allowed
//! 3. clock-in today and inside the radius (or not enforced) → `ClockedIn`,
//!    clock-out allowed
//! 4. clock-in today and outside the radius → `ClockedInOutOfRange`, blocked

use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::decision::{AttendanceStatus, Decision};
use crate::models::event::AttendanceEvent;
use crate::models::event_type::EventType;
use crate::models::policy::Policy;
use crate::models::proximity::ProximityResult;
use chrono::{DateTime, Local};

pub const REASON_TOO_FAR: &str = "too far from site";
pub const REASON_RETURN_TO_CLOCK_OUT: &str = "must return within radius to clock out";
pub const REASON_IN_RANGE: &str = "within site radius";
pub const REASON_NOT_ENFORCED: &str = "distance check disabled";
pub const REASON_STALE: &str = "previous clock-in was on an earlier day and has been closed";

pub struct AttendanceStateMachine {
    policy: Policy,
}

impl AttendanceStateMachine {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    fn proximity_ok(&self, proximity: &ProximityResult) -> bool {
        proximity.within_radius || !self.policy.enforce_distance
    }

    fn ok_reason(&self, proximity: &ProximityResult) -> &'static str {
        if proximity.within_radius {
            REASON_IN_RANGE
        } else {
            REASON_NOT_ENFORCED
        }
    }

    /// Derive the current status and the one action that may follow.
    pub fn decide(
        &self,
        last: Option<&AttendanceEvent>,
        proximity: &ProximityResult,
        now: DateTime<Local>,
    ) -> Decision {
        match last {
            None
            | Some(AttendanceEvent {
                kind: EventType::ClockOut,
                ..
            }) => {
                if self.proximity_ok(proximity) {
                    Decision::new(
                        AttendanceStatus::ClockedOut,
                        Some(EventType::ClockIn),
                        self.ok_reason(proximity),
                    )
                } else {
                    Decision::new(AttendanceStatus::ClockedOut, None, REASON_TOO_FAR)
                }
            }

            Some(ev) if ev.date() != now.date_naive() => Decision::new(
                AttendanceStatus::ClockedOut,
                Some(EventType::ClockIn),
                REASON_STALE,
            ),

            Some(_) if self.proximity_ok(proximity) => Decision::new(
                AttendanceStatus::ClockedIn,
                Some(EventType::ClockOut),
                self.ok_reason(proximity),
            ),

            Some(_) => Decision::new(
                AttendanceStatus::ClockedInOutOfRange,
                None,
                REASON_RETURN_TO_CLOCK_OUT,
            ),
        }
    }

    /// Re-validate `action` against `decide` and build the resulting event.
    /// The caller persists it and notifies observers.
    pub fn record(
        &self,
        last: Option<&AttendanceEvent>,
        action: EventType,
        actor_id: &str,
        location: Coordinate,
        proximity: &ProximityResult,
        now: DateTime<Local>,
    ) -> AppResult<AttendanceEvent> {
        location.validate()?;

        let decision = self.decide(last, proximity, now);

        if !decision.allows(action) {
            return Err(AppError::IllegalTransition {
                attempted: action.label().to_string(),
                allowed: decision.allowed_label().to_string(),
                reason: decision.reason,
            });
        }

        if let Some(prev) = last
            && now < prev.occurred_at
        {
            return Err(AppError::OutOfOrder {
                attempted: now.to_rfc3339(),
                last: prev.occurred_at.to_rfc3339(),
            });
        }

        Ok(AttendanceEvent {
            actor_id: actor_id.to_string(),
            seq: last.map_or(1, |prev| prev.seq + 1),
            kind: action,
            occurred_at: now,
            location,
            distance_from_site: proximity.distance_meters,
        })
    }
}
