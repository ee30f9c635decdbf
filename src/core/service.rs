use crate::core::attendance::AttendanceStateMachine;
use crate::core::geo;
use crate::core::location::LocationProvider;
use crate::core::observer::{ObserverSet, StatusObserver};
use crate::core::store::EventStore;
use crate::core::weekly;
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;
use crate::models::decision::Decision;
use crate::models::event::AttendanceEvent;
use crate::models::event_type::EventType;
use crate::models::policy::Policy;
use crate::models::proximity::ProximityResult;
use crate::models::site::BusinessSite;
use crate::models::week_summary::WeeklyHoursSummary;
use chrono::{DateTime, Local, NaiveDate};

/// Ties the pure attendance logic to a store, a location source and
/// whoever wants to hear about status changes.
pub struct ClockService<S: EventStore, L: LocationProvider> {
    store: S,
    location: L,
    site: BusinessSite,
    machine: AttendanceStateMachine,
    observers: ObserverSet,
}

impl<S: EventStore, L: LocationProvider> ClockService<S, L> {
    pub fn new(store: S, location: L, site: BusinessSite, policy: Policy) -> Self {
        Self {
            store,
            location,
            site,
            machine: AttendanceStateMachine::new(policy),
            observers: ObserverSet::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn StatusObserver>) {
        self.observers.subscribe(observer);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn site(&self) -> &BusinessSite {
        &self.site
    }

    fn proximity_of(&self, coord: &Coordinate) -> AppResult<ProximityResult> {
        geo::evaluate(coord, &self.site.location, self.site.allowed_radius_meters)
    }

    /// Current status. A missing position yields `Unknown`, never `ClockedOut`.
    pub fn status(&self, staff_id: &str, now: DateTime<Local>) -> AppResult<Decision> {
        let last = self.store.last_event(staff_id)?;

        let coord = match self.location.current_coordinate() {
            Ok(c) => c,
            Err(AppError::LocationUnavailable(msg)) => {
                return Ok(Decision::unknown(&format!("cannot determine status: {msg}")));
            }
            Err(e) => return Err(e),
        };

        let proximity = self.proximity_of(&coord)?;
        Ok(self.machine.decide(last.as_ref(), &proximity, now))
    }

    /// Record `action` for `staff_id`, persist it and notify observers.
    /// Returns the new event and the status that follows from it.
    pub fn clock(
        &mut self,
        staff_id: &str,
        action: EventType,
        now: DateTime<Local>,
    ) -> AppResult<(AttendanceEvent, Decision)> {
        let last = self.store.last_event(staff_id)?;
        let coord = self.location.current_coordinate()?;
        let proximity = self.proximity_of(&coord)?;

        let event = self
            .machine
            .record(last.as_ref(), action, staff_id, coord, &proximity, now)?;

        self.store.append(&event)?;

        let decision = self.machine.decide(Some(&event), &proximity, now);
        self.observers.notify(&event, &decision);

        Ok((event, decision))
    }

    /// Hours for the Sunday–Saturday week containing `date`.
    pub fn weekly(&self, staff_id: &str, date: NaiveDate) -> AppResult<WeeklyHoursSummary> {
        let (start, end) = weekly::week_bounds(date)?;
        let events = self.store.events_between(staff_id, start, end)?;
        Ok(weekly::summarize(&events, start, end))
    }
}
