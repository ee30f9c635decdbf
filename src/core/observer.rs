use crate::models::decision::Decision;
use crate::models::event::AttendanceEvent;

/// Receives a notification after every accepted clock action.
pub trait StatusObserver {
    fn on_status_change(&self, event: &AttendanceEvent, decision: &Decision);
}

/// Observers registered on one `ClockService`, called in registration order.
#[derive(Default)]
pub struct ObserverSet {
    observers: Vec<Box<dyn StatusObserver>>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn StatusObserver>) {
        self.observers.push(observer);
    }

    pub fn notify(&self, event: &AttendanceEvent, decision: &Decision) {
        for o in &self.observers {
            o.on_status_change(event, decision);
        }
    }
}
