use staffclock::core::attendance::{
    AttendanceStateMachine, REASON_RETURN_TO_CLOCK_OUT, REASON_STALE, REASON_TOO_FAR,
};
use staffclock::errors::AppError;
use staffclock::models::coordinate::Coordinate;
use staffclock::models::decision::AttendanceStatus;
use staffclock::models::event::AttendanceEvent;
use staffclock::models::event_type::EventType;
use staffclock::models::policy::Policy;

mod common;
use common::{inside, local, near_site, outside};

fn enforcing() -> AttendanceStateMachine {
    AttendanceStateMachine::new(Policy {
        enforce_distance: true,
    })
}

fn lenient() -> AttendanceStateMachine {
    AttendanceStateMachine::new(Policy {
        enforce_distance: false,
    })
}

fn event(kind: EventType, seq: u64, at: chrono::DateTime<chrono::Local>) -> AttendanceEvent {
    AttendanceEvent {
        actor_id: "anna".into(),
        seq,
        kind,
        occurred_at: at,
        location: near_site(),
        distance_from_site: 125.0,
    }
}

#[test]
fn test_no_history_inside_radius_allows_clock_in() {
    let d = enforcing().decide(None, &inside(), local(2025, 10, 14, 9, 0));
    assert_eq!(d.status, AttendanceStatus::ClockedOut);
    assert_eq!(d.allowed_action, Some(EventType::ClockIn));
}

#[test]
fn test_no_history_outside_radius_is_blocked_when_enforced() {
    let d = enforcing().decide(None, &outside(), local(2025, 10, 14, 9, 0));
    assert_eq!(d.status, AttendanceStatus::ClockedOut);
    assert_eq!(d.allowed_action, None);
    assert_eq!(d.reason, REASON_TOO_FAR);

    let d = lenient().decide(None, &outside(), local(2025, 10, 14, 9, 0));
    assert_eq!(d.allowed_action, Some(EventType::ClockIn));
}

#[test]
fn test_after_clock_out_next_action_is_clock_in() {
    let last = event(EventType::ClockOut, 2, local(2025, 10, 14, 13, 0));
    let d = enforcing().decide(Some(&last), &inside(), local(2025, 10, 14, 14, 0));
    assert_eq!(d.status, AttendanceStatus::ClockedOut);
    assert_eq!(d.allowed_action, Some(EventType::ClockIn));

    let d = enforcing().decide(Some(&last), &outside(), local(2025, 10, 14, 14, 0));
    assert_eq!(d.allowed_action, None);
    assert_eq!(d.reason, REASON_TOO_FAR);
}

#[test]
fn test_same_day_clock_in_inside_radius_allows_clock_out() {
    let last = event(EventType::ClockIn, 1, local(2025, 10, 14, 9, 0));
    let d = enforcing().decide(Some(&last), &inside(), local(2025, 10, 14, 17, 0));
    assert_eq!(d.status, AttendanceStatus::ClockedIn);
    assert_eq!(d.allowed_action, Some(EventType::ClockOut));
}

#[test]
fn test_same_day_clock_in_outside_radius_is_out_of_range() {
    let last = event(EventType::ClockIn, 1, local(2025, 10, 14, 9, 0));
    let d = enforcing().decide(Some(&last), &outside(), local(2025, 10, 14, 12, 30));
    assert_eq!(d.status, AttendanceStatus::ClockedInOutOfRange);
    assert_eq!(d.allowed_action, None);
    assert_eq!(d.reason, REASON_RETURN_TO_CLOCK_OUT);

    // same situation without enforcement is a normal clocked-in state
    let d = lenient().decide(Some(&last), &outside(), local(2025, 10, 14, 12, 30));
    assert_eq!(d.status, AttendanceStatus::ClockedIn);
    assert_eq!(d.allowed_action, Some(EventType::ClockOut));
}

#[test]
fn test_clock_in_from_previous_day_is_stale_regardless_of_proximity() {
    let last = event(EventType::ClockIn, 5, local(2025, 10, 13, 9, 0));

    for prox in [inside(), outside()] {
        let d = enforcing().decide(Some(&last), &prox, local(2025, 10, 14, 8, 55));
        assert_eq!(d.status, AttendanceStatus::ClockedOut);
        assert_eq!(d.allowed_action, Some(EventType::ClockIn));
        assert_eq!(d.reason, REASON_STALE);
    }
}

#[test]
fn test_record_rejects_any_action_other_than_the_allowed_one() {
    let sm = enforcing();
    let now = local(2025, 10, 14, 9, 0);

    // nothing yet: clock-out is illegal
    let err = sm
        .record(None, EventType::ClockOut, "anna", near_site(), &inside(), now)
        .unwrap_err();
    assert!(matches!(err, AppError::IllegalTransition { .. }));

    // out of range: nothing is allowed
    let err = sm
        .record(None, EventType::ClockIn, "anna", near_site(), &outside(), now)
        .unwrap_err();
    assert!(matches!(err, AppError::IllegalTransition { .. }));
    assert!(err.to_string().contains("please refresh"));

    // already clocked in: a second clock-in is illegal
    let last = event(EventType::ClockIn, 1, local(2025, 10, 14, 8, 0));
    let err = sm
        .record(Some(&last), EventType::ClockIn, "anna", near_site(), &inside(), now)
        .unwrap_err();
    assert!(matches!(err, AppError::IllegalTransition { .. }));
}

#[test]
fn test_record_builds_event_with_next_sequence() {
    let sm = enforcing();
    let now = local(2025, 10, 14, 9, 0);
    let prox = inside();

    let first = sm
        .record(None, EventType::ClockIn, "anna", near_site(), &prox, now)
        .unwrap();
    assert_eq!(first.seq, 1);
    assert_eq!(first.kind, EventType::ClockIn);
    assert_eq!(first.occurred_at, now);
    assert_eq!(first.actor_id, "anna");
    assert_eq!(first.distance_from_site, prox.distance_meters);
    assert_eq!(first.location, near_site());

    let later = local(2025, 10, 14, 17, 0);
    let second = sm
        .record(Some(&first), EventType::ClockOut, "anna", near_site(), &prox, later)
        .unwrap();
    assert_eq!(second.seq, 2);
    assert_eq!(second.kind, EventType::ClockOut);
}

#[test]
fn test_record_rejects_out_of_range_location() {
    let bad = Coordinate {
        latitude: 200.0,
        longitude: 55.0,
    };
    let err = lenient()
        .record(None, EventType::ClockIn, "anna", bad, &inside(), local(2025, 10, 14, 9, 0))
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidCoordinate { .. }));
}

#[test]
fn test_record_refuses_timestamps_before_last_event() {
    let last = event(EventType::ClockIn, 1, local(2025, 10, 14, 10, 0));
    let err = enforcing()
        .record(
            Some(&last),
            EventType::ClockOut,
            "anna",
            near_site(),
            &inside(),
            local(2025, 10, 14, 9, 30),
        )
        .unwrap_err();
    assert!(matches!(err, AppError::OutOfOrder { .. }));
}
