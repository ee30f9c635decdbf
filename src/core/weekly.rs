//! Weekly hours: pairs clock-ins with clock-outs inside a Sunday–Saturday window.

use crate::core::store::in_window;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;
use crate::models::event_type::EventType;
use crate::models::week_summary::WeeklyHoursSummary;
use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveTime, TimeZone};

/// Sunday 00:00:00 to Saturday 23:59:59 (local time) of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> AppResult<(DateTime<Local>, DateTime<Local>)> {
    let back = date.weekday().num_days_from_sunday() as u64;
    let sunday = date
        .checked_sub_days(Days::new(back))
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
    let saturday = sunday
        .checked_add_days(Days::new(6))
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

    let start = local_datetime(sunday, NaiveTime::MIN)?;
    let end_time = NaiveTime::from_hms_opt(23, 59, 59)
        .ok_or_else(|| AppError::InvalidTime("23:59:59".into()))?;
    let end = local_datetime(saturday, end_time)?;

    Ok((start, end))
}

fn local_datetime(date: NaiveDate, time: NaiveTime) -> AppResult<DateTime<Local>> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(format!("{} {} does not exist locally", date, time)))
}

fn round_tenth(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Walk `events` in chronological order and total the closed sessions.
pub fn summarize(
    events: &[AttendanceEvent],
    week_start: DateTime<Local>,
    week_end: DateTime<Local>,
) -> WeeklyHoursSummary {
    let mut in_window: Vec<&AttendanceEvent> = events
        .iter()
        .filter(|e| in_window(e.occurred_at, week_start, week_end))
        .collect();
    in_window.sort_by_key(|e| (e.occurred_at, e.seq));

    let mut open: Option<DateTime<Local>> = None;
    let mut total_seconds: i64 = 0;
    let mut sessions = 0;
    let mut orphaned = 0;

    for ev in in_window {
        match ev.kind {
            EventType::ClockIn => {
                if open.is_some() {
                    orphaned += 1;
                }
                open = Some(ev.occurred_at);
            }
            EventType::ClockOut => {
                if let Some(start) = open.take() {
                    total_seconds += (ev.occurred_at - start).num_seconds();
                    sessions += 1;
                }
            }
        }
    }

    WeeklyHoursSummary {
        week_start,
        week_end,
        hours: round_tenth(total_seconds.max(0) as f64 / 3600.0),
        sessions,
        orphaned_clock_ins: orphaned,
        open_session: open.is_some(),
    }
}

/// Total hours worked in `[week_start, week_end]`, rounded to 0.1.
pub fn aggregate(
    events: &[AttendanceEvent],
    week_start: DateTime<Local>,
    week_end: DateTime<Local>,
) -> f64 {
    summarize(events, week_start, week_end).hours
}
