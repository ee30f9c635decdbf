use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyHoursSummary {
    pub week_start: DateTime<Local>,
    pub week_end: DateTime<Local>,
    /// Rounded to the nearest 0.1 hour.
    pub hours: f64,
    /// Closed in/out pairs counted in `hours`.
    pub sessions: usize,
    /// Clock-ins discarded because another clock-in followed without a clock-out.
    pub orphaned_clock_ins: usize,
    /// A clock-in is still open at the end of the window (contributes 0 hours).
    pub open_session: bool,
}
