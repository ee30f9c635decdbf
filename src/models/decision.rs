use super::event_type::EventType;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttendanceStatus {
    ClockedIn,
    ClockedOut,
    ClockedInOutOfRange,
    Unknown,
}

impl AttendanceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::ClockedIn => "Clocked in",
            AttendanceStatus::ClockedOut => "Clocked out",
            AttendanceStatus::ClockedInOutOfRange => "Clocked in (out of range)",
            AttendanceStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of `decide`: the visible status, the single legal next action
/// (if any) and a reason suitable for showing to staff as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub status: AttendanceStatus,
    pub allowed_action: Option<EventType>,
    pub reason: String,
}

impl Decision {
    pub fn new(status: AttendanceStatus, allowed_action: Option<EventType>, reason: &str) -> Self {
        Self {
            status,
            allowed_action,
            reason: reason.to_string(),
        }
    }

    /// Status when no coordinate could be obtained: nothing is allowed.
    pub fn unknown(reason: &str) -> Self {
        Self::new(AttendanceStatus::Unknown, None, reason)
    }

    pub fn allows(&self, action: EventType) -> bool {
        self.allowed_action == Some(action)
    }

    pub fn allowed_label(&self) -> &'static str {
        match self.allowed_action {
            Some(action) => action.label(),
            None => "none",
        }
    }
}
