use crate::models::decision::AttendanceStatus;
use ansi_term::Colour;

/// "125 m" below a kilometre, "3.42 km" above.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{:.0} m", meters)
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

pub fn colored_status(status: AttendanceStatus) -> String {
    let colour = match status {
        AttendanceStatus::ClockedIn => Colour::Green,
        AttendanceStatus::ClockedOut => Colour::White,
        AttendanceStatus::ClockedInOutOfRange => Colour::Yellow,
        AttendanceStatus::Unknown => Colour::Red,
    };
    colour.bold().paint(status.label()).to_string()
}
