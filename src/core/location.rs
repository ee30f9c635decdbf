use crate::errors::{AppError, AppResult};
use crate::models::coordinate::Coordinate;

/// Source of the device's current position.
pub trait LocationProvider {
    fn current_coordinate(&self) -> AppResult<Coordinate>;
}

/// A position known up front (command-line arguments, tests).
/// Without a coordinate it behaves like a device with no GPS fix.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coord: Option<Coordinate>,
    missing: &'static str,
}

impl FixedLocation {
    pub fn at(coord: Coordinate) -> Self {
        Self {
            coord: Some(coord),
            missing: "",
        }
    }

    pub fn unavailable() -> Self {
        Self {
            coord: None,
            missing: "no position fix",
        }
    }

    /// A lone latitude or longitude counts as no fix; an out-of-range pair is an error.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> AppResult<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Ok(Self::at(Coordinate::new(lat, lng)?)),
            (None, None) => Ok(Self::unavailable()),
            _ => Ok(Self {
                coord: None,
                missing: "both --lat and --lng are required",
            }),
        }
    }
}

impl LocationProvider for FixedLocation {
    fn current_coordinate(&self) -> AppResult<Coordinate> {
        self.coord
            .ok_or_else(|| AppError::LocationUnavailable(self.missing.into()))
    }
}
