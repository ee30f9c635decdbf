use serde::Serialize;

/// Distance to the site and whether it falls inside the allowed radius.
/// Recomputed on every evaluation, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProximityResult {
    pub distance_meters: f64,
    pub within_radius: bool,
}
