//! Great-circle distance and geofence containment.

use crate::errors::AppResult;
use crate::models::coordinate::Coordinate;
use crate::models::proximity::ProximityResult;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance in meters between two already-validated coordinates.
pub fn haversine_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let d_phi = (to.latitude - from.latitude).to_radians();
    let d_lambda = (to.longitude - from.longitude).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    // rounding can push `a` just past 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Distance from `from` to `to` and whether it is within `radius_meters`.
pub fn evaluate(from: &Coordinate, to: &Coordinate, radius_meters: f64) -> AppResult<ProximityResult> {
    from.validate()?;
    to.validate()?;

    let distance_meters = haversine_meters(from, to);

    Ok(ProximityResult {
        distance_meters,
        within_radius: distance_meters <= radius_meters,
    })
}
