use super::coordinate::Coordinate;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessSite {
    pub name: String,
    pub location: Coordinate,
    pub allowed_radius_meters: f64,
}

impl BusinessSite {
    pub fn new(name: &str, location: Coordinate, allowed_radius_meters: f64) -> AppResult<Self> {
        location.validate()?;

        if !allowed_radius_meters.is_finite() || allowed_radius_meters <= 0.0 {
            return Err(AppError::Config(format!(
                "site radius must be a positive number of meters, got {}",
                allowed_radius_meters
            )));
        }

        Ok(Self {
            name: name.to_string(),
            location,
            allowed_radius_meters,
        })
    }
}
