//! Input Range Validation
//!
//! Every public calculation checks its inputs here before any trigonometry
//! runs, so a rejected call never produces a partial result.

use crate::error::{CalcError, Quantity};

/// Check a single value against the valid range of its quantity.
///
/// Non-finite values are always rejected.
pub fn check(quantity: Quantity, value: f64) -> Result<f64, CalcError> {
    if quantity.range().contains(&value) {
        Ok(value)
    } else {
        log::debug!("Rejected {} value {}", quantity, value);
        Err(CalcError::out_of_range(quantity, value))
    }
}

/// Validate two coordinate pairs.
///
/// Latitudes are checked before longitudes, first pair before second.
pub fn validate_coordinates(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> Result<(), CalcError> {
    check(Quantity::Latitude, latitude1)?;
    check(Quantity::Latitude, latitude2)?;
    check(Quantity::Longitude, longitude1)?;
    check(Quantity::Longitude, longitude2)?;
    Ok(())
}

/// Validate speed and course over ground of two vessels.
///
/// Speeds are checked before courses, first vessel before second.
pub fn validate_sog_and_cog(sog1: f64, cog1: f64, sog2: f64, cog2: f64) -> Result<(), CalcError> {
    check(Quantity::SpeedOverGround, sog1)?;
    check(Quantity::SpeedOverGround, sog2)?;
    check(Quantity::CourseOverGround, cog1)?;
    check(Quantity::CourseOverGround, cog2)?;
    Ok(())
}
