//! Error types for navigation calculations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Physical quantities accepted by the calculations, each with a fixed valid range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Quantity {
    /// Latitude in degrees, -90 to 90
    Latitude,
    /// Longitude in degrees, -180 to 180
    Longitude,
    /// Speed over ground in knots, 0 to 102
    SpeedOverGround,
    /// Course over ground in degrees, 0 to 360 (north = 0, clockwise)
    CourseOverGround,
}

impl Quantity {
    /// Inclusive range of accepted values
    pub fn range(&self) -> RangeInclusive<f64> {
        match self {
            Quantity::Latitude => -90.0..=90.0,
            Quantity::Longitude => -180.0..=180.0,
            Quantity::SpeedOverGround => 0.0..=102.0,
            Quantity::CourseOverGround => 0.0..=360.0,
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::SpeedOverGround => "knots",
            _ => "degrees",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Latitude => "Latitude",
            Quantity::Longitude => "Longitude",
            Quantity::SpeedOverGround => "Sog",
            Quantity::CourseOverGround => "Cog",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when running a calculation or loading settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// An input lies outside the valid range of its quantity
    #[error("[{value}] {quantity} must be between {min} and {max} {unit}")]
    InvalidArgument {
        quantity: Quantity,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    /// Collision settings could not be parsed or hold unusable thresholds
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl CalcError {
    pub(crate) fn out_of_range(quantity: Quantity, value: f64) -> Self {
        let range = quantity.range();
        CalcError::InvalidArgument {
            quantity,
            value,
            min: *range.start(),
            max: *range.end(),
            unit: quantity.unit(),
        }
    }

    /// The rejected quantity, if this is a range violation
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            CalcError::InvalidArgument { quantity, .. } => Some(*quantity),
            CalcError::InvalidSettings(_) => None,
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::InvalidSettings(e.to_string())
    }
}
