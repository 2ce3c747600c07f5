//! Validated Position and Motion Types
//!
//! Value types for callers that prefer to validate once and then run
//! infallible calculations.

use serde::{Deserialize, Serialize};

use crate::cpa::{solve, CpaResult};
use crate::error::{CalcError, Quantity};
use crate::geodesy::{forward_azimuth, haversine};
use crate::units::KN_TO_MS;
use crate::validate::check;

/// Geographic position (EPSG:4326) in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = CalcError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        GeoCoordinate::new(raw.latitude, raw.longitude)
    }
}

impl GeoCoordinate {
    /// Create a coordinate, rejecting latitude outside [-90, 90] and
    /// longitude outside [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CalcError> {
        Ok(GeoCoordinate {
            latitude: check(Quantity::Latitude, latitude)?,
            longitude: check(Quantity::Longitude, longitude)?,
        })
    }

    /// Build from values already passed through `validate_coordinates`
    pub(crate) fn from_validated(latitude: f64, longitude: f64) -> Self {
        GeoCoordinate {
            latitude,
            longitude,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in meters
    pub fn distance_to(&self, other: &GeoCoordinate) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }

    /// Initial bearing towards `other` in degrees [0, 360)
    pub fn azimuth_to(&self, other: &GeoCoordinate) -> f64 {
        forward_azimuth(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Vessel position with speed and course over ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMotionState")]
pub struct MotionState {
    coordinate: GeoCoordinate,
    speed_over_ground: f64,
    course_over_ground: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMotionState {
    coordinate: GeoCoordinate,
    speed_over_ground: f64,
    course_over_ground: f64,
}

impl TryFrom<RawMotionState> for MotionState {
    type Error = CalcError;

    fn try_from(raw: RawMotionState) -> Result<Self, Self::Error> {
        MotionState::new(raw.coordinate, raw.speed_over_ground, raw.course_over_ground)
    }
}

impl MotionState {
    /// Create a motion state
    ///
    /// # Arguments
    ///
    /// * `coordinate` - Current position
    /// * `sog` - Speed over ground in knots, 0 to 102
    /// * `cog` - Course over ground in degrees, 0 to 360 (north = 0, clockwise)
    pub fn new(coordinate: GeoCoordinate, sog: f64, cog: f64) -> Result<Self, CalcError> {
        Ok(MotionState {
            coordinate,
            speed_over_ground: check(Quantity::SpeedOverGround, sog)?,
            course_over_ground: check(Quantity::CourseOverGround, cog)?,
        })
    }

    /// Build from values already passed through `validate_sog_and_cog`
    pub(crate) fn from_validated(coordinate: GeoCoordinate, sog: f64, cog: f64) -> Self {
        MotionState {
            coordinate,
            speed_over_ground: sog,
            course_over_ground: cog,
        }
    }

    pub fn coordinate(&self) -> &GeoCoordinate {
        &self.coordinate
    }

    /// Speed over ground in knots
    pub fn sog(&self) -> f64 {
        self.speed_over_ground
    }

    /// Course over ground in degrees
    pub fn cog(&self) -> f64 {
        self.course_over_ground
    }

    /// Speed over ground in m/s
    pub fn velocity_ms(&self) -> f64 {
        self.speed_over_ground * KN_TO_MS
    }

    /// CPA/TCPA with `other`, using this vessel as the time reference
    pub fn cpa_with(&self, other: &MotionState) -> CpaResult {
        solve(self, other)
    }
}
