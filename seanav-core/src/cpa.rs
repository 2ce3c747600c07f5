//! CPA/TCPA Calculation
//!
//! Computes Closest Point of Approach (CPA) and Time to CPA (TCPA)
//! between two vessels for collision avoidance.
//!
//! Uses relative velocity method in the Web Mercator plane:
//! 1. Project both positions and build velocity vectors (knots, by course)
//! 2. Find the planar time when separation is minimized
//! 3. Unproject both closest-approach positions
//! 4. Measure CPA, and the distance vessel 1 travels, on the sphere
//!
//! The planar time is only used to locate the closest-approach positions.
//! The reported TCPA is the great-circle distance vessel 1 travels to reach
//! its position, divided by its own speed.

use serde::{Deserialize, Serialize};

use crate::danger::{AlertState, CollisionSettings};
use crate::error::CalcError;
use crate::geodesy::haversine;
use crate::position::{GeoCoordinate, MotionState};
use crate::projection::{from_web_mercator, to_web_mercator, PlanarVector3};
use crate::validate::{validate_coordinates, validate_sog_and_cog};

/// Result of CPA/TCPA calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpaResult {
    /// Closest Point of Approach in meters
    pub cpa: f64,
    /// Time to Closest Point of Approach in seconds, never negative.
    /// NaN when both vessels have the same velocity (`null` in JSON).
    #[serde(with = "nan_as_null")]
    pub tcpa: f64,
}

/// JSON has no NaN, so an undefined TCPA travels as `null`
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

impl CpaResult {
    /// False when relative velocity is zero and no single closest moment exists
    pub fn tcpa_defined(&self) -> bool {
        !self.tcpa.is_nan()
    }

    pub fn tcpa_opt(&self) -> Option<f64> {
        self.tcpa_defined().then_some(self.tcpa)
    }

    pub fn tcpa_minutes(&self) -> f64 {
        self.tcpa / 60.0
    }

    /// Check if the encounter is dangerous based on CPA/TCPA thresholds
    pub fn is_dangerous(&self, settings: &CollisionSettings) -> bool {
        self.cpa < settings.cpa_threshold && self.tcpa > 0.0 && self.tcpa < settings.tcpa_threshold
    }

    /// Get alert state based on CPA/TCPA
    pub fn alert_state(&self, settings: &CollisionSettings) -> AlertState {
        AlertState::classify(self.cpa, self.tcpa, settings)
    }
}

/// Calculate CPA and TCPA between two vessels
///
/// # Arguments
///
/// * `latitude1`, `longitude1` - First vessel position in degrees (e.g. 37.13461, 126.88848)
/// * `sog1` - First vessel speed over ground in knots (e.g. 5.7)
/// * `cog1` - First vessel course over ground in degrees (e.g. 153.1)
/// * `latitude2`, `longitude2` - Second vessel position in degrees
/// * `sog2`, `cog2` - Second vessel speed (knots) and course (degrees)
///
/// # Returns
///
/// CpaResult with CPA in meters and TCPA in seconds. If the vessels are
/// already past their closest approach, TCPA is 0 and CPA is the current
/// separation.
///
/// The solve happens in the Web Mercator plane, which does not wrap at the
/// antimeridian. Two vessels closing across ±180° longitude appear to be
/// moving apart there, so the result is TCPA 0 with CPA equal to the current
/// separation.
///
/// The projection is singular at the poles. A vessel at latitude ±90 can
/// produce a NaN CPA and TCPA.
#[allow(clippy::too_many_arguments)]
pub fn cpa_and_tcpa(
    latitude1: f64,
    longitude1: f64,
    sog1: f64,
    cog1: f64,
    latitude2: f64,
    longitude2: f64,
    sog2: f64,
    cog2: f64,
) -> Result<CpaResult, CalcError> {
    validate_coordinates(latitude1, longitude1, latitude2, longitude2)?;
    validate_sog_and_cog(sog1, cog1, sog2, cog2)?;

    let own = MotionState::from_validated(
        GeoCoordinate::from_validated(latitude1, longitude1),
        sog1,
        cog1,
    );
    let other = MotionState::from_validated(
        GeoCoordinate::from_validated(latitude2, longitude2),
        sog2,
        cog2,
    );

    Ok(solve(&own, &other))
}

/// Velocity in the projected plane, in knots
fn planar_velocity(vessel: &MotionState) -> PlanarVector3 {
    let course_rad = vessel.cog().to_radians();
    PlanarVector3::new(
        vessel.sog() * course_rad.sin(),
        vessel.sog() * course_rad.cos(),
        0.0,
    )
}

/// Time of minimum separation: TCPA = -(Δp · Δv) / |Δv|²
///
/// NaN when the relative velocity is zero.
fn closest_approach_time(
    position1: &PlanarVector3,
    velocity1: &PlanarVector3,
    position2: &PlanarVector3,
    velocity2: &PlanarVector3,
) -> f64 {
    let position_diff = position2 - position1;
    let velocity_diff = velocity2 - velocity1;

    let v_sq = velocity_diff.dot(&velocity_diff);
    if v_sq == 0.0 {
        return f64::NAN;
    }

    -position_diff.dot(&velocity_diff) / v_sq
}

pub(crate) fn solve(own: &MotionState, other: &MotionState) -> CpaResult {
    let position1 = to_web_mercator(own.coordinate());
    let position2 = to_web_mercator(other.coordinate());
    let velocity1 = planar_velocity(own);
    let velocity2 = planar_velocity(other);

    let tcpa = closest_approach_time(&position1, &velocity1, &position2, &velocity2);

    if tcpa.is_nan() {
        // Same course and speed, separation never changes
        log::debug!("Zero relative velocity, TCPA undefined");
        return CpaResult {
            cpa: own.coordinate().distance_to(other.coordinate()),
            tcpa: f64::NAN,
        };
    }

    log::trace!("Planar TCPA {:.3}", tcpa);
    if tcpa <= 0.0 {
        // Closest approach is now or already passed
        return CpaResult {
            cpa: own.coordinate().distance_to(other.coordinate()),
            tcpa: 0.0,
        };
    }

    let (cpa_lat1, cpa_lon1) = from_web_mercator(&(position1 + velocity1 * tcpa));
    let (cpa_lat2, cpa_lon2) = from_web_mercator(&(position2 + velocity2 * tcpa));

    let cpa = haversine(cpa_lat1, cpa_lon1, cpa_lat2, cpa_lon2);

    // Vessel 1 is the time reference unless it is stationary
    let tcpa = if own.sog() > 0.0 {
        let travelled = haversine(
            own.coordinate().latitude(),
            own.coordinate().longitude(),
            cpa_lat1,
            cpa_lon1,
        );
        travelled / own.velocity_ms()
    } else {
        let travelled = haversine(
            other.coordinate().latitude(),
            other.coordinate().longitude(),
            cpa_lat2,
            cpa_lon2,
        );
        travelled / other.velocity_ms()
    };

    CpaResult { cpa, tcpa }
}
