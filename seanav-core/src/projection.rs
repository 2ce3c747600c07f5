//! Spherical Web Mercator Projection
//!
//! Converts between geographic coordinates (EPSG:4326, degrees) and Web
//! Mercator (EPSG:3857, meters). CPA/TCPA is solved as a linear
//! relative-motion problem in this plane.
//!
//! The projection is singular at the poles: latitude ±90 maps to ±infinity.
//! Valid AIS traffic never gets close enough for this to matter.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::position::GeoCoordinate;

/// Position or velocity in the projected plane. `z` is always 0.
pub type PlanarVector3 = Vector3<f64>;

/// Half the equatorial circumference of the Web Mercator sphere, in meters
pub const WEB_MERCATOR_EXTENT: f64 = 20037508.34;

/// Project a longitude in degrees to Web Mercator x (meters)
#[inline]
pub fn longitude_to_x(longitude: f64) -> f64 {
    longitude * (WEB_MERCATOR_EXTENT / 180.0)
}

/// Project a latitude in degrees to Web Mercator y (meters)
#[inline]
pub fn latitude_to_y(latitude: f64) -> f64 {
    ((90.0 + latitude) * PI / 360.0).tan().ln() / (PI / 180.0) * (WEB_MERCATOR_EXTENT / 180.0)
}

/// Unproject a Web Mercator x (meters) to longitude in degrees
#[inline]
pub fn x_to_longitude(x: f64) -> f64 {
    (x / WEB_MERCATOR_EXTENT) * 180.0
}

/// Unproject a Web Mercator y (meters) to latitude in degrees
#[inline]
pub fn y_to_latitude(y: f64) -> f64 {
    180.0 / PI * (2.0 * ((y / WEB_MERCATOR_EXTENT) * PI).exp().atan() - PI / 2.0)
}

/// Project a coordinate into the plane
pub fn to_web_mercator(coordinate: &GeoCoordinate) -> PlanarVector3 {
    PlanarVector3::new(
        longitude_to_x(coordinate.longitude()),
        latitude_to_y(coordinate.latitude()),
        0.0,
    )
}

/// Unproject a planar point, returning `(latitude, longitude)` in degrees
///
/// The result is not range checked: a point pushed past the projection
/// edge yields a longitude beyond ±180.
pub fn from_web_mercator(point: &PlanarVector3) -> (f64, f64) {
    (y_to_latitude(point.y), x_to_longitude(point.x))
}
