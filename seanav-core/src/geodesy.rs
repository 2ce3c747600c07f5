//! Great-Circle Distance and Azimuth
//!
//! Spherical-earth formulas on a fixed mean radius. Accurate to well under
//! 0.5% against the WGS84 ellipsoid, which is enough for vessel separation.

use crate::error::CalcError;
use crate::units::normalize_degrees;
use crate::validate::validate_coordinates;

/// Mean Earth radius in meters
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Haversine distance in meters between two already validated positions
pub(crate) fn haversine(latitude1: f64, longitude1: f64, latitude2: f64, longitude2: f64) -> f64 {
    let lat1 = latitude1.to_radians();
    let lon1 = longitude1.to_radians();
    let lat2 = latitude2.to_radians();
    let lon2 = longitude2.to_radians();

    let d_lat = (lat2 - lat1) / 2.0;
    let d_lon = (lon2 - lon1) / 2.0;

    let a = d_lat.sin() * d_lat.sin() + d_lon.sin() * d_lon.sin() * lat1.cos() * lat2.cos();

    // Rounding can push `a` just past 1 for antipodal points
    2.0 * EARTH_RADIUS * a.sqrt().atan2((1.0 - a).max(0.0).sqrt())
}

/// Initial bearing in degrees [0, 360) between two already validated positions
pub(crate) fn forward_azimuth(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> f64 {
    let lat1 = latitude1.to_radians();
    let lat2 = latitude2.to_radians();
    let d_lon = (longitude2 - longitude1).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Calculate the great-circle distance between two coordinates
///
/// # Arguments
///
/// * `latitude1`, `longitude1` - First coordinate in degrees (e.g. 37.13461, 126.88848)
/// * `latitude2`, `longitude2` - Second coordinate in degrees (e.g. 37.5011, 127.67278)
///
/// # Returns
///
/// Distance in meters, or `InvalidArgument` if a coordinate is out of range
///
/// # Example
///
/// ```
/// let d = seanav_core::distance(37.13461, 126.88848, 37.5011, 127.67278).unwrap();
/// assert!((d - 80_442.65).abs() < 0.01);
/// ```
pub fn distance(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> Result<f64, CalcError> {
    validate_coordinates(latitude1, longitude1, latitude2, longitude2)?;
    Ok(haversine(latitude1, longitude1, latitude2, longitude2))
}

/// Calculate the initial azimuth (forward bearing) from the first coordinate
/// towards the second
///
/// Returns degrees in [0, 360), 0 = north, clockwise. The azimuth from a
/// point to itself is 0.
pub fn azimuth(
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
) -> Result<f64, CalcError> {
    validate_coordinates(latitude1, longitude1, latitude2, longitude2)?;
    Ok(forward_azimuth(latitude1, longitude1, latitude2, longitude2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Quantity;
    use std::f64::consts::PI;

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance(37.13461, 126.88848, 37.13461, 126.88848).unwrap(), 0.0);
        assert_eq!(distance(-89.0, -179.0, -89.0, -179.0).unwrap(), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = distance(37.13461, 126.88848, 37.5011, 127.67278).unwrap();
        let b = distance(37.5011, 127.67278, 37.13461, 126.88848).unwrap();
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn test_distance_reference_pair() {
        // Pyeongtaek area to Yangpyeong, checked against an independent
        // haversine evaluation on R = 6371 km
        let d = distance(37.13461, 126.88848, 37.5011, 127.67278).unwrap();
        assert!((d - 80_442.65).abs() < 0.01);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance(35.0, 139.0, 36.0, 139.0).unwrap();
        let expected = EARTH_RADIUS * PI / 180.0;
        assert!((d - expected).abs() < 1e-3);
    }

    #[test]
    fn test_antipodal_distance() {
        let d = distance(0.0, 0.0, 0.0, 180.0).unwrap();
        assert!(d.is_finite());
        assert!((d - PI * EARTH_RADIUS).abs() < 1.0);

        let d = distance(90.0, 0.0, -90.0, 0.0).unwrap();
        assert!((d - PI * EARTH_RADIUS).abs() < 1.0);
    }

    #[test]
    fn test_antimeridian_is_short_way() {
        let d = distance(0.0, 179.5, 0.0, -179.5).unwrap();
        let expected = EARTH_RADIUS * PI / 180.0;
        assert!((d - expected).abs() < 1e-3);
    }

    #[test]
    fn test_distance_rejects_latitude() {
        let err = distance(91.0, 0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(err.quantity(), Some(Quantity::Latitude));
        assert!(err.to_string().contains("between -90 and 90"));
    }

    #[test]
    fn test_azimuth_cardinal_directions() {
        assert!((azimuth(35.0, 139.0, 36.0, 139.0).unwrap() - 0.0).abs() < 1e-9);
        assert!((azimuth(35.0, 139.0, 35.0, 140.0).unwrap() - 90.0).abs() < 1.0);
        assert!((azimuth(36.0, 139.0, 35.0, 139.0).unwrap() - 180.0).abs() < 1e-9);
        assert!((azimuth(35.0, 140.0, 35.0, 139.0).unwrap() - 270.0).abs() < 1.0);
    }

    #[test]
    fn test_azimuth_in_range() {
        let points = [
            (0.0, 0.0),
            (37.13461, 126.88848),
            (-45.0, -170.0),
            (60.0, 179.9),
            (-0.0001, -0.0001),
        ];
        for &(lat1, lon1) in &points {
            for &(lat2, lon2) in &points {
                let az = azimuth(lat1, lon1, lat2, lon2).unwrap();
                assert!((0.0..360.0).contains(&az), "azimuth {} out of range", az);
            }
        }
    }

    #[test]
    fn test_azimuth_to_self_is_zero() {
        assert_eq!(azimuth(37.13461, 126.88848, 37.13461, 126.88848).unwrap(), 0.0);
    }

    #[test]
    fn test_azimuth_rejects_longitude() {
        let err = azimuth(0.0, 0.0, 0.0, -181.0).unwrap_err();
        assert_eq!(err.quantity(), Some(Quantity::Longitude));
    }
}
