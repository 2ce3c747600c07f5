//! Unit conversion constants

/// Conversion constants
pub const NAUTICAL_MILE: f64 = 1852.0;
pub const KN_TO_MS: f64 = NAUTICAL_MILE / 3600.0;
pub const MS_TO_KN: f64 = 3600.0 / NAUTICAL_MILE;

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let mut deg = (deg + 360.0) % 360.0;
    if deg < 0.0 {
        deg += 360.0;
    }
    deg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knots_roundtrip() {
        assert!((10.0 * KN_TO_MS - 5.144).abs() < 1e-3);
        assert!((KN_TO_MS * MS_TO_KN - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-450.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }
}
