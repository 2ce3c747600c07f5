//! # Seanav Core
//!
//! Platform-independent navigation geometry for vessel tracking and
//! collision avoidance.
//!
//! This crate contains pure calculations with **zero I/O dependencies**,
//! making it suitable for any platform including WebAssembly (WASM). Every
//! function is a pure function of its arguments and safe to call from any
//! number of threads.
//!
//! ## Operations
//!
//! | Function         | Result                                              |
//! |------------------|-----------------------------------------------------|
//! | [`distance`]     | Great-circle (Haversine) distance in meters          |
//! | [`azimuth`]      | Initial bearing in degrees, [0, 360)                 |
//! | [`cpa_and_tcpa`] | Closest Point of Approach (m) and time to it (s)     |
//!
//! All three reject out-of-range input with [`CalcError::InvalidArgument`]
//! before any computation runs:
//!
//! - latitude in [-90, 90] degrees
//! - longitude in [-180, 180] degrees
//! - speed over ground in [0, 102] knots
//! - course over ground in [0, 360] degrees
//!
//! ## Key Modules
//!
//! - [`geodesy`] - Haversine distance and forward azimuth
//! - [`projection`] - EPSG:4326 ↔ EPSG:3857 (Web Mercator)
//! - [`cpa`] - CPA/TCPA relative-motion solver
//! - [`danger`] - Collision alert grading against thresholds
//! - [`position`] - Validated coordinate and motion types
//!
//! ## Example: CPA/TCPA
//!
//! ```rust
//! use seanav_core::{cpa_and_tcpa, CollisionSettings};
//!
//! // Two vessels six nautical miles apart, heading for each other at 10 knots
//! let result = cpa_and_tcpa(0.0, 0.0, 10.0, 0.0, 0.1, 0.0, 10.0, 180.0).unwrap();
//! assert!(result.cpa < 1.0);
//! assert!((result.tcpa - 1080.7).abs() < 0.1);
//!
//! let settings = CollisionSettings::default();
//! assert!(!result.is_dangerous(&settings)); // more than 10 minutes away
//! ```
//!
//! ## Example: Same Course and Speed
//!
//! With zero relative velocity there is no single moment of closest
//! approach. TCPA is NaN and CPA is the constant separation.
//!
//! ```rust
//! let result = seanav_core::cpa_and_tcpa(0.0, 0.0, 8.0, 90.0, 0.1, 0.0, 8.0, 90.0).unwrap();
//! assert!(result.tcpa_opt().is_none());
//! assert!(result.cpa > 11_000.0);
//! ```

pub mod cpa;
pub mod danger;
pub mod error;
pub mod geodesy;
pub mod position;
pub mod projection;
pub mod units;
pub mod validate;

// Re-export commonly used types
pub use cpa::{cpa_and_tcpa, CpaResult};
pub use danger::{AlertState, CollisionSettings};
pub use error::{CalcError, Quantity};
pub use geodesy::{azimuth, distance, EARTH_RADIUS};
pub use position::{GeoCoordinate, MotionState};
pub use projection::PlanarVector3;
pub use validate::{validate_coordinates, validate_sog_and_cog};
