//! Collision Risk Classification
//!
//! Grades a CPA/TCPA result against configurable thresholds.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Alert states, in increasing severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    Normal,
    Alert,
    Warn,
    Alarm,
    Emergency,
}

impl Default for AlertState {
    fn default() -> Self {
        AlertState::Normal
    }
}

impl AlertState {
    /// Notification state string
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertState::Normal => "normal",
            AlertState::Alert => "alert",
            AlertState::Warn => "warn",
            AlertState::Alarm => "alarm",
            AlertState::Emergency => "emergency",
        }
    }

    pub(crate) fn classify(cpa: f64, tcpa: f64, settings: &CollisionSettings) -> AlertState {
        // TCPA must be positive (approaching) and within threshold; NaN fails both
        if !(tcpa > 0.0 && tcpa <= settings.tcpa_threshold) {
            return AlertState::Normal;
        }

        // Determine alert level based on CPA
        if cpa < settings.cpa_threshold * 0.25 {
            AlertState::Emergency
        } else if cpa < settings.cpa_threshold * 0.5 {
            AlertState::Alarm
        } else if cpa < settings.cpa_threshold * 0.75 {
            AlertState::Warn
        } else if cpa < settings.cpa_threshold {
            AlertState::Alert
        } else {
            AlertState::Normal
        }
    }
}

/// Collision warning settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollisionSettings {
    /// CPA threshold in meters for collision warnings
    pub cpa_threshold: f64,
    /// TCPA threshold in seconds for collision warnings
    pub tcpa_threshold: f64,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        CollisionSettings {
            cpa_threshold: 500.0,  // 500 meters
            tcpa_threshold: 600.0, // 10 minutes
        }
    }
}

impl CollisionSettings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        let settings: CollisionSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Both thresholds must be finite and positive
    pub fn validate(&self) -> Result<(), CalcError> {
        for (name, value) in [
            ("cpaThreshold", self.cpa_threshold),
            ("tcpaThreshold", self.tcpa_threshold),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CalcError::InvalidSettings(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
