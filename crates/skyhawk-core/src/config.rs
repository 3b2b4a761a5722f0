//! Engine configuration
//!
//! The correction constants of the engine. Defaults are the published C172N
//! values; a JSON file may override individual fields.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors loading an engine configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Runway-surface correction of one phase
///
/// The two phases have different defaults, see [`PhaseCorrection::takeoff`]
/// and [`PhaseCorrection::landing`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseCorrection {
    /// Fraction of the ground roll added to both distances on grass
    pub grass_factor: f64,
}

impl PhaseCorrection {
    /// Published takeoff correction: grass adds 15% of the ground roll
    pub const fn takeoff() -> Self {
        Self { grass_factor: 0.15 }
    }

    /// Published landing correction: grass adds 45% of the ground roll
    pub const fn landing() -> Self {
        Self { grass_factor: 0.45 }
    }
}

/// Wind correction of the runway distances
///
/// A headwind shortens distances by `knots * knot_factor / headwind_divisor`,
/// a tailwind lengthens them by `knots * knot_factor / tailwind_divisor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindCorrection {
    /// Fractional change per knot before the divisor is applied
    pub knot_factor: f64,
    /// Divisor for a headwind, must be positive
    pub headwind_divisor: f64,
    /// Divisor for a tailwind, must be positive
    pub tailwind_divisor: f64,
}

impl Default for WindCorrection {
    fn default() -> Self {
        Self {
            knot_factor: 0.1,
            headwind_divisor: 9.0,
            tailwind_divisor: 2.0,
        }
    }
}

/// Fixed fuel allowances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPolicy {
    /// Start, taxi and runup allowance in gallons
    pub taxi_allowance_gal: f64,
}

impl Default for FuelPolicy {
    fn default() -> Self {
        Self {
            taxi_allowance_gal: 1.1,
        }
    }
}

/// All engine constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigOverrides")]
pub struct EngineConfig {
    /// Takeoff surface correction
    pub takeoff: PhaseCorrection,
    /// Landing surface correction
    pub landing: PhaseCorrection,
    /// Wind correction shared by takeoff and landing
    pub wind: WindCorrection,
    /// Fuel allowances
    pub fuel: FuelPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            takeoff: PhaseCorrection::takeoff(),
            landing: PhaseCorrection::landing(),
            wind: WindCorrection::default(),
            fuel: FuelPolicy::default(),
        }
    }
}

/// Phase section of a configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PhaseOverride {
    grass_factor: Option<f64>,
}

impl PhaseOverride {
    fn over(self, defaults: PhaseCorrection) -> PhaseCorrection {
        PhaseCorrection {
            grass_factor: self.grass_factor.unwrap_or(defaults.grass_factor),
        }
    }
}

/// Configuration file layout; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigOverrides {
    takeoff: PhaseOverride,
    landing: PhaseOverride,
    wind: WindCorrection,
    fuel: FuelPolicy,
}

impl From<ConfigOverrides> for EngineConfig {
    fn from(overrides: ConfigOverrides) -> Self {
        Self {
            takeoff: overrides.takeoff.over(PhaseCorrection::takeoff()),
            landing: overrides.landing.over(PhaseCorrection::landing()),
            wind: overrides.wind,
            fuel: overrides.fuel,
        }
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    check_finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

impl EngineConfig {
    /// Load a configuration file; absent fields keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from JSON and validate it
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every constant keeps the corrections meaningful
    ///
    /// Divisors must be positive; factors and allowances must not be
    /// negative. Constants built in code bypass this check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("takeoff.grass_factor", self.takeoff.grass_factor)?;
        check_non_negative("landing.grass_factor", self.landing.grass_factor)?;
        check_non_negative("wind.knot_factor", self.wind.knot_factor)?;
        check_positive("wind.headwind_divisor", self.wind.headwind_divisor)?;
        check_positive("wind.tailwind_divisor", self.wind.tailwind_divisor)?;
        check_non_negative("fuel.taxi_allowance_gal", self.fuel.taxi_allowance_gal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "fuel": { "taxi_allowance_gal": 1.5 } }"#).unwrap();
        assert_eq!(config.fuel.taxi_allowance_gal, 1.5);
        assert_eq!(config.landing.grass_factor, 0.45);
        assert_eq!(config.wind.headwind_divisor, 9.0);
    }

    #[test]
    fn test_partial_phase_section_keeps_phase_default() {
        let config =
            EngineConfig::from_json_str(r#"{ "takeoff": {}, "landing": { "grass_factor": 0.5 } }"#).unwrap();
        assert_eq!(config.takeoff.grass_factor, 0.15);
        assert_eq!(config.landing.grass_factor, 0.5);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_divisor() {
        assert_eq!(
            EngineConfig::from_json_str(r#"{ "wind": { "headwind_divisor": 0.0 } }"#),
            Err(ConfigError::InvalidValue {
                field: "wind.headwind_divisor",
                value: 0.0,
                reason: "must be greater than zero",
            })
        );
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "wind": { "tailwind_divisor": -2.0 } }"#),
            Err(ConfigError::InvalidValue { field: "wind.tailwind_divisor", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_factors_and_allowance() {
        for (json, field) in [
            (r#"{ "takeoff": { "grass_factor": -0.15 } }"#, "takeoff.grass_factor"),
            (r#"{ "landing": { "grass_factor": -1 } }"#, "landing.grass_factor"),
            (r#"{ "wind": { "knot_factor": -0.1 } }"#, "wind.knot_factor"),
            (r#"{ "fuel": { "taxi_allowance_gal": -1.1 } }"#, "fuel.taxi_allowance_gal"),
        ] {
            match EngineConfig::from_json_str(json) {
                Err(ConfigError::InvalidValue { field: rejected, .. }) => assert_eq!(rejected, field),
                other => panic!("Expected {field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(
            EngineConfig::from_json_str("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
