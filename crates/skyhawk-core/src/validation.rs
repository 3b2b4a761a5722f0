//! Input range checks
//!
//! The engine assumes its input is in range and never calls these checks
//! itself. Callers run [`validate_input`] before computing so that every
//! offending field can be reported at once.

use crate::input::{InputRecord, RunwayConditions};
use serde::Serialize;
use thiserror::Error;

/// Takeoff weight, lb
pub const WEIGHT_RANGE: (f64, f64) = (1397.0, 2300.0);
/// Pressure altitude, ft
pub const PRESS_ALT_RANGE: (f64, f64) = (0.0, 14200.0);
/// Outside air temperature, °C
pub const TEMP_RANGE: (f64, f64) = (-20.0, 40.0);
/// Wind speed, kt
pub const WIND_SPEED_RANGE: (f64, f64) = (0.0, 50.0);
/// Wind direction and heading, degrees
pub const DIRECTION_RANGE: (f64, f64) = (1.0, 360.0);
/// Trip distance, nm
pub const TRAVEL_DISTANCE_RANGE: (f64, f64) = (0.0, 750.0);
/// Cruise RPM
pub const RPM_RANGE: (f64, f64) = (2100.0, 2650.0);

/// One out-of-range input field
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{field} is {value}, must be between {min} and {max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} is {value}, must be a multiple of {step}")]
    NotMultipleOf { field: String, value: f64, step: f64 },

    #[error("{field} is {value}, must be greater than zero")]
    NotPositive { field: String, value: f64 },
}

/// Every violation found in one input record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Violations in field order
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// True when no field is out of range
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn check_range(&mut self, field: &str, value: f64, (min, max): (f64, f64)) {
        if value < min || value > max {
            self.errors.push(ValidationError::OutOfRange {
                field: field.to_string(),
                value,
                min,
                max,
            });
        }
    }

    fn check_multiple_of(&mut self, field: &str, value: f64, step: f64) {
        if value % step != 0.0 {
            self.errors.push(ValidationError::NotMultipleOf {
                field: field.to_string(),
                value,
                step,
            });
        }
    }

    fn check_positive(&mut self, field: &str, value: f64) {
        if value <= 0.0 {
            self.errors.push(ValidationError::NotPositive {
                field: field.to_string(),
                value,
            });
        }
    }

    fn check_wind(&mut self, prefix: &str, speed: f64, direction: f64) {
        self.check_range(&format!("{prefix}_wind_speed"), speed, WIND_SPEED_RANGE);
        let field = format!("{prefix}_wind_direction");
        self.check_range(&field, direction, DIRECTION_RANGE);
        self.check_multiple_of(&field, direction, 5.0);
    }

    fn check_runway(&mut self, prefix: &str, runway: &RunwayConditions) {
        self.check_range(&format!("{prefix}_rwy"), runway.heading, DIRECTION_RANGE);
        self.check_positive(&format!("{prefix}_length"), runway.length);
        self.check_range(&format!("{prefix}_press_alt"), runway.press_alt, PRESS_ALT_RANGE);
        self.check_range(&format!("{prefix}_temp"), runway.temp, TEMP_RANGE);
        self.check_wind(prefix, runway.wind_speed, runway.wind_direction);
    }
}

/// Check every field of `input` against its permitted range
pub fn validate_input(input: &InputRecord) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check_range("to_weight", input.weight, WEIGHT_RANGE);
    report.check_runway("to", &input.takeoff);

    let cruise = &input.cruise;
    report.check_range("travel_dist", cruise.travel_distance, TRAVEL_DISTANCE_RANGE);
    report.check_range("cr_heading", cruise.heading, DIRECTION_RANGE);
    report.check_range("cr_press_alt", cruise.press_alt, PRESS_ALT_RANGE);
    report.check_range("cr_temp", cruise.temp, TEMP_RANGE);
    report.check_wind("cr", cruise.wind_speed, cruise.wind_direction);
    report.check_range("cr_power", cruise.rpm, RPM_RANGE);

    report.check_runway("land", &input.landing);

    for error in &report.errors {
        tracing::debug!(%error, "input rejected");
    }
    report
}
