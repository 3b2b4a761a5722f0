//! Pilot-entered input record
//!
//! The record is built once per request by the caller and only ever read by
//! the engine. Range checking belongs to the caller (see
//! [`crate::validation`]); this module only guarantees that every required
//! field is present and has the right shape.

use crate::error::{PerformanceError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Runway surface condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RunwaySurface {
    /// Paved runway, `P`, `PD` or `paved`
    Paved,
    /// Grass runway, `G`, `GD` or `grass`
    Grass,
}

impl FromStr for RunwaySurface {
    type Err = PerformanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "p" | "pd" | "paved" => Ok(RunwaySurface::Paved),
            "g" | "gd" | "grass" => Ok(RunwaySurface::Grass),
            other => Err(PerformanceError::malformed(
                "runway condition",
                format!("'{other}' is not a runway condition"),
            )),
        }
    }
}

impl TryFrom<String> for RunwaySurface {
    type Error = PerformanceError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RunwaySurface> for String {
    fn from(surface: RunwaySurface) -> Self {
        surface.to_string()
    }
}

impl fmt::Display for RunwaySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunwaySurface::Paved => f.write_str("paved"),
            RunwaySurface::Grass => f.write_str("grass"),
        }
    }
}

/// Usable fuel tank configuration, which selects the endurance/range tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FuelCapacity {
    /// Standard 40 gallon usable tanks
    Gal40,
    /// Long-range 50 gallon usable tanks
    Gal50,
}

impl FuelCapacity {
    /// Usable fuel in US gallons
    pub fn gallons(self) -> f64 {
        match self {
            FuelCapacity::Gal40 => 40.0,
            FuelCapacity::Gal50 => 50.0,
        }
    }
}

impl TryFrom<u32> for FuelCapacity {
    type Error = PerformanceError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            40 => Ok(FuelCapacity::Gal40),
            50 => Ok(FuelCapacity::Gal50),
            other => Err(PerformanceError::malformed(
                "fuel_capacity",
                format!("{other} gal is not a tank configuration (40 or 50)"),
            )),
        }
    }
}

impl From<FuelCapacity> for u32 {
    fn from(capacity: FuelCapacity) -> Self {
        match capacity {
            FuelCapacity::Gal40 => 40,
            FuelCapacity::Gal50 => 50,
        }
    }
}

/// Conditions at the departure or arrival runway
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayConditions {
    /// Runway heading in degrees
    pub heading: f64,
    /// Runway length in feet
    pub length: f64,
    /// Runway surface
    pub surface: RunwaySurface,
    /// Pressure altitude in feet
    pub press_alt: f64,
    /// Outside air temperature in °C
    pub temp: f64,
    /// Wind speed in knots
    pub wind_speed: f64,
    /// Direction the wind blows from, in degrees
    pub wind_direction: f64,
}

/// Conditions along the cruise leg
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruiseConditions {
    /// Distance to travel in nautical miles
    pub travel_distance: f64,
    /// Cruise heading in degrees
    pub heading: f64,
    /// Pressure altitude in feet
    pub press_alt: f64,
    /// Outside air temperature in °C
    pub temp: f64,
    /// Wind speed in knots
    pub wind_speed: f64,
    /// Direction the wind blows from, in degrees
    pub wind_direction: f64,
    /// Selected engine RPM
    pub rpm: f64,
}

/// Complete validated input of one performance computation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct InputRecord {
    /// Takeoff weight in pounds
    pub weight: f64,
    /// Tank configuration
    pub fuel_capacity: FuelCapacity,
    /// Departure runway
    pub takeoff: RunwayConditions,
    /// Cruise leg
    pub cruise: CruiseConditions,
    /// Arrival runway
    pub landing: RunwayConditions,
}

impl InputRecord {
    /// Build a record from the flat field mapping produced by the form layer
    ///
    /// Numbers may arrive as JSON numbers or numeric strings. The first
    /// absent or unusable field is reported as
    /// [`PerformanceError::MalformedInput`].
    pub fn from_map(map: &Map<String, Value>) -> Result<Self> {
        let capacity = number(map, "fuel_capacity")?;
        if capacity.fract() != 0.0 || capacity < 0.0 {
            return Err(PerformanceError::malformed(
                "fuel_capacity",
                format!("{capacity} gal is not a tank configuration (40 or 50)"),
            ));
        }
        let fuel_capacity = FuelCapacity::try_from(capacity as u32)?;

        Ok(Self {
            weight: number(map, "to_weight")?,
            fuel_capacity,
            takeoff: runway(map, "to")?,
            cruise: CruiseConditions {
                travel_distance: number(map, "travel_dist")?,
                heading: number(map, "cr_heading")?,
                press_alt: number(map, "cr_press_alt")?,
                temp: number(map, "cr_temp")?,
                wind_speed: number(map, "cr_wind_speed")?,
                wind_direction: number(map, "cr_wind_direction")?,
                rpm: number(map, "cr_power")?,
            },
            landing: runway(map, "land")?,
        })
    }

    /// Parse a flat JSON object
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| PerformanceError::malformed("input", e.to_string()))?;
        match value {
            Value::Object(map) => Self::from_map(&map),
            _ => Err(PerformanceError::malformed("input", "expected a JSON object")),
        }
    }
}

impl TryFrom<Map<String, Value>> for InputRecord {
    type Error = PerformanceError;

    fn try_from(map: Map<String, Value>) -> Result<Self> {
        Self::from_map(&map)
    }
}

fn runway(map: &Map<String, Value>, prefix: &str) -> Result<RunwayConditions> {
    let key = |name: &str| format!("{prefix}_{name}");
    Ok(RunwayConditions {
        heading: number(map, &key("rwy"))?,
        length: number(map, &key("length"))?,
        surface: text(map, &key("condition"))?
            .parse()
            .map_err(|_| PerformanceError::malformed(key("condition"), "expected paved or grass"))?,
        press_alt: number(map, &key("press_alt"))?,
        temp: number(map, &key("temp"))?,
        wind_speed: number(map, &key("wind_speed"))?,
        wind_direction: number(map, &key("wind_direction"))?,
    })
}

fn field<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    match map.get(key) {
        Some(Value::Null) | None => Err(PerformanceError::malformed(key, "missing")),
        Some(value) => Ok(value),
    }
}

fn number(map: &Map<String, Value>, key: &str) -> Result<f64> {
    let parsed = match field(map, key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| PerformanceError::malformed(key, "not a number"))
}

fn text<'a>(map: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    field(map, key)?
        .as_str()
        .ok_or_else(|| PerformanceError::malformed(key, "not a string"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runway_surface_aliases() {
        assert_eq!("GD".parse::<RunwaySurface>().unwrap(), RunwaySurface::Grass);
        assert_eq!("g".parse::<RunwaySurface>().unwrap(), RunwaySurface::Grass);
        assert_eq!("Paved".parse::<RunwaySurface>().unwrap(), RunwaySurface::Paved);
        assert!("gravel".parse::<RunwaySurface>().is_err());
    }

    #[test]
    fn test_fuel_capacity_only_known_tanks() {
        assert_eq!(FuelCapacity::try_from(40).unwrap(), FuelCapacity::Gal40);
        assert_eq!(FuelCapacity::try_from(50).unwrap().gallons(), 50.0);
        assert!(FuelCapacity::try_from(45).is_err());
    }

    #[test]
    fn test_number_accepts_numeric_strings() {
        let mut map = Map::new();
        map.insert("to_weight".into(), Value::String(" 2100 ".into()));
        assert_eq!(number(&map, "to_weight").unwrap(), 2100.0);
    }
}
