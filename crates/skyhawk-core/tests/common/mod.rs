//! Shared fixtures for the integration tests

#![allow(dead_code)]

use serde_json::{json, Map, Value};
use skyhawk_core::input::InputRecord;
use skyhawk_core::tables::PerformanceTables;

pub fn reference_tables() -> PerformanceTables {
    PerformanceTables::reference().expect("bundled tables should load")
}

/// Sea-level departure and arrival, standard day at 4000 ft, no wind,
/// every lookup on a tabulated point
pub fn calm_day_fields() -> Map<String, Value> {
    let value = json!({
        "to_weight": 2300,
        "fuel_capacity": 40,
        "to_rwy": 90,
        "to_length": 3000,
        "to_condition": "paved",
        "to_press_alt": 0,
        "to_temp": 0,
        "to_wind_speed": 0,
        "to_wind_direction": 90,
        "travel_dist": 200,
        "cr_heading": 90,
        "cr_press_alt": 4000,
        "cr_temp": 7,
        "cr_wind_speed": 0,
        "cr_wind_direction": 90,
        "cr_power": 2400,
        "land_rwy": 90,
        "land_length": 3000,
        "land_condition": "paved",
        "land_press_alt": 0,
        "land_temp": 0,
        "land_wind_speed": 0,
        "land_wind_direction": 90
    });
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// The calm-day fields with some of them replaced
pub fn fields_with(overrides: Value) -> Map<String, Value> {
    let mut fields = calm_day_fields();
    if let Value::Object(extra) = overrides {
        fields.extend(extra);
    }
    fields
}

pub fn input_with(overrides: Value) -> InputRecord {
    InputRecord::from_map(&fields_with(overrides)).expect("fixture should be well formed")
}

pub fn calm_day_input() -> InputRecord {
    InputRecord::from_map(&calm_day_fields()).expect("fixture should be well formed")
}
