//! Tests for the batch entry point

use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use skyhawk_cli::{run, Cli, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn calm_day() -> Value {
    json!({
        "to_weight": 2300, "fuel_capacity": 40,
        "to_rwy": 90, "to_length": 3000, "to_condition": "PD",
        "to_press_alt": 0, "to_temp": 0, "to_wind_speed": 0, "to_wind_direction": 90,
        "travel_dist": 200, "cr_heading": 90, "cr_press_alt": 4000, "cr_temp": 7,
        "cr_wind_speed": 0, "cr_wind_direction": 90, "cr_power": 2400,
        "land_rwy": 90, "land_length": 3000, "land_condition": "PD",
        "land_press_alt": 0, "land_temp": 0, "land_wind_speed": 0, "land_wind_direction": 90
    })
}

/// Write a JSON file into `dir` and return its path as a string argument
fn write_json(dir: &TempDir, name: &str, value: &Value) -> String {
    let path: PathBuf = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

fn run_args(args: &[&str]) -> anyhow::Result<Value> {
    let cli = Cli::try_parse_from(args)?;
    let output = run(&cli)?;
    Ok(serde_json::from_str(&output)?)
}

#[test]
fn test_parse_performance_arguments() {
    let cli = Cli::try_parse_from([
        "skyhawk",
        "-v",
        "performance",
        "--input",
        "case.json",
        "--skip-validation",
        "--pretty",
    ])
    .unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Performance(args) => {
            assert_eq!(args.input, PathBuf::from("case.json"));
            assert!(args.skip_validation);
            assert!(args.pretty);
            assert!(args.tables.is_none());
        }
        other => panic!("Expected performance command, got {other:?}"),
    }
}

#[test]
fn test_input_is_required() {
    assert!(Cli::try_parse_from(["skyhawk", "performance"]).is_err());
    assert!(Cli::try_parse_from(["skyhawk"]).is_err());
}

#[test]
fn test_performance_result_record() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "case.json", &calm_day());
    let result = run_args(&["skyhawk", "performance", "--input", &input]).unwrap();
    assert_eq!(
        result,
        json!({
            "to_roll": 720,
            "to_50_roll": 1300,
            "to_roc": 745,
            "max_endurance": 3.7,
            "max_range": 410,
            "fuel_required": 15.6,
            "fuel_reserve": 24.4,
            "land_roll": 495,
            "land_50_roll": 1205
        })
    );
}

#[test]
fn test_out_of_range_input_rejected_unless_skipped() {
    let dir = TempDir::new().unwrap();
    let mut case = calm_day();
    case["cr_power"] = json!(2700);
    let input = write_json(&dir, "case.json", &case);

    let err = run_args(&["skyhawk", "performance", "--input", &input]).unwrap_err();
    assert!(format!("{err:#}").contains("cr_power"));

    // 2700 RPM snaps to the highest RPM tabulated at 4000 ft
    let result = run_args(&["skyhawk", "performance", "--input", &input, "--skip-validation"]).unwrap();
    assert_eq!(result["max_endurance"], json!(3.2));
}

#[test]
fn test_config_override() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "case.json", &calm_day());
    let config = write_json(&dir, "config.json", &json!({ "fuel": { "taxi_allowance_gal": 2.0 } }));
    let result = run_args(&["skyhawk", "performance", "--input", &input, "--config", &config]).unwrap();
    assert_eq!(result["fuel_required"], json!(16.5));
}

#[test]
fn test_degenerate_config_rejected() {
    let dir = TempDir::new().unwrap();
    let mut case = calm_day();
    case["to_wind_speed"] = json!(10);
    let input = write_json(&dir, "case.json", &case);
    let config = write_json(&dir, "config.json", &json!({ "wind": { "headwind_divisor": 0.0 } }));
    let err = run_args(&["skyhawk", "performance", "--input", &input, "--config", &config]).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("loading engine config"));
    assert!(message.contains("wind.headwind_divisor"));
}

#[test]
fn test_bad_tables_file_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_json(&dir, "case.json", &calm_day());
    let tables = write_json(&dir, "tables.json", &json!({ "takeoff": [] }));
    let err = run_args(&["skyhawk", "performance", "--input", &input, "--tables", &tables]).unwrap_err();
    assert!(format!("{err:#}").contains("loading tables"));
}

#[test]
fn test_missing_input_field_reported() {
    let dir = TempDir::new().unwrap();
    let mut case = calm_day();
    case.as_object_mut().unwrap().remove("travel_dist");
    let input = write_json(&dir, "case.json", &case);
    let err = run_args(&["skyhawk", "performance", "--input", &input]).unwrap_err();
    assert!(format!("{err:#}").contains("travel_dist"));
}

#[test]
fn test_balance_record() {
    let dir = TempDir::new().unwrap();
    let loading = write_json(
        &dir,
        "loading.json",
        &json!({
            "seat_config": 0,
            "basic_weight": 1500, "basic_moment": 57,
            "usable_fuel": 38, "fuel_allowance": 1,
            "pilot": 170, "front_pax": 150, "rear_pax_left": 0, "rear_pax_right": 0,
            "cargo_1": 20, "cargo_2": 0
        }),
    );
    let result = run_args(&["skyhawk", "balance", "--input", &loading, "--pretty"]).unwrap();
    assert_eq!(
        result,
        json!({
            "takeoff_weight": 2062.0,
            "takeoff_moment": 81.3,
            "cg_location": 39.4,
            "exceeds_max_weight": false
        })
    );
}
