//! Tests for weight and balance

use pretty_assertions::assert_eq;
use skyhawk_core::balance::{compute_weight_and_balance, validate_loading, BalanceResult, LoadingInput, SeatConfig};

fn two_up_loading() -> LoadingInput {
    LoadingInput {
        seat_config: SeatConfig::Standard,
        basic_weight: 1500.0,
        basic_moment: 57.0,
        usable_fuel: 38.0,
        pilot: 170.0,
        front_pax: 150.0,
        rear_pax_left: 0.0,
        rear_pax_right: 0.0,
        cargo_1: 20.0,
        cargo_2: 0.0,
        fuel_allowance: 1.0,
    }
}

#[test]
fn test_two_up_with_baggage() {
    let result = compute_weight_and_balance(&two_up_loading());
    assert_eq!(
        result,
        BalanceResult {
            takeoff_weight: 2062.0,
            takeoff_moment: 81.3,
            cg_location: 39.4,
            exceeds_max_weight: false,
        }
    );
}

#[test]
fn test_rear_baggage_uses_aft_arm() {
    let mut loading = two_up_loading();
    loading.cargo_1 = 0.0;
    loading.cargo_2 = 20.0;
    let aft = compute_weight_and_balance(&loading);
    let forward = compute_weight_and_balance(&two_up_loading());
    assert_eq!(aft.takeoff_weight, forward.takeoff_weight);
    assert!(aft.takeoff_moment > forward.takeoff_moment);
    assert!(aft.cg_location > forward.cg_location);
}

#[test]
fn test_overweight_flagged() {
    let mut loading = two_up_loading();
    loading.rear_pax_left = 180.0;
    loading.rear_pax_right = 160.0;
    let result = compute_weight_and_balance(&loading);
    assert_eq!(result.takeoff_weight, 2402.0);
    assert!(result.exceeds_max_weight);
}

#[test]
fn test_loading_deserializes_seat_config() {
    let loading: LoadingInput = serde_json::from_str(
        r#"{
            "seat_config": 1,
            "basic_weight": 1500, "basic_moment": 57,
            "usable_fuel": 38, "fuel_allowance": 1,
            "pilot": 170, "front_pax": 150, "rear_pax_left": 0, "rear_pax_right": 0,
            "cargo_1": 20, "cargo_2": 0
        }"#,
    )
    .unwrap();
    assert_eq!(loading.seat_config, SeatConfig::Optional);

    let bad = serde_json::from_str::<LoadingInput>(r#"{ "seat_config": 3 }"#);
    assert!(bad.is_err());
}

#[test]
fn test_validate_loading() {
    assert!(validate_loading(&two_up_loading()).is_valid());

    let mut loading = two_up_loading();
    loading.cargo_1 = 150.0;
    loading.fuel_allowance = 45.0;
    loading.basic_weight = 1200.0;
    let report = validate_loading(&loading);
    assert_eq!(report.errors.len(), 3);
}
