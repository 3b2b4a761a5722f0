//! Weight and balance
//!
//! Takeoff weight, moment and center of gravity from the empty aircraft and
//! its loading. Moments are in lb-in / 1000, as published in the loading
//! graph.

use crate::error::PerformanceError;
use crate::interpolate::round_to;
use crate::validation::ValidationReport;
use serde::{Deserialize, Serialize};

/// Maximum takeoff weight, lb
pub const MAX_TAKEOFF_WEIGHT: f64 = 2300.0;

/// Weight of one US gallon of avgas, lb
pub const FUEL_LB_PER_GAL: f64 = 6.0;

/// Seating arrangement, which moves the first baggage area's arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SeatConfig {
    /// Standard four-seat arrangement
    #[default]
    Standard,
    /// Optional rear seats fitted
    Optional,
}

impl TryFrom<u8> for SeatConfig {
    type Error = PerformanceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SeatConfig::Standard),
            1 => Ok(SeatConfig::Optional),
            other => Err(PerformanceError::malformed(
                "seat_config",
                format!("{other} is not a seat configuration (0 standard, 1 optional)"),
            )),
        }
    }
}

impl From<SeatConfig> for u8 {
    fn from(config: SeatConfig) -> Self {
        match config {
            SeatConfig::Standard => 0,
            SeatConfig::Optional => 1,
        }
    }
}

/// Arms of the loading stations, inches aft of the datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationArms {
    /// Pilot and front passenger
    pub front_seats: f64,
    /// Rear passengers
    pub rear_seats: f64,
    /// First baggage area
    pub baggage_1: f64,
    /// Second baggage area
    pub baggage_2: f64,
}

impl SeatConfig {
    /// Station arms for this seating arrangement
    pub fn arms(self) -> StationArms {
        let baggage_1 = match self {
            SeatConfig::Standard => 95.0,
            SeatConfig::Optional => 96.0,
        };
        StationArms {
            front_seats: 37.0,
            rear_seats: 73.0,
            baggage_1,
            baggage_2: 123.0,
        }
    }
}

/// Empty aircraft plus everything loaded into it
///
/// Persons and baggage are in pounds, fuel in US gallons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingInput {
    /// Seating arrangement, 0 standard or 1 optional
    #[serde(default)]
    pub seat_config: SeatConfig,
    /// Basic empty weight, lb
    pub basic_weight: f64,
    /// Basic empty moment, lb-in / 1000
    pub basic_moment: f64,
    /// Usable fuel on board, gal
    pub usable_fuel: f64,
    /// Pilot, lb
    pub pilot: f64,
    /// Front passenger, lb
    pub front_pax: f64,
    /// Left rear passenger, lb
    pub rear_pax_left: f64,
    /// Right rear passenger, lb
    pub rear_pax_right: f64,
    /// First baggage area, lb
    pub cargo_1: f64,
    /// Second baggage area, lb
    pub cargo_2: f64,
    /// Fuel burnt before takeoff, gal
    pub fuel_allowance: f64,
}

/// Takeoff weight, moment and center of gravity of a loading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    /// Takeoff weight, lb
    pub takeoff_weight: f64,
    /// Takeoff moment, lb-in / 1000
    pub takeoff_moment: f64,
    /// Center of gravity, inches aft of the datum
    pub cg_location: f64,
    /// True above the maximum takeoff weight
    pub exceeds_max_weight: bool,
}

/// Moment of `gallons` of fuel in the wing tanks, lb-in / 1000
pub fn fuel_moment(gallons: f64) -> f64 {
    round_to(gallons * FUEL_LB_PER_GAL * 12.0 / 250.0, 1)
}

/// Weight, moment and center of gravity at takeoff
///
/// Fuel burnt before takeoff is removed from both weight and moment. A
/// loading above the maximum takeoff weight is flagged, not rejected.
pub fn compute_weight_and_balance(loading: &LoadingInput) -> BalanceResult {
    let arms = loading.seat_config.arms();
    let stations = [
        (loading.pilot, arms.front_seats),
        (loading.front_pax, arms.front_seats),
        (loading.rear_pax_left, arms.rear_seats),
        (loading.rear_pax_right, arms.rear_seats),
        (loading.cargo_1, arms.baggage_1),
        (loading.cargo_2, arms.baggage_2),
    ];

    let payload: f64 = stations.iter().map(|(weight, _)| weight).sum();
    let takeoff_weight = loading.basic_weight + payload + FUEL_LB_PER_GAL * loading.usable_fuel
        - FUEL_LB_PER_GAL * loading.fuel_allowance;

    let payload_moment: f64 = stations.iter().map(|(weight, arm)| weight * arm).sum();
    let takeoff_moment = round_to(
        loading.basic_moment + round_to(payload_moment / 1000.0, 1) + fuel_moment(loading.usable_fuel)
            - fuel_moment(loading.fuel_allowance),
        1,
    );

    let cg_location = if takeoff_weight > 0.0 {
        round_to(takeoff_moment / takeoff_weight * 1000.0, 1)
    } else {
        0.0
    };

    let exceeds_max_weight = takeoff_weight > MAX_TAKEOFF_WEIGHT;
    if exceeds_max_weight {
        tracing::warn!(takeoff_weight, max = MAX_TAKEOFF_WEIGHT, "takeoff weight above maximum");
    }

    BalanceResult {
        takeoff_weight,
        takeoff_moment,
        cg_location,
        exceeds_max_weight,
    }
}

/// Check a loading against the permitted ranges
pub fn validate_loading(loading: &LoadingInput) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.check_range("basic_weight", loading.basic_weight, (1397.0, MAX_TAKEOFF_WEIGHT));
    report.check_range("basic_moment", loading.basic_moment, (0.0, 120.0));
    report.check_range("usable_fuel", loading.usable_fuel, (0.0, 50.0));
    for (field, weight) in [
        ("pilot", loading.pilot),
        ("front_pax", loading.front_pax),
        ("rear_pax_left", loading.rear_pax_left),
        ("rear_pax_right", loading.rear_pax_right),
    ] {
        report.check_range(field, weight, (0.0, 400.0));
    }
    report.check_range("cargo_1", loading.cargo_1, (0.0, 120.0));
    report.check_range("cargo_2", loading.cargo_2, (0.0, 50.0));
    report.check_range(
        "fuel_allowance",
        loading.fuel_allowance,
        (0.0, loading.usable_fuel.clamp(0.0, 40.0)),
    );
    report
}
