//! Trip fuel planning

use crate::climb::ClimbProfile;
use crate::config::FuelPolicy;
use crate::error::{PerformanceError, Result};
use crate::input::FuelCapacity;
use crate::interpolate::round_to;
use crate::tables::CruiseFigures;
use crate::wind::WindComponent;
use serde::{Deserialize, Serialize};

/// True airspeed plus the signed along-track wind
pub fn ground_speed(ktas: f64, wind: WindComponent) -> f64 {
    ktas + wind.signed_knots()
}

/// Fuel figures of a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPlan {
    /// Climb from the departure field to cruise altitude
    pub climb: ClimbProfile,
    /// Distance flown at cruise altitude, nm
    pub cruise_distance_nm: f64,
    /// Ground speed on the cruise leg, kt
    pub ground_speed_kt: f64,
    /// Time at cruise altitude, hours
    pub cruise_time_hr: f64,
    /// Fuel burnt at cruise altitude, gal
    pub cruise_fuel_gal: f64,
    /// Taxi allowance, climb and cruise fuel
    pub total_fuel_gal: f64,
    /// Usable fuel left at destination; negative when the trip needs more
    /// than the tanks hold
    pub reserve_gal: f64,
}

/// Fuel required and reserve for a trip of `travel_distance` nm
///
/// The climb segment covers part of the distance; the rest is flown at the
/// cruise ground speed and fuel flow. A negative reserve is reported, not
/// rejected. A ground speed of zero or less cannot complete the leg and is
/// an error.
pub fn plan_fuel(
    travel_distance: f64,
    climb: ClimbProfile,
    power: &CruiseFigures,
    wind: WindComponent,
    capacity: FuelCapacity,
    policy: &FuelPolicy,
) -> Result<FuelPlan> {
    let cruise_distance_nm = (travel_distance - climb.distance_nm).round().max(0.0);
    let ground_speed_kt = round_to(ground_speed(power.ktas, wind), 1);
    if ground_speed_kt <= 0.0 {
        return Err(PerformanceError::NonPositiveGroundSpeed {
            ground_speed: ground_speed_kt,
        });
    }

    let cruise_time_hr = round_to(cruise_distance_nm / ground_speed_kt, 1);
    let cruise_fuel_gal = round_to(cruise_time_hr * power.gph, 1);
    let total_fuel_gal = round_to(policy.taxi_allowance_gal + climb.fuel_gal + cruise_fuel_gal, 1);
    let reserve_gal = round_to(capacity.gallons() - total_fuel_gal, 1);

    if reserve_gal < 0.0 {
        tracing::warn!(
            total_fuel_gal,
            capacity_gal = capacity.gallons(),
            reserve_gal,
            "trip needs more fuel than the tanks hold"
        );
    }

    Ok(FuelPlan {
        climb,
        cruise_distance_nm,
        ground_speed_kt,
        cruise_time_hr,
        cruise_fuel_gal,
        total_fuel_gal,
        reserve_gal,
    })
}
