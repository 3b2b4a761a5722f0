//! Performance computation pipeline
//!
//! [`PerformanceCalculator`] runs one input record through a fixed, linear
//! sequence of stages:
//!
//! ```text
//! Validated -> Snapped -> WindResolved -> TakeoffComputed -> CruiseComputed
//!           -> FuelComputed -> LandingComputed -> Done
//! ```
//!
//! The only branch is the selection of the 40 or 50 gallon cruise tables on
//! entering `CruiseComputed`. Any failure aborts the whole computation; no
//! partial result is ever returned.
//!
//! The calculator holds no mutable state and borrows its table store, so one
//! instance can serve concurrent requests.

use crate::climb::{self, ClimbProfile};
use crate::config::EngineConfig;
use crate::cruise::{self, CruisePerformance};
use crate::error::{PerformanceError, Result};
use crate::fuel::{self, FuelPlan};
use crate::input::InputRecord;
use crate::landing;
use crate::resolve::ResolvedInputs;
use crate::tables::{RollDistances, TableStore};
use crate::takeoff::{self, TakeoffPerformance};
use crate::wind::PhaseWinds;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Pipeline stage reached by a computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Input accepted
    Validated,
    /// Inputs snapped onto the table axes
    Snapped,
    /// Wind components resolved
    WindResolved,
    /// Takeoff figures computed
    TakeoffComputed,
    /// Cruise figures computed
    CruiseComputed,
    /// Trip fuel computed
    FuelComputed,
    /// Landing figures computed
    LandingComputed,
    /// Result assembled
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Validated => "validated",
            Stage::Snapped => "snapped",
            Stage::WindResolved => "wind resolved",
            Stage::TakeoffComputed => "takeoff computed",
            Stage::CruiseComputed => "cruise computed",
            Stage::FuelComputed => "fuel computed",
            Stage::LandingComputed => "landing computed",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// The result record handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Takeoff ground roll, ft
    pub to_roll: i32,
    /// Takeoff distance over a 50 ft obstacle, ft
    pub to_50_roll: i32,
    /// Rate of climb after takeoff, ft/min
    pub to_roc: i32,
    /// Endurance at the cruise power setting, hours
    pub max_endurance: f64,
    /// Wind-corrected range at the cruise power setting, nm
    pub max_range: i32,
    /// Fuel required for the trip, gal
    pub fuel_required: f64,
    /// Usable fuel left at destination, gal
    pub fuel_reserve: f64,
    /// Landing ground roll, ft
    pub land_roll: i32,
    /// Landing distance over a 50 ft obstacle, ft
    pub land_50_roll: i32,
}

/// The result record plus every intermediate figure behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Snapped table keys
    pub resolved: ResolvedInputs,
    /// Wind component of each phase
    pub winds: PhaseWinds,
    /// Corrected takeoff figures
    pub takeoff: TakeoffPerformance,
    /// Cruise power setting, endurance and range
    pub cruise: CruisePerformance,
    /// Trip fuel plan
    pub fuel: FuelPlan,
    /// Corrected landing distances
    pub landing: RollDistances,
    /// The result record
    pub result: PerformanceResult,
}

/// Computes performance figures against a read-only table store
pub struct PerformanceCalculator<'a> {
    tables: &'a dyn TableStore,
    config: EngineConfig,
}

impl<'a> PerformanceCalculator<'a> {
    /// Calculator with the default engine constants
    pub fn new(tables: &'a dyn TableStore) -> Self {
        Self::with_config(tables, EngineConfig::default())
    }

    /// Calculator with caller-supplied engine constants
    pub fn with_config(tables: &'a dyn TableStore, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    /// Engine constants in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the result record for one input
    pub fn compute(&self, input: &InputRecord) -> Result<PerformanceResult> {
        Ok(self.compute_report(input)?.result)
    }

    /// Compute from the flat field mapping of the form layer
    pub fn compute_map(&self, fields: &Map<String, Value>) -> Result<PerformanceResult> {
        let input = InputRecord::from_map(fields)?;
        self.compute(&input)
    }

    /// Compute the result record together with its intermediates
    pub fn compute_report(&self, input: &InputRecord) -> Result<PerformanceReport> {
        let tables = self.tables;
        let config = &self.config;

        tracing::debug!(
            stage = %Stage::Validated,
            weight = input.weight,
            fuel_capacity = input.fuel_capacity.gallons(),
            travel_distance = input.cruise.travel_distance,
            "stage reached"
        );

        let resolved = ResolvedInputs::resolve(input, tables)?;
        tracing::debug!(
            stage = %Stage::Snapped,
            weight = resolved.takeoff_weight,
            takeoff_press_alt = resolved.takeoff_press_alt,
            takeoff_temp = resolved.takeoff_temp,
            cruise_press_alt = resolved.cruise_press_alt_500,
            cruise_power_press_alt = resolved.cruise_power_press_alt,
            cruise_rpm = resolved.cruise_rpm,
            landing_press_alt = resolved.landing_press_alt,
            landing_temp = resolved.landing_temp,
            "stage reached"
        );

        let winds = PhaseWinds::resolve(input);
        tracing::debug!(
            stage = %Stage::WindResolved,
            takeoff = %winds.takeoff,
            cruise = %winds.cruise,
            landing = %winds.landing,
            "stage reached"
        );

        let takeoff = takeoff::compute_takeoff_performance(
            tables,
            &resolved,
            winds.takeoff,
            input.takeoff.surface,
            config,
        )?;
        tracing::debug!(
            stage = %Stage::TakeoffComputed,
            ground_roll = takeoff.distances.ground_roll,
            fifty_ft = takeoff.distances.fifty_ft,
            rate_of_climb = takeoff.rate_of_climb,
            "stage reached"
        );

        let cruise = cruise::compute_cruise_performance(tables, &resolved, input.fuel_capacity, winds.cruise)?;
        tracing::debug!(
            stage = %Stage::CruiseComputed,
            fuel_capacity = input.fuel_capacity.gallons(),
            isa_bucket = %cruise.isa_bucket,
            endurance_hr = cruise.endurance_hr,
            range_nm = cruise.range_nm,
            "stage reached"
        );

        let climb: ClimbProfile = climb::climb_segment(
            tables,
            resolved.takeoff_press_alt,
            resolved.takeoff_real_temp,
            resolved.cruise_press_alt_1000,
            resolved.cruise_temp,
        )?;
        let fuel = fuel::plan_fuel(
            resolved.travel_distance,
            climb,
            &cruise.power,
            winds.cruise,
            input.fuel_capacity,
            &config.fuel,
        )?;
        tracing::debug!(
            stage = %Stage::FuelComputed,
            climb_distance_nm = fuel.climb.distance_nm,
            cruise_distance_nm = fuel.cruise_distance_nm,
            total_fuel_gal = fuel.total_fuel_gal,
            reserve_gal = fuel.reserve_gal,
            "stage reached"
        );

        let landing = landing::compute_landing_performance(
            tables,
            resolved.landing_press_alt,
            resolved.landing_temp,
            winds.landing,
            input.landing.surface,
            config,
        )?;
        tracing::debug!(
            stage = %Stage::LandingComputed,
            ground_roll = landing.ground_roll,
            fifty_ft = landing.fifty_ft,
            "stage reached"
        );

        let result = PerformanceResult {
            to_roll: whole_feet("takeoff ground roll", takeoff.distances.ground_roll)?,
            to_50_roll: whole_feet("takeoff fifty-foot roll", takeoff.distances.fifty_ft)?,
            to_roc: takeoff.rate_of_climb,
            max_endurance: cruise.endurance_hr,
            max_range: cruise.range_nm as i32,
            fuel_required: fuel.total_fuel_gal,
            fuel_reserve: fuel.reserve_gal,
            land_roll: whole_feet("landing ground roll", landing.ground_roll)?,
            land_50_roll: whole_feet("landing fifty-foot roll", landing.fifty_ft)?,
        };
        tracing::info!(
            stage = %Stage::Done,
            to_roll = result.to_roll,
            max_range = result.max_range,
            fuel_reserve = result.fuel_reserve,
            land_roll = result.land_roll,
            "performance computed"
        );

        Ok(PerformanceReport {
            resolved,
            winds,
            takeoff,
            cruise,
            fuel,
            landing,
            result,
        })
    }
}

/// Convert a corrected distance to whole feet
///
/// Corrected distances are already ceiled; anything that is not a finite,
/// positive number of feet aborts the computation.
fn whole_feet(quantity: &str, distance: f64) -> Result<i32> {
    if distance.is_finite() && distance > 0.0 && distance <= i32::MAX as f64 {
        Ok(distance as i32)
    } else {
        Err(PerformanceError::UnusableDistance {
            quantity: quantity.to_string(),
            value: distance,
        })
    }
}
