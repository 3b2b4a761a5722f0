//! Takeoff performance
//!
//! Produces three figures:
//! - ground roll: minimum runway distance to lift off, in feet
//! - fifty-foot roll: distance to clear a 50 ft obstacle, always longer than
//!   the ground roll
//! - rate of climb: best climb rate right after takeoff, in ft/min

use crate::config::EngineConfig;
use crate::correction::apply_corrections;
use crate::error::Result;
use crate::input::RunwaySurface;
use crate::resolve::ResolvedInputs;
use crate::tables::{RollDistances, TableStore};
use crate::wind::WindComponent;
use serde::{Deserialize, Serialize};

/// Corrected takeoff figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeoffPerformance {
    /// Corrected ground roll and fifty-foot roll
    pub distances: RollDistances,
    /// Rate of climb, ft/min
    pub rate_of_climb: i32,
}

/// Uncorrected table distances for a snapped weight, altitude and temperature
pub fn compute_takeoff_ground_roll(
    tables: &dyn TableStore,
    weight: i32,
    press_alt: i32,
    temp: i32,
) -> Result<RollDistances> {
    tables.takeoff_distances(weight, press_alt, temp)
}

/// Rate of climb at a snapped altitude and temperature
pub fn compute_takeoff_roc(tables: &dyn TableStore, press_alt: i32, temp: i32) -> Result<i32> {
    Ok(tables.rate_of_climb(press_alt, temp)?.round() as i32)
}

/// Table lookup, wind and surface corrections, and climb rate
pub fn compute_takeoff_performance(
    tables: &dyn TableStore,
    resolved: &ResolvedInputs,
    wind: WindComponent,
    surface: RunwaySurface,
    config: &EngineConfig,
) -> Result<TakeoffPerformance> {
    let base = compute_takeoff_ground_roll(
        tables,
        resolved.takeoff_weight,
        resolved.takeoff_press_alt,
        resolved.takeoff_temp,
    )?;
    let distances = apply_corrections(base, wind, surface, &config.takeoff, &config.wind);
    let rate_of_climb = compute_takeoff_roc(tables, resolved.roc_press_alt, resolved.roc_temp)?;
    Ok(TakeoffPerformance {
        distances,
        rate_of_climb,
    })
}
