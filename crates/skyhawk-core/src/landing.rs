//! Landing performance
//!
//! Same pipeline as takeoff with the landing table and a larger grass
//! penalty.

use crate::config::EngineConfig;
use crate::correction::apply_corrections;
use crate::error::Result;
use crate::input::RunwaySurface;
use crate::tables::{RollDistances, TableStore};
use crate::wind::WindComponent;

/// Uncorrected landing distances for a snapped altitude and temperature
pub fn compute_landing_ground_roll(
    tables: &dyn TableStore,
    press_alt: i32,
    temp: i32,
) -> Result<RollDistances> {
    tables.landing_distances(press_alt, temp)
}

/// Table lookup followed by wind and surface corrections
pub fn compute_landing_performance(
    tables: &dyn TableStore,
    press_alt: i32,
    temp: i32,
    wind: WindComponent,
    surface: RunwaySurface,
    config: &EngineConfig,
) -> Result<RollDistances> {
    let base = compute_landing_ground_roll(tables, press_alt, temp)?;
    Ok(apply_corrections(base, wind, surface, &config.landing, &config.wind))
}
