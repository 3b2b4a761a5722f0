//! Cruise performance
//!
//! Resolves the power setting for the selected altitude and RPM, then reads
//! endurance and range from the tables of the selected fuel capacity.
//!
//! The power setting table is split into three column sets by how far the
//! cruise temperature is from standard. Some high-RPM settings are not
//! published for the cold column because the engine would overspeed; asking
//! for one of those is rejected outright.

use crate::error::{PerformanceError, Result};
use crate::input::FuelCapacity;
use crate::interpolate::{self, round_to};
use crate::resolve::ResolvedInputs;
use crate::tables::{CruiseFigures, CruiseQuantity, Grid, IsaBucket, TableId, TableStore};
use crate::wind::WindComponent;
use serde::{Deserialize, Serialize};

/// (power setting altitude, RPM) pairs not allowed on an ISA-20 day
pub const COLD_DAY_OVERSPEED: [(i32, i32); 4] = [(2000, 2500), (4000, 2550), (6000, 2600), (8000, 2650)];

/// Standard temperature in °C at a pressure altitude
pub fn standard_temperature(press_alt: i32) -> f64 {
    (-0.002 * press_alt as f64 + 15.0).round()
}

/// Classify the deviation from standard temperature into a column set
pub fn compute_standard_temperature_difference(press_alt: i32, temp: f64) -> IsaBucket {
    let delta = temp - standard_temperature(press_alt);
    if delta <= -10.0 {
        IsaBucket::IsaMinus20
    } else if delta >= 10.0 {
        IsaBucket::IsaPlus20
    } else {
        IsaBucket::Isa
    }
}

/// Reject an operating point that would overspeed the engine on a cold day
pub fn check_for_invalid_data(bucket: IsaBucket, press_alt: i32, rpm: i32) -> Result<()> {
    if bucket == IsaBucket::IsaMinus20 && COLD_DAY_OVERSPEED.contains(&(press_alt, rpm)) {
        tracing::warn!(press_alt, rpm, "cold-day overspeed operating point rejected");
        return Err(PerformanceError::InvalidOperatingPoint { press_alt, rpm });
    }
    Ok(())
}

/// Power, true airspeed and fuel flow of an exact power setting cell
pub fn compute_cruise_power_setting(
    tables: &dyn TableStore,
    press_alt: i32,
    rpm: i32,
    bucket: IsaBucket,
) -> Result<CruiseFigures> {
    tables.power_setting(press_alt, rpm, bucket)
}

/// Endurance or range at a cruise altitude and power percentage
///
/// The query is clamped onto the table's span, then read directly when both
/// coordinates are tabulated or interpolated otherwise.
pub fn compute_endurance_and_range(grid: &Grid, table: TableId, press_alt: i32, power: i32) -> Result<f64> {
    let missing = || PerformanceError::missing(table, format!("({press_alt}, {power})"));
    let (first_row, last_row) = grid.row_span().ok_or_else(missing)?;
    let (first_col, last_col) = grid.column_span().ok_or_else(missing)?;
    let row = press_alt.clamp(first_row, last_row);
    let column = power.clamp(first_col, last_col);
    if row != press_alt || column != power {
        tracing::warn!(%table, press_alt, power, row, column, "cruise query clamped to table span");
    }
    interpolate::grid_value(grid, table, row, column)
}

/// Add the distance a tail wind carries the aircraft over the endurance,
/// or subtract what a head wind costs, rounded to a whole mile
pub fn range_wind_correction(wind: WindComponent, endurance: f64, range: f64) -> f64 {
    (range + endurance * wind.signed_knots()).round()
}

/// Resolved cruise figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruisePerformance {
    /// Temperature bucket the power setting was read from
    pub isa_bucket: IsaBucket,
    /// Figures of the resolved power setting
    pub power: CruiseFigures,
    /// Endurance in hours, one decimal
    pub endurance_hr: f64,
    /// Wind-corrected range in nautical miles
    pub range_nm: f64,
}

/// Power setting, endurance and range at the resolved cruise point
///
/// Fails with `InvalidOperatingPoint` for a cold-day overspeed combination.
pub fn compute_cruise_performance(
    tables: &dyn TableStore,
    resolved: &ResolvedInputs,
    capacity: FuelCapacity,
    wind: WindComponent,
) -> Result<CruisePerformance> {
    let isa_bucket = compute_standard_temperature_difference(resolved.cruise_press_alt_1000, resolved.cruise_temp);
    check_for_invalid_data(isa_bucket, resolved.cruise_power_press_alt, resolved.cruise_rpm)?;

    let power = compute_cruise_power_setting(
        tables,
        resolved.cruise_power_press_alt,
        resolved.cruise_rpm,
        isa_bucket,
    )?;

    let endurance_id = CruiseQuantity::Endurance.table_id(capacity);
    let endurance = compute_endurance_and_range(
        tables.cruise_grid(capacity, CruiseQuantity::Endurance),
        endurance_id,
        resolved.cruise_press_alt_500,
        power.bhp_percent,
    )?;
    let endurance_hr = round_to(endurance, 1);

    let range_id = CruiseQuantity::Range.table_id(capacity);
    let range = compute_endurance_and_range(
        tables.cruise_grid(capacity, CruiseQuantity::Range),
        range_id,
        resolved.cruise_press_alt_500,
        power.bhp_percent,
    )?;
    let range_nm = range_wind_correction(wind, endurance_hr, range.round());

    tracing::debug!(
        %isa_bucket,
        bhp_percent = power.bhp_percent,
        ktas = power.ktas,
        gph = power.gph,
        endurance_hr,
        range_nm,
        "cruise resolved"
    );

    Ok(CruisePerformance {
        isa_bucket,
        power,
        endurance_hr,
        range_nm,
    })
}
