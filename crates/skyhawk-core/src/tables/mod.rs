//! Performance Tables
//!
//! The nine reference tables the engine reads from, plus the [`TableStore`]
//! capability the rest of the crate queries them through.
//!
//! Tables are plain serde structures. The reference C172N set ships with the
//! crate as JSON and is available through [`PerformanceTables::reference`];
//! alternates can be loaded with [`PerformanceTables::from_file`]. Loading
//! checks that every axis is non-empty and strictly increasing and that every
//! cell matrix matches its axes. After that the set is never mutated, so a
//! single instance can be shared between threads.

pub mod error;

use crate::error::{PerformanceError, Result};
use crate::input::FuelCapacity;
use error::TableError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

const REFERENCE_JSON: &str = include_str!("../../data/c172n.json");

/// Identifies one of the reference tables, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableId {
    /// Takeoff distances
    Takeoff,
    /// Rate of climb after takeoff
    RateOfClimb,
    /// Climb from sea level
    Climb,
    /// Cruise power setting
    PowerSetting,
    /// Endurance, 40 gallon tanks
    Endurance40,
    /// Endurance, 50 gallon tanks
    Endurance50,
    /// Range, 40 gallon tanks
    Range40,
    /// Range, 50 gallon tanks
    Range50,
    /// Landing distances
    Landing,
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableId::Takeoff => "takeoff",
            TableId::RateOfClimb => "rate-of-climb",
            TableId::Climb => "climb",
            TableId::PowerSetting => "cruise power setting",
            TableId::Endurance40 => "endurance (40 gal)",
            TableId::Endurance50 => "endurance (50 gal)",
            TableId::Range40 => "range (40 gal)",
            TableId::Range50 => "range (50 gal)",
            TableId::Landing => "landing",
        };
        f.write_str(name)
    }
}

/// Standard-temperature deviation column set of the power setting table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsaBucket {
    /// 20 °C below standard
    #[serde(rename = "isa_m20")]
    IsaMinus20,
    /// Standard temperature
    #[serde(rename = "isa")]
    Isa,
    /// 20 °C above standard
    #[serde(rename = "isa_p20")]
    IsaPlus20,
}

impl fmt::Display for IsaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsaBucket::IsaMinus20 => f.write_str("ISA-20"),
            IsaBucket::Isa => f.write_str("ISA"),
            IsaBucket::IsaPlus20 => f.write_str("ISA+20"),
        }
    }
}

/// Which cruise table of a fuel-capacity variant to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CruiseQuantity {
    /// Endurance in hours
    Endurance,
    /// Range in nautical miles
    Range,
}

impl CruiseQuantity {
    /// Table identifier for this quantity under the given capacity
    pub fn table_id(self, capacity: FuelCapacity) -> TableId {
        match (self, capacity) {
            (CruiseQuantity::Endurance, FuelCapacity::Gal40) => TableId::Endurance40,
            (CruiseQuantity::Endurance, FuelCapacity::Gal50) => TableId::Endurance50,
            (CruiseQuantity::Range, FuelCapacity::Gal40) => TableId::Range40,
            (CruiseQuantity::Range, FuelCapacity::Gal50) => TableId::Range50,
        }
    }
}

/// Ground roll and distance to clear a 50 ft obstacle, in feet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollDistances {
    /// Ground roll
    pub ground_roll: f64,
    /// Distance over a 50 ft obstacle
    pub fifty_ft: f64,
}

impl RollDistances {
    /// Distances from ground roll and fifty-foot roll
    pub fn new(ground_roll: f64, fifty_ft: f64) -> Self {
        Self {
            ground_roll,
            fifty_ft,
        }
    }
}

/// Generic 2-D table: `values[r][c]` is the cell at `(rows[r], columns[c])`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Row axis, ascending
    pub rows: Vec<i32>,
    /// Column axis, ascending
    pub columns: Vec<i32>,
    /// Cells, one vector per row
    pub values: Vec<Vec<f64>>,
}

impl Grid {
    /// Grid from its axes and cells
    pub fn new(rows: Vec<i32>, columns: Vec<i32>, values: Vec<Vec<f64>>) -> Self {
        Self {
            rows,
            columns,
            values,
        }
    }

    /// Position of an exact row value
    pub fn row_index(&self, row: i32) -> Option<usize> {
        self.rows.iter().position(|&r| r == row)
    }

    /// Position of an exact column value
    pub fn column_index(&self, column: i32) -> Option<usize> {
        self.columns.iter().position(|&c| c == column)
    }

    /// Exact cell lookup
    pub fn get(&self, row: i32, column: i32) -> Option<f64> {
        let r = self.row_index(row)?;
        let c = self.column_index(column)?;
        self.values.get(r).and_then(|cells| cells.get(c)).copied()
    }

    /// Exact cell lookup that reports a missing cell as an engine error
    pub fn lookup(&self, table: TableId, row: i32, column: i32) -> Result<f64> {
        let value = self
            .get(row, column)
            .ok_or_else(|| PerformanceError::missing(table, format!("({row}, {column})")))?;
        tracing::trace!(%table, row, column, value, "table lookup");
        Ok(value)
    }

    /// First and last row value
    pub fn row_span(&self) -> Option<(i32, i32)> {
        Some((*self.rows.first()?, *self.rows.last()?))
    }

    /// First and last column value
    pub fn column_span(&self) -> Option<(i32, i32)> {
        Some((*self.columns.first()?, *self.columns.last()?))
    }

    fn check(&self, table: TableId) -> std::result::Result<(), TableError> {
        check_axis(table, "row", &self.rows)?;
        check_axis(table, "column", &self.columns)?;
        check_shape(table, self.rows.len(), self.columns.len(), &self.values)
    }
}

/// Takeoff or landing distances indexed by pressure altitude and temperature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceTable {
    /// Pressure altitude axis, ft
    pub press_alts: Vec<i32>,
    /// Temperature axis, °C
    pub temps: Vec<i32>,
    /// Ground roll cells
    pub ground_roll: Vec<Vec<f64>>,
    /// Fifty-foot roll cells
    pub fifty_ft: Vec<Vec<f64>>,
}

impl DistanceTable {
    /// Exact lookup of both distances at a tabulated altitude and temperature
    pub fn distances(&self, table: TableId, press_alt: i32, temp: i32) -> Result<RollDistances> {
        let missing = || PerformanceError::missing(table, format!("{press_alt} ft / {temp} °C"));
        let r = self
            .press_alts
            .iter()
            .position(|&a| a == press_alt)
            .ok_or_else(missing)?;
        let c = self
            .temps
            .iter()
            .position(|&t| t == temp)
            .ok_or_else(missing)?;
        let cell = |m: &[Vec<f64>]| m.get(r).and_then(|row| row.get(c)).copied();
        match (cell(&self.ground_roll), cell(&self.fifty_ft)) {
            (Some(ground_roll), Some(fifty_ft)) => {
                tracing::trace!(%table, press_alt, temp, ground_roll, fifty_ft, "distance lookup");
                Ok(RollDistances::new(ground_roll, fifty_ft))
            }
            _ => Err(missing()),
        }
    }

    fn check(&self, table: TableId) -> std::result::Result<(), TableError> {
        check_axis(table, "pressure altitude", &self.press_alts)?;
        check_axis(table, "temperature", &self.temps)?;
        check_shape(table, self.press_alts.len(), self.temps.len(), &self.ground_roll)?;
        check_shape(table, self.press_alts.len(), self.temps.len(), &self.fifty_ft)
    }
}

/// One weight variant of the takeoff table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedDistanceTable {
    /// Takeoff weight of this variant, lb
    pub weight: i32,
    /// Distances of this variant
    #[serde(flatten)]
    pub table: DistanceTable,
}

/// Time, fuel and distance to climb from sea level, at standard temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimbRow {
    /// Pressure altitude, ft
    pub press_alt: i32,
    /// Standard temperature at this altitude, °C
    pub std_temp: f64,
    /// Time to climb, min
    pub time_min: f64,
    /// Fuel to climb, gal
    pub fuel_gal: f64,
    /// Distance to climb, nm
    pub distance_nm: f64,
}

/// Cruise figures of one power setting cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CruiseFigures {
    /// Percent of rated brake horsepower
    pub bhp_percent: i32,
    /// True airspeed in knots
    pub ktas: f64,
    /// Fuel flow in US gallons per hour
    pub gph: f64,
}

/// One (pressure altitude, RPM) row of the cruise power setting table
///
/// A bucket left out of the row has no published figures, which is how the
/// cold-day overspeed cells are represented.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerRow {
    /// Pressure altitude, ft
    pub press_alt: i32,
    /// Engine RPM
    pub rpm: i32,
    /// Figures 20 °C below standard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isa_m20: Option<CruiseFigures>,
    /// Figures at standard temperature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isa: Option<CruiseFigures>,
    /// Figures 20 °C above standard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isa_p20: Option<CruiseFigures>,
}

impl PowerRow {
    /// Figures of one temperature bucket, if published
    pub fn figures(&self, bucket: IsaBucket) -> Option<CruiseFigures> {
        match bucket {
            IsaBucket::IsaMinus20 => self.isa_m20,
            IsaBucket::Isa => self.isa,
            IsaBucket::IsaPlus20 => self.isa_p20,
        }
    }
}

/// Endurance (hours) and range (nm) tables of one fuel-capacity variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityTables {
    /// Endurance grid
    pub endurance: Grid,
    /// Range grid
    pub range: Grid,
}

/// Read-only table capability the engine computes against
///
/// Implementations must be immutable once constructed; the engine only ever
/// reads through this trait.
pub trait TableStore: Send + Sync {
    /// Takeoff distances for a tabulated weight, altitude and temperature
    fn takeoff_distances(&self, weight: i32, press_alt: i32, temp: i32) -> Result<RollDistances>;

    /// Rate of climb in ft/min at a tabulated altitude and temperature
    fn rate_of_climb(&self, press_alt: i32, temp: i32) -> Result<f64>;

    /// Climb-from-sea-level row for a tabulated altitude
    fn climb_row(&self, press_alt: i32) -> Result<ClimbRow>;

    /// Tabulated RPM values at a power-setting altitude, ascending
    fn power_rpms(&self, press_alt: i32) -> Vec<i32>;

    /// Cruise figures for an exact (altitude, RPM, bucket) cell
    fn power_setting(&self, press_alt: i32, rpm: i32, bucket: IsaBucket) -> Result<CruiseFigures>;

    /// Endurance or range table of a fuel-capacity variant
    fn cruise_grid(&self, capacity: FuelCapacity, quantity: CruiseQuantity) -> &Grid;

    /// Landing distances for a tabulated altitude and temperature
    fn landing_distances(&self, press_alt: i32, temp: i32) -> Result<RollDistances>;
}

/// The complete reference table set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTables {
    /// Takeoff distances, one table per weight
    pub takeoff: Vec<WeightedDistanceTable>,
    /// Rate of climb by altitude and temperature
    pub rate_of_climb: Grid,
    /// Climb rows by altitude
    pub climb: Vec<ClimbRow>,
    /// Cruise power setting rows
    pub power: Vec<PowerRow>,
    /// Cruise tables for 40 gallon tanks
    pub cruise_40: CapacityTables,
    /// Cruise tables for 50 gallon tanks
    pub cruise_50: CapacityTables,
    /// Landing distances
    pub landing: DistanceTable,
}

impl PerformanceTables {
    /// The C172N table set bundled with the crate
    pub fn reference() -> std::result::Result<Self, TableError> {
        Self::from_json_str(REFERENCE_JSON)
    }

    /// Load a table set from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, TableError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| TableError::IoError(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "loading performance tables");
        Self::from_json_str(&content)
    }

    /// Parse and check a table set from JSON text
    pub fn from_json_str(content: &str) -> std::result::Result<Self, TableError> {
        let tables: Self =
            serde_json::from_str(content).map_err(|e| TableError::ParseError(e.to_string()))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Check the structural invariants of every table
    pub fn validate(&self) -> std::result::Result<(), TableError> {
        let weights: Vec<i32> = self.takeoff.iter().map(|t| t.weight).collect();
        check_axis(TableId::Takeoff, "weight", &weights)?;
        for variant in &self.takeoff {
            variant.table.check(TableId::Takeoff)?;
        }

        self.rate_of_climb.check(TableId::RateOfClimb)?;

        let climb_alts: Vec<i32> = self.climb.iter().map(|r| r.press_alt).collect();
        check_axis(TableId::Climb, "pressure altitude", &climb_alts)?;

        let mut seen = HashSet::new();
        for row in &self.power {
            if !seen.insert((row.press_alt, row.rpm)) {
                return Err(TableError::DuplicateRow {
                    table: TableId::PowerSetting,
                    key: format!("{} ft / {} RPM", row.press_alt, row.rpm),
                });
            }
        }

        for capacity in [FuelCapacity::Gal40, FuelCapacity::Gal50] {
            for quantity in [CruiseQuantity::Endurance, CruiseQuantity::Range] {
                self.cruise_grid(capacity, quantity)
                    .check(quantity.table_id(capacity))?;
            }
        }

        self.landing.check(TableId::Landing)
    }

    fn capacity(&self, capacity: FuelCapacity) -> &CapacityTables {
        match capacity {
            FuelCapacity::Gal40 => &self.cruise_40,
            FuelCapacity::Gal50 => &self.cruise_50,
        }
    }
}

impl TableStore for PerformanceTables {
    fn takeoff_distances(&self, weight: i32, press_alt: i32, temp: i32) -> Result<RollDistances> {
        let variant = self
            .takeoff
            .iter()
            .find(|t| t.weight == weight)
            .ok_or_else(|| PerformanceError::missing(TableId::Takeoff, format!("{weight} lb")))?;
        variant.table.distances(TableId::Takeoff, press_alt, temp)
    }

    fn rate_of_climb(&self, press_alt: i32, temp: i32) -> Result<f64> {
        self.rate_of_climb
            .lookup(TableId::RateOfClimb, press_alt, temp)
    }

    fn climb_row(&self, press_alt: i32) -> Result<ClimbRow> {
        self.climb
            .iter()
            .find(|r| r.press_alt == press_alt)
            .copied()
            .ok_or_else(|| PerformanceError::missing(TableId::Climb, format!("{press_alt} ft")))
    }

    fn power_rpms(&self, press_alt: i32) -> Vec<i32> {
        let mut rpms: Vec<i32> = self
            .power
            .iter()
            .filter(|r| r.press_alt == press_alt)
            .map(|r| r.rpm)
            .collect();
        rpms.sort_unstable();
        rpms
    }

    fn power_setting(&self, press_alt: i32, rpm: i32, bucket: IsaBucket) -> Result<CruiseFigures> {
        self.power
            .iter()
            .find(|r| r.press_alt == press_alt && r.rpm == rpm)
            .and_then(|r| r.figures(bucket))
            .ok_or_else(|| {
                PerformanceError::missing(
                    TableId::PowerSetting,
                    format!("{press_alt} ft / {rpm} RPM / {bucket}"),
                )
            })
    }

    fn cruise_grid(&self, capacity: FuelCapacity, quantity: CruiseQuantity) -> &Grid {
        let tables = self.capacity(capacity);
        match quantity {
            CruiseQuantity::Endurance => &tables.endurance,
            CruiseQuantity::Range => &tables.range,
        }
    }

    fn landing_distances(&self, press_alt: i32, temp: i32) -> Result<RollDistances> {
        self.landing.distances(TableId::Landing, press_alt, temp)
    }
}

fn check_axis(table: TableId, axis: &'static str, values: &[i32]) -> std::result::Result<(), TableError> {
    if values.is_empty() {
        return Err(TableError::EmptyAxis { table, axis });
    }
    for pair in values.windows(2) {
        if pair[1] <= pair[0] {
            return Err(TableError::AxisNotIncreasing {
                table,
                axis,
                value: pair[1],
            });
        }
    }
    Ok(())
}

fn check_shape(
    table: TableId,
    rows: usize,
    columns: usize,
    values: &[Vec<f64>],
) -> std::result::Result<(), TableError> {
    let ragged = values.iter().find(|row| row.len() != columns);
    if values.len() != rows || ragged.is_some() {
        return Err(TableError::ShapeMismatch {
            table,
            rows,
            columns,
            actual_rows: values.len(),
            actual_columns: ragged.map_or(columns, |row| row.len()),
        });
    }
    Ok(())
}
