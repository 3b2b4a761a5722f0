//! Table Interpolation
//!
//! Linear and bilinear interpolation over [`Grid`] tables for queries that
//! fall between tabulated rows or columns. All intermediate results are
//! rounded to two decimals, and the bilinear case interpolates along the
//! column axis first, then along the row axis, so the rounding matches the
//! published figures.
//!
//! Queries outside a table's span are never extrapolated. Callers clamp
//! them onto the table first; an unclamped query is reported as a missing
//! table entry.

use crate::error::{PerformanceError, Result};
use crate::tables::{Grid, TableId};

/// Round `value` to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Two-point linear interpolation, rounded to two decimals
///
/// `x1 == x2` is a table construction defect and reported as
/// [`PerformanceError::DegenerateInterpolation`].
pub fn interpolate(x1: f64, y1: f64, x2: f64, y2: f64, xi: f64) -> Result<f64> {
    if x1 == x2 {
        return Err(PerformanceError::DegenerateInterpolation { x: x1 });
    }
    Ok(round_to(((xi - x2) * y1 - (xi - x1) * y2) / (x1 - x2), 2))
}

/// Immediate tabulated neighbours of an off-grid `value`
///
/// Returns `None` when `value` is itself tabulated or lies outside the axis.
pub fn bracket(axis: &[i32], value: i32) -> Option<(i32, i32)> {
    axis.windows(2)
        .find(|pair| pair[0] < value && value < pair[1])
        .map(|pair| (pair[0], pair[1]))
}

/// Value of `grid` at `(row, column)`, interpolating when off-grid
pub fn grid_value(grid: &Grid, table: TableId, row: i32, column: i32) -> Result<f64> {
    let on_row = grid.row_index(row).is_some();
    let on_column = grid.column_index(column).is_some();

    match (on_row, on_column) {
        (true, true) => grid.lookup(table, row, column),
        (true, false) => along_columns(grid, table, row, column),
        (false, true) => {
            let (low, high) = row_bracket(grid, table, row, column)?;
            let low_value = grid.lookup(table, low, column)?;
            let high_value = grid.lookup(table, high, column)?;
            tracing::trace!(%table, low, high, row, "interpolating between rows");
            interpolate(low as f64, low_value, high as f64, high_value, row as f64)
        }
        (false, false) => {
            let (low, high) = row_bracket(grid, table, row, column)?;
            let low_value = along_columns(grid, table, low, column)?;
            let high_value = along_columns(grid, table, high, column)?;
            tracing::trace!(%table, low, high, row, column, "bilinear interpolation");
            interpolate(low as f64, low_value, high as f64, high_value, row as f64)
        }
    }
}

fn along_columns(grid: &Grid, table: TableId, row: i32, column: i32) -> Result<f64> {
    let (low, high) = bracket(&grid.columns, column)
        .ok_or_else(|| PerformanceError::missing(table, format!("({row}, {column})")))?;
    let low_value = grid.lookup(table, row, low)?;
    let high_value = grid.lookup(table, row, high)?;
    tracing::trace!(%table, row, low, high, column, "interpolating between columns");
    interpolate(low as f64, low_value, high as f64, high_value, column as f64)
}

fn row_bracket(grid: &Grid, table: TableId, row: i32, column: i32) -> Result<(i32, i32)> {
    bracket(&grid.rows, row)
        .ok_or_else(|| PerformanceError::missing(table, format!("({row}, {column})")))
}
