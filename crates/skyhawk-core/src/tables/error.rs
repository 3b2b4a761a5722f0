//! Error types for table loading

use super::TableId;
use thiserror::Error;

/// Errors that can occur while loading or checking a table set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("{table} table has an empty {axis} axis")]
    EmptyAxis { table: TableId, axis: &'static str },

    #[error("{table} table {axis} axis is not strictly increasing at {value}")]
    AxisNotIncreasing {
        table: TableId,
        axis: &'static str,
        value: i32,
    },

    #[error("{table} table has {actual_rows}x{actual_columns} cells, axes require {rows}x{columns}")]
    ShapeMismatch {
        table: TableId,
        rows: usize,
        columns: usize,
        actual_rows: usize,
        actual_columns: usize,
    },

    #[error("{table} table has a duplicate row for {key}")]
    DuplicateRow { table: TableId, key: String },
}
