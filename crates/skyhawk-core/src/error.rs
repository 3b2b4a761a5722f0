//! Engine error types
//!
//! Every error is fatal to the computation that raised it. Performance
//! figures are safety relevant, so there is no partial result to fall back on.

use crate::tables::error::TableError;
use crate::tables::TableId;
use thiserror::Error;

/// Errors that abort a performance computation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerformanceError {
    #[error("No entry in the {table} table for {key}")]
    MissingTableEntry { table: TableId, key: String },

    #[error("{rpm} RPM exceeds the maximum for a cold day (ISA-20) at {press_alt} ft pressure altitude")]
    InvalidOperatingPoint { press_alt: i32, rpm: i32 },

    #[error("Degenerate interpolation: both brackets sit at {x}")]
    DegenerateInterpolation { x: f64 },

    #[error("Malformed input field '{field}': {reason}")]
    MalformedInput { field: String, reason: String },

    #[error("Cruise ground speed is {ground_speed} kt, the leg cannot be flown")]
    NonPositiveGroundSpeed { ground_speed: f64 },

    #[error("Corrected {quantity} is {value} ft, not a usable distance")]
    UnusableDistance { quantity: String, value: f64 },

    #[error(transparent)]
    Table(#[from] TableError),
}

impl PerformanceError {
    pub(crate) fn missing(table: TableId, key: impl Into<String>) -> Self {
        Self::MissingTableEntry {
            table,
            key: key.into(),
        }
    }

    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the engine
pub type Result<T> = std::result::Result<T, PerformanceError>;
