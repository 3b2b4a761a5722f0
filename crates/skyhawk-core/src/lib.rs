//! # Skyhawk Performance Core
//!
//! Takeoff, cruise, fuel and landing performance of the Cessna 172N,
//! computed from the published Pilot's Operating Handbook tables.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Grid snapping of pilot inputs onto the table axes
//! - Linear and bilinear table interpolation
//! - Wind and runway-surface corrections of takeoff and landing distances
//! - Climb, cruise power setting, endurance and range resolution
//! - Trip fuel planning
//! - Weight and balance
//!
//! ## Example
//!
//! ```rust,ignore
//! use skyhawk_core::prelude::*;
//!
//! let tables = PerformanceTables::reference()?;
//! let input = InputRecord::from_json_str(&std::fs::read_to_string("case.json")?)?;
//!
//! let result = PerformanceCalculator::new(&tables).compute(&input)?;
//! println!("takeoff ground roll: {} ft", result.to_roll);
//! println!("fuel reserve: {} gal", result.fuel_reserve);
//! ```

pub mod balance;
pub mod climb;
pub mod config;
pub mod correction;
pub mod cruise;
pub mod error;
pub mod fuel;
pub mod grid;
pub mod input;
pub mod interpolate;
pub mod landing;
pub mod orchestrator;
pub mod resolve;
pub mod tables;
pub mod takeoff;
pub mod validation;
pub mod wind;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::balance::{compute_weight_and_balance, BalanceResult, LoadingInput, SeatConfig};
    pub use crate::config::EngineConfig;
    pub use crate::error::{PerformanceError, Result};
    pub use crate::input::{FuelCapacity, InputRecord, RunwaySurface};
    pub use crate::orchestrator::{PerformanceCalculator, PerformanceReport, PerformanceResult};
    pub use crate::tables::{PerformanceTables, TableStore};
    pub use crate::validation::{validate_input, ValidationReport};
    pub use crate::wind::WindComponent;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
