//! Grid-resolved inputs
//!
//! [`ResolvedInputs`] is the snapped view of an [`InputRecord`] that every
//! table lookup uses, together with the unsnapped values the correction math
//! needs. It is built once at the start of a computation.

use crate::error::{PerformanceError, Result};
use crate::grid::{
    self, CRUISE_PRESS_ALT_1000, CRUISE_PRESS_ALT_500, POWER_PRESS_ALT, ROC_PRESS_ALT, ROC_TEMP,
    RUNWAY_PRESS_ALT, RUNWAY_TEMP,
};
use crate::input::InputRecord;
use crate::tables::{TableId, TableStore};
use serde::{Deserialize, Serialize};

/// Snapped table keys plus the real values used in corrections
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInputs {
    /// Weight variant of the takeoff table
    pub takeoff_weight: i32,
    /// Takeoff altitude on the runway grid
    pub takeoff_press_alt: i32,
    /// Takeoff temperature on the runway grid
    pub takeoff_temp: i32,
    /// Unsnapped takeoff temperature, for the climb correction
    pub takeoff_real_temp: f64,
    /// Takeoff altitude on the rate-of-climb grid
    pub roc_press_alt: i32,
    /// Takeoff temperature on the rate-of-climb grid
    pub roc_temp: i32,
    /// Cruise altitude on the endurance/range grid
    pub cruise_press_alt_500: i32,
    /// Cruise altitude on the climb table grid
    pub cruise_press_alt_1000: i32,
    /// Cruise altitude on the power setting grid
    pub cruise_power_press_alt: i32,
    /// Nearest tabulated RPM
    pub cruise_rpm: i32,
    /// Unsnapped cruise temperature
    pub cruise_temp: f64,
    /// Trip distance, nm
    pub travel_distance: f64,
    /// Landing altitude on the runway grid
    pub landing_press_alt: i32,
    /// Landing temperature on the runway grid
    pub landing_temp: i32,
}

impl ResolvedInputs {
    /// Snap every input onto its table grid
    ///
    /// The RPM is snapped against the RPMs tabulated at the resolved power
    /// setting altitude, so the table store is needed here.
    pub fn resolve(input: &InputRecord, tables: &dyn TableStore) -> Result<Self> {
        let cruise_power_press_alt = POWER_PRESS_ALT.snap(input.cruise.press_alt);
        let rpms = tables.power_rpms(cruise_power_press_alt);
        let cruise_rpm = grid::snap_rpm(&rpms, input.cruise.rpm).ok_or_else(|| {
            PerformanceError::missing(
                TableId::PowerSetting,
                format!("any RPM at {cruise_power_press_alt} ft"),
            )
        })?;
        if cruise_rpm as f64 != input.cruise.rpm {
            tracing::debug!(requested = input.cruise.rpm, snapped = cruise_rpm, "cruise RPM snapped");
        }

        Ok(Self {
            takeoff_weight: grid::snap_weight(input.weight),
            takeoff_press_alt: RUNWAY_PRESS_ALT.snap(input.takeoff.press_alt),
            takeoff_temp: RUNWAY_TEMP.snap(input.takeoff.temp),
            takeoff_real_temp: input.takeoff.temp,
            roc_press_alt: ROC_PRESS_ALT.snap(input.takeoff.press_alt),
            roc_temp: ROC_TEMP.snap(input.takeoff.temp),
            cruise_press_alt_500: CRUISE_PRESS_ALT_500.snap(input.cruise.press_alt),
            cruise_press_alt_1000: CRUISE_PRESS_ALT_1000.snap(input.cruise.press_alt),
            cruise_power_press_alt,
            cruise_rpm,
            cruise_temp: input.cruise.temp,
            travel_distance: input.cruise.travel_distance,
            landing_press_alt: RUNWAY_PRESS_ALT.snap(input.landing.press_alt),
            landing_temp: RUNWAY_TEMP.snap(input.landing.temp),
        })
    }
}
