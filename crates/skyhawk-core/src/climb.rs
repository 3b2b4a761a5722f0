//! Climb profiles
//!
//! Time, fuel and distance to climb from sea level to a pressure altitude,
//! corrected for temperatures above standard. The climb segment of a flight
//! is the difference between the profile to cruise altitude and the profile
//! to the departure field's altitude.

use crate::error::Result;
use crate::interpolate::round_to;
use crate::tables::TableStore;
use serde::{Deserialize, Serialize};

/// Time (min), fuel (gal) and horizontal distance (nm) of a climb
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClimbProfile {
    /// Time to climb, min
    pub time_min: f64,
    /// Fuel burnt in the climb, gal
    pub fuel_gal: f64,
    /// Horizontal distance covered, nm
    pub distance_nm: f64,
}

impl ClimbProfile {
    /// Componentwise `self - earlier`, each rounded to one decimal
    pub fn since(&self, earlier: &ClimbProfile) -> ClimbProfile {
        ClimbProfile {
            time_min: round_to(self.time_min - earlier.time_min, 1),
            fuel_gal: round_to(self.fuel_gal - earlier.fuel_gal, 1),
            distance_nm: round_to(self.distance_nm - earlier.distance_nm, 1),
        }
    }

    fn clamped_at_zero(self) -> ClimbProfile {
        ClimbProfile {
            time_min: self.time_min.max(0.0),
            fuel_gal: self.fuel_gal.max(0.0),
            distance_nm: self.distance_nm.max(0.0),
        }
    }
}

/// Scale a profile by 1% per °C above the standard temperature
///
/// Temperatures at or below standard leave the profile unchanged.
pub fn apply_temperature_correction(profile: ClimbProfile, std_temp: f64, temp: f64) -> ClimbProfile {
    let delta = temp - std_temp;
    if delta <= 0.0 {
        return profile;
    }
    let scale = 1.0 + round_to(delta / 100.0, 2);
    ClimbProfile {
        time_min: round_to(profile.time_min * scale, 2),
        fuel_gal: round_to(profile.fuel_gal * scale, 2),
        distance_nm: round_to(profile.distance_nm * scale, 2),
    }
}

/// Climb from sea level to a tabulated `press_alt` at `temp` °C
pub fn climb_profile(tables: &dyn TableStore, press_alt: i32, temp: f64) -> Result<ClimbProfile> {
    let row = tables.climb_row(press_alt)?;
    let profile = ClimbProfile {
        time_min: row.time_min,
        fuel_gal: row.fuel_gal,
        distance_nm: row.distance_nm,
    };
    Ok(apply_temperature_correction(profile, row.std_temp, temp))
}

/// Climb from the departure altitude to the cruise altitude
///
/// A cruise altitude below the departure field needs no climb. Each component
/// is clamped at zero so a descent never credits fuel or distance to the trip.
pub fn climb_segment(
    tables: &dyn TableStore,
    takeoff_press_alt: i32,
    takeoff_temp: f64,
    cruise_press_alt: i32,
    cruise_temp: f64,
) -> Result<ClimbProfile> {
    let to_departure = climb_profile(tables, takeoff_press_alt, takeoff_temp)?;
    let to_cruise = climb_profile(tables, cruise_press_alt, cruise_temp)?;
    if cruise_press_alt < takeoff_press_alt {
        tracing::warn!(takeoff_press_alt, cruise_press_alt, "cruise altitude below departure, no climb segment");
    }
    let segment = to_cruise.since(&to_departure).clamped_at_zero();
    tracing::trace!(
        takeoff_press_alt,
        cruise_press_alt,
        time_min = segment.time_min,
        fuel_gal = segment.fuel_gal,
        distance_nm = segment.distance_nm,
        "climb segment"
    );
    Ok(segment)
}
