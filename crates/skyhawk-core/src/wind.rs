//! Wind components
//!
//! Reduces a heading plus reported wind to the along-track component used
//! by the distance corrections and the cruise ground speed.

use crate::input::InputRecord;
use crate::interpolate::round_to;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Along-track wind, in knots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "knots", rename_all = "snake_case")]
pub enum WindComponent {
    /// No along-track wind (calm or a pure crosswind)
    #[default]
    Calm,
    /// Wind on the nose, knots
    Headwind(f64),
    /// Wind from behind, knots
    Tailwind(f64),
}

impl WindComponent {
    /// Magnitude in knots
    pub fn knots(&self) -> f64 {
        match *self {
            WindComponent::Calm => 0.0,
            WindComponent::Headwind(kt) | WindComponent::Tailwind(kt) => kt,
        }
    }

    /// Signed knots, positive for a tailwind
    pub fn signed_knots(&self) -> f64 {
        match *self {
            WindComponent::Calm => 0.0,
            WindComponent::Headwind(kt) => -kt,
            WindComponent::Tailwind(kt) => kt,
        }
    }

    /// True when there is no along-track wind
    pub fn is_calm(&self) -> bool {
        matches!(self, WindComponent::Calm)
    }
}

impl fmt::Display for WindComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindComponent::Calm => f.write_str("calm"),
            WindComponent::Headwind(kt) => write!(f, "{kt} kt headwind"),
            WindComponent::Tailwind(kt) => write!(f, "{kt} kt tailwind"),
        }
    }
}

/// Along-track component of a wind blowing from `wind_direction` for an
/// aircraft on `heading`
///
/// The magnitude is rounded to a tenth of a knot. A wind exactly across the
/// heading has no along-track component.
pub fn compute_wind_component(heading: f64, wind_speed: f64, wind_direction: f64) -> WindComponent {
    let angle = (heading - wind_direction).abs();
    if wind_speed == 0.0 || angle == 90.0 || angle == 270.0 {
        return WindComponent::Calm;
    }
    let knots = round_to(wind_speed * angle.to_radians().cos(), 1).abs();
    if knots == 0.0 {
        WindComponent::Calm
    } else if angle > 90.0 && angle < 270.0 {
        WindComponent::Tailwind(knots)
    } else {
        WindComponent::Headwind(knots)
    }
}

/// Wind components of the three flight phases
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhaseWinds {
    /// Departure runway
    pub takeoff: WindComponent,
    /// Cruise leg
    pub cruise: WindComponent,
    /// Arrival runway
    pub landing: WindComponent,
}

impl PhaseWinds {
    /// Resolve the wind of every phase of `input`
    pub fn resolve(input: &InputRecord) -> Self {
        let to = &input.takeoff;
        let cr = &input.cruise;
        let land = &input.landing;
        Self {
            takeoff: compute_wind_component(to.heading, to.wind_speed, to.wind_direction),
            cruise: compute_wind_component(cr.heading, cr.wind_speed, cr.wind_direction),
            landing: compute_wind_component(land.heading, land.wind_speed, land.wind_direction),
        }
    }
}
