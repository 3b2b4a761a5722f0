//! Runway distance corrections
//!
//! Takeoff and landing share one pipeline: the table distances are first
//! corrected for the along-track wind, then for the runway surface. Every
//! corrected distance is rounded up to the next whole foot.

use crate::config::{PhaseCorrection, WindCorrection};
use crate::input::RunwaySurface;
use crate::interpolate::round_to;
use crate::tables::RollDistances;
use crate::wind::WindComponent;

/// Round up to a whole foot; the two-decimal rounding first removes binary
/// noise such as `756.000000001`.
fn ceil_feet(distance: f64) -> f64 {
    round_to(distance, 2).ceil()
}

/// Fractional distance change caused by the wind, negative for a headwind
pub fn wind_factor(wind: WindComponent, config: &WindCorrection) -> f64 {
    match wind {
        WindComponent::Calm => 0.0,
        WindComponent::Headwind(kt) => -round_to(kt * config.knot_factor / config.headwind_divisor, 2),
        WindComponent::Tailwind(kt) => round_to(kt * config.knot_factor / config.tailwind_divisor, 2),
    }
}

/// Correct both distances for the along-track wind
///
/// A calm wind leaves the distances untouched.
pub fn correct_distance_for_wind(
    distances: RollDistances,
    wind: WindComponent,
    config: &WindCorrection,
) -> RollDistances {
    if wind.is_calm() {
        return distances;
    }
    let factor = wind_factor(wind, config);
    RollDistances::new(
        ceil_feet(distances.ground_roll + distances.ground_roll * factor),
        ceil_feet(distances.fifty_ft + distances.fifty_ft * factor),
    )
}

/// Correct both distances for the runway surface
///
/// On grass the same absolute increment, a fraction of the ground roll, is
/// added to both distances. Paved runways need no correction.
pub fn correct_distance_for_runway_condition(
    distances: RollDistances,
    surface: RunwaySurface,
    correction: &PhaseCorrection,
) -> RollDistances {
    match surface {
        RunwaySurface::Paved => distances,
        RunwaySurface::Grass => {
            let delta = round_to(distances.ground_roll * correction.grass_factor, 2);
            RollDistances::new(
                ceil_feet(distances.ground_roll + delta),
                ceil_feet(distances.fifty_ft + delta),
            )
        }
    }
}

/// Wind correction followed by surface correction
pub fn apply_corrections(
    base: RollDistances,
    wind: WindComponent,
    surface: RunwaySurface,
    phase: &PhaseCorrection,
    wind_config: &WindCorrection,
) -> RollDistances {
    let after_wind = correct_distance_for_wind(base, wind, wind_config);
    let corrected = correct_distance_for_runway_condition(after_wind, surface, phase);
    tracing::trace!(
        base_ground_roll = base.ground_roll,
        base_fifty_ft = base.fifty_ft,
        %wind,
        %surface,
        ground_roll = corrected.ground_roll,
        fifty_ft = corrected.fifty_ft,
        "corrected runway distances"
    );
    corrected
}
