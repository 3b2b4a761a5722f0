//! Tests for takeoff and landing distances and their corrections

mod common;

use pretty_assertions::assert_eq;
use skyhawk_core::config::{EngineConfig, PhaseCorrection, WindCorrection};
use skyhawk_core::correction::{
    apply_corrections, correct_distance_for_runway_condition, correct_distance_for_wind,
};
use skyhawk_core::input::RunwaySurface;
use skyhawk_core::landing::{compute_landing_ground_roll, compute_landing_performance};
use skyhawk_core::resolve::ResolvedInputs;
use skyhawk_core::tables::RollDistances;
use skyhawk_core::takeoff::{compute_takeoff_ground_roll, compute_takeoff_performance, compute_takeoff_roc};
use skyhawk_core::wind::{compute_wind_component, WindComponent};

#[test]
fn test_takeoff_reference_fixture() {
    let tables = common::reference_tables();
    let base = compute_takeoff_ground_roll(&tables, 2300, 0, 0).unwrap();
    assert_eq!(base, RollDistances::new(720.0, 1300.0));

    let config = EngineConfig::default();
    let corrected = apply_corrections(
        base,
        WindComponent::Calm,
        RunwaySurface::Paved,
        &config.takeoff,
        &config.wind,
    );
    assert_eq!(corrected, RollDistances::new(720.0, 1300.0));
}

#[test]
fn test_takeoff_roc_lookup() {
    let tables = common::reference_tables();
    assert_eq!(compute_takeoff_roc(&tables, 0, 0).unwrap(), 745);
    assert_eq!(compute_takeoff_roc(&tables, 2000, 20).unwrap(), 580);
    assert!(compute_takeoff_roc(&tables, 1000, 0).is_err());
}

#[test]
fn test_zero_wind_is_identity() {
    let config = WindCorrection::default();
    let tables = common::reference_tables();
    for (alt, temp) in [(0, 0), (3000, 20), (8000, 40)] {
        let takeoff = compute_takeoff_ground_roll(&tables, 2100, alt, temp).unwrap();
        let landing = compute_landing_ground_roll(&tables, alt, temp).unwrap();
        let calm = compute_wind_component(90.0, 0.0, 270.0);
        assert_eq!(correct_distance_for_wind(takeoff, calm, &config), takeoff);
        assert_eq!(correct_distance_for_wind(landing, calm, &config), landing);
    }
}

#[test]
fn test_headwind_shortens_tailwind_lengthens() {
    let config = WindCorrection::default();
    let base = RollDistances::new(720.0, 1300.0);
    assert_eq!(
        correct_distance_for_wind(base, WindComponent::Headwind(10.0), &config),
        RollDistances::new(641.0, 1157.0)
    );
    assert_eq!(
        correct_distance_for_wind(base, WindComponent::Tailwind(3.0), &config),
        RollDistances::new(828.0, 1495.0)
    );
}

#[test]
fn test_landing_tailwind() {
    let config = WindCorrection::default();
    let base = RollDistances::new(495.0, 1205.0);
    assert_eq!(
        correct_distance_for_wind(base, WindComponent::Tailwind(10.0), &config),
        RollDistances::new(743.0, 1808.0)
    );
}

#[test]
fn test_grass_adds_same_delta_to_both() {
    let takeoff = PhaseCorrection { grass_factor: 0.15 };
    let landing = PhaseCorrection { grass_factor: 0.45 };
    let tables = common::reference_tables();

    for alt in (0..=8000).step_by(1000) {
        for temp in (0..=40).step_by(10) {
            let base = compute_landing_ground_roll(&tables, alt, temp).unwrap();
            for correction in [&takeoff, &landing] {
                let grass = correct_distance_for_runway_condition(base, RunwaySurface::Grass, correction);
                assert_eq!(
                    grass.fifty_ft - grass.ground_roll,
                    base.fifty_ft - base.ground_roll,
                    "{alt} ft / {temp} °C"
                );
                assert!(grass.ground_roll > base.ground_roll);
            }
        }
    }
}

#[test]
fn test_paved_needs_no_surface_correction() {
    let base = RollDistances::new(531.0, 1017.0);
    let correction = PhaseCorrection { grass_factor: 0.45 };
    assert_eq!(
        correct_distance_for_runway_condition(base, RunwaySurface::Paved, &correction),
        base
    );
}

#[test]
fn test_wind_applied_before_surface() {
    let config = EngineConfig::default();
    let corrected = apply_corrections(
        RollDistances::new(720.0, 1300.0),
        WindComponent::Headwind(10.0),
        RunwaySurface::Grass,
        &config.takeoff,
        &config.wind,
    );
    assert_eq!(corrected, RollDistances::new(738.0, 1254.0));
}

#[test]
fn test_landing_on_grass() {
    let tables = common::reference_tables();
    let landing = compute_landing_performance(
        &tables,
        0,
        0,
        WindComponent::Calm,
        RunwaySurface::Grass,
        &EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(landing, RollDistances::new(718.0, 1428.0));
}

#[test]
fn test_takeoff_performance_from_resolved_inputs() {
    let tables = common::reference_tables();
    let input = common::calm_day_input();
    let resolved = ResolvedInputs::resolve(&input, &tables).unwrap();
    let takeoff = compute_takeoff_performance(
        &tables,
        &resolved,
        WindComponent::Calm,
        RunwaySurface::Paved,
        &EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(takeoff.distances, RollDistances::new(720.0, 1300.0));
    assert_eq!(takeoff.rate_of_climb, 745);
}

#[test]
fn test_wind_components() {
    assert_eq!(compute_wind_component(90.0, 10.0, 90.0), WindComponent::Headwind(10.0));
    assert_eq!(compute_wind_component(90.0, 10.0, 270.0), WindComponent::Tailwind(10.0));
    assert_eq!(compute_wind_component(90.0, 10.0, 180.0), WindComponent::Calm);
    assert_eq!(compute_wind_component(360.0, 10.0, 90.0), WindComponent::Calm);
    assert_eq!(compute_wind_component(90.0, 20.0, 150.0), WindComponent::Headwind(10.0));
    assert_eq!(compute_wind_component(10.0, 20.0, 350.0), WindComponent::Headwind(18.8));
    assert_eq!(compute_wind_component(180.0, 30.0, 45.0), WindComponent::Tailwind(21.2));
}
