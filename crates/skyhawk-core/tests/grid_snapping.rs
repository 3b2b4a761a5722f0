//! Tests for snapping inputs onto the table grids

use skyhawk_core::grid::{
    snap, snap_rpm, snap_weight, GridAxis, CRUISE_PRESS_ALT_1000, CRUISE_PRESS_ALT_500, POWER_PRESS_ALT,
    ROC_PRESS_ALT, ROC_TEMP, RUNWAY_PRESS_ALT, RUNWAY_TEMP,
};

const ALL_AXES: [GridAxis; 7] = [
    RUNWAY_PRESS_ALT,
    RUNWAY_TEMP,
    ROC_PRESS_ALT,
    ROC_TEMP,
    CRUISE_PRESS_ALT_500,
    CRUISE_PRESS_ALT_1000,
    POWER_PRESS_ALT,
];

#[test]
fn test_grid_points_snap_to_themselves() {
    for axis in ALL_AXES {
        for tick in axis.ticks() {
            assert_eq!(axis.snap(tick as f64), tick, "{} tick {}", axis.name, tick);
        }
    }
}

#[test]
fn test_above_range_clamps_to_last_tick() {
    for axis in ALL_AXES {
        let last = axis.last;
        for excess in [1.0, axis.step as f64 / 2.0, 10_000.0] {
            assert_eq!(axis.snap(last as f64 + excess), last, "{}", axis.name);
        }
    }
}

#[test]
fn test_below_range_snaps_to_first_tick() {
    assert_eq!(ROC_TEMP.snap(-35.0), -20);
    assert_eq!(RUNWAY_PRESS_ALT.snap(-200.0), 0);
    assert_eq!(POWER_PRESS_ALT.snap(0.0), 2000);
}

#[test]
fn test_conservative_round_down_below_threshold() {
    // Runway temperature threshold is 4 °C
    assert_eq!(RUNWAY_TEMP.snap(13.0), 10);
    assert_eq!(RUNWAY_TEMP.snap(13.9), 10);
    assert_eq!(RUNWAY_TEMP.snap(14.0), 20);
    assert_eq!(RUNWAY_TEMP.snap(18.0), 20);

    // Climb rate altitude threshold is 500 ft on 2000 ft steps
    assert_eq!(ROC_PRESS_ALT.snap(2499.0), 2000);
    assert_eq!(ROC_PRESS_ALT.snap(2500.0), 4000);

    assert_eq!(CRUISE_PRESS_ALT_500.snap(4200.0), 4000);
    assert_eq!(CRUISE_PRESS_ALT_500.snap(4300.0), 4500);
    assert_eq!(CRUISE_PRESS_ALT_1000.snap(5500.0), 6000);
}

#[test]
fn test_generic_snap_matches_axis() {
    let ticks = RUNWAY_PRESS_ALT.ticks();
    for raw in [0.0, 240.0, 250.0, 3100.0, 7999.0, 9000.0] {
        assert_eq!(snap(&ticks, raw, 250.0), Some(RUNWAY_PRESS_ALT.snap(raw)));
    }
}

#[test]
fn test_weight_snaps_upward() {
    assert_eq!(snap_weight(1397.0), 1900);
    assert_eq!(snap_weight(1900.0), 1900);
    assert_eq!(snap_weight(1901.0), 2100);
    assert_eq!(snap_weight(2100.0), 2100);
    assert_eq!(snap_weight(2250.0), 2300);
    assert_eq!(snap_weight(2500.0), 2300);
}

#[test]
fn test_rpm_snaps_to_nearest() {
    let rpms = [2100, 2200, 2300, 2400, 2500, 2550];
    assert_eq!(snap_rpm(&rpms, 2340.0), Some(2300));
    assert_eq!(snap_rpm(&rpms, 2360.0), Some(2400));
    assert_eq!(snap_rpm(&rpms, 2530.0), Some(2550));
}

#[test]
fn test_rpm_tie_goes_to_higher() {
    let rpms = [2100, 2200, 2300, 2400, 2500];
    assert_eq!(snap_rpm(&rpms, 2450.0), Some(2500));
    assert_eq!(snap_rpm(&rpms, 2150.0), Some(2200));
}

#[test]
fn test_rpm_outside_span_clamps() {
    let rpms = [2200, 2300, 2400];
    assert_eq!(snap_rpm(&rpms, 2000.0), Some(2200));
    assert_eq!(snap_rpm(&rpms, 2650.0), Some(2400));
    assert_eq!(snap_rpm(&[], 2400.0), None);
}
