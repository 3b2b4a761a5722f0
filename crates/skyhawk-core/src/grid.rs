//! Grid Snapping
//!
//! Maps raw pilot inputs onto the discrete axes of the performance tables.
//!
//! The rule is deliberately asymmetric. A value between two ticks `A < x < B`
//! snaps down to `A` only while `x < A + threshold`; from `A + threshold`
//! onwards it snaps up to `B`. Thresholds are well below half a step, so most
//! in-between values land on the tick with the worse performance. Values
//! above the last tick clamp to it and values below the first tick snap to
//! the first tick.

/// Tabulated takeoff weights in pounds
pub const WEIGHT_VARIANTS: [i32; 3] = [1900, 2100, 2300];

/// Evenly spaced table axis with its snapping threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAxis {
    /// Name used in log messages
    pub name: &'static str,
    /// Lowest tick
    pub first: i32,
    /// Highest tick
    pub last: i32,
    /// Spacing between ticks
    pub step: i32,
    /// Distance past a tick from which a value snaps up to the next one
    pub threshold: f64,
}

/// Takeoff and landing pressure altitude
pub const RUNWAY_PRESS_ALT: GridAxis = GridAxis::new("runway pressure altitude", 0, 8000, 1000, 250.0);
/// Takeoff and landing temperature
pub const RUNWAY_TEMP: GridAxis = GridAxis::new("runway temperature", 0, 40, 10, 4.0);
/// Rate-of-climb pressure altitude
pub const ROC_PRESS_ALT: GridAxis = GridAxis::new("climb rate pressure altitude", 0, 12000, 2000, 500.0);
/// Rate-of-climb temperature
pub const ROC_TEMP: GridAxis = GridAxis::new("climb rate temperature", -20, 40, 20, 5.0);
/// Cruise altitude for the endurance and range tables
pub const CRUISE_PRESS_ALT_500: GridAxis = GridAxis::new("cruise pressure altitude (500 ft)", 0, 12500, 500, 250.0);
/// Cruise altitude for the climb table
pub const CRUISE_PRESS_ALT_1000: GridAxis = GridAxis::new("cruise pressure altitude (1000 ft)", 0, 12000, 1000, 250.0);
/// Cruise altitude for the power setting table
pub const POWER_PRESS_ALT: GridAxis = GridAxis::new("cruise power pressure altitude", 2000, 12000, 2000, 500.0);

impl GridAxis {
    /// Axis from `first` to `last` inclusive, `step` apart
    pub const fn new(name: &'static str, first: i32, last: i32, step: i32, threshold: f64) -> Self {
        Self {
            name,
            first,
            last,
            step,
            threshold,
        }
    }

    /// Tick values in ascending order
    pub fn ticks(&self) -> Vec<i32> {
        (self.first..=self.last).step_by(self.step as usize).collect()
    }

    /// Snap a raw value onto this axis
    pub fn snap(&self, raw: f64) -> i32 {
        if raw > self.last as f64 {
            tracing::warn!(axis = self.name, raw, clamped = self.last, "input above table range, clamped");
        }
        snap(&self.ticks(), raw, self.threshold).unwrap_or(self.first)
    }
}

/// Snap `raw` onto ascending `axis_values` with the conservative threshold rule
///
/// Returns `None` when the axis has no values.
pub fn snap(axis_values: &[i32], raw: f64, step_threshold: f64) -> Option<i32> {
    let &max = axis_values.last()?;
    if raw > max as f64 {
        return Some(max);
    }
    for &valid in axis_values {
        let tick = valid as f64;
        if raw == tick || raw < tick + step_threshold {
            return Some(valid);
        }
    }
    Some(max)
}

/// Snap a takeoff weight up to the next tabulated weight variant
pub fn snap_weight(raw: f64) -> i32 {
    WEIGHT_VARIANTS
        .iter()
        .copied()
        .find(|&w| raw <= w as f64)
        .unwrap_or(WEIGHT_VARIANTS[WEIGHT_VARIANTS.len() - 1])
}

/// Snap an RPM onto the nearest of the tabulated RPMs
///
/// Unlike the other axes this rounds to the nearest value; an exact midpoint
/// goes to the higher RPM. RPMs outside the tabulated span clamp to its ends.
/// Returns `None` when no RPM is tabulated.
pub fn snap_rpm(available: &[i32], raw: f64) -> Option<i32> {
    let low_end = *available.first()?;
    let high_end = *available.last()?;
    if raw <= low_end as f64 {
        return Some(low_end);
    }
    if raw >= high_end as f64 {
        return Some(high_end);
    }
    let pair = available
        .windows(2)
        .find(|pair| pair[0] as f64 <= raw && raw <= pair[1] as f64)?;
    let (low, high) = (pair[0], pair[1]);
    let midpoint = (low + high) as f64 / 2.0;
    Some(if raw < midpoint { low } else { high })
}
