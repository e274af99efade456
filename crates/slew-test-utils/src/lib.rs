//! Test utilities and mock types for Slew development.
//!
//! Provides a scripted [`UniformSource`] ([`FixedDraw`]) and shortcuts for
//! building targets and sensors.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use slew_core::{Sensor, SensorId, SimClock, Target, TargetClass, TargetId, DAY};
use slew_policy::{PolicyOptions, ScoreContext, UniformSource};

/// Scripted implementation of [`UniformSource`].
///
/// Returns the scripted values in order, then repeats the last one.
/// Values are returned verbatim, including out-of-range ones, so tests
/// can exercise guard paths such as a draw of exactly `0.0`.
pub struct FixedDraw {
    values: Vec<f64>,
    next: usize,
}

impl FixedDraw {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "FixedDraw needs at least one value");
        Self { values, next: 0 }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// How many draws have been taken.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl UniformSource for FixedDraw {
    fn uniform(&mut self) -> f64 {
        let idx = self.next.min(self.values.len() - 1);
        self.next += 1;
        self.values[idx]
    }
}

/// Sensor 0 with the given clock.
pub fn sensor_at(t0_gps: f64, now: f64) -> Sensor {
    Sensor::new(SensorId(0), SimClock::new(t0_gps, now))
}

/// Classified target with window `[tstart, tstart + 14 days]` and the
/// given absolute observation history.
pub fn classified_target(class: TargetClass, tstart: f64, obs_times: &[f64]) -> Target {
    Target::builder(TargetId(1))
        .class(class)
        .window(tstart, tstart + 14.0 * DAY)
        .obs_times(obs_times.to_vec())
        .build()
        .expect("fixture target must be valid")
}

/// Unclassified target with the given window, cadence, and history.
pub fn rate_target(
    tstart: f64,
    tfinal: f64,
    obs_period: f64,
    obs_per_period: f64,
    obs_times: &[f64],
) -> Target {
    Target::builder(TargetId(1))
        .window(tstart, tfinal)
        .cadence(obs_period, obs_per_period)
        .obs_times(obs_times.to_vec())
        .build()
        .expect("fixture target must be valid")
}

/// Build a context over `target`/`sensor` with empty options and run `f`.
pub fn with_context<R>(
    target: &Target,
    sensor: &Sensor,
    rng: &mut dyn UniformSource,
    f: impl FnOnce(&mut ScoreContext<'_>) -> R,
) -> R {
    let options = PolicyOptions::new();
    let mut ctx = ScoreContext::new(target, sensor, rng, &options);
    f(&mut ctx)
}
