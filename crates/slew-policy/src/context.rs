//! Inputs passed to a policy for one score.
//!
//! [`ScoreContext`] borrows the target and sensor immutably, so a policy
//! cannot touch observation history or the clock. The only mutable
//! borrow is the random source.

use crate::options::PolicyOptions;
use crate::source::UniformSource;
use slew_core::{Sensor, SimClock, Target};

/// Execution context passed to each policy's `score()` method.
///
/// Uses dynamic dispatch (`&mut dyn UniformSource`) to keep the
/// [`PriorityPolicy`](crate::PriorityPolicy) trait object-safe while
/// letting tests script the draws.
pub struct ScoreContext<'a> {
    target: &'a Target,
    sensor: &'a Sensor,
    rng: &'a mut dyn UniformSource,
    options: &'a PolicyOptions,
}

impl<'a> ScoreContext<'a> {
    /// Construct a new score context.
    ///
    /// Typically called by the engine once per candidate.
    pub fn new(
        target: &'a Target,
        sensor: &'a Sensor,
        rng: &'a mut dyn UniformSource,
        options: &'a PolicyOptions,
    ) -> Self {
        Self {
            target,
            sensor,
            rng,
            options,
        }
    }

    /// The candidate being scored.
    pub fn target(&self) -> &Target {
        self.target
    }

    /// The observing sensor.
    pub fn sensor(&self) -> &Sensor {
        self.sensor
    }

    /// Clock snapshot for this epoch.
    pub fn clock(&self) -> SimClock {
        self.sensor.clock
    }

    /// Seconds elapsed since the clock's reference epoch.
    pub fn now(&self) -> f64 {
        self.sensor.clock.now
    }

    /// Consume one uniform draw in `[0, 1)`.
    pub fn draw_uniform(&mut self) -> f64 {
        self.rng.uniform()
    }

    /// Caller-supplied options. Reference policies ignore them.
    pub fn options(&self) -> &PolicyOptions {
        self.options
    }
}
