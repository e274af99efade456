//! Sensor and simulation clock snapshot.

use crate::id::SensorId;

/// Read-only snapshot of the simulation clock.
///
/// `now` is an offset in seconds from the reference epoch `t0_gps`.
/// Observation timestamps are absolute; target windows and `now` share
/// the elapsed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimClock {
    /// Reference epoch (absolute GPS seconds).
    pub t0_gps: f64,
    /// Seconds elapsed since `t0_gps`.
    pub now: f64,
}

impl SimClock {
    /// Clock at `now` seconds past `t0_gps`.
    pub fn new(t0_gps: f64, now: f64) -> Self {
        Self { t0_gps, now }
    }

    /// Current absolute time.
    pub fn absolute_now(&self) -> f64 {
        self.t0_gps + self.now
    }

    /// Convert an absolute timestamp into the elapsed frame.
    pub fn to_elapsed(&self, absolute: f64) -> f64 {
        absolute - self.t0_gps
    }
}

/// The observing sensor as seen by a policy.
///
/// Only the clock is consulted today. The random source that used to
/// hang off the sensor is passed explicitly to each policy call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensor {
    /// Sensor identifier.
    pub id: SensorId,
    /// Clock snapshot shared by all candidates in one epoch.
    pub clock: SimClock,
}

impl Sensor {
    /// Sensor with the given clock.
    pub fn new(id: SensorId, clock: SimClock) -> Self {
        Self { id, clock }
    }
}
