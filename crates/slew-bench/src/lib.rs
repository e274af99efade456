//! Benchmark profiles for the Slew priority policies.
//!
//! - [`synthetic_targets`]: a deterministic, class-mixed candidate list
//! - [`reference_sensor`]: the sensor the benches score against

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slew_core::{Sensor, SensorId, SimClock, Target, TargetClass, TargetId, DAY};

/// GPS time of the reference epoch's clock origin.
pub const REFERENCE_T0: f64 = 1.0e9;

/// Elapsed seconds at which the reference sensor scores.
pub const REFERENCE_NOW: f64 = 30.0 * DAY;

/// Generate `n` classified targets with random windows and histories.
///
/// Windows start within the first 20 days and last 10 to 120 days.
/// Each target has up to 40 observations, all before
/// [`REFERENCE_NOW`]. The same `(n, seed)` always gives the same list.
pub fn synthetic_targets(n: usize, seed: u64) -> Vec<Target> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let class = TargetClass::ALL[rng.random_range(0..TargetClass::ALL.len())];
            let tstart = rng.random_range(0.0..20.0 * DAY);
            let tfinal = tstart + rng.random_range(10.0..120.0) * DAY;
            let obs_count = rng.random_range(0..40usize);
            let mut obs: Vec<f64> = (0..obs_count)
                .map(|_| REFERENCE_T0 + rng.random_range(0.0..REFERENCE_NOW))
                .collect();
            obs.sort_by(f64::total_cmp);

            Target::builder(TargetId(i as u64))
                .class(class)
                .window(tstart, tfinal)
                .cadence(DAY, rng.random_range(1..4) as f64)
                .obs_times(obs)
                .build()
                .unwrap_or_else(|e| unreachable!("synthetic target {i} invalid: {e}"))
        })
        .collect()
}

/// Sensor with clock origin [`REFERENCE_T0`] at [`REFERENCE_NOW`].
pub fn reference_sensor() -> Sensor {
    Sensor::new(SensorId(0), SimClock::new(REFERENCE_T0, REFERENCE_NOW))
}
