//! Stochastic rate policy.
//!
//! Treats each target as a Poisson process whose rate is the number of
//! observations still owed divided by the time left in its window. The
//! time to the next event of such a process is exponential, so each call
//! samples `-ln(u) / rate` and returns its negation, `ln(u) / rate`.
//! The highest score therefore belongs to the target with the shortest
//! sampled waiting time.
//!
//! Respects the determinism contract: the only randomness is one draw
//! from the caller's [`UniformSource`](slew_policy::UniformSource) per
//! call, so a seeded source reproduces every score.
//!
//! Cases that would otherwise produce infinities or NaN return
//! [`Priority::NEVER`]:
//! - quota met (`num_obs_left <= 0`), no draw taken
//! - window closed (`tfinal - now <= 0`), no draw taken
//! - draw of `0.0` or outside `[0, 1)`

use slew_core::{PolicyError, Priority, Target};
use slew_policy::{PriorityPolicy, ScoreContext};

/// Negated exponential sample of the time until the next owed observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct StochasticRate;

impl StochasticRate {
    /// Create the policy.
    pub fn new() -> Self {
        Self
    }

    /// Observations still owed over the whole window.
    ///
    /// The window total is rounded half-to-even before subtracting the
    /// observations already taken.
    pub fn observations_left(target: &Target) -> f64 {
        let total = (target.obs_per_period() * target.window_length() / target.obs_period())
            .round_ties_even();
        total - target.observation_count() as f64
    }
}

impl PriorityPolicy for StochasticRate {
    fn name(&self) -> &str {
        "StochasticRate"
    }

    fn score(&self, ctx: &mut ScoreContext<'_>) -> Result<Priority, PolicyError> {
        let target = ctx.target();
        let id = target.id();
        let obs_left = Self::observations_left(target);
        if obs_left <= 0.0 {
            return Ok(Priority::NEVER);
        }

        let time_left = target.tfinal() - ctx.now();
        if time_left <= 0.0 {
            tracing::trace!(target_id = %id, time_left, "window closed");
            return Ok(Priority::NEVER);
        }
        let rate = obs_left / time_left;

        let u = ctx.draw_uniform();
        if !(u > 0.0 && u < 1.0) {
            tracing::trace!(target_id = %id, u, "draw outside (0, 1)");
            return Ok(Priority::NEVER);
        }

        let score = u.ln() / rate;
        if !score.is_finite() {
            tracing::trace!(target_id = %id, rate, u, "non-finite sample");
            return Ok(Priority::NEVER);
        }
        Ok(Priority(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use slew_core::DAY;
    use slew_test_utils::{rate_target, sensor_at, with_context, FixedDraw};

    fn score_with(target: &Target, now: f64, draw: &mut FixedDraw) -> Priority {
        let sensor = sensor_at(0.0, now);
        with_context(target, &sensor, draw, |ctx| StochasticRate.score(ctx).unwrap())
    }

    #[test]
    fn observations_left_rounds_half_to_even() {
        // 2.5 rounds to 2
        let t = rate_target(0.0, 2.5 * DAY, DAY, 1.0, &[]);
        assert_eq!(StochasticRate::observations_left(&t), 2.0);
        // 3.5 rounds to 4, one already taken
        let t = rate_target(0.0, 3.5 * DAY, DAY, 1.0, &[0.0]);
        assert_eq!(StochasticRate::observations_left(&t), 3.0);
    }

    #[test]
    fn quota_met_returns_sentinel_without_drawing() {
        let target = rate_target(0.0, 2.0 * DAY, DAY, 1.0, &[0.0, 10.0]);
        let mut draw = FixedDraw::constant(0.5);
        assert_eq!(score_with(&target, 20.0, &mut draw), Priority::NEVER);
        assert_eq!(draw.draws(), 0);
    }

    #[test]
    fn closed_window_returns_sentinel_without_drawing() {
        let target = rate_target(0.0, 2.0 * DAY, DAY, 1.0, &[]);
        let mut draw = FixedDraw::constant(0.5);
        assert_eq!(score_with(&target, 2.0 * DAY, &mut draw), Priority::NEVER);
        assert_eq!(score_with(&target, 3.0 * DAY, &mut draw), Priority::NEVER);
        assert_eq!(draw.draws(), 0);
    }

    #[test]
    fn zero_draw_returns_sentinel() {
        let target = rate_target(0.0, 2.0 * DAY, DAY, 1.0, &[]);
        let mut draw = FixedDraw::constant(0.0);
        assert_eq!(score_with(&target, 0.0, &mut draw), Priority::NEVER);
        assert_eq!(draw.draws(), 1);
    }

    #[test]
    fn out_of_range_draw_returns_sentinel() {
        let target = rate_target(0.0, 2.0 * DAY, DAY, 1.0, &[]);
        for bad in [1.0, 1.5, -0.25, f64::NAN] {
            let mut draw = FixedDraw::constant(bad);
            assert_eq!(score_with(&target, 0.0, &mut draw), Priority::NEVER);
        }
    }

    #[test]
    fn score_is_negated_exponential_sample() {
        // 4 owed over 2 days remaining -> rate 2/day.
        let target = rate_target(0.0, 4.0 * DAY, DAY, 1.0, &[]);
        let now = 2.0 * DAY;
        let u = 0.25_f64;
        let mut draw = FixedDraw::constant(u);
        let expected = u.ln() / (4.0 / (2.0 * DAY));
        assert_eq!(score_with(&target, now, &mut draw), Priority(expected));
        assert!(expected < 0.0);
    }

    #[test]
    fn larger_backlog_scores_higher_for_same_draw() {
        let light = rate_target(0.0, 10.0 * DAY, DAY, 1.0, &[0.0; 8]);
        let heavy = rate_target(0.0, 10.0 * DAY, DAY, 1.0, &[]);
        let mut draw = FixedDraw::constant(0.3);
        let a = score_with(&light, DAY, &mut draw);
        let b = score_with(&heavy, DAY, &mut draw);
        assert!(b > a, "target owing more observations should be more urgent");
    }

    #[test]
    fn seeded_source_is_bit_reproducible() {
        let target = rate_target(0.0, 30.0 * DAY, DAY, 3.0, &[100.0, 200.0]);
        let sensor = sensor_at(0.0, 5.0 * DAY);
        let run = |seed: u64| -> Vec<u64> {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            (0..16)
                .map(|_| {
                    with_context(&target, &sensor, &mut rng, |ctx| {
                        StochasticRate.score(ctx).unwrap().value().to_bits()
                    })
                })
                .collect()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }
}
