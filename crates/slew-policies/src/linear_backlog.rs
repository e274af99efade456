//! Linear backlog policy.
//!
//! Priority grows linearly with time since the last observation,
//! measured in units of the target's desired average interval. A score
//! of `1.0` means exactly one interval has passed.

use slew_core::{PolicyError, Priority};
use slew_policy::{PriorityPolicy, ScoreContext};

/// Elapsed time since the last observation over `obs_period / obs_per_period`.
///
/// Unobserved targets score the clock's reference epoch `t0_gps`, which
/// dwarfs any realistic backlog ratio and puts them first. Class-blind.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearBacklog;

impl LinearBacklog {
    /// Create the policy.
    pub fn new() -> Self {
        Self
    }
}

impl PriorityPolicy for LinearBacklog {
    fn name(&self) -> &str {
        "LinearBacklog"
    }

    fn score(&self, ctx: &mut ScoreContext<'_>) -> Result<Priority, PolicyError> {
        let clock = ctx.clock();
        let target = ctx.target();
        let Some(last) = target.last_observation() else {
            return Ok(Priority(clock.t0_gps));
        };
        Ok(Priority((clock.absolute_now() - last) / target.avg_interval()))
    }
}
