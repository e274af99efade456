//! Fixed-cadence per-class policy.
//!
//! Aims for regularly spaced observations using the base intervals in
//! [`fixed_schedule`]. The score is the negated time until the ideal
//! next observation, `-(last_obs + interval - now)`: negative while the
//! target is early, zero when exactly due, positive once overdue.

use crate::cadence::{fixed_schedule, time_until_next_score};
use slew_core::{PolicyError, Priority};
use slew_policy::{PriorityPolicy, ScoreContext};

/// Regular spacing from a fixed per-class interval table.
///
/// Fails with [`PolicyError::UnknownTargetType`] for unclassified targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedCadence;

impl FixedCadence {
    /// Create the policy.
    pub fn new() -> Self {
        Self
    }
}

impl PriorityPolicy for FixedCadence {
    fn name(&self) -> &str {
        "FixedCadence"
    }

    fn uses_class(&self) -> bool {
        true
    }

    fn score(&self, ctx: &mut ScoreContext<'_>) -> Result<Priority, PolicyError> {
        time_until_next_score(fixed_schedule, ctx)
    }
}
