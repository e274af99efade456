//! Per-class cadence tables and the ramp/steady phase machine.
//!
//! Each [`TargetClass`] maps to a [`Schedule`] describing how far apart
//! observations should be. Two tables exist: [`fixed_schedule`] uses the
//! physically-motivated base intervals only, and [`adaptive_schedule`]
//! additionally attaches a [`Campaign`] (duration and total-observation
//! goal) so the interval can shrink when a target falls behind.
//!
//! # Phases
//!
//! `SNe_CC`, `TOO` and `SNe_SED` move through two phases, `Ramp` then
//! `Steady`. The transition is triggered by elapsed time since `tstart`
//! or by observation count, and both only grow, so a target never
//! returns to `Ramp`.

use slew_core::{PolicyError, Priority, Target, TargetClass, DAY, HOUR};
use slew_policy::ScoreContext;

/// Spacing until the ideal next observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interval {
    /// Next observation is due this many seconds after the last one.
    After(f64),
    /// No further observations are wanted.
    Never,
}

/// Total-observation goal over a fixed campaign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Campaign {
    /// Campaign end, in seconds after the target's `tstart`.
    pub duration: f64,
    /// Observations wanted by the end of the campaign.
    pub goal: usize,
}

/// One cadence: a base interval, optionally tightened by a campaign goal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cadence {
    /// Physically-motivated spacing between observations.
    pub base_interval: f64,
    /// Campaign goal used to speed up a target that is falling behind.
    pub campaign: Option<Campaign>,
}

impl Cadence {
    /// Cadence with a base interval only.
    pub const fn every(base_interval: f64) -> Self {
        Self {
            base_interval,
            campaign: None,
        }
    }

    /// Cadence aiming for `goal` observations by `tstart + duration`.
    pub const fn toward(base_interval: f64, duration: f64, goal: usize) -> Self {
        Self {
            base_interval,
            campaign: Some(Campaign { duration, goal }),
        }
    }

    /// Whether the campaign goal has been reached. Always `false` for a
    /// cadence without a campaign.
    pub fn goal_met(&self, obs_so_far: usize) -> bool {
        self.campaign
            .is_some_and(|campaign| obs_so_far >= campaign.goal)
    }

    /// Spacing that spreads the remaining goal evenly over the rest of
    /// the campaign, measured from the last observation.
    ///
    /// `None` when there is no campaign or its goal is already met.
    pub fn adaptive_interval(&self, tstart: f64, last_obs: f64, obs_so_far: usize) -> Option<f64> {
        let campaign = self.campaign.filter(|c| obs_so_far < c.goal)?;
        let remaining = (campaign.goal - obs_so_far) as f64;
        Some((tstart + campaign.duration - last_obs) / remaining)
    }

    /// Interval until the next observation.
    ///
    /// [`Interval::Never`] once the campaign goal is met, otherwise
    /// `min(base, adaptive)`. The result never exceeds `base_interval`.
    /// A campaign that ended before the last observation gives a negative
    /// interval, so the target keeps growing more overdue.
    pub fn effective_interval(&self, tstart: f64, last_obs: f64, obs_so_far: usize) -> Interval {
        if self.goal_met(obs_so_far) {
            tracing::trace!(obs_so_far, "campaign goal met, no further observations");
            return Interval::Never;
        }
        match self.adaptive_interval(tstart, last_obs, obs_so_far) {
            Some(adaptive) => Interval::After(self.base_interval.min(adaptive)),
            None => Interval::After(self.base_interval),
        }
    }
}

/// Condition moving a two-phase schedule from `Ramp` to `Steady`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseTrigger {
    /// Steady once `now - tstart` reaches this many seconds.
    ElapsedSinceStart(f64),
    /// Steady once this many observations have been taken.
    ObservationCount(usize),
}

impl PhaseTrigger {
    /// Whether the transition has happened.
    pub fn reached(&self, target: &Target, now: f64) -> bool {
        match *self {
            Self::ElapsedSinceStart(secs) => now - target.tstart() >= secs,
            Self::ObservationCount(n) => target.observation_count() >= n,
        }
    }
}

/// Phase of a target's schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Early, dense sampling.
    Ramp,
    /// Long-run sampling.
    Steady,
}

/// Cadence rules for one class.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Schedule {
    /// One cadence for the whole window.
    Steady(Cadence),
    /// Ramp cadence until `trigger`, then steady cadence.
    Phased {
        /// Cadence before the trigger.
        ramp: Cadence,
        /// Cadence after the trigger.
        steady: Cadence,
        /// Transition condition.
        trigger: PhaseTrigger,
    },
    /// Back-to-back observations until `max_obs` are taken, then none.
    Burst {
        /// Observations wanted in total.
        max_obs: usize,
    },
}

impl Schedule {
    /// Current phase. Single-cadence schedules are always `Steady`.
    pub fn phase(&self, target: &Target, now: f64) -> Phase {
        let steady = match self {
            Self::Steady(_) => true,
            Self::Phased { trigger, .. } => trigger.reached(target, now),
            Self::Burst { max_obs } => target.observation_count() >= *max_obs,
        };
        if steady {
            Phase::Steady
        } else {
            Phase::Ramp
        }
    }

    /// Cadence in force for `phase`, or `None` for a burst schedule.
    pub fn cadence(&self, phase: Phase) -> Option<&Cadence> {
        match (self, phase) {
            (Self::Steady(c), _) => Some(c),
            (Self::Phased { ramp, .. }, Phase::Ramp) => Some(ramp),
            (Self::Phased { steady, .. }, Phase::Steady) => Some(steady),
            (Self::Burst { .. }, _) => None,
        }
    }

    /// Interval after `last_obs` (elapsed frame) for this target at `now`.
    pub fn interval(&self, target: &Target, last_obs: f64, now: f64) -> Interval {
        let phase = self.phase(target, now);
        match (self.cadence(phase), phase) {
            (Some(cadence), _) => {
                cadence.effective_interval(target.tstart(), last_obs, target.observation_count())
            }
            (None, Phase::Ramp) => Interval::After(0.0),
            (None, Phase::Steady) => Interval::Never,
        }
    }
}

/// Base-interval cadences with no campaign goals.
pub fn fixed_schedule(class: TargetClass) -> Schedule {
    match class {
        // 8x per day
        TargetClass::AgnLow => Schedule::Steady(Cadence::every(3.0 * HOUR)),
        // 2x per day
        TargetClass::AgnMed => Schedule::Steady(Cadence::every(12.0 * HOUR)),
        TargetClass::AgnHigh => Schedule::Steady(Cadence::every(2.0 * DAY)),
        TargetClass::Sne => Schedule::Steady(Cadence::every(2.5 * DAY)),
        // 20 in the first 3 days, then 10 over the rest of two weeks
        TargetClass::SneCc => Schedule::Phased {
            ramp: Cadence::every(3.0 * DAY / 20.0),
            steady: Cadence::every(11.0 * DAY / 10.0),
            trigger: PhaseTrigger::ElapsedSinceStart(3.0 * DAY),
        },
        TargetClass::SneSed => Schedule::Burst { max_obs: 2 },
        // daily until 3 observations, then 2 more over the rest of two weeks
        TargetClass::Too => Schedule::Phased {
            ramp: Cadence::every(DAY),
            steady: Cadence::every(12.0 * DAY / 2.0),
            trigger: PhaseTrigger::ObservationCount(3),
        },
    }
}

/// Cadences with campaign goals for the adaptive policy.
pub fn adaptive_schedule(class: TargetClass) -> Schedule {
    match class {
        TargetClass::AgnLow => Schedule::Steady(Cadence::toward(3.0 * HOUR, 90.0 * DAY, 720)),
        TargetClass::AgnMed => Schedule::Steady(Cadence::toward(12.0 * HOUR, 180.0 * DAY, 360)),
        TargetClass::AgnHigh => Schedule::Steady(Cadence::toward(2.0 * DAY, 730.0 * DAY, 180)),
        TargetClass::Sne => Schedule::Steady(Cadence::toward(2.5 * DAY, 60.0 * DAY, 24)),
        TargetClass::SneCc => Schedule::Phased {
            ramp: Cadence::toward(3.0 * DAY / 20.0, 3.0 * DAY, 20),
            steady: Cadence::toward(11.0 * DAY / 10.0, 14.0 * DAY, 30),
            trigger: PhaseTrigger::ElapsedSinceStart(3.0 * DAY),
        },
        TargetClass::SneSed => Schedule::Burst { max_obs: 2 },
        TargetClass::Too => Schedule::Phased {
            ramp: Cadence::toward(DAY, 3.0 * DAY, 3),
            steady: Cadence::toward(11.0 * DAY / 2.0, 14.0 * DAY, 5),
            trigger: PhaseTrigger::ObservationCount(3),
        },
    }
}

/// Negated time until the ideal next observation under `table`.
///
/// Shared by the fixed and adaptive policies. Unobserved targets score
/// by how far past `tstart` the clock is, whatever their class.
pub(crate) fn time_until_next_score(
    table: fn(TargetClass) -> Schedule,
    ctx: &ScoreContext<'_>,
) -> Result<Priority, PolicyError> {
    let target = ctx.target();
    let class = target
        .class()
        .ok_or(PolicyError::UnknownTargetType {
            target: target.id(),
        })?;
    let now = ctx.now();

    let Some(last_absolute) = target.last_observation() else {
        return Ok(Priority(-(target.tstart() - now)));
    };
    let last_obs = ctx.clock().to_elapsed(last_absolute);

    match table(class).interval(target, last_obs, now) {
        Interval::After(interval) => Ok(Priority(-(last_obs + interval - now))),
        Interval::Never => Ok(Priority::NEVER),
    }
}
