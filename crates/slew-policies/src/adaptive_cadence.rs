//! Adaptive-cadence per-class policy.
//!
//! Like [`FixedCadence`](crate::FixedCadence), but each cadence also
//! carries a campaign goal. The interval used is
//! `min(base, (campaign_end - last_obs) / (goal - obs_so_far))`, so a
//! target that falls behind its goal is sampled faster, and one that is
//! on track keeps its base cadence. Once the goal is met the target
//! scores [`Priority::NEVER`](slew_core::Priority::NEVER).

use crate::cadence::{adaptive_schedule, time_until_next_score};
use slew_core::{PolicyError, Priority};
use slew_policy::{PriorityPolicy, ScoreContext};

/// Regular spacing that tightens to catch up with a campaign goal.
///
/// Fails with [`PolicyError::UnknownTargetType`] for unclassified targets.
#[derive(Clone, Copy, Debug, Default)]
pub struct AdaptiveCadence;

impl AdaptiveCadence {
    /// Create the policy.
    pub fn new() -> Self {
        Self
    }
}

impl PriorityPolicy for AdaptiveCadence {
    fn name(&self) -> &str {
        "AdaptiveCadence"
    }

    fn uses_class(&self) -> bool {
        true
    }

    fn score(&self, ctx: &mut ScoreContext<'_>) -> Result<Priority, PolicyError> {
        time_until_next_score(adaptive_schedule, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cadence::{Interval, Phase};
    use proptest::prelude::*;
    use slew_core::{Target, TargetClass, TargetId, DAY, HOUR};
    use slew_test_utils::{classified_target, sensor_at, with_context, FixedDraw};

    fn score(target: &Target, now: f64) -> Result<Priority, PolicyError> {
        let sensor = sensor_at(0.0, now);
        let mut draw = FixedDraw::constant(0.5);
        with_context(target, &sensor, &mut draw, |ctx| AdaptiveCadence.score(ctx))
    }

    fn history(n: usize, last: f64) -> Vec<f64> {
        vec![last; n]
    }

    #[test]
    fn unobserved_scores_time_past_window_start() {
        for class in TargetClass::ALL {
            let target = classified_target(class, DAY, &[]);
            assert_eq!(score(&target, 0.0), Ok(Priority(-DAY)));
        }
    }

    #[test]
    fn unclassified_target_fails() {
        let target = Target::builder(TargetId(4)).obs_times(vec![0.0]).build().unwrap();
        assert_eq!(
            score(&target, 0.0),
            Err(PolicyError::UnknownTargetType {
                target: TargetId(4)
            })
        );
    }

    #[test]
    fn on_track_target_keeps_base_interval() {
        // AGN_low: 719 remaining over 90 days is slower than 3h.
        let target = classified_target(TargetClass::AgnLow, 0.0, &[0.0]);
        assert_eq!(score(&target, 3.0 * HOUR), Ok(Priority(0.0)));
    }

    #[test]
    fn lagging_target_tightens_interval() {
        let last = 89.0 * DAY;
        let target = classified_target(TargetClass::AgnLow, 0.0, &[last]);
        let adaptive = (90.0 * DAY - last) / 719.0;
        assert!(adaptive < 3.0 * HOUR);
        assert_eq!(score(&target, last), Ok(Priority(-(last + adaptive - last))));
    }

    #[test]
    fn goal_met_scores_never() {
        let last = 10.0 * DAY;
        let target = classified_target(TargetClass::Sne, 0.0, &history(24, last));
        assert_eq!(score(&target, 30.0 * DAY), Ok(Priority::NEVER));

        let over = classified_target(TargetClass::Sne, 0.0, &history(30, last));
        assert_eq!(score(&over, last + 2.5 * DAY), Ok(Priority::NEVER));

        let agn = classified_target(TargetClass::AgnLow, 0.0, &history(720, last));
        assert_eq!(score(&agn, last + 3.0 * HOUR), Ok(Priority::NEVER));

        let too = classified_target(
            TargetClass::Too,
            0.0,
            &[0.0, DAY, 2.0 * DAY, 8.0 * DAY, 13.0 * DAY],
        );
        assert_eq!(score(&too, 16.0 * DAY), Ok(Priority::NEVER));
    }

    #[test]
    fn one_short_of_goal_still_scores() {
        let last = 10.0 * DAY;
        let target = classified_target(TargetClass::Sne, 0.0, &history(23, last));
        assert!(!score(&target, 30.0 * DAY).unwrap().is_never());
    }

    #[test]
    fn sne_cc_ramp_goal_met_is_never_until_steady() {
        let target = classified_target(TargetClass::SneCc, 0.0, &history(20, DAY));
        assert_eq!(score(&target, 2.0 * DAY), Ok(Priority::NEVER));
        // Steady campaign: 10 of 30 remaining, base 1.1 days wins.
        assert_eq!(
            score(&target, 3.0 * DAY),
            Ok(Priority(-(DAY + 11.0 * DAY / 10.0 - 3.0 * DAY)))
        );
    }

    #[test]
    fn sne_cc_ramp_catches_up_near_phase_end() {
        let last = 2.9 * DAY;
        let target = classified_target(TargetClass::SneCc, 0.0, &[last]);
        let adaptive = (3.0 * DAY - last) / 19.0;
        assert!(adaptive < 3.0 * DAY / 20.0);
        assert_eq!(score(&target, last), Ok(Priority(-(last + adaptive - last))));
    }

    #[test]
    fn sne_cc_steady_phase_uses_two_week_campaign() {
        let last = 4.0 * DAY;
        let target = classified_target(TargetClass::SneCc, 0.0, &history(25, last));
        // 5 remaining over 10 days -> 2 days, base 1.1 days wins.
        assert_eq!(
            score(&target, last),
            Ok(Priority(-(11.0 * DAY / 10.0)))
        );
        let late = 13.0 * DAY;
        let lagging = classified_target(TargetClass::SneCc, 0.0, &history(25, late));
        // 5 remaining over 1 day.
        assert_eq!(score(&lagging, late), Ok(Priority(-(DAY / 5.0))));
    }

    #[test]
    fn too_phases_follow_observation_count() {
        let ramp = classified_target(TargetClass::Too, 0.0, &[0.0, 2.5 * DAY]);
        // 1 remaining, half a day left in the 3-day ramp.
        assert_eq!(score(&ramp, 2.5 * DAY), Ok(Priority(-(DAY / 2.0))));

        let steady = classified_target(TargetClass::Too, 0.0, &[0.0, DAY, 2.0 * DAY]);
        assert_eq!(score(&steady, 2.0 * DAY), Ok(Priority(-(5.5 * DAY))));

        let lagging = classified_target(TargetClass::Too, 0.0, &[0.0, DAY, 2.0 * DAY, 12.0 * DAY]);
        assert_eq!(score(&lagging, 12.0 * DAY), Ok(Priority(-(2.0 * DAY))));
    }

    #[test]
    fn campaign_over_grows_more_overdue() {
        // Campaign ended 40 days before the last observation, 23 remaining.
        let last = 100.0 * DAY;
        let target = classified_target(TargetClass::Sne, 0.0, &[last]);
        let adaptive = (60.0 * DAY - last) / 23.0;
        assert_eq!(score(&target, last), Ok(Priority(-(last + adaptive - last))));
        assert!(score(&target, last).unwrap().value() > 0.0);
    }

    #[test]
    fn sne_sed_never_after_two() {
        let target = classified_target(TargetClass::SneSed, 0.0, &[1.0, 2.0]);
        assert_eq!(score(&target, 3.0), Ok(Priority::NEVER));
        assert_eq!(score(&target, 1e9), Ok(Priority::NEVER));
    }

    proptest! {
        #[test]
        fn effective_interval_never_exceeds_base(
            class_idx in 0usize..7,
            n in 1usize..40,
            last in 0.0f64..1e8,
            ahead in 0.0f64..1e7,
        ) {
            let class = TargetClass::ALL[class_idx];
            let target = classified_target(class, 0.0, &history(n, last));
            let now = last + ahead;
            let schedule = adaptive_schedule(class);
            let phase = schedule.phase(&target, now);
            match (schedule.interval(&target, last, now), schedule.cadence(phase)) {
                (Interval::After(interval), Some(cadence)) => {
                    prop_assert!(interval <= cadence.base_interval);
                }
                (Interval::After(interval), None) => {
                    prop_assert_eq!(phase, Phase::Ramp);
                    prop_assert_eq!(interval, 0.0);
                }
                (Interval::Never, Some(cadence)) => prop_assert!(cadence.goal_met(n)),
                (Interval::Never, None) => prop_assert_eq!(class, TargetClass::SneSed),
            }
        }

        #[test]
        fn strictly_increasing_in_now(
            class_idx in 0usize..4,
            n in 1usize..24,
            last in 0.0f64..1e7,
            now in 0.0f64..1e7,
            step in 1.0f64..1e6,
        ) {
            // Below every single-cadence goal.
            let class = TargetClass::ALL[class_idx];
            let target = classified_target(class, 0.0, &history(n, last));
            let a = score(&target, now).unwrap();
            let b = score(&target, now + step).unwrap();
            prop_assert!(b > a);
        }

        #[test]
        fn sne_cc_increasing_within_ramp(
            n in 1usize..20,
            last in 0.0f64..3.0 * DAY,
            now in 0.0f64..2.0 * DAY,
            step in 1.0f64..DAY - 1.0,
        ) {
            let target = classified_target(TargetClass::SneCc, 0.0, &history(n, last));
            let a = score(&target, now).unwrap();
            let b = score(&target, now + step).unwrap();
            prop_assert!(b > a);
        }

        #[test]
        fn sne_cc_increasing_within_steady(
            n in 1usize..30,
            last in 0.0f64..1e7,
            now in 3.0 * DAY..1e7,
            step in 1.0f64..1e6,
        ) {
            let target = classified_target(TargetClass::SneCc, 0.0, &history(n, last));
            let a = score(&target, now).unwrap();
            let b = score(&target, now + step).unwrap();
            prop_assert!(b > a);
        }

        #[test]
        fn too_increasing_with_fixed_count(
            n in 1usize..5,
            last in 0.0f64..1e7,
            now in 0.0f64..1e7,
            step in 1.0f64..1e6,
        ) {
            // Count below 3 stays in ramp, 3 or 4 in steady.
            let target = classified_target(TargetClass::Too, 0.0, &history(n, last));
            let a = score(&target, now).unwrap();
            let b = score(&target, now + step).unwrap();
            prop_assert!(b > a);
        }

        #[test]
        fn scores_are_finite_or_never(
            class_idx in 0usize..7,
            n in 0usize..40,
            last in 0.0f64..1e8,
            now in 0.0f64..1e8,
        ) {
            let class = TargetClass::ALL[class_idx];
            let target = classified_target(class, 0.0, &history(n, last));
            let p = score(&target, now).unwrap();
            prop_assert!(p.value().is_finite());
        }
    }
}
