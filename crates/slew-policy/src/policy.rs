//! The [`PriorityPolicy`] trait.
//!
//! Policies are interchangeable, stateless scoring strategies. The
//! scheduler evaluates one policy across every candidate in an epoch and
//! observes the highest-scoring target.

use crate::context::ScoreContext;
use slew_core::{PolicyError, Priority};

/// A stateless strategy scoring how urgently a target needs observing.
///
/// # Contract
///
/// - Higher [`Priority`] means more urgent. [`Priority::NEVER`] means the
///   target should not be chosen while any other candidate is eligible.
/// - `score()` MUST NOT return NaN or infinite values.
/// - `score()` MUST be deterministic given the context, including the
///   draws it takes from the context's random source.
/// - `&self`: policies hold configuration only, never per-call state, so
///   one instance may be shared across threads.
///
/// # Object safety
///
/// This trait is object-safe; the engine stores the active policy as
/// `Box<dyn PriorityPolicy>`.
///
/// # Examples
///
/// A policy that favours targets with the fewest observations:
///
/// ```
/// use slew_core::{PolicyError, Priority};
/// use slew_policy::{PriorityPolicy, ScoreContext};
///
/// struct FewestFirst;
///
/// impl PriorityPolicy for FewestFirst {
///     fn name(&self) -> &str { "fewest_first" }
///
///     fn score(&self, ctx: &mut ScoreContext<'_>) -> Result<Priority, PolicyError> {
///         Ok(Priority(-(ctx.target().observation_count() as f64)))
///     }
/// }
///
/// assert_eq!(FewestFirst.name(), "fewest_first");
/// assert!(!FewestFirst.uses_class());
/// ```
pub trait PriorityPolicy: Send + Sync + 'static {
    /// Human-readable name for error reporting and telemetry.
    fn name(&self) -> &str;

    /// Whether the policy reads [`Target::class`](slew_core::Target::class).
    ///
    /// Per-type policies fail on unclassified targets; class-blind
    /// policies accept anything. Default: `false`.
    fn uses_class(&self) -> bool {
        false
    }

    /// Score one candidate at the context's clock instant.
    fn score(&self, ctx: &mut ScoreContext<'_>) -> Result<Priority, PolicyError>;
}
