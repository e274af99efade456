//! Slew: priority policies for telescope observation scheduling.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Slew sub-crates. For most users, adding `slew` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slew::prelude::*;
//!
//! // An AGN_low target observed once at the start of the run.
//! let t0 = 1.0e9;
//! let target = Target::builder(TargetId(1))
//!     .class_tag("AGN_low")
//!     .window(0.0, 90.0 * DAY)
//!     .obs_times(vec![t0])
//!     .build()
//!     .unwrap();
//!
//! // Due again three hours later.
//! let sensor = Sensor::new(SensorId(0), SimClock::new(t0, 3.0 * HOUR));
//! let mut rng = target_stream(42, 0, target.id());
//! let options = PolicyOptions::new();
//! let mut ctx = ScoreContext::new(&target, &sensor, &mut rng, &options);
//! assert_eq!(FixedCadence.score(&mut ctx), Ok(Priority(0.0)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slew-core` | Targets, classes, sensors, priorities, errors |
//! | [`policy`] | `slew-policy` | Policy trait, score context, random streams |
//! | [`policies`] | `slew-policies` | Reference policies and cadence tables |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core data model (`slew-core`).
///
/// [`types::Target`], [`types::TargetClass`], [`types::Sensor`] and the
/// [`types::Priority`] score with its "never" sentinel.
pub use slew_core as types;

/// Policy contract (`slew-policy`).
///
/// The [`policy::PriorityPolicy`] trait is the extension point for
/// user-defined scoring.
pub use slew_policy as policy;

/// Reference policies (`slew-policies`).
///
/// [`policies::LinearBacklog`], [`policies::StochasticRate`],
/// [`policies::FixedCadence`] and [`policies::AdaptiveCadence`].
pub use slew_policies as policies;

/// Common imports for typical Slew usage.
///
/// ```rust
/// use slew::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use slew_core::{
        Priority, Sensor, SensorId, SimClock, Target, TargetBuilder, TargetClass, TargetId, DAY,
        HOUR,
    };

    // Errors
    pub use slew_core::{PolicyError, TargetError};

    // Policy contract
    pub use slew_policy::{
        target_stream, PolicyOptions, PriorityPolicy, ScoreContext, UniformSource,
    };

    // Reference policies
    pub use slew_policies::{AdaptiveCadence, FixedCadence, LinearBacklog, StochasticRate};
}
