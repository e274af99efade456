//! Reference priority policies for Slew observation scheduling.
//!
//! Four interchangeable, stateless policies. All use the "highest score
//! wins" convention and return [`Priority::NEVER`](slew_core::Priority::NEVER)
//! for targets that should not be chosen.
//!
//! | Policy | Uses class | Draws | Score |
//! |---|---|---|---|
//! | [`LinearBacklog`] | no | 0 | elapsed since last obs / average interval |
//! | [`StochasticRate`] | no | 0 or 1 | negated exponential waiting time |
//! | [`FixedCadence`] | yes | 0 | negated time until next ideal obs |
//! | [`AdaptiveCadence`] | yes | 0 | as fixed, interval tightened by campaign goals |
//!
//! The per-class tables live in [`cadence`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod adaptive_cadence;
pub mod cadence;
pub mod fixed_cadence;
pub mod linear_backlog;
pub mod stochastic_rate;

pub use adaptive_cadence::AdaptiveCadence;
pub use cadence::{
    adaptive_schedule, fixed_schedule, Cadence, Campaign, Interval, Phase, PhaseTrigger, Schedule,
};
pub use fixed_cadence::FixedCadence;
pub use linear_backlog::LinearBacklog;
pub use stochastic_rate::StochasticRate;
