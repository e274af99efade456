//! Error types for target construction and policy evaluation.
//!
//! Construction-time problems (bad tags, malformed windows or history)
//! surface as [`TargetError`] from [`TargetBuilder::build`](crate::TargetBuilder::build).
//! [`PolicyError`] is what a policy may return while scoring.

use std::error::Error;
use std::fmt;

use crate::id::TargetId;

/// Errors detected while building a [`Target`](crate::Target).
#[derive(Clone, Debug, PartialEq)]
pub enum TargetError {
    /// The class tag is not one of the recognised cadence families.
    UnknownTargetType {
        /// The rejected tag.
        tag: String,
    },
    /// A numeric field is NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The observation window ends before it starts.
    InvalidWindow {
        /// Window start.
        tstart: f64,
        /// Window end.
        tfinal: f64,
    },
    /// The desired cadence is not strictly positive.
    InvalidCadence {
        /// Length of the cadence period in seconds.
        obs_period: f64,
        /// Observations wanted per period.
        obs_per_period: f64,
    },
    /// Observation history is not in non-decreasing time order.
    UnorderedHistory {
        /// Index of the first entry earlier than its predecessor.
        index: usize,
    },
}

impl fmt::Display for TargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTargetType { tag } => write!(f, "target is unknown type: '{tag}'"),
            Self::NonFinite { field } => write!(f, "{field} must be finite"),
            Self::InvalidWindow { tstart, tfinal } => {
                write!(f, "window start {tstart} is after window end {tfinal}")
            }
            Self::InvalidCadence {
                obs_period,
                obs_per_period,
            } => write!(
                f,
                "cadence must be positive, got obs_period={obs_period} obs_per_period={obs_per_period}"
            ),
            Self::UnorderedHistory { index } => {
                write!(f, "observation {index} is earlier than the one before it")
            }
        }
    }
}

impl Error for TargetError {}

/// Errors returned by a policy's `score()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// A per-type policy was handed a target with no class.
    ///
    /// Fatal for the epoch: skipping the target would silently bias
    /// scheduling against it.
    UnknownTargetType {
        /// The unclassified target.
        target: TargetId,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTargetType { target } => {
                write!(f, "target {target} has no class for a per-type policy")
            }
        }
    }
}

impl Error for PolicyError {}
