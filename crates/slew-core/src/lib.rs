//! Core types for the Slew observation priority framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! data shared by every priority policy: target and sensor identifiers,
//! the closed set of target classes, the read-only [`Target`] and
//! [`Sensor`] views, the [`Priority`] score, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod class;
pub mod error;
pub mod id;
pub mod priority;
pub mod sensor;
pub mod target;

pub use class::TargetClass;
pub use error::{PolicyError, TargetError};
pub use id::{SensorId, TargetId};
pub use priority::Priority;
pub use sensor::{Sensor, SimClock};
pub use target::{Target, TargetBuilder};

/// Seconds in one hour.
pub const HOUR: f64 = 3600.0;

/// Seconds in one day.
pub const DAY: f64 = 86400.0;
