//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an observation target.
///
/// Assigned by whoever builds the candidate list. Besides error reports,
/// the id seeds the per-target random stream in the engine, so two
/// targets sharing an id within one epoch draw identical values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TargetId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a sensor (telescope, camera) making observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SensorId(pub u32);

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SensorId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_inner_value() {
        assert_eq!(TargetId(42).to_string(), "42");
        assert_eq!(SensorId(7).to_string(), "7");
    }

    #[test]
    fn ids_convert_from_integers() {
        assert_eq!(TargetId::from(3), TargetId(3));
        assert_eq!(SensorId::from(9), SensorId(9));
    }
}
