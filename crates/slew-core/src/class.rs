//! The closed set of target classes selecting a cadence family.

use std::fmt;
use std::str::FromStr;

use crate::error::TargetError;

/// Cadence family of a target.
///
/// Parsed from the canonical tags (`AGN_low`, `SNe_CC`, ...) when a
/// target is built, so an unrecognised tag fails at construction rather
/// than in the middle of a scheduling epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetClass {
    /// Low-variability active galactic nucleus (`AGN_low`).
    AgnLow,
    /// Medium-variability active galactic nucleus (`AGN_med`).
    AgnMed,
    /// High-variability active galactic nucleus (`AGN_high`).
    AgnHigh,
    /// Supernova light curve (`SNe`).
    Sne,
    /// Core-collapse supernova with an early ramp phase (`SNe_CC`).
    SneCc,
    /// Supernova spectral energy distribution, two shots only (`SNe_SED`).
    SneSed,
    /// Target of opportunity (`TOO`).
    Too,
}

impl TargetClass {
    /// Every class, in declaration order.
    pub const ALL: [TargetClass; 7] = [
        Self::AgnLow,
        Self::AgnMed,
        Self::AgnHigh,
        Self::Sne,
        Self::SneCc,
        Self::SneSed,
        Self::Too,
    ];

    /// Canonical tag for this class.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::AgnLow => "AGN_low",
            Self::AgnMed => "AGN_med",
            Self::AgnHigh => "AGN_high",
            Self::Sne => "SNe",
            Self::SneCc => "SNe_CC",
            Self::SneSed => "SNe_SED",
            Self::Too => "TOO",
        }
    }
}

impl fmt::Display for TargetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for TargetClass {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|class| class.as_tag() == s)
            .ok_or_else(|| TargetError::UnknownTargetType { tag: s.to_string() })
    }
}
