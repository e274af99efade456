//! The [`Priority`] score.

use std::cmp::Ordering;
use std::fmt;

/// Scalar urgency of a target at one instant. Higher is more urgent.
///
/// Scores are only comparable within one policy. The engine and the
/// reference policies never produce NaN or infinities; any case that
/// would is mapped to [`Priority::NEVER`].
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Priority(pub f64);

impl Priority {
    /// "Do not select" sentinel.
    ///
    /// Returned when a target's quota is met, its window has closed, or
    /// its cadence says it should never be observed again. A scheduler
    /// will only pick it when every candidate carries the sentinel.
    pub const NEVER: Priority = Priority(-1e300);

    /// Raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether this is the [`NEVER`](Self::NEVER) sentinel.
    pub fn is_never(self) -> bool {
        self.0 <= Self::NEVER.0
    }

    /// Total order over scores (IEEE 754 `totalOrder`).
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_never() {
            write!(f, "never")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<f64> for Priority {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn never_is_below_any_ordinary_score() {
        assert!(Priority::NEVER < Priority(-1e12));
        assert!(Priority::NEVER.is_never());
        assert!(!Priority(-1e12).is_never());
    }

    #[test]
    fn total_cmp_orders_scores() {
        let mut scores = vec![Priority(2.0), Priority::NEVER, Priority(-5.0)];
        scores.sort_by(Priority::total_cmp);
        assert_eq!(scores, vec![Priority::NEVER, Priority(-5.0), Priority(2.0)]);
    }

    #[test]
    fn display_marks_sentinel() {
        assert_eq!(Priority::NEVER.to_string(), "never");
        assert_eq!(Priority(1.5).to_string(), "1.5");
    }
}
