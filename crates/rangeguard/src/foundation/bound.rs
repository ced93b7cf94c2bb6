//! The [`Bound`] type: an inclusive interval with optionally absent sides.

use std::fmt;

/// An inclusive `[min, max]` interval, either side optionally absent
/// (meaning unbounded in that direction).
///
/// Invariant: when both sides are present, `min <= max`. Violating this is a
/// caller bug and is debug-asserted rather than reported through the error
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T: PartialOrd> Bound<T> {
    /// Creates a bound from optional sides.
    pub fn new(min: Option<T>, max: Option<T>) -> Self {
        if let (Some(lo), Some(hi)) = (&min, &max) {
            debug_assert!(lo <= hi, "bound min must not exceed max");
        }
        Self { min, max }
    }

    /// Whether the value satisfies every present side.
    ///
    /// Each present side is required to hold positively (`value >= min`,
    /// `value <= max`), so a float NaN fails any bounded check instead of
    /// slipping through a negated comparison.
    pub fn contains(&self, value: &T) -> bool {
        let above_min = self.min.as_ref().is_none_or(|min| value >= min);
        let below_max = self.max.as_ref().is_none_or(|max| value <= max);
        above_min && below_max
    }

    /// Saturates the value into the bound without failing.
    ///
    /// Returns `min` if the value is below it, `max` if above it, else the
    /// value unchanged. Incomparable values (NaN) pass through unchanged.
    pub fn clamp(self, value: T) -> T {
        if let Some(min) = self.min {
            if value < min {
                return min;
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return max;
            }
        }
        value
    }
}

/// Renders the constraint phrase used in check messages: `in range [a, b]`
/// when both sides are present, `>= a` / `<= b` when one is.
impl<T: fmt::Display> fmt::Display for Bound<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => write!(f, "in range [{min}, {max}]"),
            (Some(min), None) => write!(f, ">= {min}"),
            (None, Some(max)) => write!(f, "<= {max}"),
            // Never reaches a failure message: a side-less bound cannot fail.
            (None, None) => write!(f, "unconstrained"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_closed_interval() {
        let bound = Bound::new(Some(0), Some(10));
        assert!(bound.contains(&0));
        assert!(bound.contains(&5));
        assert!(bound.contains(&10));
        assert!(!bound.contains(&-1));
        assert!(!bound.contains(&11));
    }

    #[test]
    fn contains_half_open() {
        let lower_only = Bound::new(Some(3), None);
        assert!(lower_only.contains(&3));
        assert!(lower_only.contains(&i64::MAX));
        assert!(!lower_only.contains(&2));

        let upper_only = Bound::new(None, Some(3));
        assert!(upper_only.contains(&i64::MIN));
        assert!(upper_only.contains(&3));
        assert!(!upper_only.contains(&4));
    }

    #[test]
    fn contains_unbounded_accepts_everything() {
        let bound: Bound<f64> = Bound::new(None, None);
        assert!(bound.contains(&f64::NEG_INFINITY));
        assert!(bound.contains(&f64::NAN));
    }

    #[test]
    fn nan_fails_any_present_side() {
        assert!(!Bound::new(Some(0.0), Some(1.0)).contains(&f64::NAN));
        assert!(!Bound::new(Some(0.0), None).contains(&f64::NAN));
        assert!(!Bound::new(None, Some(0.0)).contains(&f64::NAN));
    }

    #[test]
    fn infinities_respect_sides() {
        let bound = Bound::new(Some(0.0), Some(1.0));
        assert!(!bound.contains(&f64::INFINITY));
        assert!(!bound.contains(&f64::NEG_INFINITY));
        assert!(Bound::new(Some(0.0), None).contains(&f64::INFINITY));
    }

    #[test]
    fn clamp_saturates() {
        let bound = Bound::new(Some(0), Some(5));
        assert_eq!(bound.clamp(-3), 0);
        assert_eq!(bound.clamp(3), 3);
        assert_eq!(bound.clamp(10), 5);
    }

    #[test]
    fn clamp_half_open() {
        assert_eq!(Bound::new(Some(0), None).clamp(-1), 0);
        assert_eq!(Bound::new(Some(0), None).clamp(i64::MAX), i64::MAX);
        assert_eq!(Bound::new(None, Some(0)).clamp(1), 0);
    }

    #[test]
    fn clamp_passes_nan_through() {
        let clipped = Bound::new(Some(0.0), Some(1.0)).clamp(f64::NAN);
        assert!(clipped.is_nan());
    }

    #[test]
    fn display_forms() {
        assert_eq!(Bound::new(Some(0), Some(255)).to_string(), "in range [0, 255]");
        assert_eq!(Bound::new(Some(1), None).to_string(), ">= 1");
        assert_eq!(Bound::new(None, Some(-1)).to_string(), "<= -1");
    }
}
