//! Match tolerance (a.k.a. sensitivity).

use std::fmt;

use crate::color::Rgb;

/// Maximum Euclidean RGB distance at which a pixel still matches a reference.
///
/// A tolerance of exactly `0` selects exact-match mode: all three channels must
/// be equal. Any positive value matches when `distance <= tolerance`.
/// Construction rejects negative, NaN and infinite values, so a `Tolerance`
/// in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Exact-match mode.
    pub const EXACT: Self = Self(0.0);

    /// Create a tolerance from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTolerance`] if `value` is negative or not finite.
    pub fn new(value: f64) -> Result<Self, InvalidTolerance> {
        if !value.is_finite() || value < 0.0 {
            return Err(InvalidTolerance { value });
        }
        // Fold -0.0 into 0.0
        Ok(Self(value + 0.0))
    }

    /// Tolerance from a sensitivity setting that can be switched off.
    ///
    /// A disabled setting is exact-match mode regardless of `value`, so the
    /// value is only validated when enabled.
    ///
    /// ```
    /// use color_match::Tolerance;
    ///
    /// assert!(Tolerance::from_sensitivity(false, -5.0).unwrap().is_exact());
    /// assert_eq!(Tolerance::from_sensitivity(true, 30.0).unwrap().value(), 30.0);
    /// ```
    pub fn from_sensitivity(enabled: bool, value: f64) -> Result<Self, InvalidTolerance> {
        if enabled {
            Self::new(value)
        } else {
            Ok(Self::EXACT)
        }
    }

    /// The raw tolerance value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// True in exact-match mode.
    #[inline]
    pub fn is_exact(self) -> bool {
        self.0 == 0.0
    }

    /// The match predicate.
    #[inline]
    pub fn matches(self, pixel: Rgb, reference: Rgb) -> bool {
        if self.is_exact() {
            pixel == reference
        } else {
            pixel.distance(reference) <= self.0
        }
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tolerance value that is negative, NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidTolerance {
    /// The rejected value
    pub value: f64,
}

impl fmt::Display for InvalidTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tolerance must be a finite, non-negative number (got {})",
            self.value
        )
    }
}

impl std::error::Error for InvalidTolerance {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(Tolerance::new(-0.5).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_zero_is_exact() {
        let t = Tolerance::new(-0.0).unwrap();
        assert!(t.is_exact());
        assert!(t.value().is_sign_positive());
    }

    #[test]
    fn test_zero_is_exact() {
        let t = Tolerance::new(0.0).unwrap();
        assert!(t.is_exact());
        assert_eq!(t, Tolerance::EXACT);
        assert_eq!(Tolerance::default(), Tolerance::EXACT);
    }

    #[test]
    fn test_exact_requires_equal_channels() {
        let t = Tolerance::EXACT;
        assert!(t.matches(Rgb::new(1, 2, 3), Rgb::new(1, 2, 3)));
        assert!(!t.matches(Rgb::new(1, 2, 3), Rgb::new(1, 2, 4)));
    }

    #[test]
    fn test_tolerant_boundary_is_inclusive() {
        let t = Tolerance::new(5.0).unwrap();
        assert!(t.matches(Rgb::new(3, 4, 0), Rgb::new(0, 0, 0)));
        assert!(!t.matches(Rgb::new(3, 5, 0), Rgb::new(0, 0, 0)));
    }

    #[test]
    fn test_small_positive_tolerance_still_matches_exact() {
        let t = Tolerance::new(0.5).unwrap();
        assert!(!t.is_exact());
        assert!(t.matches(Rgb::new(9, 9, 9), Rgb::new(9, 9, 9)));
        assert!(!t.matches(Rgb::new(9, 9, 9), Rgb::new(9, 9, 10)));
    }

    #[test]
    fn test_disabled_sensitivity_ignores_value() {
        assert_eq!(
            Tolerance::from_sensitivity(false, f64::NAN).unwrap(),
            Tolerance::EXACT
        );
        assert!(Tolerance::from_sensitivity(true, f64::NAN).is_err());
        assert!(Tolerance::from_sensitivity(true, 0.0).unwrap().is_exact());
    }

    #[test]
    fn test_display() {
        assert_eq!(Tolerance::new(30.0).unwrap().to_string(), "30");
        assert_eq!(Tolerance::new(12.5).unwrap().to_string(), "12.5");
        assert!(InvalidTolerance { value: -1.0 }
            .to_string()
            .contains("non-negative"));
    }
}
