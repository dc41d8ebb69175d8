use num::rational::Rational64;
use num::Signed;

// -----------------------------------------------------------------------------
// Constants & Configuration
// -----------------------------------------------------------------------------

/// Magnitude below which a floating point pivot candidate counts as zero.
pub const PIVOT_EPSILON: f64 = 1e-9;

/// Largest distance from the nearest integer a back-substituted press count
/// may have and still be accepted.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-6;

/// Scalar used by the linear system reducer.
///
/// `f64` follows the tolerance constants above; [`Rational64`] is exact and
/// needs no tolerance at all.
pub trait Coefficient: nalgebra::Scalar + Copy + Signed + PartialOrd {
    fn from_count(count: u64) -> Self;

    /// Whether the value should be treated as zero when choosing pivots.
    fn is_negligible(&self) -> bool;

    /// Non-negative integer closest to the value, or `None` when the value is
    /// negative or too far from an integer.
    fn to_press_count(&self) -> Option<u64>;
}

impl Coefficient for f64 {
    fn from_count(count: u64) -> Self {
        count as f64
    }

    fn is_negligible(&self) -> bool {
        self.abs() < PIVOT_EPSILON
    }

    fn to_press_count(&self) -> Option<u64> {
        let rounded = self.round();
        if rounded < 0.0 || (self - rounded).abs() > INTEGRALITY_TOLERANCE {
            return None;
        }
        Some(rounded as u64)
    }
}

impl Coefficient for Rational64 {
    fn from_count(count: u64) -> Self {
        Rational64::from_integer(count as i64)
    }

    fn is_negligible(&self) -> bool {
        *self.numer() == 0
    }

    fn to_press_count(&self) -> Option<u64> {
        if !self.is_integer() {
            return None;
        }
        u64::try_from(self.to_integer()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(3.0, Some(3))]
    #[case(2.999_999_9, Some(3))]
    #[case(-0.000_000_1, Some(0))]
    #[case(2.5, None)]
    #[case(-1.0, None)]
    #[case(1.001, None)]
    fn float_press_counts(#[case] value: f64, #[case] expected: Option<u64>) {
        assert_eq!(expected, value.to_press_count());
    }

    #[rstest]
    #[case(Rational64::new(6, 2), Some(3))]
    #[case(Rational64::new(5, 2), None)]
    #[case(Rational64::new(-4, 2), None)]
    #[case(Rational64::from_integer(0), Some(0))]
    fn exact_press_counts(#[case] value: Rational64, #[case] expected: Option<u64>) {
        assert_eq!(expected, value.to_press_count());
    }

    #[test]
    fn negligible_values() {
        assert!(1e-12_f64.is_negligible());
        assert!(!1e-3_f64.is_negligible());
        assert!(Rational64::from_integer(0).is_negligible());
        assert!(!Rational64::new(1, 1_000_000).is_negligible());
    }
}
