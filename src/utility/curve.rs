//! Piecewise-linear single-attribute utility curves.

use crate::error::{FleetError, Result};
use crate::numeric::{round_to, PHYSICAL_DECIMALS};

/// A single-attribute utility function given by ordered breakpoints.
///
/// Between breakpoints the utility is interpolated linearly; outside the
/// table it is held flat at the nearest endpoint.
///
/// # Examples
///
/// ```
/// use u_fleet::utility::UtilityCurve;
///
/// let curve = UtilityCurve::new(vec![(0.0, 1.0), (10.0, 0.5), (20.0, 0.0)]).unwrap();
/// assert_eq!(curve.evaluate(10.0), 0.5);
/// assert_eq!(curve.evaluate(15.0), 0.25);
/// assert_eq!(curve.evaluate(-3.0), 1.0);
/// assert_eq!(curve.evaluate(99.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityCurve {
    points: Vec<(f64, f64)>,
}

impl UtilityCurve {
    /// Creates a curve from `(x, utility)` breakpoints.
    ///
    /// Keys must be finite and strictly ascending; utilities must lie in
    /// `[0, 1]`; at least one breakpoint is required.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self> {
        if points.is_empty() {
            return Err(FleetError::Config("utility curve has no breakpoints".into()));
        }
        for &(x, u) in &points {
            if !x.is_finite() || !(0.0..=1.0).contains(&u) {
                return Err(FleetError::Config(format!(
                    "invalid utility breakpoint ({x}, {u})"
                )));
            }
        }
        if points.windows(2).any(|w| w[0].0 >= w[1].0) {
            return Err(FleetError::Config(
                "utility breakpoints must be strictly ascending".into(),
            ));
        }
        Ok(Self { points })
    }

    /// Builds a curve from a table known to be valid.
    pub(super) fn from_table(table: &[(f64, f64)]) -> Self {
        Self {
            points: table.to_vec(),
        }
    }

    /// The breakpoints, in ascending order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Breakpoints bracketing `x`: the last key `≤ x` and the first key
    /// `≥ x`. Both are the nearest endpoint when `x` is outside the table.
    fn bracket(&self, x: f64) -> ((f64, f64), (f64, f64)) {
        let first = self.points[0];
        let mut lower = first;
        for &point in &self.points {
            if point.0 <= x {
                lower = point;
            }
            if point.0 >= x {
                return (lower, point);
            }
        }
        (lower, lower)
    }

    /// Utility at `x`, rounded to four decimals.
    pub fn evaluate(&self, x: f64) -> f64 {
        let ((x1, y1), (x2, y2)) = self.bracket(x);
        if x1 == x2 {
            return y1;
        }
        let value = round_to(y1 + (x - x1) * (y2 - y1) / (x2 - x1), PHYSICAL_DECIMALS);
        tracing::trace!(x, x1, y1, x2, y2, value, "interpolated utility");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wait_curve() -> UtilityCurve {
        UtilityCurve::new(vec![
            (0.0, 1.0),
            (5.0, 0.95),
            (10.0, 0.75),
            (15.0, 0.40),
            (20.0, 0.20),
            (30.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_breakpoints() {
        let c = wait_curve();
        for &(x, u) in c.points() {
            assert_eq!(c.evaluate(x), u);
        }
    }

    #[test]
    fn test_interpolation() {
        let c = wait_curve();
        assert_eq!(c.evaluate(8.0), 0.83);
        assert_eq!(c.evaluate(12.0), 0.61);
        assert_eq!(c.evaluate(25.0), 0.1);
    }

    #[test]
    fn test_flat_extrapolation() {
        let c = wait_curve();
        assert_eq!(c.evaluate(-1.0), 1.0);
        assert_eq!(c.evaluate(1e9), 0.0);
    }

    #[test]
    fn test_single_point_curve() {
        let c = UtilityCurve::new(vec![(3.0, 0.4)]).unwrap();
        assert_eq!(c.evaluate(0.0), 0.4);
        assert_eq!(c.evaluate(3.0), 0.4);
        assert_eq!(c.evaluate(7.0), 0.4);
    }

    #[test]
    fn test_invalid_curves() {
        assert!(UtilityCurve::new(vec![]).is_err());
        assert!(UtilityCurve::new(vec![(0.0, 0.0), (0.0, 1.0)]).is_err());
        assert!(UtilityCurve::new(vec![(1.0, 0.0), (0.0, 1.0)]).is_err());
        assert!(UtilityCurve::new(vec![(0.0, 1.2)]).is_err());
        assert!(UtilityCurve::new(vec![(f64::NAN, 0.5)]).is_err());
    }

    proptest! {
        #[test]
        fn prop_utility_within_endpoint_range(x in -100.0f64..100.0) {
            let u = wait_curve().evaluate(x);
            prop_assert!((0.0..=1.0).contains(&u));
        }

        #[test]
        fn prop_decreasing_curve_is_monotone(a in 0.0f64..40.0, b in 0.0f64..40.0) {
            let c = wait_curve();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(c.evaluate(lo) >= c.evaluate(hi));
        }
    }
}
