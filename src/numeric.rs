//! Fixed-precision rounding used for reproducible results.

/// Decimal places kept for physical and time quantities.
pub(crate) const PHYSICAL_DECIMALS: i32 = 4;

/// Decimal places kept for monetary quantities.
pub(crate) const COST_DECIMALS: i32 = 2;

/// Rounds `value` half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
