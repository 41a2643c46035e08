//! Error taxonomy shared by every engine in the crate.

use thiserror::Error;

/// Errors raised while deriving vehicles, sizing fleets, or scoring utility.
///
/// Every failure happens at the point of violation during construction;
/// there is never a partially built [`Vehicle`](crate::models::Vehicle) or
/// [`Fleet`](crate::models::Fleet).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FleetError {
    /// A catalog choice identifier does not exist.
    #[error("unknown {kind} choice: {value:?}")]
    Lookup {
        /// Subsystem kind being looked up.
        kind: &'static str,
        /// The rejected identifier.
        value: String,
    },

    /// A structural design constraint is violated.
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// Missing, ambiguous, or out-of-range configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A derivation step hit a zero denominator.
    #[error("division by zero: {0} is zero")]
    Division(&'static str),

    /// A scalar input is outside its admissible range.
    #[error("invalid value for {field}: {value}")]
    Value {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The fleet-size scan reached its bound without meeting the target.
    #[error("no fleet of at most {max_fleet_size} vehicles reaches {target} passengers/hour")]
    NonConvergence {
        /// Requested peak hourly throughput.
        target: u32,
        /// Iteration bound of the scan.
        max_fleet_size: u32,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FleetError>;

/// Divides `numerator` by `denominator`, failing on a zero denominator.
pub(crate) fn checked_div(numerator: f64, denominator: f64, what: &'static str) -> Result<f64> {
    if denominator == 0.0 {
        return Err(FleetError::Division(what));
    }
    Ok(numerator / denominator)
}

/// Rejects negative or non-finite inputs, naming the field.
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(FleetError::Value { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_div_zero() {
        assert_eq!(
            checked_div(1.0, 0.0, "charger power"),
            Err(FleetError::Division("charger power"))
        );
        assert_eq!(checked_div(6.0, 3.0, "x"), Ok(2.0));
    }

    #[test]
    fn test_non_negative_names_field() {
        let err = non_negative("availability", -0.1).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for availability: -0.1");
        assert!(non_negative("availability", f64::NAN).is_err());
        assert!(non_negative("availability", f64::INFINITY).is_err());
        assert_eq!(non_negative("availability", 0.0), Ok(0.0));
    }

    #[test]
    fn test_lookup_message() {
        let err = FleetError::Lookup {
            kind: "chassis",
            value: "C9".into(),
        };
        assert_eq!(err.to_string(), "unknown chassis choice: \"C9\"");
    }
}
