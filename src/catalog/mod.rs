//! Subsystem catalogs.
//!
//! Each of the five subsystem kinds is a closed enumeration of choice
//! identifiers. Every identifier resolves to exactly one immutable spec via
//! an exhaustive `match`, so the catalogs are total by construction.
//!
//! - [`AutonomyChoice`] — autonomy kit (A1–A5)
//! - [`ChargerChoice`] — battery charger (G1–G3)
//! - [`BatteryPackChoice`] — battery pack (P1–P7)
//! - [`ChassisChoice`] — chassis (C1–C8)
//! - [`MotorChoice`] — motor and inverter (M1–M4)
//! - [`Architecture`] — one choice per kind

use std::fmt;
use std::str::FromStr;

use crate::error::FleetError;

/// Declares a choice enumeration with `ALL`, `name()`, `Display` and `FromStr`.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident, [$($(#[$vmeta:meta])* $variant:ident),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every choice, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Catalog identifier, e.g. `"A3"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::FleetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.name().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| crate::error::FleetError::Lookup {
                        kind: <Self as crate::catalog::Subsystem>::KIND,
                        value: s.to_string(),
                    })
            }
        }
    };
}

mod architecture;
mod autonomy;
mod battery;
mod charger;
mod chassis;
mod motor;

pub use architecture::Architecture;
pub use autonomy::{AutonomyChoice, AutonomySpec};
pub use battery::{BatteryPackChoice, BatteryPackSpec};
pub use charger::{ChargerChoice, ChargerSpec};
pub use chassis::{ChassisChoice, ChassisSpec};
pub use motor::{MotorChoice, MotorSpec};

/// A catalog choice identifier resolving to an immutable spec.
pub trait Subsystem: Copy + fmt::Display + FromStr<Err = FleetError> + 'static {
    /// Resolved catalog entry.
    type Spec: SubsystemSpec;

    /// Subsystem kind, used in error messages and report prefixes.
    const KIND: &'static str;

    /// Every choice of this kind.
    fn all() -> &'static [Self];

    /// Looks up the catalog entry for this choice.
    fn spec(self) -> Self::Spec;
}

/// Attributes every catalog entry carries.
pub trait SubsystemSpec: Copy {
    /// Mass in kilograms.
    fn weight_kg(&self) -> f64;

    /// Unit cost in thousands of USD.
    fn cost_1k_usd(&self) -> f64;

    /// Every public scalar field as `(name, value)` pairs, for reporting.
    fn fields(&self) -> Vec<(&'static str, f64)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_catalog<S: Subsystem>() {
        for &choice in S::all() {
            let spec = choice.spec();
            assert!(spec.weight_kg() > 0.0, "{choice} weight");
            assert!(spec.cost_1k_usd() > 0.0, "{choice} cost");
            for (name, value) in spec.fields() {
                assert!(value >= 0.0, "{choice}.{name} is negative");
            }
            let parsed: S = choice.to_string().parse().expect("round trip");
            assert_eq!(parsed.to_string(), choice.to_string());
        }
        match "Z0".parse::<S>() {
            Err(FleetError::Lookup { kind, .. }) => assert_eq!(kind, S::KIND),
            Err(other) => panic!("expected lookup error, got {other}"),
            Ok(choice) => panic!("Z0 parsed as {choice}"),
        }
    }

    #[test]
    fn test_catalogs_total_and_non_negative() {
        check_catalog::<AutonomyChoice>();
        check_catalog::<ChargerChoice>();
        check_catalog::<BatteryPackChoice>();
        check_catalog::<ChassisChoice>();
        check_catalog::<MotorChoice>();
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(AutonomyChoice::ALL.len(), 5);
        assert_eq!(ChargerChoice::ALL.len(), 3);
        assert_eq!(BatteryPackChoice::ALL.len(), 7);
        assert_eq!(ChassisChoice::ALL.len(), 8);
        assert_eq!(MotorChoice::ALL.len(), 4);
    }

    #[test]
    fn test_parse_unknown_choice() {
        let err = "C9".parse::<ChassisChoice>().unwrap_err();
        assert_eq!(
            err,
            FleetError::Lookup {
                kind: "chassis",
                value: "C9".into()
            }
        );
        assert_eq!(" p3 ".parse::<BatteryPackChoice>(), Ok(BatteryPackChoice::P3));
    }
}
