//! Battery pack catalog.

use serde::Serialize;

use super::{Subsystem, SubsystemSpec};

choice_enum! {
    /// Battery pack choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_fleet::catalog::{BatteryPackChoice, Subsystem};
    ///
    /// let pack: BatteryPackChoice = "P3".parse().unwrap();
    /// assert_eq!(pack.spec().capacity_kwh, 75.0);
    /// assert_eq!(pack.spec().weight_kg, 825.0);
    /// ```
    BatteryPackChoice, [
        /// 512 kg, $8,000, 40 kWh.
        P1,
        /// 420 kg, $16,000, 60 kWh.
        P2,
        /// 825 kg, $16,000, 75 kWh.
        P3,
        /// 800 kg, $25,000, 100 kWh.
        P4,
        /// 1500 kg, $25,000, 125 kWh.
        P5,
        /// 1680 kg, $62,000, 240 kWh.
        P6,
        /// 2880 kg, $48,000, 240 kWh.
        P7,
    ]
}

/// Catalog entry of a battery pack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatteryPackSpec {
    /// Mass in kg.
    pub weight_kg: f64,
    /// Cost in thousands of USD.
    pub cost_1k_usd: f64,
    /// Usable energy in kWh.
    pub capacity_kwh: f64,
}

impl Subsystem for BatteryPackChoice {
    type Spec = BatteryPackSpec;
    const KIND: &'static str = "battery_pack";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn spec(self) -> BatteryPackSpec {
        let (weight_kg, cost_1k_usd, capacity_kwh) = match self {
            Self::P1 => (512.0, 8.0, 40.0),
            Self::P2 => (420.0, 16.0, 60.0),
            Self::P3 => (825.0, 16.0, 75.0),
            Self::P4 => (800.0, 25.0, 100.0),
            Self::P5 => (1500.0, 25.0, 125.0),
            Self::P6 => (1680.0, 62.0, 240.0),
            Self::P7 => (2880.0, 48.0, 240.0),
        };
        BatteryPackSpec {
            weight_kg,
            cost_1k_usd,
            capacity_kwh,
        }
    }
}

impl SubsystemSpec for BatteryPackSpec {
    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn cost_1k_usd(&self) -> f64 {
        self.cost_1k_usd
    }

    fn fields(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("weight_kg", self.weight_kg),
            ("cost_1k_usd", self.cost_1k_usd),
            ("capacity_kwh", self.capacity_kwh),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_table() {
        let p7 = BatteryPackChoice::P7.spec();
        assert_eq!(p7.weight_kg, 2880.0);
        assert_eq!(p7.cost_1k_usd, 48.0);
        assert_eq!(p7.capacity_kwh, 240.0);
    }

    #[test]
    fn test_fields_order() {
        let names: Vec<&str> = BatteryPackChoice::P1
            .spec()
            .fields()
            .into_iter()
            .map(|(n, _)| n)
            .collect();
        assert_eq!(names, ["weight_kg", "cost_1k_usd", "capacity_kwh"]);
    }
}
