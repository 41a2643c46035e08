//! Chassis catalog.

use serde::Serialize;

use super::{Subsystem, SubsystemSpec};

choice_enum! {
    /// Chassis choice; fixes passenger capacity and baseline consumption.
    ChassisChoice, [
        /// 1350 kg, $12,000, 2 passengers, 140 Wh/km.
        C1,
        /// 1600 kg, $17,000, 4 passengers, 135 Wh/km.
        C2,
        /// 1800 kg, $21,000, 6 passengers, 145 Wh/km.
        C3,
        /// 2000 kg, $29,000, 8 passengers, 150 Wh/km.
        C4,
        /// 2200 kg, $31,000, 10 passengers, 160 Wh/km.
        C5,
        /// 2500 kg, $33,000, 16 passengers, 165 Wh/km.
        C6,
        /// 4000 kg, $38,000, 20 passengers, 180 Wh/km.
        C7,
        /// 7000 kg, $47,000, 30 passengers, 210 Wh/km.
        C8,
    ]
}

/// Catalog entry of a chassis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChassisSpec {
    /// Mass in kg.
    pub weight_kg: f64,
    /// Cost in thousands of USD.
    pub cost_1k_usd: f64,
    /// Seated passengers.
    pub passenger_capacity: u32,
    /// Consumption of the bare chassis in Wh/km.
    pub nominal_power_wh_per_km: f64,
}

impl ChassisSpec {
    /// Heaviest battery pack the chassis has room for (a third of its mass).
    pub fn max_battery_weight_kg(&self) -> f64 {
        self.weight_kg / 3.0
    }
}

impl Subsystem for ChassisChoice {
    type Spec = ChassisSpec;
    const KIND: &'static str = "chassis";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn spec(self) -> ChassisSpec {
        let (weight_kg, cost_1k_usd, passenger_capacity, nominal_power_wh_per_km) = match self {
            Self::C1 => (1350.0, 12.0, 2, 140.0),
            Self::C2 => (1600.0, 17.0, 4, 135.0),
            Self::C3 => (1800.0, 21.0, 6, 145.0),
            Self::C4 => (2000.0, 29.0, 8, 150.0),
            Self::C5 => (2200.0, 31.0, 10, 160.0),
            Self::C6 => (2500.0, 33.0, 16, 165.0),
            Self::C7 => (4000.0, 38.0, 20, 180.0),
            Self::C8 => (7000.0, 47.0, 30, 210.0),
        };
        ChassisSpec {
            weight_kg,
            cost_1k_usd,
            passenger_capacity,
            nominal_power_wh_per_km,
        }
    }
}

impl SubsystemSpec for ChassisSpec {
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
            ("passenger_capacity", f64::from(self.passenger_capacity)),
            ("nominal_power_wh_per_km", self.nominal_power_wh_per_km),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chassis_table() {
        let c7 = ChassisChoice::C7.spec();
        assert_eq!(c7.weight_kg, 4000.0);
        assert_eq!(c7.cost_1k_usd, 38.0);
        assert_eq!(c7.passenger_capacity, 20);
        assert_eq!(c7.nominal_power_wh_per_km, 180.0);
    }

    #[test]
    fn test_max_battery_weight() {
        assert_eq!(ChassisChoice::C8.spec().max_battery_weight_kg(), 7000.0 / 3.0);
        // C1 has room for ~450 kg: only P2 fits.
        let room = ChassisChoice::C1.spec().max_battery_weight_kg();
        assert!(420.0 <= room && room < 512.0);
    }
}
