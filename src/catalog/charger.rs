//! Battery charger catalog.

use serde::Serialize;

use super::{Subsystem, SubsystemSpec};

choice_enum! {
    /// On-board battery charger choice.
    ChargerChoice, [
        /// 1.0 kg, $1,000, 10 kW.
        G1,
        /// 1.8 kg, $2,500, 20 kW.
        G2,
        /// 5.0 kg, $10,000, 60 kW.
        G3,
    ]
}

/// Catalog entry of a battery charger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargerSpec {
    /// Mass in kg.
    pub weight_kg: f64,
    /// Cost in thousands of USD.
    pub cost_1k_usd: f64,
    /// Charging power in kW.
    pub power_kw: f64,
}

impl Subsystem for ChargerChoice {
    type Spec = ChargerSpec;
    const KIND: &'static str = "battery_charger";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn spec(self) -> ChargerSpec {
        let (weight_kg, cost_1k_usd, power_kw) = match self {
            Self::G1 => (1.0, 1.0, 10.0),
            Self::G2 => (1.8, 2.5, 20.0),
            Self::G3 => (5.0, 10.0, 60.0),
        };
        ChargerSpec {
            weight_kg,
            cost_1k_usd,
            power_kw,
        }
    }
}

impl SubsystemSpec for ChargerSpec {
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
            ("power_kw", self.power_kw),
        ]
    }
}
