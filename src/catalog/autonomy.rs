//! Autonomy kit catalog.

use serde::Serialize;

use super::{Subsystem, SubsystemSpec};

choice_enum! {
    /// Autonomy kit choice.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_fleet::catalog::{AutonomyChoice, Subsystem};
    ///
    /// let kit = AutonomyChoice::A3.spec();
    /// assert_eq!(kit.weight_kg, 30.0);
    /// assert_eq!(kit.added_power_wh_per_kwh, 1.5);
    /// ```
    AutonomyChoice, [
        /// 5 kg, $1,000, 0.5 Wh/kWh.
        A1,
        /// 12 kg, $2,000, 1.0 Wh/kWh.
        A2,
        /// 30 kg, $15,000, 1.5 Wh/kWh.
        A3,
        /// 60 kg, $35,000, 2.5 Wh/kWh.
        A4,
        /// 120 kg, $60,000, 5.0 Wh/kWh.
        A5,
    ]
}

/// Catalog entry of an autonomy kit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AutonomySpec {
    /// Mass in kg.
    pub weight_kg: f64,
    /// Cost in thousands of USD.
    pub cost_1k_usd: f64,
    /// Energy drawn by sensors and compute on top of traction.
    pub added_power_wh_per_kwh: f64,
}

impl Subsystem for AutonomyChoice {
    type Spec = AutonomySpec;
    const KIND: &'static str = "autonomy";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn spec(self) -> AutonomySpec {
        let (weight_kg, cost_1k_usd, added_power_wh_per_kwh) = match self {
            Self::A1 => (5.0, 1.0, 0.5),
            Self::A2 => (12.0, 2.0, 1.0),
            Self::A3 => (30.0, 15.0, 1.5),
            Self::A4 => (60.0, 35.0, 2.5),
            Self::A5 => (120.0, 60.0, 5.0),
        };
        AutonomySpec {
            weight_kg,
            cost_1k_usd,
            added_power_wh_per_kwh,
        }
    }
}

impl SubsystemSpec for AutonomySpec {
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
            ("added_power_wh_per_kwh", self.added_power_wh_per_kwh),
        ]
    }
}
