//! Motor and inverter catalog.

use serde::Serialize;

use super::{Subsystem, SubsystemSpec};

choice_enum! {
    /// Motor and inverter choice.
    MotorChoice, [
        /// 82 kg, $1,200, 150 kW.
        M1,
        /// 60 kg, $1,400, 150 kW.
        M2,
        /// 140 kg, $1,650, 210 kW.
        M3,
        /// 100 kg, $3,600, 450 kW.
        M4,
    ]
}

/// Catalog entry of a motor and inverter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotorSpec {
    /// Mass in kg.
    pub weight_kg: f64,
    /// Cost in thousands of USD.
    pub cost_1k_usd: f64,
    /// Rated traction power in kW.
    pub power_kw: f64,
}

impl Subsystem for MotorChoice {
    type Spec = MotorSpec;
    const KIND: &'static str = "motor_and_inverter";

    fn all() -> &'static [Self] {
        Self::ALL
    }

    fn spec(self) -> MotorSpec {
        let (weight_kg, cost_1k_usd, power_kw) = match self {
            Self::M1 => (82.0, 1.2, 150.0),
            Self::M2 => (60.0, 1.4, 150.0),
            Self::M3 => (140.0, 1.65, 210.0),
            Self::M4 => (100.0, 3.6, 450.0),
        };
        MotorSpec {
            weight_kg,
            cost_1k_usd,
            power_kw,
        }
    }
}

impl SubsystemSpec for MotorSpec {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motor_table() {
        let m3 = MotorChoice::M3.spec();
        assert_eq!(m3.weight_kg, 140.0);
        assert_eq!(m3.cost_1k_usd, 1.65);
        assert_eq!(m3.power_kw, 210.0);
        assert_eq!(MotorChoice::M4.to_string(), "M4");
    }
}
