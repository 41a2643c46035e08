//! A complete vehicle architecture: one choice per subsystem kind.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{AutonomyChoice, BatteryPackChoice, ChargerChoice, ChassisChoice, MotorChoice};
use super::{Subsystem, SubsystemSpec};
use crate::error::FleetError;

/// One choice from each of the five subsystem catalogs.
///
/// Displays and parses as `autonomy-charger-pack-chassis-motor`.
///
/// # Examples
///
/// ```
/// use u_fleet::catalog::Architecture;
///
/// let arch: Architecture = "A3-G1-P3-C7-M3".parse().unwrap();
/// assert!(arch.fits_space_constraint());
/// assert_eq!(arch.to_string(), "A3-G1-P3-C7-M3");
/// assert_eq!(Architecture::all().count(), 3360);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Architecture {
    /// Autonomy kit.
    pub autonomy: AutonomyChoice,
    /// Battery charger.
    pub charger: ChargerChoice,
    /// Battery pack.
    pub battery_pack: BatteryPackChoice,
    /// Chassis.
    pub chassis: ChassisChoice,
    /// Motor and inverter.
    pub motor: MotorChoice,
}

impl Architecture {
    /// Creates an architecture from its five choices.
    pub fn new(
        autonomy: AutonomyChoice,
        charger: ChargerChoice,
        battery_pack: BatteryPackChoice,
        chassis: ChassisChoice,
        motor: MotorChoice,
    ) -> Self {
        Self {
            autonomy,
            charger,
            battery_pack,
            chassis,
            motor,
        }
    }

    /// Enumerates the full cartesian product of the catalogs.
    pub fn all() -> impl Iterator<Item = Architecture> {
        AutonomyChoice::ALL.iter().flat_map(|&autonomy| {
            ChargerChoice::ALL.iter().flat_map(move |&charger| {
                BatteryPackChoice::ALL.iter().flat_map(move |&battery_pack| {
                    ChassisChoice::ALL.iter().flat_map(move |&chassis| {
                        MotorChoice::ALL.iter().map(move |&motor| {
                            Architecture::new(autonomy, charger, battery_pack, chassis, motor)
                        })
                    })
                })
            })
        })
    }

    /// Draws every choice uniformly at random.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            pick(rng),
            pick(rng),
            pick(rng),
            pick(rng),
            pick(rng),
        )
    }

    /// Returns `true` if the pack weighs at most a third of the chassis.
    pub fn fits_space_constraint(&self) -> bool {
        self.battery_pack.spec().weight_kg() <= self.chassis.spec().max_battery_weight_kg()
    }
}

fn pick<S: Subsystem, R: Rng + ?Sized>(rng: &mut R) -> S {
    let all = S::all();
    all[rng.random_range(0..all.len())]
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.autonomy, self.charger, self.battery_pack, self.chassis, self.motor
        )
    }
}

impl FromStr for Architecture {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        let [autonomy, charger, battery_pack, chassis, motor] = parts.as_slice() else {
            return Err(FleetError::Lookup {
                kind: "architecture",
                value: s.to_string(),
            });
        };
        Ok(Self::new(
            autonomy.parse()?,
            charger.parse()?,
            battery_pack.parse()?,
            chassis.parse()?,
            motor.parse()?,
        ))
    }
}
