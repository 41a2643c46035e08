//! Vehicle composed from five subsystem specs, with derived performance.

use serde::Serialize;

use crate::catalog::{
    Architecture, AutonomySpec, BatteryPackSpec, ChargerSpec, ChassisSpec, MotorSpec, Subsystem,
    SubsystemSpec,
};
use crate::config::ModelConstants;
use crate::error::Result;
use crate::evaluation::derive_vehicle;
use crate::numeric::{round_to, COST_DECIMALS};

/// The five resolved subsystem specs of a vehicle.
///
/// Usually resolved from an [`Architecture`], but can be assembled by hand
/// to evaluate parts that are not in the catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleSpecs {
    /// Autonomy kit.
    pub autonomy: AutonomySpec,
    /// Battery charger.
    pub charger: ChargerSpec,
    /// Battery pack.
    pub battery_pack: BatteryPackSpec,
    /// Chassis.
    pub chassis: ChassisSpec,
    /// Motor and inverter.
    pub motor: MotorSpec,
}

impl VehicleSpecs {
    /// Costs of every subsystem, in catalog order.
    pub(crate) fn costs(&self) -> [f64; 5] {
        [
            self.autonomy.cost_1k_usd(),
            self.charger.cost_1k_usd(),
            self.battery_pack.cost_1k_usd(),
            self.chassis.cost_1k_usd(),
            self.motor.cost_1k_usd(),
        ]
    }

    /// Weights of every subsystem, in catalog order.
    pub(crate) fn weights(&self) -> [f64; 5] {
        [
            self.autonomy.weight_kg(),
            self.charger.weight_kg(),
            self.battery_pack.weight_kg(),
            self.chassis.weight_kg(),
            self.motor.weight_kg(),
        ]
    }

    /// Every subsystem's report fields, prefixed by subsystem kind.
    pub(crate) fn prefixed_fields(&self) -> Vec<(String, f64)> {
        let groups: [(&str, Vec<(&'static str, f64)>); 5] = [
            (
                <crate::catalog::AutonomyChoice as Subsystem>::KIND,
                self.autonomy.fields(),
            ),
            (
                <crate::catalog::ChargerChoice as Subsystem>::KIND,
                self.charger.fields(),
            ),
            (
                <crate::catalog::BatteryPackChoice as Subsystem>::KIND,
                self.battery_pack.fields(),
            ),
            (
                <crate::catalog::ChassisChoice as Subsystem>::KIND,
                self.chassis.fields(),
            ),
            (
                <crate::catalog::MotorChoice as Subsystem>::KIND,
                self.motor.fields(),
            ),
        ];
        groups
            .into_iter()
            .flat_map(|(kind, fields)| {
                fields
                    .into_iter()
                    .map(move |(name, value)| (format!("{kind}.{name}"), value))
            })
            .collect()
    }
}

impl From<Architecture> for VehicleSpecs {
    fn from(arch: Architecture) -> Self {
        Self {
            autonomy: arch.autonomy.spec(),
            charger: arch.charger.spec(),
            battery_pack: arch.battery_pack.spec(),
            chassis: arch.chassis.spec(),
            motor: arch.motor.spec(),
        }
    }
}

/// A vehicle and its derived physical and economic properties.
///
/// Immutable once derived. Every field is computed in a fixed dependency
/// order by [`derive_vehicle`]; see [`crate::evaluation`].
///
/// # Examples
///
/// ```
/// use u_fleet::catalog::Architecture;
/// use u_fleet::models::Vehicle;
///
/// let arch: Architecture = "A3-G1-P3-C7-M3".parse().unwrap();
/// let v = Vehicle::new(arch).unwrap();
/// assert_eq!(v.total_weight_kg(), 4996.0);
/// assert_eq!(v.total_cost_1k_usd(), 71.65);
/// assert_eq!(v.charge_time_hours(), 7.5);
/// assert!(v.availability() > 0.0 && v.availability() < 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vehicle {
    pub(crate) architecture: Option<Architecture>,
    pub(crate) specs: VehicleSpecs,
    pub(crate) constraint_violated: bool,
    pub(crate) total_cost_1k_usd: f64,
    pub(crate) total_weight_kg: f64,
    pub(crate) charge_time_hours: f64,
    pub(crate) power_consumption_wh_per_km: f64,
    pub(crate) range_km: f64,
    pub(crate) max_speed_kmh: f64,
    pub(crate) operated_speed_kmh: f64,
    pub(crate) uptime_hours: f64,
    pub(crate) downtime_hours: f64,
    pub(crate) availability: f64,
    pub(crate) capacity_to_cost_ratio: f64,
}

impl Vehicle {
    /// Derives a catalog vehicle under default constants, enforcing the
    /// space constraint.
    pub fn new(architecture: Architecture) -> Result<Self> {
        Self::derive(architecture, false, &ModelConstants::default())
    }

    /// Derives a catalog vehicle.
    ///
    /// With `allow_constraint_violation`, a battery pack heavier than a third
    /// of the chassis is accepted and the operational speed cap is widened
    /// to the relaxed cap instead.
    pub fn derive(
        architecture: Architecture,
        allow_constraint_violation: bool,
        constants: &ModelConstants,
    ) -> Result<Self> {
        let mut vehicle = derive_vehicle(
            VehicleSpecs::from(architecture),
            allow_constraint_violation,
            constants,
        )?;
        vehicle.architecture = Some(architecture);
        Ok(vehicle)
    }

    /// Derives a vehicle from hand-assembled specs.
    pub fn from_specs(
        specs: VehicleSpecs,
        allow_constraint_violation: bool,
        constants: &ModelConstants,
    ) -> Result<Self> {
        derive_vehicle(specs, allow_constraint_violation, constants)
    }

    /// Catalog architecture, if the vehicle was built from one.
    pub fn architecture(&self) -> Option<Architecture> {
        self.architecture
    }

    /// Resolved subsystem specs.
    pub fn specs(&self) -> &VehicleSpecs {
        &self.specs
    }

    /// `true` if the battery pack exceeds a third of the chassis weight
    /// (only possible when violation was allowed).
    pub fn constraint_violated(&self) -> bool {
        self.constraint_violated
    }

    /// Seated passengers.
    pub fn passenger_capacity(&self) -> u32 {
        self.specs.chassis.passenger_capacity
    }

    /// Sum of subsystem costs in thousands of USD.
    pub fn total_cost_1k_usd(&self) -> f64 {
        self.total_cost_1k_usd
    }

    /// Sum of subsystem masses in kg.
    pub fn total_weight_kg(&self) -> f64 {
        self.total_weight_kg
    }

    /// Hours for a full charge.
    pub fn charge_time_hours(&self) -> f64 {
        self.charge_time_hours
    }

    /// Energy use in Wh/km.
    pub fn power_consumption_wh_per_km(&self) -> f64 {
        self.power_consumption_wh_per_km
    }

    /// Distance on one charge.
    pub fn range_km(&self) -> f64 {
        self.range_km
    }

    /// Physically sustainable top speed.
    pub fn max_speed_kmh(&self) -> f64 {
        self.max_speed_kmh
    }

    /// Speed used for operations (top speed limited by the site cap).
    pub fn operated_speed_kmh(&self) -> f64 {
        self.operated_speed_kmh
    }

    /// Hours in service per charge.
    pub fn uptime_hours(&self) -> f64 {
        self.uptime_hours
    }

    /// Hours out of service per charge.
    pub fn downtime_hours(&self) -> f64 {
        self.downtime_hours
    }

    /// Fraction of time in revenue service.
    pub fn availability(&self) -> f64 {
        self.availability
    }

    /// Passengers per thousand USD.
    pub fn capacity_to_cost_ratio(&self) -> f64 {
        self.capacity_to_cost_ratio
    }

    /// Cost of `number_of_vehicles` identical vehicles, in thousands of USD.
    pub fn fleet_cost_1k_usd(&self, number_of_vehicles: u32) -> f64 {
        round_to(
            self.total_cost_1k_usd * f64::from(number_of_vehicles),
            COST_DECIMALS,
        )
    }
}
