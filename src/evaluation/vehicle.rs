//! Vehicle derivation pipeline.
//!
//! Each stage is a pure function of the specs and of the (rounded) outputs
//! of earlier stages:
//!
//! ```text
//! cost, weight → charge time → consumption(weight) → range(consumption)
//!   → top speed(weight) → operated speed → uptime(range, speed)
//!   → downtime(charge time) → availability → capacity/cost
//! ```

use crate::catalog::{AutonomySpec, BatteryPackSpec, ChargerSpec, ChassisSpec, MotorSpec};
use crate::config::ModelConstants;
use crate::error::{checked_div, non_negative, FleetError, Result};
use crate::models::{Vehicle, VehicleSpecs};
use crate::numeric::{round_to, COST_DECIMALS, PHYSICAL_DECIMALS};

/// Extra consumption per kg carried beyond the bare chassis, in Wh/km.
const CONSUMPTION_PER_ADDED_KG: f64 = 0.1;

/// Empirical scale from power-to-weight (kW/kg) to sustainable speed (km/h).
const SPEED_PER_POWER_TO_WEIGHT: f64 = 700.0;

fn round4(value: f64) -> f64 {
    round_to(value, PHYSICAL_DECIMALS)
}

/// Rejects hand-assembled specs with a negative or non-finite magnitude.
pub fn check_specs(specs: &VehicleSpecs) -> Result<()> {
    let VehicleSpecs {
        autonomy,
        charger,
        battery_pack,
        chassis,
        motor,
    } = specs;
    let fields = [
        ("autonomy.weight_kg", autonomy.weight_kg),
        ("autonomy.cost_1k_usd", autonomy.cost_1k_usd),
        ("autonomy.added_power_wh_per_kwh", autonomy.added_power_wh_per_kwh),
        ("battery_charger.weight_kg", charger.weight_kg),
        ("battery_charger.cost_1k_usd", charger.cost_1k_usd),
        ("battery_charger.power_kw", charger.power_kw),
        ("battery_pack.weight_kg", battery_pack.weight_kg),
        ("battery_pack.cost_1k_usd", battery_pack.cost_1k_usd),
        ("battery_pack.capacity_kwh", battery_pack.capacity_kwh),
        ("chassis.weight_kg", chassis.weight_kg),
        ("chassis.cost_1k_usd", chassis.cost_1k_usd),
        ("chassis.nominal_power_wh_per_km", chassis.nominal_power_wh_per_km),
        ("motor_and_inverter.weight_kg", motor.weight_kg),
        ("motor_and_inverter.cost_1k_usd", motor.cost_1k_usd),
        ("motor_and_inverter.power_kw", motor.power_kw),
    ];
    for (field, value) in fields {
        non_negative(field, value)?;
    }
    Ok(())
}

/// Checks the space proxy `pack.weight ≤ chassis.weight / 3`.
///
/// Returns whether the constraint is violated; a violation is an error
/// unless `allow_violation` is set.
pub fn check_space_constraint(
    battery_pack: &BatteryPackSpec,
    chassis: &ChassisSpec,
    allow_violation: bool,
) -> Result<bool> {
    let violated = battery_pack.weight_kg > chassis.max_battery_weight_kg();
    if violated && !allow_violation {
        return Err(FleetError::Constraint(format!(
            "battery pack ({} kg) exceeds 1/3 of chassis weight ({} kg)",
            battery_pack.weight_kg, chassis.weight_kg
        )));
    }
    Ok(violated)
}

/// Sum of subsystem costs, in thousands of USD.
pub fn total_cost_1k_usd(specs: &VehicleSpecs) -> f64 {
    round_to(specs.costs().iter().sum(), COST_DECIMALS)
}

/// Sum of subsystem masses, in kg.
pub fn total_weight_kg(specs: &VehicleSpecs) -> f64 {
    round4(specs.weights().iter().sum())
}

/// Hours to charge the pack from empty.
pub fn charge_time_hours(battery_pack: &BatteryPackSpec, charger: &ChargerSpec) -> Result<f64> {
    checked_div(battery_pack.capacity_kwh, charger.power_kw, "charger power").map(round4)
}

/// Energy use: chassis baseline, plus a per-kg penalty for everything
/// beyond the chassis, plus the autonomy kit's draw.
pub fn power_consumption_wh_per_km(
    chassis: &ChassisSpec,
    autonomy: &AutonomySpec,
    total_weight_kg: f64,
) -> f64 {
    round4(
        chassis.nominal_power_wh_per_km
            + CONSUMPTION_PER_ADDED_KG * (total_weight_kg - chassis.weight_kg)
            + autonomy.added_power_wh_per_kwh,
    )
}

/// Distance on one charge.
pub fn range_km(battery_pack: &BatteryPackSpec, power_consumption_wh_per_km: f64) -> Result<f64> {
    checked_div(
        1000.0 * battery_pack.capacity_kwh,
        power_consumption_wh_per_km,
        "power consumption",
    )
    .map(round4)
}

/// Sustainable top speed from power-to-weight ratio.
pub fn max_speed_kmh(motor: &MotorSpec, total_weight_kg: f64) -> Result<f64> {
    checked_div(
        SPEED_PER_POWER_TO_WEIGHT * motor.power_kw,
        total_weight_kg,
        "total weight",
    )
    .map(round4)
}

/// Top speed limited by the operational cap.
pub fn operated_speed_kmh(max_speed_kmh: f64, speed_cap_kmh: f64) -> f64 {
    max_speed_kmh.min(speed_cap_kmh)
}

/// Hours of service on one charge.
pub fn uptime_hours(range_km: f64, operated_speed_kmh: f64) -> Result<f64> {
    checked_div(range_km, operated_speed_kmh, "operated speed").map(round4)
}

/// Hours out of service per charge: charging plus fixed turnaround.
pub fn downtime_hours(charge_time_hours: f64, turnaround_hours: f64) -> f64 {
    round4(charge_time_hours + turnaround_hours)
}

/// Fraction of time in service.
pub fn availability(uptime_hours: f64, downtime_hours: f64) -> Result<f64> {
    checked_div(
        uptime_hours,
        uptime_hours + downtime_hours,
        "uptime plus downtime",
    )
    .map(round4)
}

/// Passengers per thousand USD.
pub fn capacity_to_cost_ratio(passenger_capacity: u32, total_cost_1k_usd: f64) -> Result<f64> {
    checked_div(
        f64::from(passenger_capacity),
        total_cost_1k_usd,
        "total cost",
    )
    .map(round4)
}

/// Runs the full pipeline.
pub fn derive_vehicle(
    specs: VehicleSpecs,
    allow_constraint_violation: bool,
    constants: &ModelConstants,
) -> Result<Vehicle> {
    constants.validate()?;
    check_specs(&specs)?;
    let constraint_violated =
        check_space_constraint(&specs.battery_pack, &specs.chassis, allow_constraint_violation)?;
    let speed_cap = if constraint_violated {
        constants.relaxed_speed_cap_kmh()
    } else {
        constants.operational_speed_cap_kmh()
    };

    let total_cost_1k_usd = total_cost_1k_usd(&specs);
    let total_weight_kg = total_weight_kg(&specs);
    let charge_time_hours = charge_time_hours(&specs.battery_pack, &specs.charger)?;
    let power_consumption_wh_per_km =
        power_consumption_wh_per_km(&specs.chassis, &specs.autonomy, total_weight_kg);
    let range_km = range_km(&specs.battery_pack, power_consumption_wh_per_km)?;
    let max_speed_kmh = max_speed_kmh(&specs.motor, total_weight_kg)?;
    let operated_speed_kmh = operated_speed_kmh(max_speed_kmh, speed_cap);
    let uptime_hours = uptime_hours(range_km, operated_speed_kmh)?;
    let downtime_hours = downtime_hours(charge_time_hours, constants.turnaround_hours());
    let availability = availability(uptime_hours, downtime_hours)?;
    let capacity_to_cost_ratio =
        capacity_to_cost_ratio(specs.chassis.passenger_capacity, total_cost_1k_usd)?;

    tracing::trace!(
        total_weight_kg,
        range_km,
        operated_speed_kmh,
        availability,
        constraint_violated,
        "derived vehicle"
    );

    Ok(Vehicle {
        architecture: None,
        specs,
        constraint_violated,
        total_cost_1k_usd,
        total_weight_kg,
        charge_time_hours,
        power_consumption_wh_per_km,
        range_km,
        max_speed_kmh,
        operated_speed_kmh,
        uptime_hours,
        downtime_hours,
        availability,
        capacity_to_cost_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Architecture, ChargerChoice, Subsystem};

    fn reference_specs() -> VehicleSpecs {
        "A3-G1-P3-C7-M3"
            .parse::<Architecture>()
            .map(VehicleSpecs::from)
            .unwrap()
    }

    #[test]
    fn test_stage_values() {
        let s = reference_specs();
        let weight = total_weight_kg(&s);
        assert_eq!(weight, 4996.0);
        assert_eq!(total_cost_1k_usd(&s), 71.65);
        assert_eq!(charge_time_hours(&s.battery_pack, &s.charger), Ok(7.5));
        let consumption = power_consumption_wh_per_km(&s.chassis, &s.autonomy, weight);
        assert_eq!(consumption, 281.1);
        assert_eq!(range_km(&s.battery_pack, consumption), Ok(266.809));
        assert_eq!(max_speed_kmh(&s.motor, weight), Ok(29.4235));
    }

    #[test]
    fn test_operated_speed() {
        assert_eq!(operated_speed_kmh(63.5593, 32.0), 32.0);
        assert_eq!(operated_speed_kmh(29.4235, 32.0), 29.4235);
        assert_eq!(operated_speed_kmh(63.5593, f64::INFINITY), 63.5593);
    }

    #[test]
    fn test_downtime_and_availability() {
        assert_eq!(downtime_hours(7.5, 0.25), 7.75);
        assert_eq!(availability(3.0, 1.0), Ok(0.75));
        assert_eq!(
            availability(0.0, 0.0),
            Err(FleetError::Division("uptime plus downtime"))
        );
    }

    #[test]
    fn test_zero_charger_power() {
        let mut s = reference_specs();
        s.charger.power_kw = 0.0;
        assert_eq!(
            derive_vehicle(s, false, &ModelConstants::default()),
            Err(FleetError::Division("charger power"))
        );
    }

    #[test]
    fn test_zero_power_consumption() {
        let mut s = reference_specs();
        s.chassis.nominal_power_wh_per_km = 0.0;
        s.autonomy.added_power_wh_per_kwh = 0.0;
        s.autonomy.weight_kg = 0.0;
        s.charger.weight_kg = 0.0;
        s.battery_pack.weight_kg = 0.0;
        s.motor.weight_kg = 0.0;
        assert_eq!(
            derive_vehicle(s, false, &ModelConstants::default()),
            Err(FleetError::Division("power consumption"))
        );
    }

    #[test]
    fn test_zero_operated_speed() {
        let mut s = reference_specs();
        s.motor.power_kw = 0.0;
        assert_eq!(
            derive_vehicle(s, false, &ModelConstants::default()),
            Err(FleetError::Division("operated speed"))
        );
    }

    #[test]
    fn test_space_constraint_boundary() {
        let mut s = reference_specs();
        s.battery_pack.weight_kg = s.chassis.weight_kg / 3.0;
        assert_eq!(check_space_constraint(&s.battery_pack, &s.chassis, false), Ok(false));
        s.battery_pack.weight_kg += 0.001;
        assert!(check_space_constraint(&s.battery_pack, &s.chassis, false).is_err());
        assert_eq!(check_space_constraint(&s.battery_pack, &s.chassis, true), Ok(true));
    }

    #[test]
    fn test_relaxed_cap_is_configurable() {
        let mut s = reference_specs();
        s.motor = crate::catalog::MotorChoice::M4.spec();
        s.battery_pack.weight_kg = 2000.0;
        let c = ModelConstants::default().with_relaxed_speed_cap(Some(40.0));
        let v = derive_vehicle(s, true, &c).unwrap();
        assert_eq!(v.operated_speed_kmh(), 40.0);
    }

    #[test]
    fn test_all_valid_catalog_vehicles() {
        let c = ModelConstants::default();
        for arch in Architecture::all() {
            let result = derive_vehicle(arch.into(), false, &c);
            if arch.fits_space_constraint() {
                let v = result.unwrap();
                assert!(v.availability() > 0.0 && v.availability() < 1.0, "{arch}");
                assert!(v.range_km() > 0.0, "{arch}");
                assert!(v.operated_speed_kmh() <= 32.0, "{arch}");
            } else {
                assert!(matches!(result, Err(FleetError::Constraint(_))), "{arch}");
            }
        }
    }

    #[test]
    fn test_violation_never_slows_vehicle() {
        let c = ModelConstants::default();
        for arch in Architecture::all().filter(|a| a.charger == ChargerChoice::G2) {
            let relaxed = derive_vehicle(arch.into(), true, &c).unwrap();
            let strict_speed = operated_speed_kmh(relaxed.max_speed_kmh(), 32.0);
            assert!(relaxed.operated_speed_kmh() >= strict_speed, "{arch}");
        }
    }
}
