//! Flat key/value view of vehicles, routes, and fleets for report writers.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{
    AutonomyChoice, BatteryPackChoice, ChargerChoice, ChassisChoice, MotorChoice, Subsystem,
};
use crate::evaluation::FleetSizing;
use crate::models::{Fleet, Route, Vehicle};

/// A single reported value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    /// Real-valued quantity.
    Number(f64),
    /// Count.
    Integer(u64),
    /// Flag.
    Flag(bool),
    /// Identifier such as a catalog choice.
    Text(String),
}

impl From<f64> for ReportValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<u64> for ReportValue {
    fn from(v: u64) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for ReportValue {
    fn from(v: u32) -> Self {
        Self::Integer(u64::from(v))
    }
}

impl From<bool> for ReportValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<String> for ReportValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Every public scalar of a model object, flattened into dotted keys.
///
/// Subsystem fields are prefixed by their kind (`battery_pack.capacity_kwh`);
/// a fleet report nests its vehicle under `vehicle.` and its route under
/// `route.`. Model constants are never included.
///
/// # Examples
///
/// ```
/// use u_fleet::catalog::Architecture;
/// use u_fleet::models::Vehicle;
/// use u_fleet::report::{Report, ReportValue};
///
/// let v = Vehicle::new("A3-G1-P3-C7-M3".parse::<Architecture>().unwrap()).unwrap();
/// let report = Report::from_vehicle(&v);
/// assert_eq!(report.get("chassis.choice"), Some(&ReportValue::Text("C7".into())));
/// assert_eq!(report.get("battery_pack.capacity_kwh"), Some(&ReportValue::Number(75.0)));
/// assert_eq!(report.get("total_weight_kg"), Some(&ReportValue::Number(4996.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: BTreeMap<String, ReportValue>,
}

impl Report {
    /// Flattens a route.
    pub fn from_route(route: &Route) -> Self {
        let mut report = Self::default();
        report.insert("length_km", route.length_km());
        report.insert("stops", route.stops());
        report
    }

    /// Flattens a vehicle, including its subsystem specs.
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        let mut report = Self::default();
        if let Some(arch) = vehicle.architecture() {
            let choices = [
                (AutonomyChoice::KIND, arch.autonomy.to_string()),
                (ChargerChoice::KIND, arch.charger.to_string()),
                (BatteryPackChoice::KIND, arch.battery_pack.to_string()),
                (ChassisChoice::KIND, arch.chassis.to_string()),
                (MotorChoice::KIND, arch.motor.to_string()),
            ];
            for (kind, choice) in choices {
                report.insert(format!("{kind}.choice"), choice);
            }
        }
        for (key, value) in vehicle.specs().prefixed_fields() {
            report.insert(key, value);
        }
        report.insert("constraint_violated", vehicle.constraint_violated());
        report.insert("total_cost_1k_usd", vehicle.total_cost_1k_usd());
        report.insert("total_weight_kg", vehicle.total_weight_kg());
        report.insert("charge_time_hours", vehicle.charge_time_hours());
        report.insert(
            "power_consumption_wh_per_km",
            vehicle.power_consumption_wh_per_km(),
        );
        report.insert("range_km", vehicle.range_km());
        report.insert("max_speed_kmh", vehicle.max_speed_kmh());
        report.insert("operated_speed_kmh", vehicle.operated_speed_kmh());
        report.insert("uptime_hours", vehicle.uptime_hours());
        report.insert("downtime_hours", vehicle.downtime_hours());
        report.insert("availability", vehicle.availability());
        report.insert("capacity_to_cost_ratio", vehicle.capacity_to_cost_ratio());
        report
    }

    /// Flattens a fleet together with its vehicle and route.
    pub fn from_fleet(fleet: &Fleet) -> Self {
        let mut report = Self::default();
        if let FleetSizing::Target(target) = fleet.sizing() {
            report.insert("throughput_target", target);
        }
        report.insert("fleet_size", fleet.fleet_size());
        report.insert("round_trip_minutes", fleet.round_trip_minutes());
        report.insert("fleet_cost_1k_usd", fleet.fleet_cost_1k_usd());
        report.insert(
            "average_wait_time_minutes",
            fleet.average_wait_time_minutes(),
        );
        report.insert("peak_hourly_throughput", fleet.peak_hourly_throughput());
        report.insert("daily_passenger_volume", fleet.daily_passenger_volume());
        report.insert("peak_frequency_per_hour", fleet.peak_frequency_per_hour());

        let mau = fleet.mau();
        report.insert("mau.passenger_volume_utility", mau.passenger_volume_utility);
        report.insert("mau.peak_throughput_utility", mau.peak_throughput_utility);
        report.insert(
            "mau.average_wait_time_utility",
            mau.average_wait_time_utility,
        );
        report.insert("mau.availability_utility", mau.availability_utility);
        report.insert("mau_score", mau.score);

        report.merge_prefixed("route", Self::from_route(fleet.route()));
        report.merge_prefixed("vehicle", Self::from_vehicle(fleet.vehicle()));
        report
    }

    fn insert(&mut self, key: impl Into<String>, value: impl Into<ReportValue>) {
        self.entries.insert(key.into(), value.into());
    }

    fn merge_prefixed(&mut self, prefix: &str, other: Report) {
        for (key, value) in other.entries {
            self.entries.insert(format!("{prefix}.{key}"), value);
        }
    }

    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ReportValue> {
        self.entries.get(key)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the report as a JSON object.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string(self).map_err(|e| crate::error::FleetError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Architecture;
    use crate::config::ModelConstants;
    use crate::models::VehicleSpecs;
    use std::sync::Arc;

    fn vehicle() -> Vehicle {
        Vehicle::new("A3-G1-P3-C7-M3".parse::<Architecture>().unwrap()).unwrap()
    }

    #[test]
    fn test_route_report() {
        let r = Report::from_route(&Route::new(10.0, 5).unwrap());
        assert_eq!(r.len(), 2);
        assert_eq!(r.get("length_km"), Some(&ReportValue::Number(10.0)));
        assert_eq!(r.get("stops"), Some(&ReportValue::Integer(5)));
    }

    #[test]
    fn test_vehicle_report_keys() {
        let r = Report::from_vehicle(&vehicle());
        // 5 choices + 16 subsystem fields + flag + 11 derived values
        assert_eq!(r.len(), 5 + 16 + 1 + 11);
        assert_eq!(
            r.get("motor_and_inverter.power_kw"),
            Some(&ReportValue::Number(210.0))
        );
        assert_eq!(
            r.get("autonomy.choice"),
            Some(&ReportValue::Text("A3".into()))
        );
        assert_eq!(r.get("constraint_violated"), Some(&ReportValue::Flag(false)));
        assert!(r.get("load_factor").is_none());
        assert!(r.get("passenger_weight_kg").is_none());
    }

    #[test]
    fn test_custom_vehicle_has_no_choices() {
        let specs = VehicleSpecs::from("A3-G1-P3-C7-M3".parse::<Architecture>().unwrap());
        let v = Vehicle::from_specs(specs, false, &ModelConstants::default()).unwrap();
        let r = Report::from_vehicle(&v);
        assert!(r.get("chassis.choice").is_none());
        assert_eq!(r.len(), 16 + 1 + 11);
    }

    #[test]
    fn test_fleet_report_prefixes() {
        let fleet = Fleet::new(
            Route::new(10.0, 5).unwrap(),
            Arc::new(vehicle()),
            None,
            Some(150),
            &ModelConstants::default(),
        )
        .unwrap();
        let r = Report::from_fleet(&fleet);
        assert_eq!(r.get("throughput_target"), Some(&ReportValue::Integer(150)));
        assert_eq!(
            r.get("fleet_size"),
            Some(&ReportValue::Integer(u64::from(fleet.fleet_size())))
        );
        assert_eq!(r.get("route.stops"), Some(&ReportValue::Integer(5)));
        assert_eq!(
            r.get("vehicle.chassis.passenger_capacity"),
            Some(&ReportValue::Number(20.0))
        );
        assert_eq!(
            r.get("mau_score"),
            Some(&ReportValue::Number(fleet.mau_score()))
        );
        let keys: Vec<&str> = r.iter().map(|(k, _)| k).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json() {
        let json = Report::from_route(&Route::new(2.5, 3).unwrap())
            .to_json()
            .unwrap();
        assert_eq!(json, r#"{"length_km":2.5,"stops":3}"#);
    }
}
