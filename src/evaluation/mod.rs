//! Derivation engines.
//!
//! - [`vehicle`](derive_vehicle) — ordered pipeline from five subsystem
//!   specs to vehicle performance
//! - [`sizing`](size_fleet) — round-trip time, throughput, fleet-size scan,
//!   and service attributes

mod sizing;
mod vehicle;

pub use sizing::{
    resolve_fleet_size, round_trip_minutes, size_fleet, FleetSizing, ThroughputModel,
};
pub use vehicle::{
    availability, capacity_to_cost_ratio, charge_time_hours, check_space_constraint, check_specs,
    derive_vehicle, downtime_hours, max_speed_kmh, operated_speed_kmh,
    power_consumption_wh_per_km, range_km, total_cost_1k_usd, total_weight_kg, uptime_hours,
};
