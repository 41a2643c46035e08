//! Fleet sizing against a peak throughput target.
//!
//! # Throughput model
//!
//! With `n` vehicles evenly spaced on a route of round-trip time `T`
//! minutes, a vehicle of capacity `C` and load factor `λ`:
//!
//! ```text
//! throughput(n) = ⌊C · λ · n⌋ · ⌊60 / (T / n)⌋
//! ```
//!
//! Both floors make `throughput` a non-decreasing step function with
//! plateaus. The minimal fleet is therefore found with a linear scan from
//! `n = 1`; a bisection could land past the first crossing of a plateau.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ModelConstants;
use crate::error::{checked_div, FleetError, Result};
use crate::models::{Fleet, Route, Vehicle};
use crate::numeric::{round_to, PHYSICAL_DECIMALS};
use crate::utility::MultiAttributeUtility;

/// How the fleet size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetSizing {
    /// Use exactly this many vehicles.
    Fixed(u32),
    /// Use the smallest fleet reaching this many passengers per peak hour.
    Target(u32),
}

impl FleetSizing {
    /// Builds the sizing mode from two optional arguments, exactly one of
    /// which must be present.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_fleet::evaluation::FleetSizing;
    ///
    /// assert_eq!(FleetSizing::from_options(Some(5), None).unwrap(), FleetSizing::Fixed(5));
    /// assert_eq!(FleetSizing::from_options(None, Some(150)).unwrap(), FleetSizing::Target(150));
    /// assert!(FleetSizing::from_options(Some(5), Some(150)).is_err());
    /// assert!(FleetSizing::from_options(None, None).is_err());
    /// ```
    pub fn from_options(fleet_size: Option<u32>, throughput_target: Option<u32>) -> Result<Self> {
        match (fleet_size, throughput_target) {
            (Some(size), None) => Ok(Self::Fixed(size)),
            (None, Some(target)) => Ok(Self::Target(target)),
            (Some(_), Some(_)) => Err(FleetError::Config(
                "supply either fleet_size or throughput_target, not both".into(),
            )),
            (None, None) => Err(FleetError::Config(
                "one of fleet_size or throughput_target is required".into(),
            )),
        }
    }
}

/// Minutes for one vehicle to complete the route, including dwell at
/// every stop.
pub fn round_trip_minutes(route: &Route, operated_speed_kmh: f64, dwell_minutes: f64) -> Result<f64> {
    let driving = checked_div(60.0 * route.length_km(), operated_speed_kmh, "operated speed")?;
    Ok(round_to(
        driving + dwell_minutes * f64::from(route.stops()),
        PHYSICAL_DECIMALS,
    ))
}

/// Peak throughput of a vehicle type circulating one route.
///
/// # Examples
///
/// ```
/// use u_fleet::evaluation::ThroughputModel;
///
/// // 20 seats, 75 % load, 23.75 minute round trip.
/// let model = ThroughputModel::new(20, 0.75, 23.75).unwrap();
/// assert_eq!(model.passengers_per_cycle(2), 30);
/// assert_eq!(model.cycles_per_hour(2), 5);
/// assert_eq!(model.throughput(2), 150);
/// assert_eq!(model.minimum_fleet_size(150, 10_000).unwrap(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThroughputModel {
    passenger_capacity: u32,
    load_factor: f64,
    round_trip_minutes: f64,
}

impl ThroughputModel {
    /// Creates a throughput model. A zero round trip is rejected.
    pub fn new(passenger_capacity: u32, load_factor: f64, round_trip_minutes: f64) -> Result<Self> {
        if round_trip_minutes == 0.0 {
            return Err(FleetError::Division("round trip time"));
        }
        Ok(Self {
            passenger_capacity,
            load_factor,
            round_trip_minutes,
        })
    }

    /// Round-trip time in minutes.
    pub fn round_trip_minutes(&self) -> f64 {
        self.round_trip_minutes
    }

    /// Passengers carried by `n` vehicles in one cycle.
    pub fn passengers_per_cycle(&self, n: u32) -> u64 {
        (f64::from(self.passenger_capacity) * self.load_factor * f64::from(n)).floor() as u64
    }

    /// Complete cycles per hour with `n` vehicles sharing the route.
    pub fn cycles_per_hour(&self, n: u32) -> u64 {
        if n == 0 {
            return 0;
        }
        (60.0 / (self.round_trip_minutes / f64::from(n))).floor() as u64
    }

    /// Passengers per peak hour with `n` vehicles.
    pub fn throughput(&self, n: u32) -> u64 {
        self.passengers_per_cycle(n) * self.cycles_per_hour(n)
    }

    /// Smallest `n` in `1..=max_fleet_size` with `throughput(n) ≥ target`.
    pub fn minimum_fleet_size(&self, target: u32, max_fleet_size: u32) -> Result<u32> {
        (1..=max_fleet_size)
            .find(|&n| self.throughput(n) >= u64::from(target))
            .ok_or(FleetError::NonConvergence {
                target,
                max_fleet_size,
            })
    }
}

/// Resolves the final fleet size for a sizing mode.
///
/// A target is met by the minimal scanned fleet plus the configured
/// buffer; either way the result is at least `min_fleet_size`.
pub fn resolve_fleet_size(
    model: &ThroughputModel,
    sizing: FleetSizing,
    constants: &ModelConstants,
) -> Result<u32> {
    match sizing {
        FleetSizing::Fixed(0) => Err(FleetError::Division("fleet size")),
        FleetSizing::Fixed(n) if n < constants.min_fleet_size() => Err(FleetError::Config(format!(
            "fleet size {n} is below the minimum of {}",
            constants.min_fleet_size()
        ))),
        FleetSizing::Fixed(n) => Ok(n),
        FleetSizing::Target(target) => {
            let minimal = model.minimum_fleet_size(target, constants.max_fleet_size())?;
            let size = minimal
                .saturating_add(constants.fleet_buffer())
                .max(constants.min_fleet_size());
            tracing::trace!(throughput_target = target, minimal, size, "sized fleet");
            Ok(size)
        }
    }
}

/// Sizes a fleet and derives its service attributes and utility score.
pub fn size_fleet(
    route: Route,
    vehicle: Arc<Vehicle>,
    sizing: FleetSizing,
    constants: &ModelConstants,
) -> Result<Fleet> {
    constants.validate()?;

    let round_trip_minutes = round_trip_minutes(
        &route,
        vehicle.operated_speed_kmh(),
        constants.dwell_minutes(),
    )?;
    let model = ThroughputModel::new(
        vehicle.passenger_capacity(),
        constants.load_factor(),
        round_trip_minutes,
    )?;
    let fleet_size = resolve_fleet_size(&model, sizing, constants)?;

    let fleet_cost_1k_usd = vehicle.fleet_cost_1k_usd(fleet_size);
    let average_wait_time_minutes = round_to(
        round_trip_minutes / f64::from(fleet_size),
        PHYSICAL_DECIMALS,
    );
    let peak_hourly_throughput = model.throughput(fleet_size);
    let daily_passenger_volume = round_to(
        peak_hourly_throughput as f64 * 24.0 * vehicle.availability(),
        PHYSICAL_DECIMALS,
    );
    let peak_frequency_per_hour = checked_div(
        peak_hourly_throughput as f64,
        constants.load_factor() * f64::from(vehicle.passenger_capacity()),
        "passenger capacity",
    )
    .map(|f| round_to(f, PHYSICAL_DECIMALS))?;

    let mau = MultiAttributeUtility::default().evaluate(
        daily_passenger_volume,
        peak_hourly_throughput as f64,
        average_wait_time_minutes,
        vehicle.availability(),
    )?;

    Ok(Fleet {
        route,
        vehicle,
        sizing,
        load_factor: constants.load_factor(),
        benchmark_availability: constants.benchmark_availability(),
        round_trip_minutes,
        fleet_size,
        fleet_cost_1k_usd,
        average_wait_time_minutes,
        peak_hourly_throughput,
        daily_passenger_volume,
        peak_frequency_per_hour,
        mau,
    })
}
