//! A sized fleet of identical vehicles on one route.

use std::sync::Arc;

use crate::config::ModelConstants;
use crate::demand::frequency_per_hour;
use crate::error::Result;
use crate::evaluation::{size_fleet, FleetSizing};
use crate::utility::MauBreakdown;

use super::{Route, Vehicle};

/// A fleet configuration with its service attributes and MAU score.
///
/// The vehicle is shared, not copied, so many fleets of one vehicle type
/// can be evaluated cheaply.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_fleet::catalog::Architecture;
/// use u_fleet::config::ModelConstants;
/// use u_fleet::models::{Fleet, Route, Vehicle};
///
/// let vehicle = Arc::new(Vehicle::new("A3-G1-P3-C7-M4".parse::<Architecture>().unwrap()).unwrap());
/// let route = Route::new(10.0, 5).unwrap();
/// let fleet = Fleet::new(route, vehicle, None, Some(150), &ModelConstants::default()).unwrap();
/// assert_eq!(fleet.round_trip_minutes(), 23.75);
/// assert_eq!(fleet.fleet_size(), 3);
/// assert!(fleet.peak_hourly_throughput() >= 150);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    pub(crate) route: Route,
    pub(crate) vehicle: Arc<Vehicle>,
    pub(crate) sizing: FleetSizing,
    pub(crate) load_factor: f64,
    pub(crate) benchmark_availability: f64,
    pub(crate) round_trip_minutes: f64,
    pub(crate) fleet_size: u32,
    pub(crate) fleet_cost_1k_usd: f64,
    pub(crate) average_wait_time_minutes: f64,
    pub(crate) peak_hourly_throughput: u64,
    pub(crate) daily_passenger_volume: f64,
    pub(crate) peak_frequency_per_hour: f64,
    pub(crate) mau: MauBreakdown,
}

impl Fleet {
    /// Builds a fleet from an explicit size or a throughput target.
    ///
    /// Exactly one of `fleet_size` and `throughput_target` must be given.
    pub fn new(
        route: Route,
        vehicle: Arc<Vehicle>,
        fleet_size: Option<u32>,
        throughput_target: Option<u32>,
        constants: &ModelConstants,
    ) -> Result<Self> {
        let sizing = FleetSizing::from_options(fleet_size, throughput_target)?;
        Self::with_sizing(route, vehicle, sizing, constants)
    }

    /// Builds a fleet for the given sizing mode.
    pub fn with_sizing(
        route: Route,
        vehicle: Arc<Vehicle>,
        sizing: FleetSizing,
        constants: &ModelConstants,
    ) -> Result<Self> {
        size_fleet(route, vehicle, sizing, constants)
    }

    /// The route served.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The shared vehicle type.
    pub fn vehicle(&self) -> &Arc<Vehicle> {
        &self.vehicle
    }

    /// How the size was chosen.
    pub fn sizing(&self) -> FleetSizing {
        self.sizing
    }

    /// Minutes for one vehicle to complete the route.
    pub fn round_trip_minutes(&self) -> f64 {
        self.round_trip_minutes
    }

    /// Number of vehicles.
    pub fn fleet_size(&self) -> u32 {
        self.fleet_size
    }

    /// Total fleet cost in thousands of USD.
    pub fn fleet_cost_1k_usd(&self) -> f64 {
        self.fleet_cost_1k_usd
    }

    /// Mean headway, i.e. expected wait for a passenger arriving at random.
    pub fn average_wait_time_minutes(&self) -> f64 {
        self.average_wait_time_minutes
    }

    /// Passengers per peak hour.
    pub fn peak_hourly_throughput(&self) -> u64 {
        self.peak_hourly_throughput
    }

    /// Round-the-clock volume derated by vehicle availability.
    pub fn daily_passenger_volume(&self) -> f64 {
        self.daily_passenger_volume
    }

    /// Vehicle departures per hour needed at peak.
    pub fn peak_frequency_per_hour(&self) -> f64 {
        self.peak_frequency_per_hour
    }

    /// Multi-attribute utility of this configuration.
    pub fn mau_score(&self) -> f64 {
        self.mau.score
    }

    /// Per-attribute utilities behind [`mau_score`](Self::mau_score).
    pub fn mau(&self) -> &MauBreakdown {
        &self.mau
    }

    /// Departures per hour needed to carry `volume` passengers per hour with
    /// `cars_per_train` coupled vehicles.
    pub fn frequency_per_hour(&self, volume: f64, cars_per_train: u32) -> Result<f64> {
        frequency_per_hour(
            volume,
            self.load_factor,
            self.vehicle.passenger_capacity(),
            cars_per_train,
        )
    }

    /// `true` if the vehicle availability matches or beats competing systems.
    pub fn meets_benchmark_availability(&self) -> bool {
        self.vehicle.availability() >= self.benchmark_availability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Architecture;
    use crate::demand::TripDemand;
    use crate::error::FleetError;

    fn vehicle(arch: &str) -> Arc<Vehicle> {
        Arc::new(Vehicle::new(arch.parse::<Architecture>().unwrap()).unwrap())
    }

    #[test]
    fn test_fleet_requires_exactly_one_sizing() {
        let v = vehicle("A3-G1-P3-C7-M4");
        let r = Route::new(10.0, 5).unwrap();
        let c = ModelConstants::default();
        assert!(matches!(
            Fleet::new(r, v.clone(), None, None, &c),
            Err(FleetError::Config(_))
        ));
        assert!(matches!(
            Fleet::new(r, v, Some(5), Some(100), &c),
            Err(FleetError::Config(_))
        ));
    }

    #[test]
    fn test_fleet_target_peak_demand() {
        let v = vehicle("A3-G1-P3-C7-M4");
        let r = Route::new(10.0, 5).unwrap();
        let c = ModelConstants::default();
        let target = TripDemand::peak().passengers_per_hour();
        let fleet = Fleet::new(r, v.clone(), None, Some(target), &c).unwrap();
        assert_eq!(fleet.sizing(), FleetSizing::Target(150));
        assert_eq!(fleet.fleet_size(), 3);
        assert_eq!(fleet.peak_hourly_throughput(), 315);
        assert_eq!(fleet.average_wait_time_minutes(), 7.9167);
        assert_eq!(fleet.fleet_cost_1k_usd(), v.fleet_cost_1k_usd(3));
        assert_eq!(fleet.peak_frequency_per_hour(), 21.0);
        assert!(Arc::ptr_eq(fleet.vehicle(), &v));
    }

    #[test]
    fn test_fleet_shares_vehicle() {
        let v = vehicle("A2-G2-P4-C6-M2");
        let r = Route::new(8.0, 6).unwrap();
        let c = ModelConstants::default();
        let a = Fleet::new(r, v.clone(), Some(4), None, &c).unwrap();
        let b = Fleet::new(r, v.clone(), Some(8), None, &c).unwrap();
        assert_eq!(Arc::strong_count(&v), 3);
        assert!(a.average_wait_time_minutes() > b.average_wait_time_minutes());
        assert!(a.fleet_cost_1k_usd() < b.fleet_cost_1k_usd());
    }

    #[test]
    fn test_daily_volume_derated_by_availability() {
        let v = vehicle("A3-G1-P3-C7-M3");
        let r = Route::new(5.0, 3).unwrap();
        let fleet = Fleet::new(r, v.clone(), Some(6), None, &ModelConstants::default()).unwrap();
        let expected = fleet.peak_hourly_throughput() as f64 * 24.0 * v.availability();
        assert!((fleet.daily_passenger_volume() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_fleet_idempotent() {
        let v = vehicle("A3-G1-P3-C7-M3");
        let r = Route::new(12.0, 8).unwrap();
        let c = ModelConstants::default().with_fleet_buffer(1);
        let a = Fleet::new(r, v.clone(), None, Some(120), &c).unwrap();
        let b = Fleet::new(r, v, None, Some(120), &c).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_length_route() {
        let v = vehicle("A3-G1-P3-C7-M3");
        let r = Route::new(0.0, 0).unwrap();
        assert_eq!(
            Fleet::new(r, v, Some(3), None, &ModelConstants::default()),
            Err(FleetError::Division("round trip time"))
        );
    }

    #[test]
    fn test_frequency_and_benchmark() {
        let v = vehicle("A3-G1-P3-C7-M3");
        let r = Route::new(10.0, 5).unwrap();
        let fleet = Fleet::new(r, v, Some(3), None, &ModelConstants::default()).unwrap();
        // 150 / (0.75 * 20 * 2)
        assert_eq!(fleet.frequency_per_hour(150.0, 2), Ok(5.0));
        // availability 0.5392 < 0.75
        assert!(!fleet.meets_benchmark_availability());
    }
}
