//! Model constants shared by the vehicle and fleet engines.

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};

/// Constants of the operating scenario.
///
/// Passed explicitly into every derivation so alternative scenarios can be
/// evaluated side by side without global state.
///
/// # Examples
///
/// ```
/// use u_fleet::config::ModelConstants;
///
/// let c = ModelConstants::default().with_fleet_buffer(1);
/// assert_eq!(c.load_factor(), 0.75);
/// assert_eq!(c.dwell_minutes(), 1.0);
/// assert_eq!(c.fleet_buffer(), 1);
/// assert!(c.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConstants {
    passenger_weight_kg: f64,
    load_factor: f64,
    benchmark_availability: f64,
    dwell_time_seconds: f64,
    turnaround_hours: f64,
    operational_speed_cap_kmh: f64,
    relaxed_speed_cap_kmh: Option<f64>,
    fleet_buffer: u32,
    min_fleet_size: u32,
    max_fleet_size: u32,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            passenger_weight_kg: 100.0,
            load_factor: 0.75,
            benchmark_availability: 0.75,
            dwell_time_seconds: 60.0,
            turnaround_hours: 0.25,
            operational_speed_cap_kmh: 32.0,
            relaxed_speed_cap_kmh: None,
            fleet_buffer: 0,
            min_fleet_size: 3,
            max_fleet_size: 10_000,
        }
    }
}

impl ModelConstants {
    /// Parses constants from JSON; absent fields keep their defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self> {
        let constants: Self =
            serde_json::from_str(json).map_err(|e| FleetError::Config(e.to_string()))?;
        constants.validate()?;
        Ok(constants)
    }

    /// Checks every constant against its admissible range.
    pub fn validate(&self) -> Result<()> {
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(FleetError::Config(format!(
                "load_factor must be in (0, 1], got {}",
                self.load_factor
            )));
        }
        let non_negative = [
            ("passenger_weight_kg", self.passenger_weight_kg),
            ("benchmark_availability", self.benchmark_availability),
            ("dwell_time_seconds", self.dwell_time_seconds),
            ("turnaround_hours", self.turnaround_hours),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(FleetError::Config(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }
        if !(self.operational_speed_cap_kmh > 0.0) {
            return Err(FleetError::Config(format!(
                "operational_speed_cap_kmh must be positive, got {}",
                self.operational_speed_cap_kmh
            )));
        }
        if let Some(relaxed) = self.relaxed_speed_cap_kmh {
            if !(relaxed >= self.operational_speed_cap_kmh) {
                return Err(FleetError::Config(format!(
                    "relaxed_speed_cap_kmh ({relaxed}) is below the operational cap ({})",
                    self.operational_speed_cap_kmh
                )));
            }
        }
        if self.fleet_buffer > 1 {
            return Err(FleetError::Config(format!(
                "fleet_buffer must be 0 or 1, got {}",
                self.fleet_buffer
            )));
        }
        if self.min_fleet_size == 0 || self.min_fleet_size > self.max_fleet_size {
            return Err(FleetError::Config(format!(
                "min_fleet_size must be in 1..={}, got {}",
                self.max_fleet_size, self.min_fleet_size
            )));
        }
        Ok(())
    }

    /// Sets the expected average load factor.
    pub fn with_load_factor(mut self, load_factor: f64) -> Self {
        self.load_factor = load_factor;
        self
    }

    /// Sets the dwell time per stop, in seconds.
    pub fn with_dwell_time_seconds(mut self, seconds: f64) -> Self {
        self.dwell_time_seconds = seconds;
        self
    }

    /// Sets the fixed turnaround overhead added to every charge.
    pub fn with_turnaround_hours(mut self, hours: f64) -> Self {
        self.turnaround_hours = hours;
        self
    }

    /// Sets the site-imposed speed cap.
    pub fn with_operational_speed_cap(mut self, kmh: f64) -> Self {
        self.operational_speed_cap_kmh = kmh;
        self
    }

    /// Sets the cap used when the space constraint is overridden
    /// (`None` = unlimited).
    pub fn with_relaxed_speed_cap(mut self, kmh: Option<f64>) -> Self {
        self.relaxed_speed_cap_kmh = kmh;
        self
    }

    /// Sets the number of slack vehicles added after sizing.
    pub fn with_fleet_buffer(mut self, buffer: u32) -> Self {
        self.fleet_buffer = buffer;
        self
    }

    /// Sets the smallest admissible fleet.
    pub fn with_min_fleet_size(mut self, size: u32) -> Self {
        self.min_fleet_size = size;
        self
    }

    /// Sets the iteration bound of the fleet-size scan.
    pub fn with_max_fleet_size(mut self, size: u32) -> Self {
        self.max_fleet_size = size;
        self
    }

    /// Average passenger mass in kg.
    pub fn passenger_weight_kg(&self) -> f64 {
        self.passenger_weight_kg
    }

    /// Expected average fraction of occupied seats per trip.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Availability of competing transit systems.
    pub fn benchmark_availability(&self) -> f64 {
        self.benchmark_availability
    }

    /// Boarding/alighting time per stop, in seconds.
    pub fn dwell_time_seconds(&self) -> f64 {
        self.dwell_time_seconds
    }

    /// Boarding/alighting time per stop, in minutes.
    pub fn dwell_minutes(&self) -> f64 {
        self.dwell_time_seconds / 60.0
    }

    /// Fixed turnaround overhead per charge cycle.
    pub fn turnaround_hours(&self) -> f64 {
        self.turnaround_hours
    }

    /// Site-imposed speed cap in km/h.
    pub fn operational_speed_cap_kmh(&self) -> f64 {
        self.operational_speed_cap_kmh
    }

    /// Speed cap applied when the space constraint was overridden.
    pub fn relaxed_speed_cap_kmh(&self) -> f64 {
        self.relaxed_speed_cap_kmh.unwrap_or(f64::INFINITY)
    }

    /// Slack vehicles added to the minimal fleet.
    pub fn fleet_buffer(&self) -> u32 {
        self.fleet_buffer
    }

    /// Smallest admissible fleet.
    pub fn min_fleet_size(&self) -> u32 {
        self.min_fleet_size
    }

    /// Iteration bound of the fleet-size scan.
    pub fn max_fleet_size(&self) -> u32 {
        self.max_fleet_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ModelConstants::default();
        assert_eq!(c.passenger_weight_kg(), 100.0);
        assert_eq!(c.load_factor(), 0.75);
        assert_eq!(c.benchmark_availability(), 0.75);
        assert_eq!(c.dwell_time_seconds(), 60.0);
        assert_eq!(c.turnaround_hours(), 0.25);
        assert_eq!(c.operational_speed_cap_kmh(), 32.0);
        assert!(c.relaxed_speed_cap_kmh().is_infinite());
        assert_eq!(c.fleet_buffer(), 0);
        assert_eq!(c.min_fleet_size(), 3);
        assert_eq!(c.max_fleet_size(), 10_000);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_load_factor() {
        assert!(ModelConstants::default()
            .with_load_factor(0.0)
            .validate()
            .is_err());
        assert!(ModelConstants::default()
            .with_load_factor(1.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        assert!(ModelConstants::default()
            .with_fleet_buffer(2)
            .validate()
            .is_err());
        assert!(ModelConstants::default()
            .with_min_fleet_size(20)
            .with_max_fleet_size(10)
            .validate()
            .is_err());
        assert!(ModelConstants::default()
            .with_relaxed_speed_cap(Some(10.0))
            .validate()
            .is_err());
        assert!(ModelConstants::default()
            .with_dwell_time_seconds(-1.0)
            .validate()
            .is_err());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_from_json_partial() {
        let c = ModelConstants::from_json(r#"{"fleet_buffer": 1, "load_factor": 0.5}"#)
            .expect("valid json");
        assert_eq!(c.fleet_buffer(), 1);
        assert_eq!(c.load_factor(), 0.5);
        assert_eq!(c.min_fleet_size(), 3);

        assert!(matches!(
            ModelConstants::from_json(r#"{"load_factor": 2.0}"#),
            Err(FleetError::Config(_))
        ));
    }
}
