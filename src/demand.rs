//! Trip demand profile and service frequency.

use serde::{Deserialize, Serialize};

use crate::error::{checked_div, non_negative, Result};

/// Two-hour demand buckets of the operating scenario.
///
/// Each bucket carries the passengers per hour expected from its start
/// time until the next bucket.
///
/// # Examples
///
/// ```
/// use u_fleet::demand::TripDemand;
///
/// assert_eq!(TripDemand::H08.passengers_per_hour(), 150);
/// assert_eq!(TripDemand::peak(), TripDemand::H08);
/// assert_eq!(TripDemand::daily_total(), 1790);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripDemand {
    /// 00:00–02:00.
    H00,
    /// 02:00–04:00.
    H02,
    /// 04:00–06:00.
    H04,
    /// 06:00–08:00.
    H06,
    /// 08:00–10:00.
    H08,
    /// 10:00–12:00.
    H10,
    /// 12:00–14:00.
    H12,
    /// 14:00–16:00.
    H14,
    /// 16:00–18:00.
    H16,
    /// 18:00–20:00.
    H18,
    /// 20:00–22:00.
    H20,
    /// 22:00–24:00.
    H22,
}

impl TripDemand {
    /// Hours covered by each bucket.
    pub const BUCKET_HOURS: u32 = 2;

    /// Every bucket, in time order.
    pub const ALL: [TripDemand; 12] = [
        Self::H00,
        Self::H02,
        Self::H04,
        Self::H06,
        Self::H08,
        Self::H10,
        Self::H12,
        Self::H14,
        Self::H16,
        Self::H18,
        Self::H20,
        Self::H22,
    ];

    /// Hour of day the bucket starts.
    pub fn start_hour(self) -> u32 {
        self as u32 * Self::BUCKET_HOURS
    }

    /// Expected passengers per hour.
    pub fn passengers_per_hour(self) -> u32 {
        match self {
            Self::H00 => 15,
            Self::H02 => 5,
            Self::H04 => 15,
            Self::H06 => 50,
            Self::H08 => 150,
            Self::H10 => 150,
            Self::H12 => 150,
            Self::H14 => 100,
            Self::H16 => 75,
            Self::H18 => 100,
            Self::H20 => 50,
            Self::H22 => 35,
        }
    }

    /// The earliest bucket with the highest hourly demand.
    pub fn peak() -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .max_by_key(|d| d.passengers_per_hour())
            .unwrap_or(Self::H08)
    }

    /// Passengers over a whole day.
    pub fn daily_total() -> u32 {
        Self::ALL
            .iter()
            .map(|d| d.passengers_per_hour() * Self::BUCKET_HOURS)
            .sum()
    }
}

/// Departures per hour needed to carry `volume` passengers per hour.
///
/// `max_volume_to_capacity_ratio` is the planned load factor; a train of
/// `cars_per_train` vehicles offers `passengers_per_car` seats per car.
///
/// # Examples
///
/// ```
/// use u_fleet::demand::frequency_per_hour;
///
/// assert_eq!(frequency_per_hour(150.0, 0.75, 20, 1).unwrap(), 10.0);
/// assert!(frequency_per_hour(150.0, 0.75, 0, 1).is_err());
/// ```
pub fn frequency_per_hour(
    volume: f64,
    max_volume_to_capacity_ratio: f64,
    passengers_per_car: u32,
    cars_per_train: u32,
) -> Result<f64> {
    let volume = non_negative("volume", volume)?;
    checked_div(
        volume,
        max_volume_to_capacity_ratio * f64::from(passengers_per_car) * f64::from(cars_per_train),
        "train capacity",
    )
}
