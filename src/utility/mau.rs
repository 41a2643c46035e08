//! Weighted-sum multi-attribute utility.

use serde::{Deserialize, Serialize};

use super::curve::UtilityCurve;
use crate::error::{non_negative, FleetError, Result};
use crate::numeric::{round_to, PHYSICAL_DECIMALS};

const PASSENGER_VOLUME: [(f64, f64); 5] = [
    (0.0, 0.0),
    (500.0, 0.2),
    (1000.0, 0.4),
    (1500.0, 0.8),
    (2000.0, 1.0),
];

const PEAK_THROUGHPUT: [(f64, f64); 5] = [
    (0.0, 0.0),
    (50.0, 0.2),
    (100.0, 0.5),
    (150.0, 0.9),
    (200.0, 1.0),
];

const AVERAGE_WAIT_TIME: [(f64, f64); 6] = [
    (0.0, 1.0),
    (5.0, 0.95),
    (10.0, 0.75),
    (15.0, 0.40),
    (20.0, 0.20),
    (30.0, 0.0),
];

const AVAILABILITY: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.2, 0.2),
    (0.4, 0.4),
    (0.6, 0.6),
    (0.8, 0.8),
    (1.0, 1.0),
];

/// Relative importance of the four system attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeWeights {
    /// Daily passenger volume.
    pub passenger_volume: f64,
    /// Peak hourly passenger throughput.
    pub peak_throughput: f64,
    /// Average wait time.
    pub average_wait_time: f64,
    /// Vehicle availability.
    pub availability: f64,
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self {
            passenger_volume: 0.15,
            peak_throughput: 0.25,
            average_wait_time: 0.35,
            availability: 0.25,
        }
    }
}

impl AttributeWeights {
    fn validate(&self) -> Result<()> {
        let weights = [
            self.passenger_volume,
            self.peak_throughput,
            self.average_wait_time,
            self.availability,
        ];
        if weights.iter().any(|w| !(*w >= 0.0)) {
            return Err(FleetError::Config(format!(
                "attribute weights must be non-negative: {weights:?}"
            )));
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > 1e-9 {
            return Err(FleetError::Config(format!(
                "attribute weights must sum to 1, got {total}"
            )));
        }
        Ok(())
    }
}

/// Utilities and weighted terms behind one MAU score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MauBreakdown {
    /// Utility of daily passenger volume.
    pub passenger_volume_utility: f64,
    /// Utility of peak throughput.
    pub peak_throughput_utility: f64,
    /// Utility of average wait time.
    pub average_wait_time_utility: f64,
    /// Utility of availability.
    pub availability_utility: f64,
    /// Weight × utility for each attribute, in the order above.
    pub terms: [f64; 4],
    /// Clamped, rounded weighted sum.
    pub score: f64,
}

/// Multi-attribute utility function of the transit system.
///
/// Maps four raw attributes through independent piecewise-linear curves and
/// blends them with fixed weights into a score in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_fleet::utility::MultiAttributeUtility;
///
/// let mau = MultiAttributeUtility::default();
/// assert_eq!(mau.utility_avg_wait_time(10.0).unwrap(), 0.75);
/// assert_eq!(mau.utility_availability(0.6).unwrap(), 0.6);
/// assert_eq!(mau.utility_passenger_volume(50_000.0).unwrap(), 1.0);
/// assert_eq!(mau.score(1000.0, 75.0, 8.0, 0.7).unwrap(), 0.613);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultiAttributeUtility {
    weights: AttributeWeights,
    passenger_volume: UtilityCurve,
    peak_throughput: UtilityCurve,
    average_wait_time: UtilityCurve,
    availability: UtilityCurve,
}

impl Default for MultiAttributeUtility {
    fn default() -> Self {
        Self {
            weights: AttributeWeights::default(),
            passenger_volume: UtilityCurve::from_table(&PASSENGER_VOLUME),
            peak_throughput: UtilityCurve::from_table(&PEAK_THROUGHPUT),
            average_wait_time: UtilityCurve::from_table(&AVERAGE_WAIT_TIME),
            availability: UtilityCurve::from_table(&AVAILABILITY),
        }
    }
}

impl MultiAttributeUtility {
    /// Replaces the attribute weights; they must be non-negative and sum
    /// to one.
    pub fn with_weights(mut self, weights: AttributeWeights) -> Result<Self> {
        weights.validate()?;
        self.weights = weights;
        Ok(self)
    }

    /// Attribute weights.
    pub fn weights(&self) -> &AttributeWeights {
        &self.weights
    }

    /// Utility of a daily passenger volume.
    pub fn utility_passenger_volume(&self, daily_passenger_volume: f64) -> Result<f64> {
        let x = non_negative("daily_passenger_volume", daily_passenger_volume)?;
        Ok(self.passenger_volume.evaluate(x))
    }

    /// Utility of a peak hourly throughput.
    pub fn utility_peak_throughput(&self, peak_throughput: f64) -> Result<f64> {
        let x = non_negative("peak_passenger_throughput", peak_throughput)?;
        Ok(self.peak_throughput.evaluate(x))
    }

    /// Utility of an average wait; decreases as the wait grows.
    pub fn utility_avg_wait_time(&self, average_wait_time_minutes: f64) -> Result<f64> {
        let x = non_negative("average_wait_time_minutes", average_wait_time_minutes)?;
        Ok(self.average_wait_time.evaluate(x))
    }

    /// Utility of an availability fraction.
    pub fn utility_availability(&self, availability: f64) -> Result<f64> {
        let x = non_negative("availability", availability)?;
        Ok(self.availability.evaluate(x))
    }

    /// Scores four raw attributes and returns every intermediate term.
    pub fn evaluate(
        &self,
        daily_passenger_volume: f64,
        peak_throughput: f64,
        average_wait_time_minutes: f64,
        availability: f64,
    ) -> Result<MauBreakdown> {
        let passenger_volume_utility = self.utility_passenger_volume(daily_passenger_volume)?;
        let peak_throughput_utility = self.utility_peak_throughput(peak_throughput)?;
        let average_wait_time_utility = self.utility_avg_wait_time(average_wait_time_minutes)?;
        let availability_utility = self.utility_availability(availability)?;

        let w = &self.weights;
        let terms = [
            w.passenger_volume * passenger_volume_utility,
            w.peak_throughput * peak_throughput_utility,
            w.average_wait_time * average_wait_time_utility,
            w.availability * availability_utility,
        ];
        let score = round_to(terms.iter().sum(), PHYSICAL_DECIMALS).clamp(0.0, 1.0);

        tracing::trace!(
            volume = terms[0],
            throughput = terms[1],
            wait = terms[2],
            availability = terms[3],
            score,
            "weighted sum"
        );

        Ok(MauBreakdown {
            passenger_volume_utility,
            peak_throughput_utility,
            average_wait_time_utility,
            availability_utility,
            terms,
            score,
        })
    }

    /// Scores four raw attributes.
    pub fn score(
        &self,
        daily_passenger_volume: f64,
        peak_throughput: f64,
        average_wait_time_minutes: f64,
        availability: f64,
    ) -> Result<f64> {
        self.evaluate(
            daily_passenger_volume,
            peak_throughput,
            average_wait_time_minutes,
            availability,
        )
        .map(|b| b.score)
    }
}
