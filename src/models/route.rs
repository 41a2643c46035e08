//! Transit route served by the fleet.

use serde::{Deserialize, Serialize};

use crate::error::{FleetError, Result};

/// A fixed operating route: one-way length and number of stops.
///
/// # Examples
///
/// ```
/// use u_fleet::models::Route;
///
/// let route = Route::new(10.0, 5).unwrap();
/// assert_eq!(route.length_km(), 10.0);
/// assert_eq!(route.stops(), 5);
/// assert!(Route::new(-1.0, 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Route {
    length_km: f64,
    stops: u32,
}

impl Route {
    /// Creates a route.
    ///
    /// Fails if `length_km` is negative or not finite.
    pub fn new(length_km: f64, stops: u32) -> Result<Self> {
        if !length_km.is_finite() || length_km < 0.0 {
            return Err(FleetError::Value {
                field: "length_km",
                value: length_km,
            });
        }
        Ok(Self { length_km, stops })
    }

    /// Route length in km.
    pub fn length_km(&self) -> f64 {
        self.length_km
    }

    /// Number of stops served per round trip.
    pub fn stops(&self) -> u32 {
        self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_new() {
        let r = Route::new(0.0, 0).unwrap();
        assert_eq!(r.length_km(), 0.0);
        assert_eq!(r.stops(), 0);
    }

    #[test]
    fn test_route_rejects_invalid_length() {
        assert!(matches!(
            Route::new(-0.5, 2),
            Err(FleetError::Value {
                field: "length_km",
                ..
            })
        ));
        assert!(Route::new(f64::NAN, 2).is_err());
        assert!(Route::new(f64::INFINITY, 2).is_err());
    }
}
