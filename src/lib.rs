//! # u-fleet
//!
//! Tradespace model for autonomous transit fleets: composes vehicles from
//! discrete subsystem catalogs, derives their performance, sizes fleets for
//! a route, and scores configurations with a multi-attribute utility.
//!
//! ## Modules
//!
//! - [`catalog`] — Subsystem catalogs (autonomy, charger, battery, chassis, motor)
//! - [`models`] — Domain model types (Route, Vehicle, Fleet)
//! - [`evaluation`] — Vehicle derivation pipeline and fleet sizing
//! - [`utility`] — Piecewise-linear utility curves and MAU scoring
//! - [`demand`] — Trip demand profile and service frequency
//! - [`report`] — Flat key/value reports for presentation layers
//! - [`config`] — Model constants
//! - [`error`] — Error taxonomy
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use u_fleet::catalog::Architecture;
//! use u_fleet::config::ModelConstants;
//! use u_fleet::models::{Fleet, Route, Vehicle};
//!
//! let constants = ModelConstants::default();
//! let arch: Architecture = "A3-G1-P3-C7-M3".parse().unwrap();
//! let vehicle = Arc::new(Vehicle::derive(arch, false, &constants).unwrap());
//! let route = Route::new(10.0, 5).unwrap();
//! let fleet = Fleet::new(route, vehicle, None, Some(150), &constants).unwrap();
//! assert!(fleet.peak_hourly_throughput() >= 150);
//! assert!((0.0..=1.0).contains(&fleet.mau_score()));
//! ```

pub mod catalog;
pub mod config;
pub mod demand;
pub mod error;
pub mod evaluation;
pub mod models;
mod numeric;
pub mod report;
pub mod utility;

pub use error::{FleetError, Result};
