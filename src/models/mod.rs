//! Domain model types for transit fleet evaluation.
//!
//! Provides the core records: routes as fixed operating scenarios, vehicles
//! composed from five subsystems with derived performance, and fleets of
//! identical vehicles sized for a route.

mod fleet;
mod route;
mod vehicle;

pub use fleet::Fleet;
pub use route::Route;
pub use vehicle::{Vehicle, VehicleSpecs};
