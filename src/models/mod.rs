//! Domain model types for fleet routing.
//!
//! Provides the core abstractions: locations with demands, the scenario
//! that owns them, fleet vehicles with capacity and route, and the report
//! produced by a solve.

mod event;
mod location;
mod scenario;
mod solution;
mod vehicle;

pub use event::SolveEvent;
pub use location::Location;
pub use scenario::Scenario;
pub use solution::{Delivery, SolveReport};
pub use vehicle::FleetVehicle;
