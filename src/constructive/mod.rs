//! Constructive heuristics for building fleet routes.
//!
//! - [`parallel_nearest_insertion`] — All vehicles grow routes at once by
//!   repeatedly taking the globally nearest (vehicle, client) move, with
//!   partial deliveries when capacity is binding
//! - [`PendingDemand`] — Remaining demand per client during construction

mod parallel_nearest;
mod pending;

pub use parallel_nearest::parallel_nearest_insertion;
pub use pending::PendingDemand;
