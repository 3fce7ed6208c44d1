//! # fleet-routing
//!
//! Routing engine for a capacity-constrained fleet serving client demands
//! from a single depot. Computes all-pairs shortest paths over the
//! locations, then assigns deliveries with a parallel nearest-insertion
//! greedy that allows partial deliveries.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Scenario, FleetVehicle, SolveReport)
//! - [`distance`] — Direct distance matrix and Floyd–Warshall shortest paths
//! - [`constructive`] — Parallel nearest-insertion fleet router
//! - [`evaluation`] — Consistency checks on a finished solve
//! - [`config`] — Scenario generation settings
//! - [`session`] — Single-owner entry point: generate, update demand, solve

pub mod config;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod models;
pub mod session;
