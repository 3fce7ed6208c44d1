//! Distance engine.
//!
//! Provides the dense direct-distance matrix and the all-pairs
//! shortest-path matrix derived from it.

mod matrix;
mod shortest_path;

pub use matrix::{DistanceMatrix, NO_EDGE};
pub use shortest_path::ShortestPaths;
