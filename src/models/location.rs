//! Depot and client locations.

use serde::{Deserialize, Serialize};

/// A depot or client on the routing plane.
///
/// Location 0 is the depot. Clients carry a demand that may be changed
/// after the scenario is generated; the depot's demand is always zero.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
///
/// let depot = Location::depot(400.0, 300.0);
/// assert_eq!(depot.id(), 0);
/// assert!(depot.is_depot());
/// assert_eq!(depot.demand(), 0);
///
/// let c = Location::client(1, 120.0, 80.0, 15);
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
    demand: u32,
    is_depot: bool,
}

impl Location {
    /// Creates a client location.
    pub fn client(id: usize, x: f64, y: f64, demand: u32) -> Self {
        Self {
            id,
            x,
            y,
            demand,
            is_depot: false,
        }
    }

    /// Creates the depot at the given coordinates (id=0, demand=0).
    pub fn depot(x: f64, y: f64) -> Self {
        Self {
            id: 0,
            x,
            y,
            demand: 0,
            is_depot: true,
        }
    }

    /// Location ID (0 = depot).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Units requested by this location.
    pub fn demand(&self) -> u32 {
        self.demand
    }

    /// Returns `true` for the depot.
    pub fn is_depot(&self) -> bool {
        self.is_depot
    }

    /// Replaces the demand. Ignored for the depot.
    pub fn set_demand(&mut self, demand: u32) {
        if !self.is_depot {
            self.demand = demand;
        }
    }

    /// Straight-line distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
