//! Fleet vehicle with capacity, running load and route.

use serde::{Deserialize, Serialize};

/// A vehicle taking part in one solve.
///
/// The route always starts at the depot and only grows during a solve.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::FleetVehicle;
///
/// let mut v = FleetVehicle::new(1, 50, 0);
/// assert_eq!(v.route(), &[0]);
/// assert_eq!(v.spare_capacity(), 50);
///
/// v.visit(3, 20, 12.5);
/// assert_eq!(v.route(), &[0, 3]);
/// assert_eq!(v.load(), 20);
/// assert_eq!(v.spare_capacity(), 30);
/// assert_eq!(v.travel_cost(), 12.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetVehicle {
    id: usize,
    capacity: u32,
    load: u32,
    route: Vec<usize>,
    travel_cost: f64,
}

impl FleetVehicle {
    /// Creates an empty vehicle parked at `depot_id`.
    pub fn new(id: usize, capacity: u32, depot_id: usize) -> Self {
        Self {
            id,
            capacity,
            load: 0,
            route: vec![depot_id],
            travel_cost: 0.0,
        }
    }

    /// Vehicle ID (1-based within a solve).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units delivered so far.
    pub fn load(&self) -> u32 {
        self.load
    }

    /// Remaining room for deliveries.
    pub fn spare_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.load)
    }

    /// Returns `true` once the vehicle can take no more load.
    pub fn is_full(&self) -> bool {
        self.load >= self.capacity
    }

    /// Visited location ids, starting at the depot.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Location the vehicle currently stands at.
    pub fn current_location(&self) -> usize {
        // route is never empty: it is seeded with the depot
        self.route[self.route.len() - 1]
    }

    /// Total distance travelled.
    pub fn travel_cost(&self) -> f64 {
        self.travel_cost
    }

    /// Moves to `location`, delivering `amount` units over `distance`.
    ///
    /// The amount is clipped to the spare capacity.
    pub fn visit(&mut self, location: usize, amount: u32, distance: f64) {
        let amount = amount.min(self.spare_capacity());
        self.route.push(location);
        self.load += amount;
        self.travel_cost += distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = FleetVehicle::new(2, 40, 0);
        assert_eq!(v.id(), 2);
        assert_eq!(v.capacity(), 40);
        assert_eq!(v.load(), 0);
        assert_eq!(v.route(), &[0]);
        assert_eq!(v.current_location(), 0);
        assert_eq!(v.travel_cost(), 0.0);
        assert!(!v.is_full());
    }

    #[test]
    fn test_zero_capacity_is_full() {
        let v = FleetVehicle::new(1, 0, 0);
        assert!(v.is_full());
        assert_eq!(v.spare_capacity(), 0);
    }

    #[test]
    fn test_visit_accumulates() {
        let mut v = FleetVehicle::new(1, 40, 0);
        v.visit(1, 25, 10.0);
        v.visit(2, 15, 4.0);
        assert_eq!(v.route(), &[0, 1, 2]);
        assert_eq!(v.current_location(), 2);
        assert_eq!(v.load(), 40);
        assert!(v.is_full());
        assert!((v.travel_cost() - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_visit_clips_to_capacity() {
        let mut v = FleetVehicle::new(1, 10, 0);
        v.visit(1, 25, 1.0);
        assert_eq!(v.load(), 10);
    }
}
