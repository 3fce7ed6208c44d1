//! Post-solve consistency checks.

use crate::distance::ShortestPaths;
use crate::models::{FleetVehicle, Location, SolveReport};

/// A kind of inconsistency in a solve report.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Vehicle load above its capacity.
    CapacityExceeded {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Final load.
        load: u32,
        /// Vehicle capacity.
        capacity: u32,
    },
    /// Route does not leave from, or come back to, the depot.
    RouteNotAnchored {
        /// Vehicle ID.
        vehicle_id: usize,
    },
    /// Travel cost differs from the summed legs of the route.
    CostMismatch {
        /// Vehicle ID.
        vehicle_id: usize,
        /// Cost stored on the vehicle.
        reported: f64,
        /// Cost recomputed from the shortest-path matrix.
        expected: f64,
    },
    /// A client received more than it asked for.
    OverDelivery {
        /// Client ID.
        client_id: usize,
        /// Units delivered.
        delivered: u64,
        /// Client demand.
        demand: u32,
    },
    /// Fleet total differs from the sum of vehicle costs.
    TotalMismatch {
        /// Total stored on the report.
        reported: f64,
        /// Sum of vehicle costs.
        expected: f64,
    },
}

/// An inconsistency found in a solve report.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Re-validates a finished solve against its locations and shortest paths.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::distance::{DistanceMatrix, ShortestPaths};
/// use fleet_routing::constructive::parallel_nearest_insertion;
/// use fleet_routing::evaluation::SolutionChecker;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::client(1, 3.0, 4.0, 10),
///     Location::client(2, 6.0, 8.0, 20),
/// ];
/// let paths = ShortestPaths::compute(&DistanceMatrix::from_locations(&locations));
/// let report = parallel_nearest_insertion(&locations, &paths, &[15, 15]);
///
/// let checker = SolutionChecker::new(&locations, &paths);
/// assert!(checker.check(&report).is_empty());
/// ```
pub struct SolutionChecker<'a> {
    locations: &'a [Location],
    paths: &'a ShortestPaths,
    tolerance: f64,
}

impl<'a> SolutionChecker<'a> {
    /// Creates a checker with an absolute cost tolerance of `1e-6`.
    pub fn new(locations: &'a [Location], paths: &'a ShortestPaths) -> Self {
        Self {
            locations,
            paths,
            tolerance: 1e-6,
        }
    }

    /// Sets the absolute tolerance used for cost comparisons.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sum of shortest-path legs along `route`.
    pub fn route_cost(&self, route: &[usize]) -> f64 {
        route.windows(2).map(|w| self.paths.get(w[0], w[1])).sum()
    }

    /// Checks a single vehicle's capacity, anchoring and cost.
    pub fn check_vehicle(&self, vehicle: &FleetVehicle) -> Vec<Violation> {
        let mut violations = Vec::new();
        let depot = self.locations.first().map(Location::id).unwrap_or(0);

        if vehicle.load() > vehicle.capacity() {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                vehicle_id: vehicle.id(),
                load: vehicle.load(),
                capacity: vehicle.capacity(),
            }));
        }

        let route = vehicle.route();
        let starts_home = route.first() == Some(&depot);
        let ends_home = route.last() == Some(&depot);
        if !starts_home || !ends_home {
            violations.push(Violation::new(ViolationType::RouteNotAnchored {
                vehicle_id: vehicle.id(),
            }));
        }

        let expected = self.route_cost(route);
        if (expected - vehicle.travel_cost()).abs() > self.tolerance {
            violations.push(Violation::new(ViolationType::CostMismatch {
                vehicle_id: vehicle.id(),
                reported: vehicle.travel_cost(),
                expected,
            }));
        }

        violations
    }

    /// Checks every vehicle, per-client delivery totals, and the fleet total.
    pub fn check(&self, report: &SolveReport) -> Vec<Violation> {
        let mut violations: Vec<Violation> = report
            .vehicles()
            .iter()
            .flat_map(|v| self.check_vehicle(v))
            .collect();

        for (client_id, delivered) in report.delivered_by_client() {
            let demand = self.locations.get(client_id).map_or(0, Location::demand);
            if delivered > u64::from(demand) {
                violations.push(Violation::new(ViolationType::OverDelivery {
                    client_id,
                    delivered,
                    demand,
                }));
            }
        }

        let expected: f64 = report.vehicles().iter().map(FleetVehicle::travel_cost).sum();
        if (expected - report.total_distance()).abs() > self.tolerance {
            violations.push(Violation::new(ViolationType::TotalMismatch {
                reported: report.total_distance(),
                expected,
            }));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{Delivery, SolveEvent};

    fn setup() -> (Vec<Location>, ShortestPaths) {
        let locations = vec![
            Location::depot(0.0, 0.0),
            Location::client(1, 3.0, 4.0, 10),
            Location::client(2, 6.0, 8.0, 20),
        ];
        let paths = ShortestPaths::compute(&DistanceMatrix::from_locations(&locations));
        (locations, paths)
    }

    fn report_with(vehicles: Vec<FleetVehicle>, deliveries: Vec<Delivery>) -> SolveReport {
        let total = vehicles.iter().map(FleetVehicle::travel_cost).sum();
        SolveReport::new(vehicles, deliveries, vec![SolveEvent::Started], total, 0)
    }

    #[test]
    fn test_route_cost() {
        let (locations, paths) = setup();
        let checker = SolutionChecker::new(&locations, &paths);
        assert!((checker.route_cost(&[0, 1, 2, 0]) - 20.0).abs() < 1e-10);
        assert_eq!(checker.route_cost(&[0]), 0.0);
    }

    #[test]
    fn test_idle_vehicle_ok() {
        let (locations, paths) = setup();
        let checker = SolutionChecker::new(&locations, &paths);
        assert!(checker.check_vehicle(&FleetVehicle::new(1, 10, 0)).is_empty());
    }

    #[test]
    fn test_not_anchored() {
        let (locations, paths) = setup();
        let checker = SolutionChecker::new(&locations, &paths);
        let mut v = FleetVehicle::new(1, 10, 0);
        v.visit(1, 10, 5.0);
        let violations = checker.check_vehicle(&v);
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::RouteNotAnchored { vehicle_id: 1 })]
        );
    }

    #[test]
    fn test_cost_mismatch() {
        let (locations, paths) = setup();
        let checker = SolutionChecker::new(&locations, &paths);
        let mut v = FleetVehicle::new(2, 10, 0);
        v.visit(1, 10, 5.0);
        v.visit(0, 0, 7.0);
        let violations = checker.check_vehicle(&v);
        assert_eq!(violations.len(), 1);
        assert!(matches!(
            violations[0].kind,
            ViolationType::CostMismatch { vehicle_id: 2, .. }
        ));
    }

    #[test]
    fn test_over_delivery() {
        let (locations, paths) = setup();
        let checker = SolutionChecker::new(&locations, &paths);
        let deliveries = vec![Delivery {
            step: 0,
            vehicle_id: 1,
            client_id: 1,
            amount: 12,
            distance: 5.0,
        }];
        let violations = checker.check(&report_with(vec![], deliveries));
        assert_eq!(
            violations,
            vec![Violation::new(ViolationType::OverDelivery {
                client_id: 1,
                delivered: 12,
                demand: 10,
            })]
        );
    }

    #[test]
    fn test_total_mismatch() {
        let (locations, paths) = setup();
        let checker = SolutionChecker::new(&locations, &paths);
        let report = SolveReport::new(vec![], vec![], vec![], 3.0, 0);
        let violations = checker.check(&report);
        assert!(matches!(
            violations[0].kind,
            ViolationType::TotalMismatch { .. }
        ));
    }

    #[test]
    fn test_tolerance() {
        let (locations, paths) = setup();
        let checker = SolutionChecker::new(&locations, &paths).with_tolerance(0.5);
        let mut v = FleetVehicle::new(1, 10, 0);
        v.visit(1, 10, 5.2);
        v.visit(0, 0, 5.2);
        assert!(checker.check_vehicle(&v).is_empty());
    }
}
