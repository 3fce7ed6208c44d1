//! Parallel nearest-insertion heuristic with partial deliveries.
//!
//! All vehicles build their routes at the same time. Each step scans every
//! (vehicle with spare capacity, client with pending demand) pair and
//! commits the globally shortest move, unloading as much as fits. When the
//! demand is met or the fleet is full, vehicles drive back to the depot.
//!
//! Ties keep the first pair found: vehicles in creation order, then
//! clients in ascending id.
//!
//! # Complexity
//!
//! O(m·n) per step for m vehicles and n clients; at most O(m·n) steps,
//! since every step either empties a client or fills a vehicle.

use tracing::{debug, info, warn};

use super::PendingDemand;
use crate::distance::ShortestPaths;
use crate::models::{Delivery, FleetVehicle, Location, SolveEvent, SolveReport};

#[derive(Debug, Clone, Copy)]
struct Move {
    vehicle: usize,
    client: usize,
    distance: f64,
}

/// Routes a fleet over `locations` using the parallel nearest-insertion greedy.
///
/// One vehicle is created per capacity, with ids 1, 2, ... in order.
/// The result is not guaranteed optimal; unmet demand is reported rather
/// than treated as an error.
///
/// # Arguments
///
/// * `locations` — All locations (index 0 = depot, ids equal indices)
/// * `paths` — Shortest-path distances over `locations`
/// * `capacities` — One entry per vehicle
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::distance::{DistanceMatrix, ShortestPaths};
/// use fleet_routing::constructive::parallel_nearest_insertion;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::client(1, 1.0, 0.0, 10),
///     Location::client(2, 2.0, 0.0, 10),
/// ];
/// let paths = ShortestPaths::compute(&DistanceMatrix::from_locations(&locations));
///
/// let report = parallel_nearest_insertion(&locations, &paths, &[30]);
/// assert_eq!(report.vehicles()[0].route(), &[0, 1, 2, 0]);
/// assert!((report.total_distance() - 4.0).abs() < 1e-10);
/// assert!(report.is_complete());
/// ```
pub fn parallel_nearest_insertion(
    locations: &[Location],
    paths: &ShortestPaths,
    capacities: &[u32],
) -> SolveReport {
    // A depot alone has nothing to route either.
    if locations.len() <= 1 {
        return SolveReport::empty();
    }
    let depot = locations[0].id();

    let mut vehicles: Vec<FleetVehicle> = capacities
        .iter()
        .enumerate()
        .map(|(i, &capacity)| FleetVehicle::new(i + 1, capacity, depot))
        .collect();
    let mut pending = PendingDemand::from_locations(locations);
    let mut deliveries = Vec::new();
    let mut events = vec![SolveEvent::Started];

    info!(
        clients = locations.len() - 1,
        vehicles = vehicles.len(),
        demand = pending.total(),
        "Starting fleet routing"
    );

    loop {
        if pending.is_satisfied() {
            break;
        }
        if vehicles.iter().all(FleetVehicle::is_full) {
            events.push(SolveEvent::FleetFull);
            warn!(remaining = pending.total(), "Fleet fully loaded");
            break;
        }

        let Some(best) = best_move(&vehicles, &pending, paths) else {
            break;
        };

        let vehicle = &mut vehicles[best.vehicle];
        let amount = pending.take(best.client, vehicle.spare_capacity());
        vehicle.visit(best.client, amount, best.distance);

        let step = deliveries.len();
        debug!(
            step,
            vehicle = vehicle.id(),
            client = best.client,
            amount,
            distance = best.distance,
            "Delivery"
        );
        events.push(SolveEvent::Delivered {
            step,
            vehicle_id: vehicle.id(),
            client_id: best.client,
            amount,
        });
        deliveries.push(Delivery {
            step,
            vehicle_id: vehicle.id(),
            client_id: best.client,
            amount,
            distance: best.distance,
        });
    }

    events.push(SolveEvent::AssignmentFinished);
    for vehicle in &mut vehicles {
        let last = vehicle.current_location();
        if last == depot {
            continue;
        }
        let leg = paths.get(last, depot);
        vehicle.visit(depot, 0, leg);
        // a client on the depot's coordinates closes the route silently
        if leg <= 0.0 {
            continue;
        }
        debug!(vehicle = vehicle.id(), leg, total = vehicle.travel_cost(), "Returned to depot");
        events.push(SolveEvent::Returned {
            vehicle_id: vehicle.id(),
            leg,
            total: vehicle.travel_cost(),
        });
    }

    let total_distance: f64 = vehicles.iter().map(FleetVehicle::travel_cost).sum();
    events.push(SolveEvent::FleetTotal {
        distance: total_distance,
    });

    let unmet = pending.total();
    if unmet > 0 {
        warn!(unmet, "Demand left undelivered");
        events.push(SolveEvent::Unmet { remaining: unmet });
    }

    info!(
        steps = deliveries.len(),
        total_distance,
        unmet,
        "Fleet routing finished"
    );

    SolveReport::new(vehicles, deliveries, events, total_distance, unmet)
}

/// Globally closest (vehicle, client) pair; strict `<` keeps the first tie.
fn best_move(vehicles: &[FleetVehicle], pending: &PendingDemand, paths: &ShortestPaths) -> Option<Move> {
    let mut best: Option<Move> = None;
    for (vi, vehicle) in vehicles.iter().enumerate() {
        if vehicle.is_full() {
            continue;
        }
        let from = vehicle.current_location();
        for (client, _) in pending.open_clients() {
            let d = paths.get(from, client);
            if d < best.map_or(f64::INFINITY, |b| b.distance) {
                best = Some(Move {
                    vehicle: vi,
                    client,
                    distance: d,
                });
            }
        }
    }
    best
}
