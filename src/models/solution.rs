//! Solve results: vehicles, deliveries and the report.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{FleetVehicle, SolveEvent};

/// A single unloading step of the greedy assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Zero-based step counter.
    pub step: usize,
    /// Vehicle that moved.
    pub vehicle_id: usize,
    /// Client served.
    pub client_id: usize,
    /// Units unloaded.
    pub amount: u32,
    /// Shortest-path distance travelled for this step.
    pub distance: f64,
}

/// Outcome of a fleet solve.
///
/// A partial result (unmet demand) is still a valid report; check
/// [`SolveReport::unmet_demand`].
///
/// # Examples
///
/// ```
/// use fleet_routing::models::SolveReport;
///
/// let report = SolveReport::empty();
/// assert!(report.vehicles().is_empty());
/// assert_eq!(report.text(), "Scenario empty! Generate the map first.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    vehicles: Vec<FleetVehicle>,
    deliveries: Vec<Delivery>,
    events: Vec<SolveEvent>,
    total_distance: f64,
    unmet_demand: u64,
}

impl SolveReport {
    /// Report for a scenario with nothing to route.
    pub fn empty() -> Self {
        Self {
            vehicles: Vec::new(),
            deliveries: Vec::new(),
            events: vec![SolveEvent::EmptyScenario],
            total_distance: 0.0,
            unmet_demand: 0,
        }
    }

    /// Assembles a report from the router's final state.
    pub fn new(
        vehicles: Vec<FleetVehicle>,
        deliveries: Vec<Delivery>,
        events: Vec<SolveEvent>,
        total_distance: f64,
        unmet_demand: u64,
    ) -> Self {
        Self {
            vehicles,
            deliveries,
            events,
            total_distance,
            unmet_demand,
        }
    }

    /// Final vehicle states in creation order.
    pub fn vehicles(&self) -> &[FleetVehicle] {
        &self.vehicles
    }

    /// Deliveries in the order they were made.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Report events in order.
    pub fn events(&self) -> &[SolveEvent] {
        &self.events
    }

    /// Fleet total distance.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Units that could not be delivered.
    pub fn unmet_demand(&self) -> u64 {
        self.unmet_demand
    }

    /// Returns `true` when all demand was delivered.
    pub fn is_complete(&self) -> bool {
        self.unmet_demand == 0
    }

    /// Units delivered per client id.
    pub fn delivered_by_client(&self) -> BTreeMap<usize, u64> {
        let mut out = BTreeMap::new();
        for d in &self.deliveries {
            *out.entry(d.client_id).or_insert(0) += u64::from(d.amount);
        }
        out
    }

    /// Report lines.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Report lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}
