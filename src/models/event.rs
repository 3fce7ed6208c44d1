//! Progress events emitted while solving.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One line of the solve report.
///
/// Each event renders as a single human-readable line through [`Display`](fmt::Display).
///
/// # Examples
///
/// ```
/// use fleet_routing::models::SolveEvent;
///
/// let e = SolveEvent::Delivered { step: 0, vehicle_id: 1, client_id: 4, amount: 20 };
/// assert_eq!(e.to_string(), "Step 0: Vehicle 1 went to Client 4. Delivered 20.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SolveEvent {
    /// Nothing to route.
    EmptyScenario,
    /// Greedy assignment is starting.
    Started,
    /// A vehicle moved to a client and unloaded.
    Delivered {
        /// Zero-based step counter.
        step: usize,
        /// Vehicle that moved.
        vehicle_id: usize,
        /// Client served.
        client_id: usize,
        /// Units unloaded.
        amount: u32,
    },
    /// Every vehicle is full while demand remains.
    FleetFull,
    /// Assignment loop has ended.
    AssignmentFinished,
    /// A vehicle drove back to the depot.
    Returned {
        /// Vehicle that returned.
        vehicle_id: usize,
        /// Length of the return leg.
        leg: f64,
        /// Vehicle travel cost including the leg.
        total: f64,
    },
    /// Sum of all vehicle travel costs.
    FleetTotal {
        /// Fleet distance.
        distance: f64,
    },
    /// Demand left over after the fleet ran out of room.
    Unmet {
        /// Undelivered units across all clients.
        remaining: u64,
    },
}

impl fmt::Display for SolveEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScenario => write!(f, "Scenario empty! Generate the map first."),
            Self::Started => write!(f, "--- Starting global (parallel) optimization ---"),
            Self::Delivered {
                step,
                vehicle_id,
                client_id,
                amount,
            } => write!(
                f,
                "Step {step}: Vehicle {vehicle_id} went to Client {client_id}. Delivered {amount}."
            ),
            Self::FleetFull => write!(f, "Fleet fully loaded. Stopping deliveries."),
            Self::AssignmentFinished => write!(f, "--- End of demand or capacity ---"),
            Self::Returned {
                vehicle_id,
                leg,
                total,
            } => write!(
                f,
                "Vehicle {vehicle_id} returned to depot (+{leg:.1}). Total: {total:.1}"
            ),
            Self::FleetTotal { distance } => write!(f, "\nFLEET TOTAL DISTANCE: {distance:.2}"),
            Self::Unmet { remaining } => write!(f, "ALERT: {remaining} units left undelivered."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines() {
        assert_eq!(
            SolveEvent::EmptyScenario.to_string(),
            "Scenario empty! Generate the map first."
        );
        assert_eq!(
            SolveEvent::Returned {
                vehicle_id: 2,
                leg: 14.142,
                total: 38.26,
            }
            .to_string(),
            "Vehicle 2 returned to depot (+14.1). Total: 38.3"
        );
        assert_eq!(
            SolveEvent::FleetTotal { distance: 34.1421 }.to_string(),
            "\nFLEET TOTAL DISTANCE: 34.14"
        );
        assert_eq!(
            SolveEvent::Unmet { remaining: 20 }.to_string(),
            "ALERT: 20 units left undelivered."
        );
    }
}
