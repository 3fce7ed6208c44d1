//! In-process entry point for a presentation layer.
//!
//! A [`RoutingSession`] owns the current scenario and its direct-distance
//! matrix. The matrix is rebuilt whenever a new scenario is generated;
//! shortest paths are recomputed on every solve.

use rand::Rng;
use tracing::info;

use crate::config::ScenarioConfig;
use crate::constructive::parallel_nearest_insertion;
use crate::distance::{DistanceMatrix, ShortestPaths};
use crate::models::{Location, Scenario, SolveReport};

/// Single-owner routing state: generate, edit demands, solve.
///
/// Calls are synchronous and run to completion; concurrent edits must be
/// serialized by the caller.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::ScenarioConfig;
/// use fleet_routing::session::RoutingSession;
///
/// let mut session = RoutingSession::new();
/// session.generate_scenario(&[10, 20, 15, 50, 30], &ScenarioConfig::default().with_seed(3));
/// session.update_demand(4, 25);
///
/// let report = session.solve(&[50, 50]);
/// assert_eq!(report.vehicles().len(), 2);
/// assert!(report.is_complete());
/// assert!(report.text().contains("FLEET TOTAL DISTANCE"));
/// ```
#[derive(Debug, Clone)]
pub struct RoutingSession {
    scenario: Scenario,
    distances: DistanceMatrix,
}

impl RoutingSession {
    /// Creates a session with an empty scenario.
    pub fn new() -> Self {
        Self {
            scenario: Scenario::empty(),
            distances: DistanceMatrix::default(),
        }
    }

    /// Creates a session around an existing scenario.
    pub fn with_scenario(scenario: Scenario) -> Self {
        let distances = DistanceMatrix::from_locations(scenario.locations());
        Self {
            scenario,
            distances,
        }
    }

    /// Replaces the scenario with a freshly generated one; returns the
    /// number of locations, depot included.
    pub fn generate_scenario(&mut self, demands: &[u32], config: &ScenarioConfig) -> usize {
        self.replace(Scenario::generate(demands, config))
    }

    /// Same as [`RoutingSession::generate_scenario`] with a caller-supplied RNG.
    pub fn generate_scenario_with_rng<R: Rng>(
        &mut self,
        demands: &[u32],
        config: &ScenarioConfig,
        rng: &mut R,
    ) -> usize {
        self.replace(Scenario::generate_with_rng(demands, config, rng))
    }

    /// Sets a client's demand. Unknown ids and the depot are ignored.
    pub fn update_demand(&mut self, id: usize, demand: u32) {
        self.scenario.update_demand(id, demand);
    }

    /// Runs shortest paths and the fleet router over the current scenario.
    pub fn solve(&self, capacities: &[u32]) -> SolveReport {
        if self.scenario.num_clients() == 0 {
            info!("Solve requested on an empty scenario");
            return SolveReport::empty();
        }
        let paths = ShortestPaths::compute(&self.distances);
        parallel_nearest_insertion(self.scenario.locations(), &paths, capacities)
    }

    /// Current scenario.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Current locations, depot first.
    pub fn locations(&self) -> &[Location] {
        self.scenario.locations()
    }

    /// Direct-distance matrix of the current scenario.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Shortest paths over the current scenario, computed on demand.
    pub fn shortest_paths(&self) -> ShortestPaths {
        ShortestPaths::compute(&self.distances)
    }

    fn replace(&mut self, scenario: Scenario) -> usize {
        self.distances = DistanceMatrix::from_locations(scenario.locations());
        self.scenario = scenario;
        self.scenario.len()
    }
}

impl Default for RoutingSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_session(demands: &[u32]) -> RoutingSession {
        let mut s = RoutingSession::new();
        s.generate_scenario(demands, &ScenarioConfig::default().with_seed(11));
        s
    }

    #[test]
    fn test_new_is_empty() {
        let s = RoutingSession::new();
        assert!(s.locations().is_empty());
        assert!(s.distances().is_empty());
        let report = s.solve(&[10]);
        assert!(report.vehicles().is_empty());
        assert_eq!(report.text(), "Scenario empty! Generate the map first.");
    }

    #[test]
    fn test_generate_rebuilds_matrix() {
        let mut s = seeded_session(&[1, 2, 3]);
        assert_eq!(s.distances().size(), 4);
        let count = s.generate_scenario(&[5], &ScenarioConfig::default().with_seed(2));
        assert_eq!(count, 2);
        assert_eq!(s.distances().size(), 2);
    }

    #[test]
    fn test_generate_with_rng() {
        let mut a = RoutingSession::new();
        let mut b = RoutingSession::new();
        let config = ScenarioConfig::default();
        a.generate_scenario_with_rng(&[4, 4], &config, &mut StdRng::seed_from_u64(9));
        b.generate_scenario_with_rng(&[4, 4], &config, &mut StdRng::seed_from_u64(9));
        assert_eq!(a.scenario(), b.scenario());
    }

    #[test]
    fn test_update_demand_changes_solve() {
        let mut s = seeded_session(&[10, 10]);
        let before = s.solve(&[100]);
        assert_eq!(before.vehicles()[0].load(), 20);
        s.update_demand(2, 30);
        let after = s.solve(&[100]);
        assert_eq!(after.vehicles()[0].load(), 40);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut s = seeded_session(&[10]);
        let before = s.scenario().clone();
        s.update_demand(5, 1);
        s.update_demand(0, 1);
        assert_eq!(s.scenario(), &before);
    }

    #[test]
    fn test_depot_only_is_empty() {
        let s = seeded_session(&[]);
        assert_eq!(s.locations().len(), 1);
        let report = s.solve(&[10]);
        assert_eq!(report, SolveReport::empty());
    }

    #[test]
    fn test_with_scenario() {
        let scenario = Scenario::from_locations(vec![
            Location::depot(0.0, 0.0),
            Location::client(1, 6.0, 8.0, 3),
        ])
        .expect("valid");
        let s = RoutingSession::with_scenario(scenario);
        assert!((s.distances().get(0, 1) - 10.0).abs() < 1e-10);
        assert!((s.shortest_paths().get(1, 0) - 10.0).abs() < 1e-10);
        let report = s.solve(&[5]);
        assert!((report.total_distance() - 20.0).abs() < 1e-10);
    }
}
