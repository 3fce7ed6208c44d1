//! Scenario: the depot plus its clients.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::Location;
use crate::config::ScenarioConfig;

/// The full location set of one routing scenario.
///
/// Index 0 holds the depot and every location's id equals its index, so
/// ids can be used directly as distance-matrix indices.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::ScenarioConfig;
/// use fleet_routing::models::Scenario;
///
/// let config = ScenarioConfig::default().with_seed(42);
/// let mut scenario = Scenario::generate(&[10, 20, 15], &config);
/// assert_eq!(scenario.len(), 4);
/// assert_eq!(scenario.depot().map(|d| d.id()), Some(0));
///
/// scenario.update_demand(2, 5);
/// assert_eq!(scenario.location(2).map(|c| c.demand()), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    locations: Vec<Location>,
}

impl Scenario {
    /// Creates a scenario with no locations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a scenario from explicit locations.
    ///
    /// Returns `None` unless the depot sits at index 0, it is the only
    /// depot, and every id equals its index. An empty list is accepted.
    pub fn from_locations(locations: Vec<Location>) -> Option<Self> {
        let well_formed = locations
            .iter()
            .enumerate()
            .all(|(i, loc)| loc.id() == i && loc.is_depot() == (i == 0));
        if !well_formed {
            return None;
        }
        Some(Self { locations })
    }

    /// Generates a depot at the centre of the plane and one client per
    /// demand, with client ids 1..=N in input order.
    ///
    /// Uses the config's seed when present, otherwise the thread RNG.
    pub fn generate(demands: &[u32], config: &ScenarioConfig) -> Self {
        match config.seed() {
            Some(seed) => Self::generate_with_rng(demands, config, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate_with_rng(demands, config, &mut rand::rng()),
        }
    }

    /// Same as [`Scenario::generate`] with a caller-supplied RNG.
    pub fn generate_with_rng<R: Rng>(demands: &[u32], config: &ScenarioConfig, rng: &mut R) -> Self {
        let (cx, cy) = config.center();
        let (x_lo, x_hi) = config.x_range();
        let (y_lo, y_hi) = config.y_range();

        let mut locations = Vec::with_capacity(demands.len() + 1);
        locations.push(Location::depot(cx, cy));
        for (i, &demand) in demands.iter().enumerate() {
            let x = rng.random_range(x_lo..=x_hi);
            let y = rng.random_range(y_lo..=y_hi);
            locations.push(Location::client(i + 1, x, y, demand));
        }

        info!(
            clients = demands.len(),
            width = config.width(),
            height = config.height(),
            "Generated scenario"
        );
        Self { locations }
    }

    /// All locations, depot first.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location by id, if present.
    pub fn location(&self, id: usize) -> Option<&Location> {
        self.locations.get(id)
    }

    /// The depot, or `None` for an empty scenario.
    pub fn depot(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// Client locations in id order.
    pub fn clients(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().skip(1)
    }

    /// Number of locations, depot included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if the scenario has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of clients.
    pub fn num_clients(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    /// Sum of client demands.
    pub fn total_demand(&self) -> u64 {
        self.clients().map(|c| u64::from(c.demand())).sum()
    }

    /// Sets a client's demand. Unknown ids and the depot are ignored.
    pub fn update_demand(&mut self, id: usize, demand: u32) {
        if let Some(loc) = self.locations.get_mut(id) {
            loc.set_demand(demand);
        }
    }
}
