//! Scenario generation settings.

use serde::{Deserialize, Serialize};

/// Plane size and sampling parameters used when generating a scenario.
///
/// The depot is placed at the centre of a `width × height` plane. Clients
/// are sampled uniformly inside the plane inset by `margin` on every side.
///
/// # Examples
///
/// ```
/// use fleet_routing::config::ScenarioConfig;
///
/// let config = ScenarioConfig::new(1000.0, 650.0)
///     .unwrap()
///     .with_margin(30.0)
///     .with_seed(7);
/// assert_eq!(config.width(), 1000.0);
/// assert_eq!(config.margin(), 30.0);
/// assert_eq!(config.seed(), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    width: f64,
    height: f64,
    margin: f64,
    seed: Option<u64>,
}

impl ScenarioConfig {
    /// Creates a config for the given plane size.
    ///
    /// Returns `None` if either dimension is negative or non-finite.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        if !valid_extent(width) || !valid_extent(height) {
            return None;
        }
        Some(Self {
            width,
            height,
            ..Self::default()
        })
    }

    /// Sets the inset kept free of clients along each edge.
    ///
    /// Negative or non-finite values are treated as zero.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = if valid_extent(margin) { margin } else { 0.0 };
        self
    }

    /// Makes client placement reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Plane width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Plane height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Edge inset.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Depot position: the centre of the plane.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Inclusive x-range clients are sampled from.
    pub fn x_range(&self) -> (f64, f64) {
        inset(self.width, self.margin)
    }

    /// Inclusive y-range clients are sampled from.
    pub fn y_range(&self) -> (f64, f64) {
        inset(self.height, self.margin)
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
            seed: None,
        }
    }
}

fn valid_extent(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

// Collapses to the centre when the extent is narrower than both margins.
fn inset(extent: f64, margin: f64) -> (f64, f64) {
    if extent < 2.0 * margin {
        let mid = extent / 2.0;
        (mid, mid)
    } else {
        (margin, extent - margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = ScenarioConfig::default();
        assert_eq!(c.width(), 800.0);
        assert_eq!(c.height(), 600.0);
        assert_eq!(c.margin(), 50.0);
        assert!(c.seed().is_none());
        assert_eq!(c.center(), (400.0, 300.0));
        assert_eq!(c.x_range(), (50.0, 750.0));
        assert_eq!(c.y_range(), (50.0, 550.0));
    }

    #[test]
    fn test_new_invalid() {
        assert!(ScenarioConfig::new(-1.0, 100.0).is_none());
        assert!(ScenarioConfig::new(100.0, f64::NAN).is_none());
        assert!(ScenarioConfig::new(f64::INFINITY, 100.0).is_none());
    }

    #[test]
    fn test_narrow_plane_collapses() {
        let c = ScenarioConfig::new(60.0, 400.0).expect("valid");
        assert_eq!(c.x_range(), (30.0, 30.0));
        assert_eq!(c.y_range(), (50.0, 350.0));
    }

    #[test]
    fn test_bad_margin() {
        let c = ScenarioConfig::default().with_margin(-5.0);
        assert_eq!(c.margin(), 0.0);
        assert_eq!(c.x_range(), (0.0, 800.0));
    }
}
