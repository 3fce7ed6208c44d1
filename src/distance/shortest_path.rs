//! All-pairs shortest paths (Floyd–Warshall).
//!
//! # Algorithm
//!
//! For every intermediate node k and every pair (i, j):
//!
//! ```text
//! dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j])
//! ```
//!
//! A next-hop table is updated alongside so that paths can be rebuilt.
//! Missing edges are `f64::INFINITY` and stay infinite when unreachable.
//!
//! # Complexity
//!
//! O(n³) time, O(n²) memory.
//!
//! # Reference
//!
//! Floyd, R.W. (1962). "Algorithm 97: Shortest path",
//! *Communications of the ACM* 5(6), 345.

use super::DistanceMatrix;

/// Shortest-path distances between every pair of locations.
///
/// # Examples
///
/// ```
/// use fleet_routing::distance::{DistanceMatrix, ShortestPaths};
///
/// let inf = f64::INFINITY;
/// // 0 - 1 - 2, no direct edge between 0 and 2
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, inf,
///     1.0, 0.0, 2.0,
///     inf, 2.0, 0.0,
/// ]).unwrap();
///
/// let sp = ShortestPaths::compute(&dm);
/// assert_eq!(sp.get(0, 2), 3.0);
/// assert_eq!(sp.path(0, 2), Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    dist: DistanceMatrix,
    next: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Runs the relaxation over a copy of `direct`.
    pub fn compute(direct: &DistanceMatrix) -> Self {
        let n = direct.size();
        let mut dist = direct.clone();
        let mut next = vec![None; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j || dist.get(i, j).is_finite() {
                    next[i * n + j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist.get(i, k);
                if !d_ik.is_finite() {
                    continue;
                }
                for j in 0..n {
                    let via = d_ik + dist.get(k, j);
                    if via < dist.get(i, j) {
                        dist.relax(i, j, via);
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        Self { dist, next }
    }

    /// Shortest distance from `from` to `to` (`INFINITY` if unreachable).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.dist.get(from, to)
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.dist.size()
    }

    /// The relaxed distances as a matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.dist
    }

    /// Returns `true` if `to` can be reached from `from`.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Node sequence of the shortest path, both ends included.
    ///
    /// Returns `None` if either index is out of range or `to` is unreachable.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        let n = self.size();
        if from >= n || to >= n {
            return None;
        }
        let mut path = vec![from];
        let mut current = from;
        while current != to {
            current = self.next[current * n + to]?;
            path.push(current);
            if path.len() > n {
                return None;
            }
        }
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    const INF: f64 = f64::INFINITY;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::depot(0.0, 0.0),
            Location::client(1, 10.0, 0.0, 1),
            Location::client(2, 10.0, 10.0, 1),
            Location::client(3, 0.0, 10.0, 1),
        ])
    }

    #[test]
    fn test_complete_graph_matches_direct() {
        let dm = square();
        let sp = ShortestPaths::compute(&dm);
        for i in 0..4 {
            for j in 0..4 {
                assert!((sp.get(i, j) - dm.get(i, j)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_zero_diagonal_and_symmetric() {
        let sp = ShortestPaths::compute(&square());
        for i in 0..4 {
            assert_eq!(sp.get(i, i), 0.0);
        }
        assert!(sp.matrix().is_symmetric(1e-10));
    }

    #[test]
    fn test_shortcut_through_intermediate() {
        // 0→2 direct costs 10, via 1 costs 3
        let dm = DistanceMatrix::from_data(3, vec![0.0, 1.0, 10.0, 1.0, 0.0, 2.0, 10.0, 2.0, 0.0])
            .expect("valid");
        let sp = ShortestPaths::compute(&dm);
        assert_eq!(sp.get(0, 2), 3.0);
        assert_eq!(sp.get(2, 0), 3.0);
        assert!(sp.get(0, 2) <= dm.get(0, 2));
        assert_eq!(sp.path(0, 2), Some(vec![0, 1, 2]));
        assert_eq!(sp.path(2, 0), Some(vec![2, 1, 0]));
    }

    #[test]
    fn test_unreachable() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, INF, INF, 0.0]).expect("valid");
        let sp = ShortestPaths::compute(&dm);
        assert!(!sp.is_reachable(0, 1));
        assert_eq!(sp.path(0, 1), None);
        assert_eq!(sp.path(1, 1), Some(vec![1]));
    }

    #[test]
    fn test_empty() {
        let sp = ShortestPaths::compute(&DistanceMatrix::default());
        assert_eq!(sp.size(), 0);
        assert_eq!(sp.path(0, 0), None);
    }

    #[test]
    fn test_directed_edges() {
        // 0→1 only one way; 1→0 must go through 2
        let dm = DistanceMatrix::from_data(
            3,
            vec![0.0, 4.0, INF, INF, 0.0, 1.0, 1.0, INF, 0.0],
        )
        .expect("valid");
        let sp = ShortestPaths::compute(&dm);
        assert_eq!(sp.get(1, 0), 2.0);
        assert_eq!(sp.path(1, 0), Some(vec![1, 2, 0]));
        assert_eq!(sp.get(2, 1), 5.0);
    }
}
