//! Direct-edge distance matrix.

use serde::Serialize;

use crate::models::Location;

/// Marker for a pair of locations with no direct edge.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Direct travel distances between locations, indexed by location id.
///
/// Every entry is non-negative, the diagonal is zero and [`NO_EDGE`]
/// (`f64::INFINITY`) marks a missing edge. Matrices built from coordinates
/// are complete and symmetric.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::distance::{DistanceMatrix, NO_EDGE};
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::depot(0.0, 0.0),
///     Location::client(1, 3.0, 4.0, 10),
/// ]);
/// assert_eq!(dm.get(0, 1), 5.0);
///
/// // Explicit edges; client 2 is only reachable through client 1.
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, NO_EDGE,
///     1.0, 0.0, 2.0,
///     NO_EDGE, 2.0, 0.0,
/// ]).unwrap();
/// assert!(!dm.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Straight-line distance between every pair of locations.
    pub fn from_locations(locations: &[Location]) -> Self {
        let cells = locations
            .iter()
            .flat_map(|from| locations.iter().map(move |to| from.distance_to(to)))
            .collect();
        Self {
            size: locations.len(),
            cells,
        }
    }

    /// Builds a matrix from `size * size` row-major entries.
    ///
    /// Returns `None` on a length mismatch, a non-zero diagonal, or any
    /// negative or NaN entry. Off-diagonal [`NO_EDGE`] is accepted.
    pub fn from_data(size: usize, cells: Vec<f64>) -> Option<Self> {
        if cells.len() != size * size {
            return None;
        }
        let valid = cells.iter().enumerate().all(|(at, &d)| {
            let on_diagonal = at / size == at % size;
            if on_diagonal {
                d == 0.0
            } else {
                !d.is_nan() && d >= 0.0
            }
        });
        valid.then_some(Self { size, cells })
    }

    /// Direct distance from `from` to `to`; [`NO_EDGE`] when absent.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.size + to]
    }

    /// Lowers an entry during relaxation; callers keep entries non-negative.
    pub(crate) fn relax(&mut self, from: usize, to: usize, distance: f64) {
        self.cells[from * self.size + to] = distance;
    }

    /// Returns `true` when a direct edge leads from `from` to `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get(from, to) != NO_EDGE
    }

    /// Distances out of `from`, indexed by destination id.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.cells[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if every edge matches its reverse within `tol`.
    ///
    /// A missing edge only matches a missing reverse edge.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| {
            (i + 1..self.size).all(|j| {
                let (there, back) = (self.get(i, j), self.get(j, i));
                there == back || (there - back).abs() <= tol
            })
        })
    }
}
