//! Remaining demand per client.

use std::collections::BTreeMap;

use crate::models::Location;

/// Undelivered units keyed by client id.
///
/// Iteration is in ascending client id, which fixes the tie-break order of
/// the greedy scan.
///
/// # Examples
///
/// ```
/// use fleet_routing::models::Location;
/// use fleet_routing::constructive::PendingDemand;
///
/// let locations = vec![
///     Location::depot(0.0, 0.0),
///     Location::client(1, 1.0, 0.0, 10),
///     Location::client(2, 2.0, 0.0, 0),
/// ];
/// let mut pending = PendingDemand::from_locations(&locations);
/// assert_eq!(pending.total(), 10);
/// assert_eq!(pending.take(1, 4), 4);
/// assert_eq!(pending.get(1), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingDemand {
    remaining: BTreeMap<usize, u32>,
}

impl PendingDemand {
    /// Seeds pending demand from every non-depot location.
    pub fn from_locations(locations: &[Location]) -> Self {
        let remaining = locations
            .iter()
            .filter(|loc| !loc.is_depot())
            .map(|loc| (loc.id(), loc.demand()))
            .collect();
        Self { remaining }
    }

    /// Remaining units for `client_id` (0 if unknown).
    pub fn get(&self, client_id: usize) -> u32 {
        self.remaining.get(&client_id).copied().unwrap_or(0)
    }

    /// Sum over all clients.
    pub fn total(&self) -> u64 {
        self.remaining.values().map(|&q| u64::from(q)).sum()
    }

    /// Returns `true` once nothing is left to deliver.
    pub fn is_satisfied(&self) -> bool {
        self.remaining.values().all(|&q| q == 0)
    }

    /// Clients with positive remaining demand, ascending by id.
    pub fn open_clients(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.remaining
            .iter()
            .filter(|&(_, &q)| q > 0)
            .map(|(&id, &q)| (id, q))
    }

    /// Removes up to `amount` units from `client_id`; returns the units removed.
    pub fn take(&mut self, client_id: usize, amount: u32) -> u32 {
        match self.remaining.get_mut(&client_id) {
            Some(q) => {
                let taken = amount.min(*q);
                *q -= taken;
                taken
            }
            None => 0,
        }
    }
}
