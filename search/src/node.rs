//! Frontier entries and their ordering key.

use std::cmp::Ordering;

use pathfind_kernel::edge::DirectedEdge;

/// Index of an entry in the frontier arena.
///
/// Entries are numbered in push order, so the index doubles as the
/// `creation_order` of the entry's [`FrontierKey`].
///
/// Only [`crate::frontier::Frontier`] hands these out, so an `EntryId` is
/// always valid for the frontier that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) usize);

impl EntryId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One discovery of a node: how much it cost to get here and from where.
///
/// Entries form a tree through `back_pointer`; the root (the start node) has
/// neither a back pointer nor a last edge. Walking back pointers yields the
/// path without storing it at every entry.
#[derive(Debug, Clone)]
pub struct FrontierEntry<N> {
    pub node: N,
    /// Accumulated edge weight from the start. Never includes a heuristic.
    pub cost_to_here: f64,
    /// The edge that reached `node` (`None` for the root).
    pub last_edge: Option<DirectedEdge<N>>,
    /// The entry `last_edge` leaves from (`None` for the root).
    pub back_pointer: Option<EntryId>,
}

impl<N> FrontierEntry<N> {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.back_pointer.is_none()
    }
}

/// The frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first; among equal priorities the older entry wins (FIFO).
/// `priority` is `cost_to_here` for uniform-cost search and
/// `cost_to_here + guess_cost` for A*. Floats compare with `total_cmp`, so a
/// misbehaving heuristic cannot break the heap's ordering.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub creation_order: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
