//! Best-first frontier: an entry arena plus a binary min-heap of indices.
//!
//! Entries are never removed from the arena while a search runs, so back
//! pointers stay valid until the frontier is dropped. The heap may hold
//! several entries for the same node; the search loop discards the stale
//! ones when they are popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pathfind_kernel::edge::DirectedEdge;

use crate::node::{EntryId, FrontierEntry, FrontierKey};

/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest priority first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct HeapItem {
    key: Reverse<FrontierKey>,
    id: EntryId,
}

/// Priority queue over frontier entries.
#[derive(Debug)]
pub struct Frontier<N> {
    entries: Vec<FrontierEntry<N>>,
    heap: BinaryHeap<HeapItem>,
    high_water: u64,
}

impl<N> Frontier<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            heap: BinaryHeap::new(),
            high_water: 0,
        }
    }

    /// Push the start node with cost 0 and the given heuristic estimate.
    pub fn push_root(&mut self, node: N, estimate: f64) -> EntryId {
        self.push_entry(node, 0.0, None, None, estimate)
    }

    /// Pop the entry with the lowest `(priority, creation_order)`.
    pub fn pop(&mut self) -> Option<(EntryId, FrontierKey)> {
        self.heap.pop().map(|item| (item.id, item.key.0))
    }

    #[must_use]
    pub fn entry(&self, id: EntryId) -> &FrontierEntry<N> {
        &self.entries[id.0]
    }

    /// Number of entries waiting in the heap (stale duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest heap size seen so far.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Number of entries ever pushed.
    #[must_use]
    pub fn total_pushed(&self) -> u64 {
        self.entries.len() as u64
    }

    fn push_entry(
        &mut self,
        node: N,
        cost_to_here: f64,
        last_edge: Option<DirectedEdge<N>>,
        back_pointer: Option<EntryId>,
        estimate: f64,
    ) -> EntryId {
        let id = EntryId(self.entries.len());
        let creation_order = self.entries.len() as u64;
        let key = FrontierKey {
            priority: cost_to_here + estimate,
            creation_order,
        };
        self.entries.push(FrontierEntry {
            node,
            cost_to_here,
            last_edge,
            back_pointer,
        });
        self.heap.push(HeapItem {
            key: Reverse(key),
            id,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        id
    }
}

impl<N: Clone> Frontier<N> {
    /// Push the target of `edge`, reached from `parent`.
    ///
    /// The new entry's cost is `parent.cost_to_here + edge.weight()`; its
    /// priority adds `estimate` on top of that.
    pub fn push_child(&mut self, parent: EntryId, edge: DirectedEdge<N>, estimate: f64) -> EntryId {
        let cost_to_here = self.entries[parent.0].cost_to_here + edge.weight();
        let node = edge.to().clone();
        self.push_entry(node, cost_to_here, Some(edge), Some(parent), estimate)
    }

    /// Follow back pointers from `id` to the root and return the edges in
    /// start-to-`id` order.
    #[must_use]
    pub fn extract_path(&self, id: EntryId) -> Vec<DirectedEdge<N>> {
        let mut edges = Vec::new();
        let mut current = self.entry(id);
        while let (Some(edge), Some(parent)) = (&current.last_edge, current.back_pointer) {
            edges.push(edge.clone());
            current = self.entry(parent);
        }
        edges.reverse();
        edges
    }
}

impl<N> Default for Frontier<N> {
    fn default() -> Self {
        Self::new()
    }
}
