//! Graph contract trait.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use pathfind_kernel::edge::DirectedEdge;

use crate::error::{GraphError, ParseNodeError};

/// The node set of a graph, or a marker that it is too large to list.
///
/// Implicit graphs (puzzle state spaces, open-ended lattices) return
/// [`NodeSet::Unbounded`]. Every well-formed node counts as a member of an
/// unbounded set; only [`NodeSet::into_finite`] fails on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSet<N: Eq + Hash> {
    Finite(HashSet<N>),
    Unbounded,
}

impl<N: Eq + Hash> NodeSet<N> {
    /// Membership test used for boundary validation.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        match self {
            Self::Finite(nodes) => nodes.contains(node),
            Self::Unbounded => true,
        }
    }

    /// Number of nodes, or `None` when unbounded.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Finite(nodes) => Some(nodes.len()),
            Self::Unbounded => None,
        }
    }

    /// Whether the set is finite and empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Materialize the set.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Unenumerable`] for an unbounded set.
    pub fn into_finite(self, graph_id: &str) -> Result<HashSet<N>, GraphError> {
        match self {
            Self::Finite(nodes) => Ok(nodes),
            Self::Unbounded => Err(GraphError::Unenumerable {
                graph: graph_id.to_string(),
            }),
        }
    }
}

/// Trait for graphs that can be searched.
///
/// # Contract
///
/// - `outgoing_edges` must be deterministic for a fixed graph and must not
///   block on I/O. It may recompute edges on every call. Its behaviour for a
///   node outside the graph's node space is unspecified; callers validate
///   nodes at the boundary with [`DirectedGraph::nodes`].
/// - `guess_cost` must never overestimate the cheapest path cost from
///   `from` to `to` if A* is expected to return optimal paths. The default
///   of `0.0` is always admissible and turns A* into uniform-cost search.
/// - `parse_node` depends only on the encoding, not on which nodes this
///   particular graph instance contains.
pub trait DirectedGraph {
    type Node: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// Short identifier used in logs and errors (e.g. `"grid"`).
    fn graph_id(&self) -> &str;

    /// All nodes of the graph, or [`NodeSet::Unbounded`].
    fn nodes(&self) -> NodeSet<Self::Node>;

    /// The edges leaving `node`.
    fn outgoing_edges(&self, node: &Self::Node) -> Vec<DirectedEdge<Self::Node>>;

    /// Estimated cost of the cheapest path from `from` to `to`.
    fn guess_cost(&self, _from: &Self::Node, _to: &Self::Node) -> f64 {
        0.0
    }

    /// Parse a node from its textual form.
    ///
    /// # Errors
    ///
    /// Returns [`ParseNodeError`] when `text` is not a valid encoding.
    fn parse_node(&self, text: &str) -> Result<Self::Node, ParseNodeError>;

    /// Number of nodes. May be expensive.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Unenumerable`] for unbounded graphs.
    fn num_nodes(&self) -> Result<usize, GraphError> {
        self.nodes().len().ok_or_else(|| GraphError::Unenumerable {
            graph: self.graph_id().to_string(),
        })
    }

    /// Number of edges. Expands every node once, so it is expensive.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Unenumerable`] for unbounded graphs.
    fn num_edges(&self) -> Result<usize, GraphError> {
        let nodes = self.nodes().into_finite(self.graph_id())?;
        Ok(nodes.iter().map(|n| self.outgoing_edges(n).len()).sum())
    }
}
