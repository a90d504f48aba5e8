//! Example outgoing edges for graph summaries.

use rand::seq::SliceRandom;
use rand::Rng;

use pathfind_search::{DirectedGraph, NodeSet};

/// Number of example nodes a summary shows.
pub const SAMPLE_SIZE: usize = 8;

/// One line per node: `"n ---> t1, t2"` or `"n with no outgoing edges"`.
///
/// Targets use [`pathfind_kernel::edge::DirectedEdge::target_string`], so
/// weights appear only when they differ from 1. At most `limit` lines are
/// produced.
pub fn describe_outgoing<G: DirectedGraph>(
    graph: &G,
    sample: impl IntoIterator<Item = G::Node>,
    limit: usize,
) -> Vec<String> {
    sample
        .into_iter()
        .take(limit)
        .map(|node| describe_node(graph, &node))
        .collect()
}

#[must_use]
pub fn describe_node<G: DirectedGraph>(graph: &G, node: &G::Node) -> String {
    let edges = graph.outgoing_edges(node);
    if edges.is_empty() {
        return format!("{node} with no outgoing edges");
    }
    let targets: Vec<String> = edges
        .iter()
        .map(|e| e.target_string(!e.is_unit()))
        .collect();
    format!("{node} ---> {}", targets.join(", "))
}

/// Draw `count` nodes (with replacement) from a finite graph.
///
/// Candidates are ordered by their display form before drawing, so a seeded
/// `rng` picks the same nodes on every run. Unbounded and empty graphs yield
/// nothing.
pub fn sample_nodes<G: DirectedGraph, R: Rng + ?Sized>(
    graph: &G,
    rng: &mut R,
    count: usize,
) -> Vec<G::Node> {
    let NodeSet::Finite(nodes) = graph.nodes() else {
        return Vec::new();
    };
    let mut nodes: Vec<G::Node> = nodes.into_iter().collect();
    nodes.sort_by_cached_key(ToString::to_string);
    (0..count)
        .filter_map(|_| nodes.choose(rng).cloned())
        .collect()
}
