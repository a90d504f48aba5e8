//! Small graphs and oracles used across the lock tests.
//!
//! Everything here panics on misuse; these are test-only invariants.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use pathfind_harness::graphs::{AdjacencyGraph, GridGraph, WordLadder};
use pathfind_kernel::edge::DirectedEdge;
use pathfind_search::{DirectedGraph, NodeSet, ParseNodeError};

/// An explicit graph over `0..node_count` with an optional heuristic table.
#[derive(Debug, Clone, Default)]
pub struct ExplicitGraph {
    adjacency: BTreeMap<u32, Vec<DirectedEdge<u32>>>,
    heuristic: HashMap<u32, f64>,
}

impl ExplicitGraph {
    /// # Panics
    ///
    /// Panics if an edge weight is negative or NaN, or an endpoint is not
    /// below `node_count`.
    #[must_use]
    pub fn from_edges(node_count: u32, edges: &[(u32, u32, f64)]) -> Self {
        let mut adjacency: BTreeMap<u32, Vec<DirectedEdge<u32>>> =
            (0..node_count).map(|n| (n, Vec::new())).collect();
        for &(from, to, weight) in edges {
            assert!(from < node_count && to < node_count, "edge {from}->{to} out of range");
            let edge = DirectedEdge::new(from, to, weight).expect("fixture weights are valid");
            adjacency.entry(from).or_default().push(edge);
        }
        Self {
            adjacency,
            heuristic: HashMap::new(),
        }
    }

    /// Use `scale * d(n, goal)` as the heuristic, where `d` is the exact
    /// remaining cost. With `scale <= 1` the heuristic is consistent.
    #[must_use]
    pub fn with_scaled_exact_heuristic(mut self, goal: u32, scale: f64) -> Self {
        self.heuristic = self
            .distances_to(goal)
            .into_iter()
            .map(|(n, d)| (n, d * scale))
            .collect();
        self
    }

    /// Exact cheapest cost from every node that can reach `goal`
    /// (Bellman-Ford on the reversed graph).
    #[must_use]
    pub fn distances_to(&self, goal: u32) -> HashMap<u32, f64> {
        let mut dist: HashMap<u32, f64> = HashMap::from([(goal, 0.0)]);
        for _ in 0..self.adjacency.len() {
            let mut changed = false;
            for edges in self.adjacency.values() {
                for e in edges {
                    let Some(&via) = dist.get(e.to()) else {
                        continue;
                    };
                    let candidate = e.weight() + via;
                    let current = dist.get(e.from()).copied().unwrap_or(f64::INFINITY);
                    if candidate < current {
                        dist.insert(*e.from(), candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        dist
    }
}

impl DirectedGraph for ExplicitGraph {
    type Node = u32;

    #[allow(clippy::unnecessary_literal_bound)]
    fn graph_id(&self) -> &str {
        "explicit"
    }

    fn nodes(&self) -> NodeSet<u32> {
        NodeSet::Finite(self.adjacency.keys().copied().collect())
    }

    fn outgoing_edges(&self, node: &u32) -> Vec<DirectedEdge<u32>> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn guess_cost(&self, from: &u32, _to: &u32) -> f64 {
        self.heuristic.get(from).copied().unwrap_or(0.0)
    }

    fn parse_node(&self, text: &str) -> Result<u32, ParseNodeError> {
        text.trim()
            .parse()
            .map_err(|e| ParseNodeError::new(text, format!("{e}")))
    }
}

/// Wraps a graph and counts `outgoing_edges` calls per node.
#[derive(Debug)]
pub struct CountingGraph<'g, G: DirectedGraph> {
    inner: &'g G,
    calls: RefCell<HashMap<G::Node, usize>>,
}

impl<'g, G: DirectedGraph> CountingGraph<'g, G> {
    #[must_use]
    pub fn new(inner: &'g G) -> Self {
        Self {
            inner,
            calls: RefCell::new(HashMap::new()),
        }
    }

    /// The largest number of times any single node was expanded.
    #[must_use]
    pub fn max_calls_per_node(&self) -> usize {
        self.calls.borrow().values().copied().max().unwrap_or(0)
    }

    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }
}

impl<G: DirectedGraph> DirectedGraph for CountingGraph<'_, G> {
    type Node = G::Node;

    fn graph_id(&self) -> &str {
        self.inner.graph_id()
    }

    fn nodes(&self) -> NodeSet<G::Node> {
        self.inner.nodes()
    }

    fn outgoing_edges(&self, node: &G::Node) -> Vec<DirectedEdge<G::Node>> {
        *self.calls.borrow_mut().entry(node.clone()).or_insert(0) += 1;
        self.inner.outgoing_edges(node)
    }

    fn guess_cost(&self, from: &G::Node, to: &G::Node) -> f64 {
        self.inner.guess_cost(from, to)
    }

    fn parse_node(&self, text: &str) -> Result<G::Node, ParseNodeError> {
        self.inner.parse_node(text)
    }
}

/// Nodes reachable from `start`, found by breadth-first search.
pub fn bfs_reachable<G: DirectedGraph>(graph: &G, start: &G::Node) -> HashSet<G::Node> {
    let mut seen = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start.clone()]);
    while let Some(node) = queue.pop_front() {
        for edge in graph.outgoing_edges(&node) {
            if seen.insert(edge.to().clone()) {
                queue.push_back(edge.to().clone());
            }
        }
    }
    seen
}

/// A→B→C→D→A with unit weights, plus an isolated E.
#[must_use]
pub fn four_cycle() -> AdjacencyGraph {
    let mut g = AdjacencyGraph::new();
    for (from, to) in [("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")] {
        g.add_edge(DirectedEdge::unit(from.to_string(), to.to_string()));
    }
    g.add_node("E");
    g
}

/// A fully passable 3×3 grid.
///
/// # Panics
///
/// Panics if the constant map stops parsing.
#[must_use]
pub fn open_grid_3x3() -> GridGraph {
    "...\n...\n...\n".parse().expect("constant map parses")
}

/// The dictionary `{cat, cot, cog, dog}`.
#[must_use]
pub fn cat_dog_ladder() -> WordLadder {
    let mut g = WordLadder::new();
    for word in ["cat", "cot", "cog", "dog"] {
        g.add_word(word);
    }
    g
}
