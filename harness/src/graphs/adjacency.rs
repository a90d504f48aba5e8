//! `AdjacencyGraph`: an explicit finite graph with string nodes.
//!
//! The text format has one edge per line, `from<TAB>to` (weight 1) or
//! `from<TAB>to<TAB>weight`. Lines starting with `#` and blank lines are
//! skipped.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use rand::Rng;
use tracing::debug;

use pathfind_kernel::edge::DirectedEdge;
use pathfind_search::{DirectedGraph, NodeSet, ParseNodeError};

use super::{open, GraphLoadError};
use crate::describe::{describe_outgoing, sample_nodes, SAMPLE_SIZE};

/// Adjacency-list graph. Edges keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: HashMap<String, Vec<DirectedEdge<String>>>,
}

impl AdjacencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `node` if it is not already present.
    pub fn add_node(&mut self, node: impl Into<String>) {
        self.adjacency.entry(node.into()).or_default();
    }

    /// Add `edge` and both of its endpoints. Parallel edges are kept.
    pub fn add_edge(&mut self, edge: DirectedEdge<String>) {
        self.add_node(edge.to().clone());
        self.adjacency
            .entry(edge.from().clone())
            .or_default()
            .push(edge);
    }

    /// Read edges from `reader`, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::MalformedLine`] for a line without two or
    /// three tab-separated fields or with an unparseable weight,
    /// [`GraphLoadError::Edge`] for a negative or NaN weight, and
    /// [`GraphLoadError::Read`] if reading fails.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, GraphLoadError> {
        let mut graph = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            graph.add_edge(parse_edge_line(&line, number)?);
        }
        debug!(
            nodes = graph.adjacency.len(),
            edges = graph.edge_count(),
            "adjacency graph loaded"
        );
        Ok(graph)
    }

    /// Read edges from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::Open`] if the file cannot be opened, and
    /// the errors of [`AdjacencyGraph::from_reader`] otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GraphLoadError> {
        Self::from_reader(open(path.as_ref())?)
    }

    /// Number of stored edges. Unlike [`DirectedGraph::num_edges`] this
    /// never fails and costs nothing.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Header line plus example nodes with their outgoing edges.
    pub fn summary<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut lines = vec![
            format!(
                "Adjacency graph with {} nodes and {} edges",
                self.adjacency.len(),
                self.edge_count()
            ),
            String::new(),
            "Random example nodes with outgoing edges:".to_string(),
        ];
        let sample = sample_nodes(self, rng, SAMPLE_SIZE);
        lines.extend(describe_outgoing(self, sample, SAMPLE_SIZE));
        lines.join("\n")
    }
}

fn parse_edge_line(line: &str, number: usize) -> Result<DirectedEdge<String>, GraphLoadError> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    let (from, to, weight) = match fields.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => {
            return Err(GraphLoadError::MalformedLine {
                line: number,
                detail: format!("expected 2 or 3 tab-separated fields, found {}", fields.len()),
            })
        }
    };
    if from.is_empty() || to.is_empty() {
        return Err(GraphLoadError::MalformedLine {
            line: number,
            detail: "empty node name".to_string(),
        });
    }

    let Some(weight) = weight else {
        return Ok(DirectedEdge::unit(from.to_string(), to.to_string()));
    };
    let weight: f64 = weight.parse().map_err(|e| GraphLoadError::MalformedLine {
        line: number,
        detail: format!("bad weight {weight:?}: {e}"),
    })?;
    DirectedEdge::new(from.to_string(), to.to_string(), weight)
        .map_err(|source| GraphLoadError::Edge { line: number, source })
}

impl DirectedGraph for AdjacencyGraph {
    type Node = String;

    #[allow(clippy::unnecessary_literal_bound)]
    fn graph_id(&self) -> &str {
        "adjacency"
    }

    fn nodes(&self) -> NodeSet<String> {
        NodeSet::Finite(self.adjacency.keys().cloned().collect())
    }

    /// A node that is not in the graph has no edges.
    fn outgoing_edges(&self, node: &String) -> Vec<DirectedEdge<String>> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn parse_node(&self, text: &str) -> Result<String, ParseNodeError> {
        Ok(text.trim().to_string())
    }

    fn num_edges(&self) -> Result<usize, pathfind_search::GraphError> {
        Ok(self.edge_count())
    }
}
