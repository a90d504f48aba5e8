//! Batch runner: load a graph, validate query nodes, search, render.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig → load graph (by GraphKind)
//!   → no queries: graph summary
//!   → per query: parse_node → membership check → PathFinder::search_with → render
//! ```
//!
//! Node membership is checked here, at the boundary. The engine assumes both
//! endpoints belong to the graph.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use pathfind_kernel::canon::{canonical_json_bytes, CanonError};
use pathfind_kernel::hash::{canonical_hash, ContentHash, HashDomain};
use pathfind_kernel::point::Point;
use pathfind_search::{
    Algorithm, DirectedGraph, GraphError, NodeSet, PathFinder, SearchError, SearchPolicy,
    SearchResult,
};

use crate::config::{ConfigError, GraphKind, Query, RunConfig};
use crate::graphs::{AdjacencyGraph, GraphLoadError, GridGraph, NPuzzle, WordLadder};

/// Grids at least this wide or tall are not drawn after a result.
pub const MAX_DRAWN_GRID: usize = 250;

/// Typed failure for a runner invocation.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] GraphLoadError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("node {node} does not belong to the graph")]
    NotAMember { node: String },
}

/// Parse `text` as a node of `graph` and check that it is in `nodes`.
///
/// # Errors
///
/// Returns [`RunError::Graph`] if `text` does not parse and
/// [`RunError::NotAMember`] if the parsed node is not in `nodes`.
pub fn resolve_node<G: DirectedGraph>(
    graph: &G,
    nodes: &NodeSet<G::Node>,
    text: &str,
) -> Result<G::Node, RunError> {
    let node = graph.parse_node(text).map_err(GraphError::from)?;
    if !nodes.contains(&node) {
        return Err(RunError::NotAMember {
            node: node.to_string(),
        });
    }
    Ok(node)
}

/// Run every query against `graph`, in order.
///
/// The node set is materialized once and shared by all queries.
///
/// # Errors
///
/// Returns [`RunError::Search`] if `policy` is invalid, and the errors of
/// [`resolve_node`] for the first query with a bad endpoint.
pub fn run_queries<G: DirectedGraph>(
    graph: &G,
    algorithm: Algorithm,
    queries: &[Query],
    policy: &SearchPolicy,
) -> Result<Vec<SearchResult<G::Node>>, RunError> {
    let finder = PathFinder::with_policy(graph, policy.clone())?;
    let nodes = graph.nodes();
    queries
        .iter()
        .map(|query| {
            let start = resolve_node(graph, &nodes, &query.start)?;
            let goal = resolve_node(graph, &nodes, &query.goal)?;
            info!(
                graph = graph.graph_id(),
                algorithm = algorithm.as_str(),
                start = %start,
                goal = %goal,
                "running query"
            );
            Ok(finder.search_with(algorithm, start, goal))
        })
        .collect()
}

/// Load the configured graph and return one rendered block per query, or
/// the graph summary when there are no queries.
///
/// # Errors
///
/// Returns [`RunError::Load`] if the graph cannot be built, and the errors
/// of [`run_queries`] otherwise.
pub fn run(config: &RunConfig) -> Result<Vec<String>, RunError> {
    config.validate()?;
    info!(
        graph_kind = config.graph_kind.as_str(),
        source = %config.source,
        queries = config.queries.len(),
        "loading graph"
    );
    let mut rng = summary_rng(&config.policy);

    match config.graph_kind {
        GraphKind::AdjacencyGraph => {
            let graph = AdjacencyGraph::from_file(&config.source)?;
            if config.queries.is_empty() {
                return Ok(vec![graph.summary(&mut rng)]);
            }
            render_all(&graph, config, |r| r.render(true))
        }
        GraphKind::WordLadder => {
            let graph = WordLadder::from_file(&config.source)?;
            if config.queries.is_empty() {
                return Ok(vec![graph.summary(&mut rng)]);
            }
            render_all(&graph, config, |r| r.render(false))
        }
        GraphKind::NPuzzle => {
            let graph = NPuzzle::from_arg(&config.source)?;
            if config.queries.is_empty() {
                return Ok(vec![graph.summary(&mut rng)]);
            }
            render_all(&graph, config, |r| r.render(false))
        }
        GraphKind::GridGraph | GraphKind::GridGraphNoGrid => {
            let graph = GridGraph::from_file(&config.source)?;
            if config.queries.is_empty() {
                return Ok(vec![graph.summary(&mut rng)]);
            }
            let draw = config.graph_kind == GraphKind::GridGraph;
            render_all(&graph, config, |r| render_on_grid(&graph, r, draw))
        }
    }
}

fn render_all<G: DirectedGraph>(
    graph: &G,
    config: &RunConfig,
    render: impl Fn(&SearchResult<G::Node>) -> String,
) -> Result<Vec<String>, RunError> {
    let results = run_queries(graph, config.algorithm, &config.queries, &config.policy)?;
    Ok(results.iter().map(render).collect())
}

/// The result, followed by the map with the path drawn in when `draw` is
/// set, the search succeeded and the map is small enough.
#[must_use]
pub fn render_on_grid(
    graph: &GridGraph,
    result: &SearchResult<Point>,
    draw: bool,
) -> String {
    let mut text = result.render(false);
    let small = graph.width() < MAX_DRAWN_GRID && graph.height() < MAX_DRAWN_GRID;
    if draw && small {
        if let Some(nodes) = result.path_nodes() {
            text.push_str(&graph.show_grid(&nodes));
        }
    }
    text
}

/// One digest over a batch of results, in order.
///
/// # Errors
///
/// Returns [`CanonError`] if a report cannot be encoded canonically.
pub fn batch_digest<N: fmt::Display>(results: &[SearchResult<N>]) -> Result<ContentHash, CanonError> {
    let reports: Vec<serde_json::Value> = results.iter().map(SearchResult::to_json_value).collect();
    let bytes = canonical_json_bytes(&serde_json::Value::Array(reports))?;
    Ok(canonical_hash(HashDomain::ReportBatch, &bytes))
}

fn summary_rng(policy: &SearchPolicy) -> StdRng {
    match policy.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
