//! Search results: outcome, path, diagnostics and their renderings.
//!
//! A [`SearchResult`] is immutable once the engine builds it. Its iteration
//! count and elapsed time are diagnostics only. The JSON report leaves the
//! elapsed time out and stores costs as IEEE-754 bit patterns, so equal
//! searches produce equal digests on every platform.

use std::fmt;
use std::time::Duration;

use pathfind_kernel::edge::DirectedEdge;
use pathfind_kernel::canon::{canonical_json_bytes, f64_bits_hex, CanonError};
use pathfind_kernel::hash::{canonical_hash, ContentHash, HashDomain};
use pathfind_kernel::weight::format_weight;

use crate::algorithm::Algorithm;

/// Paths with more edges than this are abbreviated in [`SearchResult::render`].
const FULL_PATH_LIMIT: usize = 10;

/// Edges shown at each end of an abbreviated path.
const ABBREVIATED_EDGES: usize = 5;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The goal was finalized (or reached, for the random walk).
    GoalReached,
    /// The frontier ran empty. For UCS and A* this proves unreachability.
    FrontierExhausted,
    /// The random walk hit a node without outgoing edges.
    DeadEnd,
    /// The random walk used up its step budget.
    StepBudgetExhausted,
}

impl TerminationReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DeadEnd => "dead_end",
            Self::StepBudgetExhausted => "step_budget_exhausted",
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frontier pops (or random-walk steps), including the first.
    pub iterations: u64,
    /// Calls to `outgoing_edges`.
    pub expansions: u64,
    /// Edges returned by those calls.
    pub edges_generated: u64,
    /// Pops discarded because the node was already visited.
    pub stale_pops: u64,
    /// Largest frontier size observed (0 for the random walk).
    pub frontier_high_water: u64,
}

/// What an algorithm hands back to the engine before timing is attached.
#[derive(Debug)]
pub(crate) struct SearchOutcome<N> {
    pub(crate) termination: TerminationReason,
    pub(crate) found: Option<(f64, Vec<DirectedEdge<N>>)>,
    pub(crate) stats: SearchStats,
}

impl<N> SearchOutcome<N> {
    pub(crate) fn found(cost: f64, path: Vec<DirectedEdge<N>>, stats: SearchStats) -> Self {
        Self {
            termination: TerminationReason::GoalReached,
            found: Some((cost, path)),
            stats,
        }
    }

    pub(crate) fn not_found(termination: TerminationReason, stats: SearchStats) -> Self {
        Self {
            termination,
            found: None,
            stats,
        }
    }
}

/// The result of one `search` call.
#[derive(Debug, Clone)]
pub struct SearchResult<N> {
    algorithm: Algorithm,
    start: N,
    goal: N,
    cost: Option<f64>,
    path: Option<Vec<DirectedEdge<N>>>,
    termination: TerminationReason,
    stats: SearchStats,
    elapsed: Duration,
}

impl<N> SearchResult<N> {
    pub(crate) fn new(
        algorithm: Algorithm,
        start: N,
        goal: N,
        outcome: SearchOutcome<N>,
        elapsed: Duration,
    ) -> Self {
        let (cost, path) = match outcome.found {
            Some((cost, path)) => (Some(cost), Some(path)),
            None => (None, None),
        };
        Self {
            algorithm,
            start,
            goal,
            cost,
            path,
            termination: outcome.termination,
            stats: outcome.stats,
            elapsed,
        }
    }

    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[must_use]
    pub fn start(&self) -> &N {
        &self.start
    }

    #[must_use]
    pub fn goal(&self) -> &N {
        &self.goal
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.termination == TerminationReason::GoalReached
    }

    /// Total path cost; `None` when no path was found.
    #[must_use]
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    /// The edges from start to goal; `None` when no path was found.
    #[must_use]
    pub fn path(&self) -> Option<&[DirectedEdge<N>]> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.stats.iterations
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Whether a failure here proves the goal is unreachable.
    #[must_use]
    pub fn is_conclusive(&self) -> bool {
        self.is_success() || self.algorithm.is_exhaustive()
    }

    /// The path's weights summed left to right, the same order in which the
    /// search accumulated them.
    #[must_use]
    pub fn resummed_cost(&self) -> Option<f64> {
        self.path
            .as_ref()
            .map(|path| path.iter().fold(0.0, |acc, e| acc + e.weight()))
    }

    /// `(reported, actual)` if the reported cost differs from the re-summed
    /// path cost. Any mismatch is an engine defect.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn cost_mismatch(&self) -> Option<(f64, f64)> {
        let reported = self.cost?;
        let actual = self.resummed_cost()?;
        (reported != actual).then_some((reported, actual))
    }
}

impl<N: Clone> SearchResult<N> {
    /// The start node followed by the target of every path edge.
    #[must_use]
    pub fn path_nodes(&self) -> Option<Vec<N>> {
        let path = self.path.as_ref()?;
        let mut nodes = Vec::with_capacity(path.len() + 1);
        nodes.push(self.start.clone());
        nodes.extend(path.iter().map(|e| e.to().clone()));
        Some(nodes)
    }
}

impl<N: fmt::Display> SearchResult<N> {
    /// Multi-line human-readable report.
    ///
    /// With `with_weight` every path edge shows its weight. Paths longer than
    /// ten edges show only their first and last five edges.
    #[must_use]
    pub fn render(&self, with_weight: bool) -> String {
        let mut lines = Vec::new();
        if self.stats.iterations == 0 {
            lines.push("ERROR: the search did not iterate over the starting node".to_string());
        }
        lines.push(format!("Loop iterations: {}", self.stats.iterations));
        lines.push(format!("Elapsed time: {:.3}s", self.elapsed.as_secs_f64()));

        match (self.cost, &self.path) {
            (Some(cost), Some(path)) => {
                lines.push(format!(
                    "Cost of path from {} to {}: {}",
                    self.start,
                    self.goal,
                    format_weight(cost)
                ));
                lines.push(format!("Number of edges: {}", path.len()));
                lines.push(render_path(&self.start, path, with_weight));
                if let Some((reported, actual)) = self.cost_mismatch() {
                    lines.push(format!(
                        "WARNING: the actual path cost {actual} differs from the reported cost {reported}"
                    ));
                }
            }
            _ => lines.push(format!("No path found from {} to {}", self.start, self.goal)),
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Deterministic JSON report. Elapsed time is left out; `cost` and edge
    /// weights are hex bit patterns.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.algorithm.as_str(),
            "cost": self.cost.map(f64_bits_hex),
            "goal": self.goal.to_string(),
            "path": self
                .path
                .as_ref()
                .map(|path| path.iter().map(edge_to_json).collect::<Vec<_>>()),
            "start": self.start.to_string(),
            "stats": stats_to_json(&self.stats),
            "success": self.is_success(),
            "termination_reason": self.termination.as_str(),
        })
    }

    /// Canonical bytes of [`SearchResult::to_json_value`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the report contains a non-integer number.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical report.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the report contains a non-integer number.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchReport, &bytes))
    }
}

impl<N: fmt::Display> fmt::Display for SearchResult<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// `start -> a -> b`, or `s -> a -> … -> ..... -> y -> z` for long paths.
fn render_path<N: fmt::Display>(start: &N, path: &[DirectedEdge<N>], with_weight: bool) -> String {
    let leading = |edges: &[DirectedEdge<N>]| -> String {
        edges
            .iter()
            .map(|e| e.format(with_weight, true, false))
            .collect()
    };
    let trailing = |edges: &[DirectedEdge<N>]| -> String {
        edges
            .iter()
            .map(|e| e.format(with_weight, false, true))
            .collect()
    };

    if path.len() <= FULL_PATH_LIMIT {
        format!("{start}{}", trailing(path))
    } else {
        format!(
            "{}.....{}",
            leading(&path[..ABBREVIATED_EDGES]),
            trailing(&path[path.len() - ABBREVIATED_EDGES..])
        )
    }
}

fn edge_to_json<N: fmt::Display>(e: &DirectedEdge<N>) -> serde_json::Value {
    serde_json::json!({
        "from": e.from().to_string(),
        "to": e.to().to_string(),
        "weight": f64_bits_hex(e.weight()),
    })
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "edges_generated": s.edges_generated,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "iterations": s.iterations,
        "stale_pops": s.stale_pops,
    })
}
