//! Search entry point and the two search loops.

use std::collections::HashSet;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, debug_span, trace, warn};

use crate::algorithm::Algorithm;
use crate::contract::DirectedGraph;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::policy::SearchPolicy;
use crate::result::{SearchOutcome, SearchResult, SearchStats, TerminationReason};

/// Searches one graph. Holds no per-search state, so a single `PathFinder`
/// can serve any number of `search` calls.
#[derive(Debug, Clone)]
pub struct PathFinder<'g, G> {
    graph: &'g G,
    policy: SearchPolicy,
}

impl<'g, G: DirectedGraph> PathFinder<'g, G> {
    /// A finder with the default policy.
    #[must_use]
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            policy: SearchPolicy::default(),
        }
    }

    /// A finder with a custom policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn with_policy(graph: &'g G, policy: SearchPolicy) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self { graph, policy })
    }

    #[must_use]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    /// Run the algorithm named by `algorithm` (case-insensitive).
    ///
    /// Not finding a path is not an error: the result reports it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownAlgorithm`] before any search work if
    /// the name is not `random`, `ucs` or `astar`.
    pub fn search(
        &self,
        algorithm: &str,
        start: G::Node,
        goal: G::Node,
    ) -> Result<SearchResult<G::Node>, SearchError> {
        let algorithm: Algorithm = algorithm.parse()?;
        Ok(self.search_with(algorithm, start, goal))
    }

    /// Run `algorithm` from `start` to `goal` and time it.
    ///
    /// Both nodes are assumed to belong to the graph; boundary validation is
    /// the caller's job.
    pub fn search_with(
        &self,
        algorithm: Algorithm,
        start: G::Node,
        goal: G::Node,
    ) -> SearchResult<G::Node> {
        let span = debug_span!(
            "search",
            algorithm = algorithm.as_str(),
            graph = self.graph.graph_id(),
        );
        let _guard = span.enter();

        let started = Instant::now();
        let outcome = match algorithm {
            Algorithm::Random => self.random_walk(&start, &goal),
            Algorithm::Ucs => self.best_first(&start, &goal, false),
            Algorithm::AStar => self.best_first(&start, &goal, true),
        };
        let elapsed = started.elapsed();

        debug!(
            start = %start,
            goal = %goal,
            termination = outcome.termination.as_str(),
            iterations = outcome.stats.iterations,
            expansions = outcome.stats.expansions,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "search finished"
        );

        let result = SearchResult::new(algorithm, start, goal, outcome, elapsed);
        if let Some((reported, actual)) = result.cost_mismatch() {
            warn!(reported, actual, "path cost differs from the cost recorded while searching");
        }
        result
    }

    pub fn search_random(&self, start: G::Node, goal: G::Node) -> SearchResult<G::Node> {
        self.search_with(Algorithm::Random, start, goal)
    }

    pub fn search_ucs(&self, start: G::Node, goal: G::Node) -> SearchResult<G::Node> {
        self.search_with(Algorithm::Ucs, start, goal)
    }

    pub fn search_astar(&self, start: G::Node, goal: G::Node) -> SearchResult<G::Node> {
        self.search_with(Algorithm::AStar, start, goal)
    }

    /// Follow uniformly random outgoing edges until the goal shows up.
    ///
    /// Each step counts one iteration, the goal check included, so reaching
    /// the goal after `k` moves takes `k + 1` iterations.
    fn random_walk(&self, start: &G::Node, goal: &G::Node) -> SearchOutcome<G::Node> {
        let mut rng = match self.policy.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut stats = SearchStats::default();
        let mut current = start.clone();
        let mut cost = 0.0;
        let mut path = Vec::new();

        while stats.iterations < self.policy.max_random_steps {
            stats.iterations += 1;
            if current == *goal {
                return SearchOutcome::found(cost, path, stats);
            }

            let mut edges = self.graph.outgoing_edges(&current);
            stats.expansions += 1;
            stats.edges_generated += edges.len() as u64;
            if edges.is_empty() {
                trace!(node = %current, "random walk reached a dead end");
                return SearchOutcome::not_found(TerminationReason::DeadEnd, stats);
            }

            let edge = edges.swap_remove(rng.gen_range(0..edges.len()));
            cost += edge.weight();
            current = edge.to().clone();
            path.push(edge);
        }

        SearchOutcome::not_found(TerminationReason::StepBudgetExhausted, stats)
    }

    /// Uniform-cost search, or A* when `use_heuristic` is set.
    ///
    /// A node is finalized the first time it is popped; later pops of the
    /// same node are stale and discarded. The goal is reported when it is
    /// popped, not when it is first pushed.
    fn best_first(
        &self,
        start: &G::Node,
        goal: &G::Node,
        use_heuristic: bool,
    ) -> SearchOutcome<G::Node> {
        let estimate = |node: &G::Node| {
            if use_heuristic {
                self.graph.guess_cost(node, goal)
            } else {
                0.0
            }
        };

        let mut frontier = Frontier::new();
        let mut visited: HashSet<G::Node> = HashSet::new();
        let mut stats = SearchStats::default();

        frontier.push_root(start.clone(), estimate(start));

        while let Some((id, key)) = frontier.pop() {
            stats.iterations += 1;
            let entry = frontier.entry(id);
            if visited.contains(&entry.node) {
                stats.stale_pops += 1;
                continue;
            }

            if entry.node == *goal {
                let cost = entry.cost_to_here;
                let path = frontier.extract_path(id);
                stats.frontier_high_water = frontier.high_water();
                return SearchOutcome::found(cost, path, stats);
            }

            let node = entry.node.clone();
            let edges = self.graph.outgoing_edges(&node);
            stats.expansions += 1;
            stats.edges_generated += edges.len() as u64;
            trace!(
                node = %node,
                cost = entry.cost_to_here,
                priority = key.priority,
                edges = edges.len(),
                "expand"
            );
            visited.insert(node);

            // Successors are pushed even if already finalized; the visited
            // check happens only at pop.
            for edge in edges {
                let h = estimate(edge.to());
                frontier.push_child(id, edge, h);
            }
        }

        stats.frontier_high_water = frontier.high_water();
        SearchOutcome::not_found(TerminationReason::FrontierExhausted, stats)
    }
}
