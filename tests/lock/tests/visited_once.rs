//! Each node is expanded at most once by UCS and A*.
//!
//! Proves:
//! 1. `outgoing_edges` is called at most once per node on every graph kind
//! 2. The expansion count in the stats matches the calls actually made
//! 3. The same holds for random graphs with parallel edges and cycles

use proptest::prelude::*;

use lock_tests::graph_fixtures::{
    cat_dog_ladder, four_cycle, open_grid_3x3, CountingGraph, ExplicitGraph,
};
use pathfind_harness::graphs::NPuzzle;
use pathfind_kernel::point::Point;
use pathfind_search::{Algorithm, DirectedGraph, PathFinder};

const BEST_FIRST: [Algorithm; 2] = [Algorithm::Ucs, Algorithm::AStar];

fn assert_visited_once<G: DirectedGraph>(graph: &G, start: &G::Node, goal: &G::Node) {
    for algorithm in BEST_FIRST {
        let counting = CountingGraph::new(graph);
        let result = PathFinder::new(&counting).search_with(algorithm, start.clone(), goal.clone());
        assert!(
            counting.max_calls_per_node() <= 1,
            "{algorithm} expanded a node twice on {}",
            graph.graph_id()
        );
        assert_eq!(result.stats().expansions, counting.total_calls() as u64);
    }
}

/// ACCEPTANCE: VISITED-ONCE
#[test]
fn adjacency_nodes_expanded_once() {
    let g = four_cycle();
    assert_visited_once(&g, &"A".to_string(), &"D".to_string());
    assert_visited_once(&g, &"A".to_string(), &"E".to_string());
}

/// ACCEPTANCE: VISITED-ONCE
#[test]
fn grid_nodes_expanded_once() {
    let g = open_grid_3x3();
    assert_visited_once(&g, &Point::new(0, 0), &Point::new(2, 2));
    assert_visited_once(&g, &Point::new(1, 1), &Point::new(0, 2));
}

/// ACCEPTANCE: VISITED-ONCE
#[test]
fn word_ladder_nodes_expanded_once() {
    let g = cat_dog_ladder();
    assert_visited_once(&g, &"cat".to_string(), &"dog".to_string());
}

/// ACCEPTANCE: VISITED-ONCE
#[test]
fn npuzzle_states_expanded_once() {
    let p = NPuzzle::new(2).unwrap();
    let start = p.parse_node("/_A/CB/").unwrap();
    assert_visited_once(&p, &start, &p.goal_state());
}

proptest! {
    /// ACCEPTANCE: VISITED-ONCE
    #[test]
    fn random_graph_nodes_expanded_once(
        edges in prop::collection::vec((0u32..6, 0u32..6, 0u8..4), 0..30),
        goal in 0u32..6,
    ) {
        let edges: Vec<(u32, u32, f64)> =
            edges.into_iter().map(|(a, b, w)| (a, b, f64::from(w))).collect();
        let graph = ExplicitGraph::from_edges(6, &edges).with_scaled_exact_heuristic(goal, 1.0);
        assert_visited_once(&graph, &0, &goal);
    }
}
