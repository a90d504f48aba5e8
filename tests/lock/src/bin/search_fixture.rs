//! Binary that runs a fixed set of searches and prints deterministic
//! output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: `<scenario>.<field>=<value>` lines, then `batch_digest=`.

use std::fmt;

use lock_tests::graph_fixtures::{cat_dog_ladder, four_cycle, open_grid_3x3};
use pathfind_harness::graphs::NPuzzle;
use pathfind_harness::runner::batch_digest;
use pathfind_kernel::canon::f64_bits_hex;
use pathfind_kernel::point::Point;
use pathfind_search::{DirectedGraph, PathFinder, SearchPolicy, SearchResult};

const SEED: u64 = 42;

fn print_result<N: fmt::Display>(name: &str, result: &SearchResult<N>) {
    let digest = result.digest().expect("report is canonical");
    let cost = result.cost().map_or_else(|| "none".to_string(), f64_bits_hex);
    let edges = result.path().map_or(0, <[_]>::len);
    println!("{name}.digest={}", digest.as_str());
    println!("{name}.termination_reason={}", result.termination().as_str());
    println!("{name}.cost_bits={cost}");
    println!("{name}.edges={edges}");
    println!("{name}.expansions={}", result.stats().expansions);
}

fn main() {
    let policy = SearchPolicy::seeded(SEED);

    let cycle = four_cycle();
    let finder = PathFinder::with_policy(&cycle, policy.clone()).expect("valid policy");
    let node = |s: &str| cycle.parse_node(s).expect("node parses");
    let cycle_results = vec![
        finder.search_ucs(node("A"), node("D")),
        finder.search_astar(node("A"), node("D")),
        finder.search_ucs(node("A"), node("E")),
        finder.search_random(node("A"), node("C")),
    ];
    for (name, result) in ["cycle_ucs", "cycle_astar", "cycle_unreachable", "cycle_random"]
        .iter()
        .zip(&cycle_results)
    {
        print_result(name, result);
    }

    let grid = open_grid_3x3();
    let finder = PathFinder::with_policy(&grid, policy.clone()).expect("valid policy");
    print_result(
        "grid_astar",
        &finder.search_astar(Point::new(0, 0), Point::new(2, 2)),
    );

    let ladder = cat_dog_ladder();
    let finder = PathFinder::with_policy(&ladder, policy.clone()).expect("valid policy");
    print_result(
        "ladder_ucs",
        &finder.search_ucs("cat".to_string(), "dog".to_string()),
    );

    let puzzle = NPuzzle::new(3).expect("3 is a supported size");
    let finder = PathFinder::with_policy(&puzzle, policy).expect("valid policy");
    let start = puzzle.parse_node("/ABC/D_F/GEH/").expect("state parses");
    print_result(
        "npuzzle_astar",
        &finder.search_astar(start, puzzle.goal_state()),
    );

    let batch = batch_digest(&cycle_results).expect("reports are canonical");
    println!("batch_digest={}", batch.as_str());
}
