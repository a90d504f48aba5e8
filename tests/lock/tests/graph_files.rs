//! Graph files loaded from disk and driven through the command-line
//! configuration.
//!
//! Proves:
//! 1. Every graph kind loads from its on-disk form and answers queries
//! 2. Load failures name the file or line that caused them
//! 3. A run without queries describes the graph instead

use std::io::Write;

use pathfind_harness::config::{ConfigError, RunConfig};
use pathfind_harness::graphs::{AdjacencyGraph, GraphLoadError};
use pathfind_harness::runner::{run, RunError};
use pathfind_search::SearchPolicy;

const ROADS: &str = "\
# from\tto\tweight
Vara\tSkara\t30
Skara\tLidkoping\t25.5
Vara\tLidkoping\t60
Lidkoping\tGrastorp
";

const MAZE: &str = "\
type octile
height 4
width 5
map
.....
@@@@.
.....
.@@@@
";

fn temp_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_args(args: &[&str]) -> Result<Vec<String>, RunError> {
    let mut config = RunConfig::from_args(args.iter().copied())?;
    config.policy = SearchPolicy::seeded(5);
    run(&config)
}

// ---------------------------------------------------------------------------
// 1. Queries per graph kind
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GRAPH-FILES-ADJACENCY
#[test]
fn adjacency_file_shows_weighted_path() {
    let file = temp_file(ROADS);
    let source = file.path().to_str().unwrap();
    let out = run_args(&["ucs", "AdjacencyGraph", source, "Vara", "Grastorp"]).unwrap();

    assert_eq!(out.len(), 1);
    let lines: Vec<&str> = out[0].lines().collect();
    assert_eq!(lines[0], "Loop iterations: 4");
    assert_eq!(lines[2], "Cost of path from Vara to Grastorp: 56.5");
    assert_eq!(lines[3], "Number of edges: 3");
    assert_eq!(lines[4], "Vara --[30]-> Skara --[25.5]-> Lidkoping --[1]-> Grastorp");
}

/// ACCEPTANCE: GRAPH-FILES-GRID
#[test]
fn grid_file_draws_the_maze_path() {
    let file = temp_file(MAZE);
    let source = file.path().to_str().unwrap();
    let out = run_args(&["astar", "GridGraph", source, "0:0", "0:3"]).unwrap();

    assert!(out[0].contains("Number of edges: 8"), "{}", out[0]);
    assert!(
        out[0].ends_with("****.\n@@@@*\n.***.\n*@@@@\n"),
        "{}",
        out[0]
    );

    let out = run_args(&["astar", "GridGraph-NoGrid", source, "0:0", "0:3"]).unwrap();
    assert!(!out[0].contains('@'));
}

/// ACCEPTANCE: GRAPH-FILES-WORD-LADDER
#[test]
fn word_ladder_file_runs_several_queries() {
    let file = temp_file("# words\ncold\ncord\ncard\nward\nwarm\nworm\nword\n");
    let source = file.path().to_str().unwrap();
    let out = run_args(&["astar", "WordLadder", source, "cold", "warm", "WARM", "worm"]).unwrap();

    assert_eq!(out.len(), 2);
    assert!(out[0].contains("Cost of path from cold to warm: 4"), "{}", out[0]);
    assert!(out[1].contains("warm -> worm"), "{}", out[1]);
}

/// ACCEPTANCE: GRAPH-FILES-NPUZZLE
#[test]
fn npuzzle_needs_no_file() {
    let out = run_args(&["astar", "npuzzle", "3", "/ABC/DEF/G_H/", "/ABC/DEF/GH_/"]).unwrap();
    assert!(out[0].contains("Cost of path from /ABC/DEF/G_H/ to /ABC/DEF/GH_/: 1"));
}

// ---------------------------------------------------------------------------
// 2. Load failures
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GRAPH-FILES-ERRORS
#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere.txt");
    let err = AdjacencyGraph::from_file(&missing).unwrap_err();
    assert!(matches!(err, GraphLoadError::Open { .. }));
    assert!(err.to_string().contains("nowhere.txt"), "{err}");
}

/// ACCEPTANCE: GRAPH-FILES-ERRORS
#[test]
fn bad_lines_are_reported_by_number() {
    let file = temp_file("a\tb\t1\nb\tc\t-2\n");
    let err = AdjacencyGraph::from_file(file.path()).unwrap_err();
    assert!(matches!(err, GraphLoadError::Edge { line: 2, .. }), "{err}");

    let file = temp_file("a\tb\tfar\n");
    let err = AdjacencyGraph::from_file(file.path()).unwrap_err();
    assert!(matches!(err, GraphLoadError::MalformedLine { line: 1, .. }), "{err}");
}

/// ACCEPTANCE: GRAPH-FILES-ERRORS
#[test]
fn unknown_nodes_and_graph_types_fail_cleanly() {
    let file = temp_file(ROADS);
    let source = file.path().to_str().unwrap();
    let err = run_args(&["ucs", "AdjacencyGraph", source, "Vara", "Oslo"]).unwrap_err();
    assert_eq!(err.to_string(), "node Oslo does not belong to the graph");

    let err = RunConfig::from_args(["ucs", "Hypercube", source]).unwrap_err();
    assert_eq!(err, ConfigError::UnknownGraphType { name: "Hypercube".into() });
}

// ---------------------------------------------------------------------------
// 3. Summaries
// ---------------------------------------------------------------------------

/// ACCEPTANCE: GRAPH-FILES-SUMMARY
#[test]
fn no_queries_describes_the_graph() {
    let file = temp_file(ROADS);
    let source = file.path().to_str().unwrap();
    let out = run_args(&["ucs", "AdjacencyGraph", source]).unwrap();
    assert_eq!(out.len(), 1);
    let lines: Vec<&str> = out[0].lines().collect();
    assert_eq!(lines[0], "Adjacency graph with 4 nodes and 4 edges");
    assert_eq!(lines[2], "Random example nodes with outgoing edges:");
    assert_eq!(lines.len(), 3 + 8);

    let out = run_args(&["random", "NPuzzle", "3"]).unwrap();
    assert!(out[0].contains("/ABC/DEF/GH_/"), "{}", out[0]);
}
