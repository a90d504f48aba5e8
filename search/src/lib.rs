//! Pathfind Search: uniform-cost, A* and random-walk search over any graph
//! that implements [`DirectedGraph`].
//!
//! This crate depends only on `pathfind_kernel`. It does NOT depend on
//! `pathfind_harness`; concrete graphs plug in through the contract trait.
//!
//! # Crate dependency graph
//!
//! ```text
//! pathfind_kernel  ←  pathfind_search  ←  pathfind_harness
//! (edges, hashing)    (engine, result)    (graphs, runner, CLI)
//! ```
//!
//! # Key types
//!
//! - [`DirectedGraph`] -- what a graph must provide to be searched
//! - [`PathFinder`] -- dispatches to an [`Algorithm`] and times the run
//! - [`Frontier`] -- entry arena plus min-heap with FIFO tie-breaking
//! - [`SearchResult`] -- cost, path, statistics, report and digest
//! - [`SearchPolicy`] -- random-walk step cap and seed

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithm;
pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod result;
pub mod search;

pub use algorithm::Algorithm;
pub use contract::{DirectedGraph, NodeSet};
pub use error::{GraphError, ParseNodeError, SearchError};
pub use frontier::Frontier;
pub use policy::SearchPolicy;
pub use result::{SearchResult, SearchStats, TerminationReason};
pub use search::PathFinder;
