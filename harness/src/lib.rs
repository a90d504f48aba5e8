//! Pathfind Harness: concrete graphs and the batch front end.
//!
//! The harness loads graphs from files, turns command-line strings into
//! nodes, checks them against the graph, and renders search results. It
//! does NOT implement searching; every query goes through
//! `pathfind_search::PathFinder`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod describe;
pub mod graphs;
pub mod logging;
pub mod runner;
