//! Pathfind Kernel: value types shared by the search engine and its graphs.
//!
//! # Modules
//!
//! - [`edge`] -- [`edge::DirectedEdge`], the only edge representation
//! - [`point`] -- integer lattice points used by grid and puzzle graphs
//! - [`weight`] -- the single place edge weights are formatted for humans
//! - [`canon`] -- canonical JSON bytes, the only input to report hashing
//! - [`hash`] -- domain-separated SHA-256 digests of search reports
//!
//! # Module Dependency Direction
//!
//! `weight` ← `edge`; `canon` feeds `hash` at call sites; `point` is standalone.
//!
//! Nothing in this crate knows about searching. The engine lives in
//! `pathfind_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod canon;
pub mod edge;
pub mod hash;
pub mod point;
pub mod weight;
