//! Typed search and graph-contract errors.
//!
//! `SearchError` represents pre-flight failures only: it is returned before
//! any frontier work happens. Runtime outcomes (goal not reachable, dead
//! end, step cap) are expressed via [`crate::result::TerminationReason`] and
//! always produce a [`crate::result::SearchResult`].

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The algorithm name is not one of `random`, `ucs`, `astar`.
    #[error("unknown search algorithm {name}")]
    UnknownAlgorithm { name: String },
    /// The policy cannot drive a search (e.g. a zero step cap).
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}

/// A string that is not a valid node encoding for some graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input} is not a valid node: {reason}")]
pub struct ParseNodeError {
    pub input: String,
    pub reason: String,
}

impl ParseNodeError {
    #[must_use]
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Failure of a graph-contract operation outside the search loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// The node set was asked to materialize but is unbounded.
    #[error("the node set of {graph} is too expensive to enumerate")]
    Unenumerable { graph: String },
    /// A node string could not be parsed.
    #[error(transparent)]
    ParseNode(#[from] ParseNodeError),
}
