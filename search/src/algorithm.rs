//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// The search algorithms the engine can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Random walk. A negative result proves nothing.
    Random,
    /// Uniform-cost search (Dijkstra on an implicit graph).
    Ucs,
    /// A* guided by [`crate::contract::DirectedGraph::guess_cost`].
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Random, Algorithm::Ucs, Algorithm::AStar];

    /// The lowercase name accepted by [`Algorithm::from_str`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Ucs => "ucs",
            Self::AStar => "astar",
        }
    }

    /// Whether a failed search with this algorithm proves unreachability.
    #[must_use]
    pub const fn is_exhaustive(self) -> bool {
        !matches!(self, Self::Random)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive.
impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}
