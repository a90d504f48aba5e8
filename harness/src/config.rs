//! Run configuration from command-line arguments.
//!
//! ```text
//! pathfind <algorithm> <graphtype> <graph> [<start> <goal>]...
//! ```
//!
//! `<graph>` is a file path, except for `NPuzzle` where it is the puzzle
//! size.

use std::fmt;
use std::str::FromStr;

use pathfind_search::{Algorithm, SearchError, SearchPolicy};

pub const USAGE: &str = "\
Usage: pathfind algorithm graphtype graph [optional: start goal]...
  where algorithm = random | ucs | astar
        graphtype = AdjacencyGraph | WordLadder | NPuzzle | GridGraph | GridGraph-NoGrid";

/// Typed failure for building a [`RunConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{detail}\n{usage}", usage = USAGE)]
    Usage { detail: String },

    #[error("unknown graph type {name}")]
    UnknownGraphType { name: String },

    #[error(transparent)]
    Algorithm(#[from] SearchError),
}

/// The kinds of graph the runner can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    AdjacencyGraph,
    WordLadder,
    NPuzzle,
    GridGraph,
    /// A grid whose results are printed without the map.
    GridGraphNoGrid,
}

impl GraphKind {
    pub const ALL: [GraphKind; 5] = [
        GraphKind::AdjacencyGraph,
        GraphKind::WordLadder,
        GraphKind::NPuzzle,
        GraphKind::GridGraph,
        GraphKind::GridGraphNoGrid,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AdjacencyGraph => "AdjacencyGraph",
            Self::WordLadder => "WordLadder",
            Self::NPuzzle => "NPuzzle",
            Self::GridGraph => "GridGraph",
            Self::GridGraphNoGrid => "GridGraph-NoGrid",
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive.
impl FromStr for GraphKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownGraphType {
                name: s.to_string(),
            })
    }
}

/// A start/goal pair as typed by the user, not yet parsed into nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub start: String,
    pub goal: String,
}

impl Query {
    #[must_use]
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Everything the runner needs for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    pub graph_kind: GraphKind,
    /// File path, or the size for `NPuzzle`.
    pub source: String,
    /// Searches to run, in order. Empty means "describe the graph".
    pub queries: Vec<Query>,
    pub policy: SearchPolicy,
}

impl RunConfig {
    /// Parse the arguments that follow the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Usage`] when a positional argument is missing
    /// or a start has no goal, [`ConfigError::Algorithm`] for an unknown
    /// algorithm and [`ConfigError::UnknownGraphType`] for an unknown graph
    /// type.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut next = |what: &str| {
            args.next().ok_or_else(|| ConfigError::Usage {
                detail: format!("missing {what}"),
            })
        };
        let algorithm: Algorithm = next("algorithm")?.parse()?;
        let graph_kind: GraphKind = next("graphtype")?.parse()?;
        let source = next("graph")?;

        let rest: Vec<String> = args.collect();
        if rest.len() % 2 != 0 {
            return Err(ConfigError::Usage {
                detail: format!("start node {} has no goal", rest[rest.len() - 1]),
            });
        }
        let queries = rest
            .chunks_exact(2)
            .map(|pair| Query::new(pair[0].clone(), pair[1].clone()))
            .collect();

        let config = Self {
            algorithm,
            graph_kind,
            source,
            queries,
            policy: SearchPolicy::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Usage`] for an empty graph argument and
    /// [`ConfigError::Algorithm`] if the policy is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.trim().is_empty() {
            return Err(ConfigError::Usage {
                detail: "graph argument is empty".to_string(),
            });
        }
        self.policy.validate()?;
        Ok(())
    }
}
