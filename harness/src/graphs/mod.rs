//! Concrete graphs the runner can load and search.
//!
//! Each graph implements [`pathfind_search::DirectedGraph`] and offers a
//! `summary` for display. Graphs only describe edges; searching, boundary
//! validation and rendering belong to the engine and the runner.

pub mod adjacency;
pub mod grid;
pub mod npuzzle;
pub mod word_ladder;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use pathfind_kernel::edge::EdgeError;

pub use adjacency::AdjacencyGraph;
pub use grid::GridGraph;
pub use npuzzle::{NPuzzle, PuzzleState};
pub use word_ladder::WordLadder;

/// Typed failure for building a graph from a file or an argument.
#[derive(Debug, thiserror::Error)]
pub enum GraphLoadError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[from] std::io::Error),

    #[error("line {line}: {detail}")]
    MalformedLine { line: usize, detail: String },

    #[error("line {line}: {source}")]
    Edge { line: usize, source: EdgeError },

    #[error("malformed grid, row {row} has width {width} but the first row has width {expected}")]
    RaggedGrid {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("grid contains no rows")]
    EmptyGrid,

    #[error("puzzle size must be a number, got {text:?}")]
    InvalidPuzzleSize { text: String },

    #[error("unsupported puzzle size {size}: only 2 <= N <= 6 are supported")]
    UnsupportedPuzzleSize { size: usize },
}

/// Open `path` for line-oriented reading.
pub(crate) fn open(path: &Path) -> Result<BufReader<File>, GraphLoadError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| GraphLoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}
