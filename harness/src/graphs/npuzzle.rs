//! `NPuzzle`: the sliding-tile puzzle as an implicit graph.
//!
//! A state is written row by row with `/` around every row, e.g.
//! `"/ABC/DEF/GH_/"` for the 3×3 goal. `_` is the empty tile; the other
//! tiles are named `A`–`Z`, then `0`–`9`, then `a`–`z`, as many as the
//! size needs.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use pathfind_kernel::edge::DirectedEdge;
use pathfind_kernel::point::Point;
use pathfind_search::{DirectedGraph, NodeSet, ParseNodeError};

use super::GraphLoadError;
use crate::describe::{describe_outgoing, SAMPLE_SIZE};

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 6;

const SEPARATOR: char = '/';

/// Tile 0 is the empty tile.
const TILE_NAMES: &[u8] = b"_ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz";

const EMPTY: usize = 0;

/// Offsets from a tile to the empty cell it can slide into.
const MOVES: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// One arrangement of the tiles: `positions[t]` is where tile `t` sits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    size: usize,
    positions: Vec<Point>,
}

impl PuzzleState {
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Where `tile` sits, if the tile exists.
    #[must_use]
    pub fn position(&self, tile: usize) -> Option<Point> {
        self.positions.get(tile).copied()
    }

    /// The tile at `p`, if `p` is on the board.
    #[must_use]
    pub fn tile_at(&self, p: Point) -> Option<usize> {
        self.positions.iter().position(|&q| q == p)
    }

    /// The state with tiles `i` and `j` exchanged.
    #[must_use]
    pub fn swap(&self, i: usize, j: usize) -> Self {
        let mut positions = self.positions.clone();
        positions.swap(i, j);
        Self {
            size: self.size,
            positions,
        }
    }

    /// A uniformly random arrangement. Half of them are unsolvable.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut positions = self.positions.clone();
        positions.shuffle(rng);
        Self {
            size: self.size,
            positions,
        }
    }

    /// The board as rows of tile numbers.
    #[must_use]
    pub fn tiles(&self) -> Vec<Vec<usize>> {
        let mut tiles = vec![vec![EMPTY; self.size]; self.size];
        for (tile, p) in self.positions.iter().enumerate() {
            if let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) {
                tiles[y][x] = tile;
            }
        }
        tiles
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SEPARATOR}")?;
        for row in self.tiles() {
            for tile in row {
                write!(f, "{}", char::from(TILE_NAMES[tile]))?;
            }
            write!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

/// The N×N sliding puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NPuzzle {
    size: usize,
}

impl NPuzzle {
    /// # Errors
    ///
    /// Returns [`GraphLoadError::UnsupportedPuzzleSize`] unless
    /// `2 <= size <= 6`.
    pub fn new(size: usize) -> Result<Self, GraphLoadError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(GraphLoadError::UnsupportedPuzzleSize { size });
        }
        Ok(Self { size })
    }

    /// Build a puzzle from its size written as text (the runner's "graph"
    /// argument).
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::InvalidPuzzleSize`] if `text` is not a
    /// number, and the errors of [`NPuzzle::new`] otherwise.
    pub fn from_arg(text: &str) -> Result<Self, GraphLoadError> {
        let size = text
            .trim()
            .parse()
            .map_err(|_| GraphLoadError::InvalidPuzzleSize {
                text: text.to_string(),
            })?;
        Self::new(size)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    fn tile_count(&self) -> usize {
        self.size * self.size
    }

    fn tile_name(tile: usize) -> char {
        char::from(TILE_NAMES[tile])
    }

    fn parse_tile(&self, name: char) -> Option<usize> {
        TILE_NAMES[..self.tile_count()]
            .iter()
            .position(|&b| char::from(b) == name)
    }

    fn contains(&self, p: Point) -> bool {
        let n = i32::try_from(self.size).unwrap_or(i32::MAX);
        (0..n).contains(&p.x) && (0..n).contains(&p.y)
    }

    /// The usual goal: tiles in reading order, empty tile bottom right.
    #[must_use]
    pub fn goal_state(&self) -> PuzzleState {
        let count = self.tile_count();
        let positions = (0..count)
            .map(|tile| {
                let cell = (tile + count - 1) % count;
                cell_point(cell % self.size, cell / self.size)
            })
            .collect();
        PuzzleState {
            size: self.size,
            positions,
        }
    }

    /// Description of the state encoding, the goal, and the moves available
    /// from a few shuffled states.
    pub fn summary<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let goal = self.goal_state();
        let n = self.size;
        let mut lines = vec![
            format!("NPuzzle graph of size {n} x {n}."),
            format!(
                "States are {n} x {n} matrices of unique characters in '{}'...'{}' and '{}' (for the empty tile); rows are interspersed with '{SEPARATOR}'.",
                Self::tile_name(1),
                Self::tile_name(self.tile_count() - 1),
                Self::tile_name(EMPTY),
            ),
            format!("The traditional goal state is: {goal}"),
            String::new(),
            "Random example states with outgoing edges:".to_string(),
        ];
        let sample: Vec<PuzzleState> = (0..SAMPLE_SIZE).map(|_| goal.shuffled(rng)).collect();
        lines.extend(describe_outgoing(self, sample, SAMPLE_SIZE));
        lines.join("\n")
    }
}

fn cell_point(x: usize, y: usize) -> Point {
    // Boards are at most 6x6, so both coordinates fit.
    Point::new(
        i32::try_from(x).unwrap_or(i32::MAX),
        i32::try_from(y).unwrap_or(i32::MAX),
    )
}

impl DirectedGraph for NPuzzle {
    type Node = PuzzleState;

    #[allow(clippy::unnecessary_literal_bound)]
    fn graph_id(&self) -> &str {
        "npuzzle"
    }

    /// Every arrangement is a node; there are far too many to list.
    fn nodes(&self) -> NodeSet<PuzzleState> {
        NodeSet::Unbounded
    }

    /// One edge per tile next to the empty cell: that tile slides in.
    fn outgoing_edges(&self, state: &PuzzleState) -> Vec<DirectedEdge<PuzzleState>> {
        let empty = state.positions[EMPTY];
        MOVES
            .iter()
            .map(|&mv| empty - mv)
            .filter(|&p| self.contains(p))
            .filter_map(|p| state.tile_at(p))
            .map(|tile| DirectedEdge::unit(state.clone(), state.swap(EMPTY, tile)))
            .collect()
    }

    /// Sum of the Manhattan distances of the non-empty tiles.
    fn guess_cost(&self, from: &PuzzleState, to: &PuzzleState) -> f64 {
        let total: u32 = (1..self.tile_count())
            .map(|tile| (from.positions[tile] - to.positions[tile]).manhattan_norm())
            .sum();
        f64::from(total)
    }

    fn parse_node(&self, text: &str) -> Result<PuzzleState, ParseNodeError> {
        let n = self.size;
        let rows: Vec<&str> = text.split(SEPARATOR).filter(|r| !r.is_empty()).collect();
        if rows.len() != n {
            return Err(ParseNodeError::new(text, format!("does not have {n} rows")));
        }

        let mut positions: Vec<Option<Point>> = vec![None; self.tile_count()];
        for (y, row) in rows.iter().enumerate() {
            let names: Vec<char> = row.chars().collect();
            if names.len() != n {
                return Err(ParseNodeError::new(
                    text,
                    format!("row {row} does not have {n} columns"),
                ));
            }
            for (x, &name) in names.iter().enumerate() {
                let tile = self
                    .parse_tile(name)
                    .ok_or_else(|| ParseNodeError::new(text, format!("invalid tile {name}")))?;
                if positions[tile].is_some() {
                    return Err(ParseNodeError::new(text, format!("duplicate tile {name}")));
                }
                positions[tile] = Some(cell_point(x, y));
            }
        }

        // n rows of n distinct tiles cover every tile exactly once.
        Ok(PuzzleState {
            size: n,
            positions: positions.into_iter().flatten().collect(),
        })
    }
}
