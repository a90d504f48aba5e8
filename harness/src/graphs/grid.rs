//! `GridGraph`: a character bitmap where every passable cell is a node.
//!
//! Cells use the Moving AI Lab map alphabet plus the wall characters of
//! simple ASCII mazes. Moves go to any of the eight neighbours; a move
//! costs its Euclidean length (1 or √2).

use std::collections::HashSet;
use std::io::{BufRead, Read};
use std::path::Path;
use std::str::FromStr;

use rand::Rng;
use tracing::debug;

use pathfind_kernel::edge::DirectedEdge;
use pathfind_kernel::point::Point;
use pathfind_search::{DirectedGraph, NodeSet, ParseNodeError};

use super::{open, GraphLoadError};
use crate::describe::{describe_outgoing, sample_nodes, SAMPLE_SIZE};

/// Characters a map row may consist of. Lines with anything else (map
/// headers, blank lines) are not part of the grid.
pub const ALLOWED_CHARS: &str = ".G@OTSW +|-";

/// Characters that can be walked on.
pub const PASSABLE_CHARS: &str = ".G ";

/// The eight neighbour offsets, x-major.
const DIRECTIONS: [Point; 8] = [
    Point::new(-1, -1),
    Point::new(-1, 0),
    Point::new(-1, 1),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
];

/// Path cells in [`GridGraph::show_grid`].
const PATH_MARK: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGraph {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl GridGraph {
    /// Read a map from `reader`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::Read`] if reading fails, and the errors of
    /// [`GridGraph::from_str`] otherwise.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self, GraphLoadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    /// Read a map from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphLoadError::Open`] if the file cannot be opened, and
    /// the errors of [`GridGraph::from_reader`] otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GraphLoadError> {
        Self::from_reader(open(path.as_ref())?)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    fn cell(&self, p: Point) -> Option<char> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Whether `p` lies inside the grid on a passable cell.
    #[must_use]
    pub fn passable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(|c| PASSABLE_CHARS.contains(c))
    }

    /// The map with every cell of `path` replaced by `*`.
    #[must_use]
    pub fn show_grid(&self, path: &[Point]) -> String {
        let on_path: HashSet<Point> = path.iter().copied().collect();
        let mut out = String::with_capacity((self.width + 1) * self.height());
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                let marked = point_at(x, y).is_some_and(|p| on_path.contains(&p));
                out.push(if marked { PATH_MARK } else { c });
            }
            out.push('\n');
        }
        out
    }

    /// Dimensions, the map itself, and example points with their edges.
    pub fn summary<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let mut lines = vec![
            format!(
                "Bitmap graph of dimensions {} x {} pixels",
                self.width,
                self.height()
            ),
            self.show_grid(&[]),
            "Random example points with outgoing edges:".to_string(),
        ];
        let sample = sample_nodes(self, rng, SAMPLE_SIZE);
        lines.extend(describe_outgoing(self, sample, SAMPLE_SIZE));
        lines.join("\n")
    }
}

fn point_at(x: usize, y: usize) -> Option<Point> {
    Some(Point::new(i32::try_from(x).ok()?, i32::try_from(y).ok()?))
}

/// Parse a map. Only lines made entirely of [`ALLOWED_CHARS`] count as rows.
impl FromStr for GridGraph {
    type Err = GraphLoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.is_empty() && line.chars().all(|c| ALLOWED_CHARS.contains(c)))
            .map(|line| line.chars().collect())
            .collect();

        let Some(first) = rows.first() else {
            return Err(GraphLoadError::EmptyGrid);
        };
        let width = first.len();
        if let Some((row, ragged)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GraphLoadError::RaggedGrid {
                row,
                width: ragged.len(),
                expected: width,
            });
        }

        debug!(width, height = rows.len(), "grid loaded");
        Ok(Self { rows, width })
    }
}

impl DirectedGraph for GridGraph {
    type Node = Point;

    #[allow(clippy::unnecessary_literal_bound)]
    fn graph_id(&self) -> &str {
        "grid"
    }

    fn nodes(&self) -> NodeSet<Point> {
        let cells = self.rows.iter().enumerate().flat_map(|(y, row)| {
            (0..row.len()).filter_map(move |x| point_at(x, y))
        });
        NodeSet::Finite(cells.filter(|&p| self.passable(p)).collect())
    }

    fn outgoing_edges(&self, p: &Point) -> Vec<DirectedEdge<Point>> {
        DIRECTIONS
            .iter()
            .map(|&dir| (*p + dir, dir.euclidean_norm()))
            .filter(|&(to, _)| self.passable(to))
            .filter_map(|(to, weight)| DirectedEdge::new(*p, to, weight).ok())
            .collect()
    }

    /// Straight-line distance, which no sequence of moves can undercut.
    fn guess_cost(&self, from: &Point, to: &Point) -> f64 {
        (*from - *to).euclidean_norm()
    }

    fn parse_node(&self, text: &str) -> Result<Point, ParseNodeError> {
        text.parse::<Point>()
            .map_err(|e| ParseNodeError::new(text, e.reason))
    }
}
