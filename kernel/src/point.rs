//! Two-dimensional points with integer coordinates.
//!
//! Used as grid nodes and as tile positions in the sliding puzzle.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Why a `"x:y"` string could not be read as a [`Point`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{input} does not represent a point: {reason}")]
pub struct PointParseError {
    pub input: String,
    pub reason: String,
}

/// A lattice point. Displays and parses as `"x:y"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|x| + |y|`, saturating at `u32::MAX`.
    #[must_use]
    pub fn manhattan_norm(self) -> u32 {
        self.x.unsigned_abs().saturating_add(self.y.unsigned_abs())
    }

    #[must_use]
    pub fn euclidean_norm(self) -> f64 {
        f64::from(self.x).hypot(f64::from(self.y))
    }
}

/// Coordinate arithmetic saturates at the `i32` bounds.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = PointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fail = |reason: &str| PointParseError {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let (x, y) = s.split_once(':').ok_or_else(|| fail("expected X:Y"))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| fail(&format!("bad x coordinate: {e}")))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| fail(&format!("bad y coordinate: {e}")))?;
        Ok(Point::new(x, y))
    }
}
