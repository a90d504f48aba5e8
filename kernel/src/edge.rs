//! Directed edges with finite, non-negative weights.
//!
//! An edge is created by a graph's edge enumeration, handed to the search
//! engine, and never mutated afterwards. The weight check happens
//! here, at construction, so the search loop never has to re-validate.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::weight::{format_weight, UNIT_WEIGHT};

/// Typed failure for edge construction.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum EdgeError {
    /// The weight is below zero.
    #[error("edge has negative weight {weight}")]
    NegativeWeight { weight: f64 },
    /// The weight is NaN, which has no place in a cost ordering.
    #[error("edge weight is not a number")]
    NotANumber,
    /// The weight is `+inf`; a path through it has no finite cost.
    #[error("edge weight is infinite")]
    Infinite,
}

/// An immutable directed edge `from → to` with a finite weight `>= 0`.
///
/// Equality and hashing cover both endpoints and the exact weight. `-0.0`
/// is normalized to `0.0` at construction so that equal edges hash equally.
#[derive(Debug, Clone)]
pub struct DirectedEdge<N> {
    from: N,
    to: N,
    weight: f64,
}

impl<N> DirectedEdge<N> {
    /// Create an edge with the given weight.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeError::NegativeWeight`] if `weight < 0`,
    /// [`EdgeError::NotANumber`] if `weight` is NaN, and
    /// [`EdgeError::Infinite`] if `weight` is `+inf`.
    pub fn new(from: N, to: N, weight: f64) -> Result<Self, EdgeError> {
        if weight.is_nan() {
            return Err(EdgeError::NotANumber);
        }
        if weight < 0.0 {
            return Err(EdgeError::NegativeWeight { weight });
        }
        if weight.is_infinite() {
            return Err(EdgeError::Infinite);
        }
        Ok(Self {
            from,
            to,
            weight: weight + 0.0,
        })
    }

    /// Create an edge with weight `1.0`.
    #[must_use]
    pub fn unit(from: N, to: N) -> Self {
        Self {
            from,
            to,
            weight: UNIT_WEIGHT,
        }
    }

    #[must_use]
    pub fn from(&self) -> &N {
        &self.from
    }

    #[must_use]
    pub fn to(&self) -> &N {
        &self.to
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Split the edge into `(from, to, weight)`.
    #[must_use]
    pub fn into_parts(self) -> (N, N, f64) {
        (self.from, self.to, self.weight)
    }

    /// Whether the weight is exactly `1.0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_unit(&self) -> bool {
        self.weight == UNIT_WEIGHT
    }
}

impl<N: Clone> DirectedEdge<N> {
    /// The same edge with its direction reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }
}

impl<N: fmt::Display> DirectedEdge<N> {
    /// The target node, followed by ` [w]` when `with_weight` is set.
    #[must_use]
    pub fn target_string(&self, with_weight: bool) -> String {
        if with_weight {
            format!("{} [{}]", self.to, format_weight(self.weight))
        } else {
            self.to.to_string()
        }
    }

    /// Render the edge as `from -> to` or `from --[w]-> to`.
    ///
    /// Either endpoint can be left out, which is how path renderings chain
    /// edges without repeating the shared node.
    #[must_use]
    pub fn format(&self, with_weight: bool, include_from: bool, include_to: bool) -> String {
        let arrow = if with_weight {
            format!(" --[{}]-> ", format_weight(self.weight))
        } else {
            " -> ".to_string()
        };
        let mut out = String::new();
        if include_from {
            out.push_str(&self.from.to_string());
        }
        out.push_str(&arrow);
        if include_to {
            out.push_str(&self.to.to_string());
        }
        out
    }
}

/// Unit weights are left out: `A -> B`, but `A --[2.5]-> B`.
impl<N: fmt::Display> fmt::Display for DirectedEdge<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(!self.is_unit(), true, true))
    }
}

impl<N: PartialEq> PartialEq for DirectedEdge<N> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.weight.to_bits() == other.weight.to_bits()
    }
}

impl<N: Eq> Eq for DirectedEdge<N> {}

impl<N: Hash> Hash for DirectedEdge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.weight.to_bits().hash(state);
    }
}
