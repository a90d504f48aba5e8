//! Search policy: the knobs a caller may turn without touching the graph.

use crate::error::SearchError;

/// Random walk gives up after this many steps unless told otherwise.
pub const DEFAULT_MAX_RANDOM_STEPS: u64 = 1_000_000;

/// Search configuration.
///
/// Uniform-cost search and A* have no budget: they run until the goal is
/// finalized or the frontier is empty. The random-walk step cap is the only
/// built-in bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on random-walk steps.
    pub max_random_steps: u64,
    /// Seed for the random walk. `None` draws from OS entropy.
    pub random_seed: Option<u64>,
}

impl SearchPolicy {
    /// Default policy with a fixed random-walk seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check that the policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_random_steps` is zero,
    /// which would make every random walk fail before looking at the start.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_random_steps == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "max_random_steps must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_random_steps: DEFAULT_MAX_RANDOM_STEPS,
            random_seed: None,
        }
    }
}
