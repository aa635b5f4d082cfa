//! Exploration configuration, validation, and error types.

use std::error::Error;
use std::fmt;

// ── IterationLimit ─────────────────────────────────────────────────

/// Upper bound on explorer loop iterations.
///
/// Each iteration either moves the agent one cell or turns it 90°
/// clockwise in place. The limit never changes the order in which cells
/// are visited; it only decides when a walk that has not yet covered the
/// wall map is abandoned with
/// [`MazeError::TraversalIncomplete`](lefthand_core::MazeError::TraversalIncomplete).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IterationLimit {
    /// No limit. A disconnected maze never terminates.
    #[default]
    Unbounded,
    /// `4 × cell_count` iterations.
    ///
    /// The walk is a deterministic function of (cell, orientation), of
    /// which there are `4 × cell_count`. If coverage has not been reached
    /// after that many iterations a state has repeated and the walk is
    /// periodic, so it never will be.
    StateSpace,
    /// A fixed number of iterations. Must be at least 1.
    Fixed(u64),
}

// ── ExploreConfig ──────────────────────────────────────────────────

/// Configuration for an [`Explorer`](crate::Explorer) run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExploreConfig {
    /// Iteration bound. Default: [`IterationLimit::Unbounded`].
    pub iteration_limit: IterationLimit,
}

impl ExploreConfig {
    /// Configuration that gives up as soon as non-termination is certain.
    pub fn state_space_bounded() -> Self {
        Self {
            iteration_limit: IterationLimit::StateSpace,
        }
    }

    /// Configuration with a fixed iteration budget.
    pub fn with_max_iterations(max: u64) -> Self {
        Self {
            iteration_limit: IterationLimit::Fixed(max),
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iteration_limit == IterationLimit::Fixed(0) {
            return Err(ConfigError::ZeroIterationLimit);
        }
        Ok(())
    }

    /// Resolve the iteration limit for a wall map of `cell_count` cells.
    ///
    /// `None` means unbounded. `StateSpace` saturates at `u64::MAX`.
    pub fn resolved_iteration_limit(&self, cell_count: usize) -> Option<u64> {
        match self.iteration_limit {
            IterationLimit::Unbounded => None,
            IterationLimit::StateSpace => Some((cell_count as u64).saturating_mul(4)),
            IterationLimit::Fixed(n) => Some(n),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ExploreConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `IterationLimit::Fixed(0)` would fail every non-trivial maze
    /// before the first step.
    ZeroIterationLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationLimit => write!(f, "iteration limit must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        let cfg = ExploreConfig::default();
        assert_eq!(cfg.iteration_limit, IterationLimit::Unbounded);
        assert_eq!(cfg.resolved_iteration_limit(100), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn state_space_scales_with_cells() {
        let cfg = ExploreConfig::state_space_bounded();
        assert_eq!(cfg.resolved_iteration_limit(0), Some(0));
        assert_eq!(cfg.resolved_iteration_limit(25), Some(100));
    }

    #[test]
    fn fixed_limit_ignores_cell_count() {
        let cfg = ExploreConfig::with_max_iterations(7);
        assert_eq!(cfg.resolved_iteration_limit(1), Some(7));
        assert_eq!(cfg.resolved_iteration_limit(10_000), Some(7));
    }

    #[test]
    fn zero_fixed_limit_is_rejected() {
        let cfg = ExploreConfig::with_max_iterations(0);
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroIterationLimit));
        assert_eq!(
            ConfigError::ZeroIterationLimit.to_string(),
            "iteration limit must be at least 1"
        );
    }
}
