//! Builder utilities for configuring the spanning tree solver.
//!
//! Exposes the execution strategy selection surface and the builder
//! validation used before constructing [`SpanningTreeSolver`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::StrutError, solver::SpanningTreeSolver};

/// Selects how the phases of each round are executed.
///
/// Every strategy runs selection, accumulation, labelling and contraction in
/// that order with a barrier between phases; they differ only in how the
/// work inside a phase is spread across threads. All strategies produce the
/// same spanning tree for the same input.
///
/// `Auto` resolves to `Parallel` when the `parallel` feature is compiled in
/// and to `Sequential` otherwise.
///
/// # Examples
/// ```
/// use strut_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select the backend.
    Auto,
    /// Run every phase on the calling thread.
    Sequential,
    /// Spread per-vertex and per-edge work across the rayon thread pool.
    Parallel,
}

/// Configures and constructs [`SpanningTreeSolver`] instances.
///
/// # Examples
/// ```
/// use strut_core::{ExecutionStrategy, SpanningTreeSolverBuilder};
///
/// let solver = SpanningTreeSolverBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .with_max_rounds(Some(32))
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.execution_strategy(), ExecutionStrategy::Sequential);
/// assert_eq!(solver.max_rounds().map(|limit| limit.get()), Some(32));
/// ```
#[derive(Debug, Clone)]
pub struct SpanningTreeSolverBuilder {
    execution_strategy: ExecutionStrategy,
    max_rounds: Option<usize>,
}

impl Default for SpanningTreeSolverBuilder {
    fn default() -> Self {
        Self {
            execution_strategy: ExecutionStrategy::Auto,
            max_rounds: None,
        }
    }
}

impl SpanningTreeSolverBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use strut_core::{ExecutionStrategy, SpanningTreeSolverBuilder};
    ///
    /// let builder = SpanningTreeSolverBuilder::new();
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// assert_eq!(builder.max_rounds(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution strategy to use when solving.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Caps the number of rounds the solver may run. `None` removes the cap.
    ///
    /// A connected graph with `n` vertices needs at most `floor(log2 n)`
    /// rounds, so the cap only matters as a guard against misuse.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Returns the configured round cap.
    #[must_use]
    pub fn max_rounds(&self) -> Option<usize> {
        self.max_rounds
    }

    /// Validates the configuration and constructs a [`SpanningTreeSolver`].
    ///
    /// # Errors
    /// Returns [`StrutError::InvalidMaxRounds`] when the round cap is zero.
    ///
    /// # Examples
    /// ```
    /// use strut_core::{SpanningTreeSolverBuilder, StrutError};
    ///
    /// let err = SpanningTreeSolverBuilder::new()
    ///     .with_max_rounds(Some(0))
    ///     .build()
    ///     .expect_err("zero rounds is rejected");
    /// assert_eq!(err, StrutError::InvalidMaxRounds { got: 0 });
    /// ```
    pub fn build(self) -> Result<SpanningTreeSolver> {
        let max_rounds = self
            .max_rounds
            .map(|limit| NonZeroUsize::new(limit).ok_or(StrutError::InvalidMaxRounds { got: limit }))
            .transpose()?;

        Ok(SpanningTreeSolver::new(self.execution_strategy, max_rounds))
    }
}
