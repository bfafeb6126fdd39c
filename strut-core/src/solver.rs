//! Spanning tree orchestration.
//!
//! Provides the [`SpanningTreeSolver`] entry point, which resolves the
//! configured execution strategy, times the round loop and assembles the
//! result.

use std::{num::NonZeroUsize, time::Instant};

use tracing::{info, instrument};

use crate::{
    Result,
    builder::{ExecutionStrategy, SpanningTreeSolverBuilder},
    graph::{Graph, WorkingGraph},
    result::{SolveReport, SpanningTree},
    rounds::{RoundsOutcome, SequentialExecutor, run_rounds},
};
#[cfg(not(feature = "parallel"))]
use crate::error::StrutError;
#[cfg(feature = "parallel")]
use crate::rounds::parallel::ParallelExecutor;

/// Entry point for computing spanning trees.
///
/// # Examples
/// ```
/// use strut_core::{Graph, GraphEdge, SpanningTreeSolverBuilder};
///
/// let graph = Graph::new(
///     3,
///     vec![GraphEdge::new(0, 1), GraphEdge::new(1, 2), GraphEdge::new(0, 2)],
/// )?;
/// let solver = SpanningTreeSolverBuilder::new().build()?;
/// let report = solver.solve(&graph)?;
/// assert_eq!(report.tree().len(), 2);
/// # Ok::<(), strut_core::StrutError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpanningTreeSolver {
    execution_strategy: ExecutionStrategy,
    max_rounds: Option<NonZeroUsize>,
}

impl Default for SpanningTreeSolver {
    fn default() -> Self {
        Self::new(ExecutionStrategy::Auto, None)
    }
}

impl SpanningTreeSolver {
    pub(crate) fn new(
        execution_strategy: ExecutionStrategy,
        max_rounds: Option<NonZeroUsize>,
    ) -> Self {
        Self {
            execution_strategy,
            max_rounds,
        }
    }

    /// Returns a builder for configuring a solver.
    #[must_use]
    pub fn builder() -> SpanningTreeSolverBuilder {
        SpanningTreeSolverBuilder::new()
    }

    /// Returns the execution strategy that will be used when solving.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the round cap, if any.
    #[must_use]
    pub fn max_rounds(&self) -> Option<NonZeroUsize> {
        self.max_rounds
    }

    /// Computes a spanning tree of `graph`.
    ///
    /// The elapsed time covers copying the graph into the working arena and
    /// the round loop.
    ///
    /// # Errors
    /// Returns [`crate::StrutError::DisconnectedGraph`] when the graph has more
    /// than one component, [`crate::StrutError::RoundLimitExceeded`] when the
    /// round cap is reached, [`crate::StrutError::ComponentCountMismatch`] if
    /// the mutual-selection count ever diverges from the labelled component
    /// count, and [`crate::StrutError::BackendUnavailable`] when the requested
    /// backend is not compiled into this build.
    #[instrument(
        name = "core.solve",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            strategy = ?self.execution_strategy,
        ),
    )]
    pub fn solve(&self, graph: &Graph) -> Result<SolveReport> {
        let started = Instant::now();
        let mut working = WorkingGraph::from_graph(graph);
        let RoundsOutcome { solution, rounds } = self.dispatch(&mut working)?;
        let elapsed = started.elapsed();

        let tree = SpanningTree::from_solution(graph, solution.into_indices(), rounds);
        info!(
            rounds,
            solution_size = tree.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1_000.0,
            "spanning tree completed"
        );
        record_metrics(&tree, elapsed);
        Ok(SolveReport::new(tree, elapsed))
    }

    fn dispatch(&self, working: &mut WorkingGraph) -> Result<RoundsOutcome> {
        match self.execution_strategy {
            ExecutionStrategy::Sequential => run_rounds(&SequentialExecutor, working, self.max_rounds),
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Auto | ExecutionStrategy::Parallel => {
                run_rounds(&ParallelExecutor, working, self.max_rounds)
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Auto => run_rounds(&SequentialExecutor, working, self.max_rounds),
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => Err(StrutError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            }),
        }
    }
}

/// Computes a spanning tree with the default solver configuration.
///
/// # Errors
/// Returns the same errors as [`SpanningTreeSolver::solve`].
///
/// # Examples
/// ```
/// use strut_core::{Graph, GraphEdge, spanning_tree};
///
/// let graph = Graph::new(2, vec![GraphEdge::new(1, 0)])?;
/// let tree = spanning_tree(&graph)?;
/// assert_eq!(tree.rounds(), 1);
/// assert_eq!(tree.edge_indices().collect::<Vec<_>>(), vec![0]);
/// # Ok::<(), strut_core::StrutError>(())
/// ```
pub fn spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    SpanningTreeSolver::default()
        .solve(graph)
        .map(SolveReport::into_tree)
}

#[cfg(feature = "metrics")]
fn record_metrics(tree: &SpanningTree, elapsed: std::time::Duration) {
    metrics::counter!("strut_rounds_total").increment(tree.rounds() as u64);
    metrics::counter!("strut_solution_edges_total").increment(tree.len() as u64);
    metrics::histogram!("strut_solve_seconds").record(elapsed.as_secs_f64());
}

#[cfg(not(feature = "metrics"))]
fn record_metrics(_tree: &SpanningTree, _elapsed: std::time::Duration) {}
