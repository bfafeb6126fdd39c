//! Benchmark parameter types.

use std::fmt;

use strut_core::ExecutionStrategy;

/// Parameters for one solver benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SolverBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra edges added on top of the random spanning tree.
    pub extra_edges: usize,
    /// Scheduling of the round phases.
    pub strategy: ExecutionStrategy,
}

impl fmt::Display for SolverBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}/n={},m={}",
            self.strategy,
            self.vertex_count,
            self.vertex_count
                .saturating_sub(1)
                .saturating_add(self.extra_edges),
        )
    }
}
