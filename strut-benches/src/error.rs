//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! that setup functions can propagate failures with `?`.

use crate::source::SyntheticGraphError;
use strut_core::StrutError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticGraphError),
    /// Solver configuration or a warm-up solve failed.
    #[error("solver failed: {0}")]
    Solver(#[from] StrutError),
}
