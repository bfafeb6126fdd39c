//! Command-line interface for computing spanning trees of edge-list files.
//!
//! The single `run` command loads a graph, solves it, and appends a report
//! to an output file.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, StrategyArg, render_summary, run_cli,
};
