//! Command implementations and argument parsing for the strut CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use strut_core::{ExecutionStrategy, Graph, SolveReport, SpanningTreeSolverBuilder, StrutError};
use strut_providers_edgelist::{EdgeListError, load_graph_from_path};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::report::append_report;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "strut",
    about = "Compute a spanning tree of an edge-list graph by repeated selection and contraction."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a graph, compute its spanning tree, and append a report.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file: vertex count, edge count, then `u v cost` lines.
    pub input: PathBuf,

    /// Report file; created if missing, appended to otherwise.
    pub output: PathBuf,

    /// Also list every tree edge in the report.
    #[arg(long = "show-edges")]
    pub show_edges: bool,

    /// How the phases of each round are scheduled.
    #[arg(long, value_enum, default_value_t = StrategyArg::Auto)]
    pub strategy: StrategyArg,

    /// Abort if the tree is not complete after this many rounds.
    #[arg(long = "max-rounds", value_parser = clap::value_parser!(usize))]
    pub max_rounds: Option<usize>,
}

/// Execution strategies selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Let the library pick.
    Auto,
    /// Single-threaded.
    Sequential,
    /// Data parallel within each phase.
    Parallel,
}

impl From<StrategyArg> for ExecutionStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Auto => Self::Auto,
            StrategyArg::Sequential => Self::Sequential,
            StrategyArg::Parallel => Self::Parallel,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened or read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input file was not a valid edge list.
    #[error("failed to load `{path}`: {source}")]
    Load {
        /// Input path.
        path: PathBuf,
        /// Loader failure.
        #[source]
        source: EdgeListError,
    },
    /// Configuration or computation failed.
    #[error(transparent)]
    Solve(#[from] StrutError),
    /// The report could not be written.
    #[error("failed to write report to `{path}`: {source}")]
    Report {
        /// Output path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Returns the stable code of the underlying library error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Load { source, .. } => Some(source.code().as_str()),
            Self::Solve(error) => Some(error.code().as_str()),
            Self::Io { .. } | Self::Report { .. } => None,
        }
    }
}

/// Outcome of a successful `run`.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Input graph path.
    pub input: PathBuf,
    /// Report file the run was appended to.
    pub output: PathBuf,
    /// Tree and timing produced by the solver.
    pub report: SolveReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, solving, or writing the report fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use strut_cli::cli::{Cli, Command, RunCommand, StrategyArg, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("path.txt");
/// std::fs::write(&input, "3\n2\n0 1 1.0\n1 2 1.0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         input,
///         output: dir.path().join("report.txt"),
///         show_edges: false,
///         strategy: StrategyArg::Sequential,
///         max_rounds: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.tree().len(), 2);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        input = %command.input.display(),
        strategy = ?command.strategy,
        show_edges = command.show_edges,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        input,
        output,
        show_edges,
        strategy,
        max_rounds,
    } = command;

    let solver = SpanningTreeSolverBuilder::new()
        .with_execution_strategy(strategy.into())
        .with_max_rounds(max_rounds)
        .build()?;
    let graph = load_input(&input)?;
    let report = solver.solve(&graph)?;

    append_report(&output, &input, &report, show_edges).map_err(|source| CliError::Report {
        path: output.clone(),
        source,
    })?;

    info!(
        rounds = report.tree().rounds(),
        solution_size = report.tree().len(),
        output = %output.display(),
        "report appended"
    );
    Ok(ExecutionSummary {
        input,
        output,
        report,
    })
}

pub(super) fn load_input(path: &Path) -> Result<Graph, CliError> {
    load_graph_from_path(path).map_err(|err| match err {
        EdgeListError::Io(source) => CliError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => CliError::Load {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Renders `summary` to `writer`: the elapsed seconds on the first line,
/// then the round count and tree size.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let tree = summary.report.tree();
    writeln!(writer, "{:.6}", summary.report.elapsed().as_secs_f64())?;
    writeln!(writer, "rounds: {}", tree.rounds())?;
    writeln!(writer, "solution size: {}", tree.len())?;
    Ok(())
}
