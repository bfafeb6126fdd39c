//! Plain-text run reports appended to the output file.
//!
//! Each run appends one block, so a single output file can collect the
//! results of many inputs:
//!
//! ```text
//!
//! *** Input file: graph.txt
//! Total time: 0.000012
//! Iterations: 2
//! SolutionSize: 7
//! *** Spanning tree formed by 7 edges
//! Edge 4 - 5
//! ...
//! ```
//!
//! The edge listing is only written on request.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use strut_core::SolveReport;
use tracing::{field, instrument};

/// Writes one report block for `input` to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::Path;
/// # use strut_cli::report::write_report;
/// # use strut_core::{Graph, GraphEdge, SpanningTreeSolver};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let graph = Graph::new(2, vec![GraphEdge::new(1, 0)])?;
/// let report = SpanningTreeSolver::default().solve(&graph)?;
/// let mut buffer = Vec::new();
/// write_report(&mut buffer, Path::new("pair.txt"), &report, true)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("\n*** Input file: pair.txt\n"));
/// assert!(text.ends_with("*** Spanning tree formed by 1 edges\nEdge 0 - 1\n"));
/// # Ok(())
/// # }
/// ```
pub fn write_report(
    mut writer: impl Write,
    input: &Path,
    report: &SolveReport,
    show_edges: bool,
) -> io::Result<()> {
    let tree = report.tree();
    writeln!(writer)?;
    writeln!(writer, "*** Input file: {}", input.display())?;
    writeln!(writer, "Total time: {:.6}", report.elapsed().as_secs_f64())?;
    writeln!(writer, "Iterations: {}", tree.rounds())?;
    writeln!(writer, "SolutionSize: {}", tree.len())?;
    if show_edges {
        writeln!(writer, "*** Spanning tree formed by {} edges", tree.len())?;
        for edge in tree.edges() {
            writeln!(writer, "Edge {} - {}", edge.v(), edge.u())?;
        }
    }
    Ok(())
}

/// Appends a report block to `output`, creating the file if needed.
///
/// # Errors
/// Returns [`io::Error`] if the file cannot be opened or written.
#[instrument(
    name = "cli.write_report",
    err,
    skip(input, report),
    fields(output = %output.display(), edges = field::Empty),
)]
pub fn append_report(
    output: &Path,
    input: &Path,
    report: &SolveReport,
    show_edges: bool,
) -> io::Result<()> {
    if show_edges {
        tracing::Span::current().record("edges", report.tree().len());
    }
    let file = OpenOptions::new().create(true).append(true).open(output)?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, input, report, show_edges)?;
    writer.flush()
}
