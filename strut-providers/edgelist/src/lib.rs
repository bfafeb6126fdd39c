//! Edge-list provider: reads the whitespace-separated graph text format into
//! a validated [`strut_core::Graph`].
//!
//! The format is a vertex count line, an edge count line, then one
//! `u v cost` line per edge. Blank lines are ignored anywhere. Costs must
//! parse as numbers but are otherwise discarded.

mod errors;
mod lines;
mod loader;

pub use errors::{EdgeLineProblem, EdgeListError, EdgeListErrorCode, HeaderField};
pub use loader::{load_graph, load_graph_from_path};

#[cfg(test)]
mod tests;
