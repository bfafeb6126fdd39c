//! Strut core library.
//!
//! Computes a spanning tree of a connected undirected graph with a
//! round-based edge selection and contraction scheme in the style of
//! Borůvka. In each round every vertex selects its lowest-indexed active
//! edge, the selected edges join the solution, the components they induce
//! are labelled, and the graph is contracted onto those components. The loop
//! stops once a single edge is selected by both of its endpoints.
//!
//! Edge costs are not considered: ties are broken by input order, so the
//! result is *a* spanning tree, deterministic for a fixed edge order.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod result;
mod rounds;
mod solver;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    builder::{ExecutionStrategy, SpanningTreeSolverBuilder},
    error::{Result, StrutError, StrutErrorCode},
    graph::{EdgeState, Graph, GraphEdge, WorkingEdge, WorkingGraph},
    result::{SolveReport, SpanningTree, TreeEdge},
    rounds::{
        accumulator::SolutionEdgeSet, labeling::ComponentLabels, selection::BestEdges,
    },
    solver::{SpanningTreeSolver, spanning_tree},
};
