//! Result types returned by the solver.

use std::time::Duration;

use crate::graph::Graph;

/// An edge of the computed spanning tree.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TreeEdge {
    index: usize,
    v: usize,
    u: usize,
}

impl TreeEdge {
    /// Returns the edge's position in the input edge list.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> usize { self.index }

    /// Returns the smaller original endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn v(&self) -> usize { self.v }

    /// Returns the larger original endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn u(&self) -> usize { self.u }
}

/// A spanning tree in the order its edges were accumulated.
///
/// Edges chosen in earlier rounds come first; within a round they follow
/// input order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    edges: Vec<TreeEdge>,
    rounds: usize,
}

impl SpanningTree {
    pub(crate) fn from_solution(graph: &Graph, indices: Vec<usize>, rounds: usize) -> Self {
        let edges = indices
            .into_iter()
            .filter_map(|index| {
                graph.edge(index).map(|edge| TreeEdge {
                    index,
                    v: edge.v(),
                    u: edge.u(),
                })
            })
            .collect();
        Self { edges, rounds }
    }

    /// Returns the tree edges in accumulation order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the number of rounds the solver executed.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// Returns the number of tree edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the tree has no edges (single-vertex input).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over the input indices of the tree edges.
    pub fn edge_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().map(TreeEdge::index)
    }
}

/// A spanning tree together with the time spent computing it.
#[derive(Clone, Debug)]
pub struct SolveReport {
    tree: SpanningTree,
    elapsed: Duration,
}

impl SolveReport {
    pub(crate) fn new(tree: SpanningTree, elapsed: Duration) -> Self {
        Self { tree, elapsed }
    }

    /// Returns the computed tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &SpanningTree { &self.tree }

    /// Returns the wall-clock time of the round loop.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Consumes the report and returns the tree.
    #[must_use]
    pub fn into_tree(self) -> SpanningTree {
        self.tree
    }
}
