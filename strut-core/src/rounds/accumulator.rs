//! Solution accumulation and the mutual-selection count.

use crate::graph::WorkingGraph;

/// Ordered, append-only list of original edge indices forming the tree.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SolutionEdgeSet {
    indices: Vec<usize>,
}

impl SolutionEdgeSet {
    /// Creates an empty set sized for a tree over `vertex_count` vertices,
    /// never reserving more slots than there are edges.
    #[must_use]
    pub fn with_tree_capacity(vertex_count: usize, edge_count: usize) -> Self {
        Self {
            indices: Vec::with_capacity(vertex_count.saturating_sub(1).min(edge_count)),
        }
    }

    /// Returns the accumulated edge indices in accumulation order.
    #[must_use]
    #[rustfmt::skip]
    pub fn indices(&self) -> &[usize] { &self.indices }

    /// Returns the number of accumulated edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` when nothing has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub(crate) fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl Extend<usize> for SolutionEdgeSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.indices.extend(iter);
    }
}

/// Appends every edge selected this round and returns how many of them were
/// selected by both endpoints.
///
/// The returned count drives termination (`== 1`) and becomes the next
/// round's vertex count.
pub(crate) fn accumulate_sequential(graph: &WorkingGraph, solution: &mut SolutionEdgeSet) -> usize {
    let mut mutual = 0;
    for (index, edge) in graph.edges.iter().enumerate() {
        if edge.selection_degree > 0 {
            solution.push(index);
            if edge.selection_degree == 2 {
                mutual += 1;
            }
        }
    }
    mutual
}
