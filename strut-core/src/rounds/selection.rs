//! Edge selection: every active vertex picks its lowest-indexed active edge.

use crate::graph::{EdgeState, WorkingGraph};

/// The edge each vertex chose in the current round.
///
/// Rebuilt from scratch every round; `None` marks a vertex with no active
/// incident edge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BestEdges {
    slots: Vec<Option<usize>>,
}

impl BestEdges {
    pub(crate) fn from_slots(slots: Vec<Option<usize>>) -> Self {
        Self { slots }
    }

    /// Returns the index of the edge chosen by `vertex`.
    #[must_use]
    pub fn get(&self, vertex: usize) -> Option<usize> {
        self.slots.get(vertex).copied().flatten()
    }

    /// Returns the number of vertices covered by this round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the round had no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the smallest vertex id that found no active incident edge.
    #[must_use]
    pub fn first_unselected(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Iterates over `(vertex, chosen edge)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
        self.slots.iter().copied().enumerate()
    }
}

/// Scans the arena once in index order and records, for each endpoint, the
/// first active edge seen. Each chosen edge then gains one degree per
/// endpoint that chose it.
pub(crate) fn select_sequential(graph: &mut WorkingGraph) -> BestEdges {
    let mut slots: Vec<Option<usize>> = vec![None; graph.vertex_count];

    for (index, edge) in graph.edges.iter().enumerate() {
        if let EdgeState::Active { v, u } = edge.state {
            record_candidate(&mut slots[v], index);
            record_candidate(&mut slots[u], index);
        }
    }

    for &index in slots.iter().flatten() {
        let edge = &mut graph.edges[index];
        edge.selection_degree = edge.selection_degree.saturating_add(1);
    }

    BestEdges::from_slots(slots)
}

fn record_candidate(slot: &mut Option<usize>, index: usize) {
    if slot.is_none_or(|current| index < current) {
        *slot = Some(index);
    }
}
