//! Graph contraction: remap edges onto component ids and retire the edges
//! that became internal to a component.

use crate::graph::{EdgeState, WorkingEdge, WorkingGraph};

use super::labeling::ComponentLabels;

/// Rewrites one edge in place and clears its selection degree.
///
/// Endpoints are remapped as stored, without re-canonicalising, so `v` keeps
/// designating the same original side of the edge.
pub(crate) fn contract_edge(edge: &mut WorkingEdge, labels: &ComponentLabels) {
    if let EdgeState::Active { v, u } = edge.state {
        let x = labels.label(v);
        let y = labels.label(u);
        edge.state = if x == y {
            EdgeState::Inactive
        } else {
            EdgeState::Active { v: x, u: y }
        };
    }
    edge.selection_degree = 0;
}

pub(crate) fn contract_sequential(graph: &mut WorkingGraph, labels: &ComponentLabels) {
    for edge in &mut graph.edges {
        contract_edge(edge, labels);
    }
}
