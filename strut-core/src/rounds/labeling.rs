//! Component labelling over the edges selected in a round.
//!
//! Labels are relaxed by repeated min-propagation across the selected edges
//! until a full pass changes nothing, then compressed so that components are
//! numbered densely in ascending order of their smallest vertex id.

use crate::graph::WorkingGraph;

use super::selection::BestEdges;

/// Dense component ids for the vertices of one round.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentLabels {
    labels: Vec<usize>,
    component_count: usize,
}

impl ComponentLabels {
    /// Returns the dense component id of `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Returns the number of components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the label of every vertex in vertex order.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_slice(&self) -> &[usize] { &self.labels }

    pub(crate) fn label(&self, vertex: usize) -> usize {
        self.labels[vertex]
    }
}

/// Builds the labelling input from each vertex's chosen edge.
///
/// An edge chosen by one endpoint is always included. An edge chosen by both
/// endpoints is included only for the vertex stored as its `v` endpoint, so a
/// mutual edge appears exactly once.
pub(crate) fn label_input(graph: &WorkingGraph, best: &BestEdges) -> Vec<(usize, usize)> {
    best.iter()
        .filter_map(|(vertex, chosen)| {
            let edge = graph.edges.get(chosen?)?;
            let (v, u) = edge.endpoints()?;
            let include = match edge.selection_degree {
                1 => true,
                2 => vertex == v,
                _ => false,
            };
            include.then_some((v, u))
        })
        .collect()
}

/// Relaxes `labels` over `input` until a pass makes no change and returns the
/// number of passes, the final confirming pass included.
///
/// Labels only ever decrease, so the loop terminates; at the fixed point every
/// vertex carries the smallest vertex id of its component.
pub(crate) fn propagate_min_labels(labels: &mut [usize], input: &[(usize, usize)]) -> usize {
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        for &(x, y) in input {
            let c1 = labels[x];
            let c2 = labels[y];
            if c1 < c2 {
                labels[y] = labels[y].min(c1);
                changed = true;
            } else if c2 < c1 {
                labels[x] = labels[x].min(c2);
                changed = true;
            }
        }
        if !changed {
            return passes;
        }
    }
}

/// Renumbers converged labels densely.
///
/// Leaders (`label[i] == i`) receive ids `0..count` in ascending vertex order
/// in a first pass; every other vertex then resolves through its leader's new
/// id in a second pass.
pub(crate) fn compress_labels(mut labels: Vec<usize>) -> ComponentLabels {
    let mut is_leader = vec![false; labels.len()];
    let mut component_count = 0;
    for (vertex, label) in labels.iter_mut().enumerate() {
        if *label == vertex {
            *label = component_count;
            component_count += 1;
            is_leader[vertex] = true;
        }
    }

    for vertex in 0..labels.len() {
        if !is_leader[vertex] {
            let leader = labels[vertex];
            labels[vertex] = labels[leader];
        }
    }

    ComponentLabels {
        labels,
        component_count,
    }
}

pub(crate) fn label_sequential(graph: &WorkingGraph, best: &BestEdges) -> ComponentLabels {
    let input = label_input(graph, best);
    let mut labels: Vec<usize> = (0..graph.vertex_count).collect();
    let passes = propagate_min_labels(&mut labels, &input);
    tracing::trace!(passes, input_edges = input.len(), "labels converged");
    compress_labels(labels)
}
