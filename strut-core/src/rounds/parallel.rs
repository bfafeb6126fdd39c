//! Rayon-backed phase executor.
//!
//! Each phase spreads its per-vertex or per-edge work across the rayon pool
//! and returns only after the pool has joined, so the barrier between phases
//! is the same as in the sequential executor. Minimum-index selection and
//! min-label propagation are order independent, which keeps the output
//! identical to the sequential rendition.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::graph::{EdgeState, WorkingGraph};

use super::{
    PhaseExecutor,
    accumulator::SolutionEdgeSet,
    contraction::contract_edge,
    labeling::{ComponentLabels, compress_labels, label_input},
    selection::BestEdges,
};

const NO_EDGE: usize = usize::MAX;

/// Executes every phase on the global rayon thread pool.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ParallelExecutor;

impl PhaseExecutor for ParallelExecutor {
    fn select(&self, graph: &mut WorkingGraph) -> BestEdges {
        let slots: Vec<AtomicUsize> = (0..graph.vertex_count)
            .map(|_| AtomicUsize::new(NO_EDGE))
            .collect();

        graph
            .edges
            .par_iter()
            .enumerate()
            .for_each(|(index, edge)| {
                if let EdgeState::Active { v, u } = edge.state {
                    slots[v].fetch_min(index, Ordering::Relaxed);
                    slots[u].fetch_min(index, Ordering::Relaxed);
                }
            });

        let best = BestEdges::from_slots(
            slots
                .into_iter()
                .map(|slot| {
                    let index = slot.into_inner();
                    (index != NO_EDGE).then_some(index)
                })
                .collect(),
        );

        // Per-edge reduction of the per-vertex choices: no shared counters.
        graph
            .edges
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, edge)| {
                if let EdgeState::Active { v, u } = edge.state {
                    let chosen_by_v = u8::from(best.get(v) == Some(index));
                    let chosen_by_u = u8::from(best.get(u) == Some(index));
                    edge.selection_degree = edge
                        .selection_degree
                        .saturating_add(chosen_by_v + chosen_by_u);
                }
            });

        best
    }

    fn accumulate(&self, graph: &WorkingGraph, solution: &mut SolutionEdgeSet) -> usize {
        let selected: Vec<(usize, u8)> = graph
            .edges
            .par_iter()
            .enumerate()
            .filter(|(_, edge)| edge.selection_degree > 0)
            .map(|(index, edge)| (index, edge.selection_degree))
            .collect();

        let mutual = selected.iter().filter(|(_, degree)| *degree == 2).count();
        solution.extend(selected.into_iter().map(|(index, _)| index));
        mutual
    }

    fn label(&self, graph: &WorkingGraph, best: &BestEdges) -> ComponentLabels {
        let input = label_input(graph, best);
        let labels: Vec<AtomicUsize> = (0..graph.vertex_count).map(AtomicUsize::new).collect();

        let mut passes = 0_usize;
        loop {
            passes += 1;
            let changed = AtomicBool::new(false);
            input.par_iter().for_each(|&(x, y)| {
                let c1 = labels[x].load(Ordering::Relaxed);
                let c2 = labels[y].load(Ordering::Relaxed);
                if c1 < c2 {
                    labels[y].fetch_min(c1, Ordering::Relaxed);
                    changed.store(true, Ordering::Relaxed);
                } else if c2 < c1 {
                    labels[x].fetch_min(c2, Ordering::Relaxed);
                    changed.store(true, Ordering::Relaxed);
                }
            });
            if !changed.into_inner() {
                break;
            }
        }
        tracing::trace!(passes, input_edges = input.len(), "labels converged");

        compress_labels(labels.into_iter().map(AtomicUsize::into_inner).collect())
    }

    fn contract(&self, graph: &mut WorkingGraph, labels: &ComponentLabels) {
        graph
            .edges
            .par_iter_mut()
            .for_each(|edge| contract_edge(edge, labels));
    }
}
