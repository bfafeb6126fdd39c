//! Round engine: selection, accumulation, labelling and contraction.
//!
//! A round runs the four phases in strict order. Each phase is internally
//! data parallel (independent per-vertex or per-edge work) but reads the
//! complete output of the phase before it, so a [`PhaseExecutor`] call only
//! returns once its whole phase is done. Executors differ solely in how the
//! work inside a phase is scheduled.
//!
//! The loop ends in the first round where exactly one edge is chosen by both
//! of its endpoints. In every other round the number of such mutual edges
//! equals the number of components formed by the selected edges and becomes
//! the next round's vertex count.

pub(crate) mod accumulator;
pub(crate) mod contraction;
pub(crate) mod labeling;
#[cfg(feature = "parallel")]
pub(crate) mod parallel;
pub(crate) mod selection;

use std::num::NonZeroUsize;

use tracing::{debug, instrument, warn};

use crate::{Result, error::StrutError, graph::WorkingGraph};

use self::{
    accumulator::{SolutionEdgeSet, accumulate_sequential},
    contraction::contract_sequential,
    labeling::{ComponentLabels, label_sequential},
    selection::{BestEdges, select_sequential},
};

/// Runs the work of each phase. Implementations must not return from a phase
/// before all of its work is complete.
pub(crate) trait PhaseExecutor {
    /// Chooses one edge per vertex and records selection degrees.
    fn select(&self, graph: &mut WorkingGraph) -> BestEdges;

    /// Appends selected edges to `solution` and returns the mutual count.
    fn accumulate(&self, graph: &WorkingGraph, solution: &mut SolutionEdgeSet) -> usize;

    /// Labels the components induced by the selected edges.
    fn label(&self, graph: &WorkingGraph, best: &BestEdges) -> ComponentLabels;

    /// Remaps edges onto components and resets selection degrees.
    fn contract(&self, graph: &mut WorkingGraph, labels: &ComponentLabels);
}

/// Executes every phase on the calling thread.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SequentialExecutor;

impl PhaseExecutor for SequentialExecutor {
    fn select(&self, graph: &mut WorkingGraph) -> BestEdges {
        select_sequential(graph)
    }

    fn accumulate(&self, graph: &WorkingGraph, solution: &mut SolutionEdgeSet) -> usize {
        accumulate_sequential(graph, solution)
    }

    fn label(&self, graph: &WorkingGraph, best: &BestEdges) -> ComponentLabels {
        label_sequential(graph, best)
    }

    fn contract(&self, graph: &mut WorkingGraph, labels: &ComponentLabels) {
        contract_sequential(graph, labels);
    }
}

/// Result of driving the round loop to completion.
#[derive(Clone, Debug)]
pub(crate) struct RoundsOutcome {
    pub(crate) solution: SolutionEdgeSet,
    pub(crate) rounds: usize,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum RoundStep {
    Continue,
    Finished,
}

/// Drives rounds until a single mutual edge remains.
///
/// A graph with a single vertex is already spanned by the empty tree and
/// runs no rounds. A graph with fewer than `n - 1` edges is rejected before
/// any round runs.
pub(crate) fn run_rounds<E: PhaseExecutor + ?Sized>(
    executor: &E,
    graph: &mut WorkingGraph,
    max_rounds: Option<NonZeroUsize>,
) -> Result<RoundsOutcome> {
    let vertex_count = graph.vertex_count();
    let edge_count = graph.edges().len();
    if edge_count < vertex_count.saturating_sub(1) {
        warn!(
            vertex_count,
            edge_count, "too few edges to connect every vertex, graph is disconnected"
        );
        return Err(StrutError::DisconnectedGraph {
            round: 0,
            vertex_count,
        });
    }

    let mut solution = SolutionEdgeSet::with_tree_capacity(vertex_count, edge_count);
    let mut rounds = 0;

    while graph.vertex_count() > 1 {
        if let Some(limit) = max_rounds.filter(|limit| rounds >= limit.get()) {
            return Err(StrutError::RoundLimitExceeded {
                max_rounds: limit.get(),
            });
        }
        let step = run_round(executor, graph, &mut solution, rounds)?;
        rounds += 1;
        if step == RoundStep::Finished {
            break;
        }
    }

    Ok(RoundsOutcome { solution, rounds })
}

#[instrument(
    name = "core.round",
    level = "debug",
    err,
    skip(executor, graph, solution),
    fields(vertices = graph.vertex_count()),
)]
fn run_round<E: PhaseExecutor + ?Sized>(
    executor: &E,
    graph: &mut WorkingGraph,
    solution: &mut SolutionEdgeSet,
    round: usize,
) -> Result<RoundStep> {
    let vertex_count = graph.vertex_count();

    let best = executor.select(graph);
    if let Some(vertex) = best.first_unselected() {
        warn!(
            round,
            vertex, vertex_count, "vertex has no active incident edge, graph is disconnected"
        );
        return Err(StrutError::DisconnectedGraph {
            round,
            vertex_count,
        });
    }
    debug!(best_edges = best.len(), "best edges selected");

    let mutual = executor.accumulate(graph, solution);
    debug!(mutual, solution_size = solution.len(), "selection accumulated");
    if mutual == 1 {
        return Ok(RoundStep::Finished);
    }
    if mutual == 0 || mutual >= vertex_count {
        warn!(round, mutual, vertex_count, "round made no progress");
        return Err(StrutError::DisconnectedGraph {
            round,
            vertex_count,
        });
    }

    let labels = executor.label(graph, &best);
    let components = labels.component_count();
    debug!(components, "components labelled");
    if components != mutual {
        return Err(StrutError::ComponentCountMismatch {
            round,
            mutual,
            components,
        });
    }

    executor.contract(graph, &labels);
    graph.set_vertex_count(mutual);
    debug!(
        active_edges = graph.active_edge_count(),
        "graph contracted"
    );
    Ok(RoundStep::Continue)
}


#[cfg(test)]
mod property;
