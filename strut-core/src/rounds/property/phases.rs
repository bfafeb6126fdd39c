//! Per-round phase invariants.
//!
//! Drives the phases by hand on connected fixtures and checks, after every
//! round, that:
//!
//! - the mutual count equals the number of components formed by the selected
//!   edges, computed independently with union-find;
//! - the labelling induces exactly that partition, with every label no
//!   larger than the vertex it names;
//! - propagation is already at its fixed point when rerun on the component
//!   minima;
//! - every active edge joins the super-vertices that now own its original
//!   endpoints, and every retired edge lies inside one;
//! - the vertex count at least halves.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    ComponentLabels, EdgeState, SolutionEdgeSet,
    graph::WorkingGraph,
    test_utils::find_root,
};

use super::super::{
    PhaseExecutor, SequentialExecutor,
    labeling::{label_input, propagate_min_labels},
};
use super::types::GraphFixture;

/// Runs the phase invariants property for the given fixture.
///
/// Disconnected fixtures are skipped; their rejection is covered by the
/// structural property.
pub(super) fn run_phase_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    if !fixture.topology.is_connected() {
        return Ok(());
    }
    let graph = fixture.graph();
    let mut working = WorkingGraph::from_graph(&graph);
    let mut owner: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut solution = SolutionEdgeSet::default();
    let executor = SequentialExecutor;

    for round in 0.. {
        let n = working.vertex_count();
        let best = executor.select(&mut working);
        if let Some(vertex) = best.first_unselected() {
            return fail(round, fixture, format!("vertex {vertex} selected no edge"));
        }

        let selected: Vec<(usize, usize)> = best
            .iter()
            .filter_map(|(_, chosen)| working.edges()[chosen?].endpoints())
            .collect();
        let (expected_components, roots) = union_find_partition(n, &selected);

        let mutual = executor.accumulate(&working, &mut solution);
        if mutual != expected_components {
            return fail(
                round,
                fixture,
                format!("mutual count {mutual} but {expected_components} components"),
            );
        }
        if mutual == 1 {
            break;
        }
        if mutual > n / 2 {
            return fail(round, fixture, format!("{n} vertices contracted to {mutual}"));
        }

        let labels = executor.label(&working, &best);
        check_partition(round, fixture, &labels, &roots)?;
        check_fixed_point(round, fixture, &working, &best, &labels)?;

        executor.contract(&mut working, &labels);
        working.set_vertex_count(mutual);
        for slot in &mut owner {
            *slot = labels.as_slice()[*slot];
        }
        check_membership(round, fixture, &working, &owner)?;
    }

    if solution.len() != fixture.vertex_count - 1 {
        return Err(TestCaseError::fail(format!(
            "accumulated {} edges, expected {} ({})",
            solution.len(),
            fixture.vertex_count - 1,
            fixture.describe(),
        )));
    }
    Ok(())
}

fn union_find_partition(n: usize, edges: &[(usize, usize)]) -> (usize, Vec<usize>) {
    let mut parent: Vec<usize> = (0..n).collect();
    for &(a, b) in edges {
        let ra = find_root(&mut parent, a);
        let rb = find_root(&mut parent, b);
        if ra != rb {
            parent[rb] = ra;
        }
    }
    let roots: Vec<usize> = (0..n).map(|v| find_root(&mut parent, v)).collect();
    let count = roots.iter().enumerate().filter(|&(v, &r)| v == r).count();
    (count, roots)
}

/// Checks that labels and union-find roots describe the same partition by
/// requiring a bijection between them.
fn check_partition(
    round: usize,
    fixture: &GraphFixture,
    labels: &ComponentLabels,
    roots: &[usize],
) -> TestCaseResult {
    let mut root_to_label: HashMap<usize, usize> = HashMap::new();
    let mut label_to_root: HashMap<usize, usize> = HashMap::new();

    for (vertex, (&label, &root)) in labels.as_slice().iter().zip(roots).enumerate() {
        if label >= labels.component_count() || label > vertex {
            return fail(round, fixture, format!("vertex {vertex} has label {label}"));
        }
        let forward = *root_to_label.entry(root).or_insert(label);
        let backward = *label_to_root.entry(label).or_insert(root);
        if forward != label || backward != root {
            return fail(
                round,
                fixture,
                format!("vertex {vertex} splits or merges a component"),
            );
        }
    }
    Ok(())
}

fn check_fixed_point(
    round: usize,
    fixture: &GraphFixture,
    working: &WorkingGraph,
    best: &crate::BestEdges,
    labels: &ComponentLabels,
) -> TestCaseResult {
    let mut minima: HashMap<usize, usize> = HashMap::new();
    for (vertex, &label) in labels.as_slice().iter().enumerate() {
        minima.entry(label).or_insert(vertex);
    }
    let mut converged: Vec<usize> = labels.as_slice().iter().map(|l| minima[l]).collect();
    let before = converged.clone();

    let passes = propagate_min_labels(&mut converged, &label_input(working, best));
    if passes != 1 || converged != before {
        return fail(
            round,
            fixture,
            format!("propagation moved after convergence ({passes} passes)"),
        );
    }
    Ok(())
}

fn check_membership(
    round: usize,
    fixture: &GraphFixture,
    working: &WorkingGraph,
    owner: &[usize],
) -> TestCaseResult {
    for (index, (edge, &(a, b))) in working.edges().iter().zip(&fixture.pairs).enumerate() {
        let (oa, ob) = (owner[a], owner[b]);
        match edge.state() {
            EdgeState::Active { v, u } => {
                if (v, u) != (oa, ob) && (v, u) != (ob, oa) {
                    return fail(
                        round,
                        fixture,
                        format!("edge {index} joins ({v}, {u}) but its ends live in ({oa}, {ob})"),
                    );
                }
                if v == u {
                    return fail(round, fixture, format!("edge {index} is an active self-loop"));
                }
            }
            EdgeState::Inactive if oa != ob => {
                return fail(
                    round,
                    fixture,
                    format!("edge {index} retired while joining {oa} and {ob}"),
                );
            }
            EdgeState::Inactive => {}
        }
    }
    Ok(())
}

fn fail(round: usize, fixture: &GraphFixture, message: String) -> TestCaseResult {
    Err(TestCaseError::fail(format!(
        "round {round}: {message} ({})",
        fixture.describe()
    )))
}
