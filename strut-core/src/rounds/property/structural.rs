//! Structural invariants of the produced spanning tree.
//!
//! For connected inputs the tree must contain exactly `n - 1` distinct input
//! edges, be acyclic, span every vertex, and be produced within
//! `floor(log2(n))` rounds. Disconnected inputs must be rejected.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{ExecutionStrategy, SpanningTree, SpanningTreeSolverBuilder, StrutError};

use super::oracle::check_forest;
use super::types::GraphFixture;

/// Runs the structural invariants property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let solver = SpanningTreeSolverBuilder::new()
        .with_execution_strategy(ExecutionStrategy::Sequential)
        .build()
        .map_err(|err| TestCaseError::fail(format!("solver construction failed: {err}")))?;

    match (fixture.topology.is_connected(), solver.solve(&graph)) {
        (true, Ok(report)) => verify_tree(fixture, report.tree()),
        (false, Err(StrutError::DisconnectedGraph { vertex_count, .. })) => {
            if vertex_count < 2 || vertex_count > fixture.vertex_count {
                return Err(TestCaseError::fail(format!(
                    "stalled vertex count {vertex_count} out of range ({})",
                    fixture.describe(),
                )));
            }
            Ok(())
        }
        (true, Err(err)) => Err(TestCaseError::fail(format!(
            "connected graph rejected: {err} ({})",
            fixture.describe(),
        ))),
        (false, Ok(report)) => Err(TestCaseError::fail(format!(
            "disconnected graph produced a {}-edge tree ({})",
            report.tree().len(),
            fixture.describe(),
        ))),
        (false, Err(err)) => Err(TestCaseError::fail(format!(
            "disconnected graph failed with the wrong error: {err} ({})",
            fixture.describe(),
        ))),
    }
}

fn verify_tree(fixture: &GraphFixture, tree: &SpanningTree) -> TestCaseResult {
    let n = fixture.vertex_count;
    if tree.len() != n - 1 {
        return Err(TestCaseError::fail(format!(
            "tree has {} edges, expected {} ({})",
            tree.len(),
            n - 1,
            fixture.describe(),
        )));
    }

    let mut seen = HashSet::with_capacity(tree.len());
    for edge in tree.edges() {
        if !seen.insert(edge.index()) {
            return Err(TestCaseError::fail(format!(
                "edge index {} reported twice ({})",
                edge.index(),
                fixture.describe(),
            )));
        }
        let Some(&(a, b)) = fixture.pairs.get(edge.index()) else {
            return Err(TestCaseError::fail(format!(
                "edge index {} out of range ({})",
                edge.index(),
                fixture.describe(),
            )));
        };
        if (edge.v(), edge.u()) != (a.min(b), a.max(b)) {
            return Err(TestCaseError::fail(format!(
                "edge {} reports endpoints ({}, {}) but input has ({a}, {b})",
                edge.index(),
                edge.v(),
                edge.u(),
            )));
        }
    }

    let endpoints: Vec<(usize, usize)> = tree.edges().iter().map(|e| (e.v(), e.u())).collect();
    let check = check_forest(n, &endpoints);
    if !check.is_spanning_tree() {
        return Err(TestCaseError::fail(format!(
            "edges do not form a spanning tree: {check:?} ({})",
            fixture.describe(),
        )));
    }

    let bound = n.ilog2() as usize;
    if tree.rounds() > bound {
        return Err(TestCaseError::fail(format!(
            "{} rounds exceeds the bound of {bound} ({})",
            tree.rounds(),
            fixture.describe(),
        )));
    }
    Ok(())
}
