//! Shared test utilities for `strut-core`.

use proptest::test_runner::Config as ProptestConfig;
use strut_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Graph, GraphEdge};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `STRUT_PBT_CASES` and
/// `STRUT_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// The eight-vertex, sixteen-edge graph used as the reference scenario, with
/// endpoints listed in file order.
pub(crate) const MOTIVATING_EDGES: [(usize, usize); 16] = [
    (4, 5),
    (4, 7),
    (5, 7),
    (0, 7),
    (1, 5),
    (0, 4),
    (2, 3),
    (1, 7),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 7),
    (6, 2),
    (3, 6),
    (6, 0),
    (6, 4),
];

pub(crate) fn motivating_graph() -> Graph {
    let edges = MOTIVATING_EDGES
        .iter()
        .map(|&(first, second)| GraphEdge::new(first, second))
        .collect();
    match Graph::new(8, edges) {
        Ok(graph) => graph,
        Err(err) => panic!("motivating graph must be valid: {err}"),
    }
}

/// Path-compressing find for union-find verification.
pub(crate) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of `vertex_count` vertices joined by `edges`
/// with a plain union-find, independently of the round engine.
pub(crate) fn count_components(vertex_count: usize, edges: &[(usize, usize)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(a, b) in edges {
        let ra = find_root(&mut parent, a);
        let rb = find_root(&mut parent, b);
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }
    components
}
