use strut_core::{Graph, GraphEdge};

/// Endpoint pairs of the eight-vertex reference graph in file order.
pub const REFERENCE_EDGES: [(usize, usize); 16] = [
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

#[must_use]
pub fn graph_from_pairs(vertex_count: usize, pairs: &[(usize, usize)]) -> Graph {
    let edges = pairs
        .iter()
        .map(|&(first, second)| GraphEdge::new(first, second))
        .collect();
    Graph::new(vertex_count, edges).expect("test graph must be valid")
}

#[must_use]
pub fn reference_graph() -> Graph {
    graph_from_pairs(8, &REFERENCE_EDGES)
}
