//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and extra edges between distinct vertices are added on top. The
//! edge list is then shuffled, since edge order decides which edge each
//! vertex selects.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use strut_core::{Graph, GraphEdge, StrutError};

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges added beyond the `vertex_count - 1` tree edges.
    pub extra_edges: usize,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Debug, thiserror::Error)]
pub enum SyntheticGraphError {
    /// The graph must contain at least one vertex.
    #[error("vertex_count must be greater than zero")]
    ZeroVertices,
    /// Extra edges need two distinct endpoints.
    #[error("{extra_edges} extra edges requested for a single-vertex graph")]
    ExtraEdgesWithoutPair {
        /// Number of extra edges requested.
        extra_edges: usize,
    },
    /// The generated edge list was rejected by the graph constructor.
    #[error("generated graph is invalid: {0}")]
    Graph(#[from] StrutError),
}

/// Generator for connected benchmark graphs.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntheticGraph;

impl SyntheticGraph {
    /// Generates a connected graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticGraphError`] when the configuration cannot produce
    /// a valid graph.
    ///
    /// # Examples
    /// ```
    /// use strut_benches::source::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 16,
    ///     extra_edges: 8,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edge_count(), 23);
    /// # Ok::<(), strut_benches::source::SyntheticGraphError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticGraphError> {
        let SyntheticGraphConfig {
            vertex_count,
            extra_edges,
            seed,
        } = *config;
        if vertex_count == 0 {
            return Err(SyntheticGraphError::ZeroVertices);
        }
        if vertex_count == 1 && extra_edges > 0 {
            return Err(SyntheticGraphError::ExtraEdgesWithoutPair { extra_edges });
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut edges =
            Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra_edges));
        edges.extend((1..vertex_count).map(|vertex| {
            let parent = rng.gen_range(0..vertex);
            GraphEdge::new(parent, vertex)
        }));
        edges.extend((0..extra_edges).map(|_| random_pair(vertex_count, &mut rng)));
        edges.shuffle(&mut rng);

        Ok(Graph::new(vertex_count, edges)?)
    }
}

fn random_pair(vertex_count: usize, rng: &mut SmallRng) -> GraphEdge {
    let first = rng.gen_range(0..vertex_count);
    let second = rng.gen_range(0..vertex_count - 1);
    if second >= first {
        GraphEdge::new(first, second + 1)
    } else {
        GraphEdge::new(first, second)
    }
}
