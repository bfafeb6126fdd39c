//! Graph model shared by the loader and the round engine.
//!
//! [`Graph`] is the immutable input as loaded from disk. The round engine
//! copies it into a [`WorkingGraph`], an arena of edges indexed by their
//! original position that shrinks by relabelling and tagging edges inactive
//! rather than by removing them.

use crate::{Result, error::StrutError};

/// An undirected input edge in canonical form (`v <= u`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GraphEdge {
    v: usize,
    u: usize,
}

impl GraphEdge {
    /// Creates an edge, swapping the endpoints so that `v <= u`.
    ///
    /// # Examples
    /// ```
    /// use strut_core::GraphEdge;
    ///
    /// let edge = GraphEdge::new(7, 4);
    /// assert_eq!((edge.v(), edge.u()), (4, 7));
    /// ```
    #[must_use]
    pub const fn new(first: usize, second: usize) -> Self {
        if first <= second {
            Self {
                v: first,
                u: second,
            }
        } else {
            Self {
                v: second,
                u: first,
            }
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v(&self) -> usize { self.v }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn u(&self) -> usize { self.u }
}

/// A validated undirected multigraph.
///
/// Parallel edges are permitted; self-loops are rejected because a loop is
/// selected by a single endpoint and would enter the solution as a cycle.
///
/// # Examples
/// ```
/// use strut_core::{Graph, GraphEdge};
///
/// let graph = Graph::new(3, vec![GraphEdge::new(0, 1), GraphEdge::new(2, 1)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), strut_core::StrutError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<GraphEdge>,
}

impl Graph {
    /// Validates and constructs a graph.
    ///
    /// # Errors
    /// Returns [`StrutError::EmptyGraph`] when `vertex_count == 0`,
    /// [`StrutError::InvalidVertex`] when an endpoint is `>= vertex_count`,
    /// and [`StrutError::SelfLoop`] when both endpoints coincide.
    pub fn new(vertex_count: usize, edges: Vec<GraphEdge>) -> Result<Self> {
        if vertex_count == 0 {
            return Err(StrutError::EmptyGraph);
        }
        for (index, edge) in edges.iter().enumerate() {
            // `u` is the larger endpoint, so checking it covers both.
            if edge.u >= vertex_count {
                return Err(StrutError::InvalidVertex {
                    edge: index,
                    vertex: edge.u,
                    vertex_count,
                });
            }
            if edge.v == edge.u {
                return Err(StrutError::SelfLoop {
                    edge: index,
                    vertex: edge.v,
                });
            }
        }
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices declared at load time.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[GraphEdge] { &self.edges }

    /// Returns the edge stored at `index`, if any.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<GraphEdge> {
        self.edges.get(index).copied()
    }
}

/// Liveness of an edge in the working graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeState {
    /// The edge still joins two distinct contracted vertices.
    Active {
        /// Endpoint treated as "first" by mutual-edge disambiguation.
        v: usize,
        /// The other endpoint.
        u: usize,
    },
    /// The edge became internal to a component and is skipped from now on.
    Inactive,
}

/// An edge slot in the working arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WorkingEdge {
    pub(crate) state: EdgeState,
    pub(crate) selection_degree: u8,
}

impl WorkingEdge {
    /// Returns the liveness state and current endpoints.
    #[must_use]
    #[rustfmt::skip]
    pub const fn state(&self) -> EdgeState { self.state }

    /// Returns how many endpoints chose this edge in the current round.
    #[must_use]
    #[rustfmt::skip]
    pub const fn selection_degree(&self) -> u8 { self.selection_degree }

    /// Returns the endpoints while the edge is active.
    #[must_use]
    pub const fn endpoints(&self) -> Option<(usize, usize)> {
        match self.state {
            EdgeState::Active { v, u } => Some((v, u)),
            EdgeState::Inactive => None,
        }
    }
}

/// The graph contracted in place across rounds.
///
/// The edge count never changes; only the vertex count shrinks and edges
/// move from [`EdgeState::Active`] to [`EdgeState::Inactive`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WorkingGraph {
    pub(crate) vertex_count: usize,
    pub(crate) edges: Vec<WorkingEdge>,
}

impl WorkingGraph {
    /// Copies `graph` into a fresh arena with every edge active.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let edges = graph
            .edges()
            .iter()
            .map(|edge| WorkingEdge {
                state: EdgeState::Active {
                    v: edge.v(),
                    u: edge.u(),
                },
                selection_degree: 0,
            })
            .collect();
        Self {
            vertex_count: graph.vertex_count(),
            edges,
        }
    }

    /// Returns the number of contracted vertices alive in the current round.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the fixed-size edge arena.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WorkingEdge] { &self.edges }

    /// Counts edges that are still active.
    #[must_use]
    pub fn active_edge_count(&self) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.endpoints().is_some())
            .count()
    }

    pub(crate) fn set_vertex_count(&mut self, vertex_count: usize) {
        self.vertex_count = vertex_count;
    }
}
