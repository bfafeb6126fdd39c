//! Parsing of the edge-list text format.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use strut_core::{Graph, GraphEdge};
use tracing::{debug, instrument};

use crate::{
    errors::{EdgeLineProblem, EdgeListError, HeaderField},
    lines::ContentLines,
};

/// Upper bound on edges reserved up front, so a hostile header cannot force
/// a huge allocation before any edge line is read.
const MAX_PREALLOCATED_EDGES: usize = 1 << 20;

/// Reads a graph from `reader`.
///
/// # Errors
/// Returns [`EdgeListError`] when the input is unreadable, a header or edge
/// line is malformed, the edge count disagrees with the number of edge lines,
/// or the resulting graph fails validation.
///
/// # Examples
/// ```
/// use strut_providers_edgelist::load_graph;
///
/// let graph = load_graph("3\n2\n0 1 1.5\n2 1 0.25\n".as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.edges()[1].v(), 1);
/// # Ok::<(), strut_providers_edgelist::EdgeListError>(())
/// ```
#[instrument(name = "edgelist.load", err, skip(reader))]
pub fn load_graph<R: BufRead>(reader: R) -> Result<Graph, EdgeListError> {
    let mut lines = ContentLines::new(reader);

    let vertex_count = read_header(&mut lines, HeaderField::VertexCount)?;
    let edge_count = read_header(&mut lines, HeaderField::EdgeCount)?;

    let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOCATED_EDGES));
    for found in 0..edge_count {
        let Some((line, text)) = lines.next_content()? else {
            return Err(EdgeListError::TruncatedEdges {
                expected: edge_count,
                found,
            });
        };
        let edge = parse_edge(text, vertex_count)
            .map_err(|reason| EdgeListError::InvalidEdge { line, reason })?;
        edges.push(edge);
    }

    if let Some((line, _)) = lines.next_content()? {
        return Err(EdgeListError::TrailingData { line });
    }

    debug!(vertex_count, edge_count, "edge list parsed");
    Ok(Graph::new(vertex_count, edges)?)
}

/// Opens `path` and reads a graph from it.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when the file cannot be opened, and the
/// errors of [`load_graph`] otherwise.
#[instrument(
    name = "edgelist.open",
    err,
    skip(path),
    fields(path = %path.as_ref().display()),
)]
pub fn load_graph_from_path(path: impl AsRef<Path>) -> Result<Graph, EdgeListError> {
    let file = File::open(path.as_ref())?;
    load_graph(BufReader::new(file))
}

fn read_header<R: BufRead>(
    lines: &mut ContentLines<R>,
    field: HeaderField,
) -> Result<usize, EdgeListError> {
    let Some((line, text)) = lines.next_content()? else {
        return Err(EdgeListError::MissingHeader { field });
    };
    let parsed = text.parse::<usize>().ok();
    match (field, parsed) {
        (HeaderField::VertexCount, Some(0)) | (_, None) => Err(EdgeListError::InvalidHeader {
            line,
            field,
            value: text.to_owned(),
        }),
        (_, Some(count)) => Ok(count),
    }
}

fn parse_edge(text: &str, vertex_count: usize) -> Result<GraphEdge, EdgeLineProblem> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [first, second, cost] = fields.as_slice() else {
        return Err(EdgeLineProblem::FieldCount {
            found: fields.len(),
        });
    };

    let first = parse_endpoint(first, vertex_count)?;
    let second = parse_endpoint(second, vertex_count)?;
    if cost.parse::<f32>().is_err() {
        return Err(EdgeLineProblem::Cost {
            token: (*cost).to_owned(),
        });
    }
    if first == second {
        return Err(EdgeLineProblem::SelfLoop { vertex: first });
    }
    Ok(GraphEdge::new(first, second))
}

fn parse_endpoint(token: &str, vertex_count: usize) -> Result<usize, EdgeLineProblem> {
    let vertex = token
        .parse::<usize>()
        .map_err(|_| EdgeLineProblem::Endpoint {
            token: token.to_owned(),
        })?;
    if vertex >= vertex_count {
        return Err(EdgeLineProblem::OutOfRange {
            vertex,
            vertex_count,
        });
    }
    Ok(vertex)
}
