use std::{fmt, io};

use strut_core::StrutError;
use thiserror::Error;

/// Errors raised while reading an edge-list file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The input ended before the named header line.
    #[error("missing {field} header line")]
    MissingHeader {
        /// Header that was expected next.
        field: HeaderField,
    },
    /// A header line was not a single acceptable count.
    #[error("line {line}: invalid {field} `{value}`")]
    InvalidHeader {
        /// 1-based line number.
        line: usize,
        /// Header being parsed.
        field: HeaderField,
        /// Offending line content, trimmed.
        value: String,
    },
    /// An edge line could not be parsed or validated.
    #[error("line {line}: {reason}")]
    InvalidEdge {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: EdgeLineProblem,
    },
    /// Fewer edge lines were present than the header announced.
    #[error("expected {expected} edges but the input ended after {found}")]
    TruncatedEdges {
        /// Edge count from the header.
        expected: usize,
        /// Edge lines actually read.
        found: usize,
    },
    /// Non-blank content followed the announced edges.
    #[error("line {line}: unexpected data after the last edge")]
    TrailingData {
        /// 1-based line number of the first extra line.
        line: usize,
    },
    /// The parsed graph failed core validation.
    #[error(transparent)]
    Graph(#[from] StrutError),
}

/// The two header lines of the format.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HeaderField {
    /// First line: number of vertices, at least 1.
    VertexCount,
    /// Second line: number of edge lines that follow.
    EdgeCount,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VertexCount => "vertex count",
            Self::EdgeCount => "edge count",
        })
    }
}

/// Reasons an individual edge line is rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum EdgeLineProblem {
    /// The line did not hold exactly `u v cost`.
    #[error("expected `u v cost` but found {found} fields")]
    FieldCount {
        /// Number of whitespace-separated fields on the line.
        found: usize,
    },
    /// An endpoint was not a non-negative integer.
    #[error("`{token}` is not a vertex id")]
    Endpoint {
        /// Offending token.
        token: String,
    },
    /// The cost was not a number.
    #[error("`{token}` is not a cost")]
    Cost {
        /// Offending token.
        token: String,
    },
    /// An endpoint was outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for {vertex_count} vertices")]
    OutOfRange {
        /// The out-of-range id.
        vertex: usize,
        /// Declared vertex count.
        vertex_count: usize,
    },
    /// Both endpoints named the same vertex.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// The repeated id.
        vertex: usize,
    },
}

strut_core::define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// Reading the input failed.
        Io => Io { .. } => "EDGELIST_IO",
        /// A header line was missing.
        MissingHeader => MissingHeader { .. } => "EDGELIST_MISSING_HEADER",
        /// A header line was malformed.
        InvalidHeader => InvalidHeader { .. } => "EDGELIST_INVALID_HEADER",
        /// An edge line was malformed.
        InvalidEdge => InvalidEdge { .. } => "EDGELIST_INVALID_EDGE",
        /// The input held fewer edges than announced.
        TruncatedEdges => TruncatedEdges { .. } => "EDGELIST_TRUNCATED_EDGES",
        /// The input held extra lines after the edges.
        TrailingData => TrailingData { .. } => "EDGELIST_TRAILING_DATA",
        /// Core graph validation failed.
        Graph => Graph { .. } => "EDGELIST_GRAPH",
    }
}

impl EdgeListError {
    /// Returns the 1-based line the error refers to, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidHeader { line, .. }
            | Self::InvalidEdge { line, .. }
            | Self::TrailingData { line } => Some(*line),
            _ => None,
        }
    }
}
