//! Unit tests for the edge-list loader.
pub(crate) use super::{EdgeLineProblem, EdgeListError, EdgeListErrorCode, HeaderField};
