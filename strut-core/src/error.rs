//! Error types for the strut core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use thiserror::Error;

use crate::builder::ExecutionStrategy;

/// Generates a stable code enum for an error type together with `as_str`,
/// `Display` and the error's `code()` accessor.
///
/// Provider crates use it so every code enum in the workspace has the same
/// shape.
#[doc(hidden)]
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when building a graph or computing its spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StrutError {
    /// The graph declared zero vertices.
    #[error("cannot compute a spanning tree for a graph without vertices")]
    EmptyGraph,
    /// An edge referenced a vertex id outside `0..vertex_count`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// Index of the offending edge in input order.
        edge: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// Number of vertices declared by the graph.
        vertex_count: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Index of the offending edge in input order.
        edge: usize,
        /// The vertex the loop is attached to.
        vertex: usize,
    },
    /// The input graph has more than one connected component.
    #[error(
        "graph is disconnected: round {round} stalled with {vertex_count} unmerged components"
    )]
    DisconnectedGraph {
        /// Zero-based round in which the stall was detected.
        round: usize,
        /// Number of contracted vertices alive when the stall was detected.
        vertex_count: usize,
    },
    /// The mutual-selection count disagreed with the labelled component count.
    #[error(
        "round {round}: mutual selection count {mutual} differs from component count {components}"
    )]
    ComponentCountMismatch {
        /// Zero-based round in which the divergence was observed.
        round: usize,
        /// Number of edges chosen by both endpoints in the round.
        mutual: usize,
        /// Number of components produced by labelling.
        components: usize,
    },
    /// The solver exhausted its configured round budget.
    #[error("spanning tree did not converge within {max_rounds} rounds")]
    RoundLimitExceeded {
        /// The configured limit.
        max_rounds: usize,
    },
    /// The configured round limit was zero.
    #[error("max_rounds must be at least 1 (got {got})")]
    InvalidMaxRounds {
        /// The invalid limit supplied by the caller.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`StrutError`] variants.
    enum StrutErrorCode for StrutError {
        /// The graph declared zero vertices.
        EmptyGraph => EmptyGraph => "STRUT_EMPTY_GRAPH",
        /// An edge referenced a vertex id outside the graph.
        InvalidVertex => InvalidVertex { .. } => "STRUT_INVALID_VERTEX",
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "STRUT_SELF_LOOP",
        /// The input graph has more than one connected component.
        DisconnectedGraph => DisconnectedGraph { .. } => "STRUT_DISCONNECTED_GRAPH",
        /// The mutual-selection count disagreed with the component count.
        ComponentCountMismatch => ComponentCountMismatch { .. } => "STRUT_COMPONENT_COUNT_MISMATCH",
        /// The solver exhausted its configured round budget.
        RoundLimitExceeded => RoundLimitExceeded { .. } => "STRUT_ROUND_LIMIT_EXCEEDED",
        /// The configured round limit was zero.
        InvalidMaxRounds => InvalidMaxRounds { .. } => "STRUT_INVALID_MAX_ROUNDS",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "STRUT_BACKEND_UNAVAILABLE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, StrutError>;
