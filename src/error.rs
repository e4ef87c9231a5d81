//! Error types for graph construction and spanning forest computation.
//!
//! Malformed input is rejected while a graph is being built. The Kruskal
//! scan itself cannot fail once a trace has been constructed.

use thiserror::Error;

/// Result type alias for graph and spanning forest operations.
pub type MstResult<T> = Result<T, MstError>;

/// Every failure the crate reports.
///
/// Identifiers are rendered with their `Debug` representation so the
/// error type stays independent of the node identifier type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MstError {
    // ========== Lookup Errors ==========
    /// The node was never registered with the structure being queried.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// An edge endpoint is not part of the graph's node set.
    #[error("Edge endpoint {0} is not a node of the graph")]
    MissingEndpoint(String),

    /// Zero nodes were supplied while empty graphs are rejected.
    #[error("Graph has no nodes")]
    EmptyGraph,

    // ========== Validation Errors ==========
    /// Both endpoints of an edge are the same node.
    #[error("Self loop at node {0}")]
    SelfLoop(String),

    /// Edge weights must be finite and non-negative.
    #[error("Invalid edge weight {weight}: weights must be finite and >= 0")]
    InvalidWeight { weight: f64 },

    /// A second edge for an unordered pair that already has one.
    #[error("Duplicate edge between {left} and {right}")]
    DuplicateEdge { left: String, right: String },

    /// The node identifier is already registered.
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    /// Node positions must have finite coordinates.
    #[error("Invalid coordinate ({x}, {y})")]
    InvalidCoordinate { x: f64, y: f64 },

    // ========== Configuration Errors ==========
    /// A configuration value is out of range or could not be parsed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MstError {
    pub(crate) fn unknown_node<N: std::fmt::Debug>(node: &N) -> Self {
        Self::UnknownNode(format!("{node:?}"))
    }

    pub(crate) fn missing_endpoint<N: std::fmt::Debug>(node: &N) -> Self {
        Self::MissingEndpoint(format!("{node:?}"))
    }

    pub(crate) fn duplicate_edge<N: std::fmt::Debug>(left: &N, right: &N) -> Self {
        Self::DuplicateEdge {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }

    /// Returns true for errors caused by malformed graph input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::SelfLoop(_)
                | Self::InvalidWeight { .. }
                | Self::DuplicateEdge { .. }
                | Self::DuplicateNode(_)
                | Self::MissingEndpoint(_)
                | Self::InvalidCoordinate { .. }
        )
    }
}
