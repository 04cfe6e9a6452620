//! Error types for Formica operations.
//!
//! Every variant is a contract violation reported at the call that caused
//! it. Nothing is retried or silently corrected.

use crate::types::{EdgeKey, NodeId};
use thiserror::Error;

/// Result type for Formica operations.
pub type Result<T> = std::result::Result<T, FormicaError>;

/// Errors that can occur while building graphs or running a colony.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormicaError {
    #[error("Cannot have an edge from node {0} to itself")]
    SelfLoop(NodeId),

    #[error("Edge {edge} references node {node}, which was not supplied")]
    EdgeOutsideGraph { edge: EdgeKey, node: NodeId },

    #[error("Duplicate edge {0}")]
    DuplicateEdge(EdgeKey),

    #[error("Duplicate node {0}")]
    DuplicateNode(NodeId),

    #[error("Graph must contain at least one node")]
    EmptyGraph,

    #[error("Sparseness {sparseness} must be between {min} and {max} for {size} nodes")]
    InvalidSparseness {
        size: usize,
        sparseness: usize,
        min: usize,
        max: usize,
    },

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Edge {edge} does not contain node {node}")]
    NotAnEndpoint { edge: EdgeKey, node: NodeId },

    #[error("Nodes {0} and {1} are not connected")]
    NotAdjacent(NodeId, NodeId),

    #[error("Path stops at node {reached} instead of the end node {end}")]
    IncompletePath { reached: NodeId, end: NodeId },

    #[error("End node {end} is unreachable from start node {start}")]
    Unreachable { start: NodeId, end: NodeId },

    #[error("Ant stranded at node {0}: no incident edges")]
    Stranded(NodeId),

    #[error("No convergence after {walks} walks (best streak {streak})")]
    NotConverged { walks: u64, streak: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl FormicaError {
    /// Whether this error is an invalid-argument condition: the caller passed
    /// something that violates an operation's contract.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FormicaError::SelfLoop(_)
                | FormicaError::EdgeOutsideGraph { .. }
                | FormicaError::DuplicateEdge(_)
                | FormicaError::DuplicateNode(_)
                | FormicaError::EmptyGraph
                | FormicaError::InvalidSparseness { .. }
                | FormicaError::NodeNotFound(_)
                | FormicaError::NotAnEndpoint { .. }
                | FormicaError::NotAdjacent(..)
                | FormicaError::IncompletePath { .. }
        )
    }
}

impl From<std::io::Error> for FormicaError {
    fn from(e: std::io::Error) -> Self {
        FormicaError::Io(e.to_string())
    }
}

// Convenience constructors
impl FormicaError {
    pub fn not_an_endpoint(edge: EdgeKey, node: NodeId) -> Self {
        FormicaError::NotAnEndpoint { edge, node }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        FormicaError::Config(reason.into())
    }
}
