use super::types::NodeId;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph-engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Error when the graph dataset cannot be opened at all.
    #[error("Cannot open graph dataset '{path}': {reason}")]
    Connectivity { path: String, reason: String },

    /// Error when the dataset was readable but its content is unusable.
    #[error("Invalid graph dataset: {0}")]
    InvalidData(String),

    /// Error when the backend lacks a capability the computation needs.
    #[error("Graph engine does not support {0}")]
    CapabilityMissing(&'static str),

    /// Error when a node id is not present in the graph.
    #[error("Node {0} does not exist in the graph")]
    NodeNotFound(NodeId),

    /// Error when creating a projection under a name that is still live.
    #[error("Projection '{0}' already exists; drop it before re-creating")]
    ProjectionExists(String),

    /// Error when an operation references a projection that does not exist.
    #[error("Projection '{0}' does not exist")]
    ProjectionNotFound(String),
}
