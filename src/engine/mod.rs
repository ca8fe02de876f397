// error module
mod error;
// capability contract
mod capability;
// in-process backend
mod memory;
// shared data model
mod types;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports: the capability trait, the in-process backend, and the
// data model that crosses the engine boundary.
//─────────────────────────────────────────────────────────────────────────────
pub use capability::GraphEngine;
pub use error::EngineError;
pub use memory::MemoryEngine;
pub use types::{
    ComponentId, CutEdge, EdgeId, EdgeRecord, EngineCapabilities, GraphData, NodeId, NodeRecord,
    Path, PathExpansion, ProjectionInfo, ProjectionSpec,
};

#[cfg(test)]
pub(crate) use memory::engine_from_edges;
