use super::error::EngineError;
use super::types::{
    ComponentId, CutEdge, EdgeId, EngineCapabilities, NodeId, Path, PathExpansion, ProjectionInfo,
    ProjectionSpec,
};

/// Capability contract of a graph-processing backend.
///
/// The cut computation only ever talks to the graph through this trait,
/// so a different backend (a remote graph database, a columnar store)
/// can be substituted without touching the core control flow. Every call
/// blocks the calling thread until the backend answers; callers wanting
/// timeouts must wrap invocations externally.
pub trait GraphEngine {
    /// Reports which of the required computations this backend provides.
    ///
    /// # Errors
    /// Returns `EngineError` if the backend cannot be interrogated at all.
    fn verify_capabilities(&self) -> Result<EngineCapabilities, EngineError>;

    /// Expands paths from `request.start`, terminating at `request.end`.
    ///
    /// Uniqueness is relationship-global: each edge is traversed at most
    /// once across the whole expansion, so the returned paths never share
    /// an edge *position* in the traversal, though they may share prefix
    /// edges. Paths longer than `request.max_hops` are not produced, and
    /// expansion never continues past the end node.
    ///
    /// # Errors
    /// Returns `EngineError::NodeNotFound` if either endpoint id is
    /// absent from the graph.
    fn expand_paths(&self, request: &PathExpansion) -> Result<Vec<Path>, EngineError>;

    /// Materializes a named, undirected projection restricted to the
    /// spec's node labels and relationship types, with
    /// `spec.excluded_edges` left out.
    ///
    /// # Errors
    /// Returns `EngineError::ProjectionExists` when the name is still
    /// live; creation is only idempotent after a prior
    /// [`drop_projection`](Self::drop_projection).
    fn project_subgraph(&self, spec: &ProjectionSpec) -> Result<ProjectionInfo, EngineError>;

    /// Runs weakly-connected components over the projection in mutate
    /// mode, writing each node's component label under `mutate_property`
    /// instead of returning an id-to-component mapping. Returns the
    /// number of components.
    fn run_components(&self, projection: &str, mutate_property: &str)
        -> Result<usize, EngineError>;

    /// Reads a node property previously written by a mutate-mode
    /// computation. `Ok(None)` means the node is not part of the
    /// projection or carries no such property.
    fn read_node_property(
        &self,
        projection: &str,
        node: NodeId,
        property: &str,
    ) -> Result<Option<ComponentId>, EngineError>;

    /// Filters one batch of edge ids down to the edges whose endpoint
    /// component labels (under `property` in the projection) are each one
    /// of `components` and differ from each other. Edges with an endpoint
    /// outside the projection are skipped.
    fn bridging_edges(
        &self,
        projection: &str,
        edge_ids: &[EdgeId],
        components: [ComponentId; 2],
        property: &str,
    ) -> Result<Vec<CutEdge>, EngineError>;

    /// Drops a projection. An error here is recoverable (the next
    /// creation under the name re-drops it), so callers treat it as
    /// non-fatal.
    fn drop_projection(&self, name: &str) -> Result<(), EngineError>;
}
