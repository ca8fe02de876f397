use serde::{Deserialize, Serialize};

/// Engine-assigned node identifier, opaque to the algorithm.
pub type NodeId = u64;
/// Engine-assigned relationship identifier, unique within the graph.
pub type EdgeId = u64;
/// Transient component label written by the components computation.
pub type ComponentId = u64;

/// A node of the stored property graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// A relationship of the stored property graph.
///
/// `weight` is carried for round-tripping datasets that have one; the
/// cut computation never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: EdgeId,
    #[serde(rename = "type")]
    pub rel_type: String,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// On-disk graph dataset schema consumed by the in-process engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// A traversal path: node sequence plus the edges taken between them.
/// `edges.len()` is the path length; `nodes.len() == edges.len() + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}

/// One edge of the computed cut, in the shape the entry point renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CutEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "type")]
    pub rel_type: String,
}

/// Capabilities reported by an engine backend. Both are required by the
/// cut computation; the application refuses to start without them.
#[derive(Debug, Clone, Copy)]
pub struct EngineCapabilities {
    pub path_expansion: bool,
    pub components: bool,
}

/// Request for a constrained path expansion between two nodes.
///
/// Empty filter lists mean unrestricted. The label filter is not applied
/// to the start node itself.
#[derive(Debug, Clone)]
pub struct PathExpansion {
    pub start: NodeId,
    pub end: NodeId,
    pub relationship_types: Vec<String>,
    pub node_labels: Vec<String>,
    pub max_hops: usize,
}

/// Request for a named, undirected, filtered projection of the graph
/// with `excluded_edges` left out.
#[derive(Debug, Clone)]
pub struct ProjectionSpec {
    pub name: String,
    pub node_labels: Vec<String>,
    pub relationship_types: Vec<String>,
    pub excluded_edges: Vec<EdgeId>,
}

/// Size summary of a materialized projection.
#[derive(Debug, Clone)]
pub struct ProjectionInfo {
    pub name: String,
    pub node_count: usize,
    pub relationship_count: usize,
}
