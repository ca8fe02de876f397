//! In-process graph engine backend.
//!
//! Holds the property graph as id-keyed node/edge stores with
//! insertion-ordered adjacency lists, and materializes projections as
//! petgraph undirected graphs. Path expansion is a breadth-first
//! traversal with a relationship-global used-edge mask; weak
//! connectivity is computed with a union-find over the projection.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path as FsPath;
use std::sync::{Mutex, MutexGuard};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;

use super::capability::GraphEngine;
use super::error::EngineError;
use super::types::{
    ComponentId, CutEdge, EdgeId, EdgeRecord, EngineCapabilities, GraphData, NodeId, NodeRecord,
    Path, PathExpansion, ProjectionInfo, ProjectionSpec,
};

/// A materialized projection: the filtered undirected graph plus the
/// mutate-mode property maps written against it.
#[derive(Debug)]
struct Projection {
    graph: UnGraph<NodeId, EdgeId>,
    node_lookup: BTreeMap<NodeId, NodeIndex>,
    properties: HashMap<String, BTreeMap<NodeId, ComponentId>>,
}

/// In-memory engine over a loaded graph dataset.
///
/// Node and edge stores are `BTreeMap`s and adjacency lists are built in
/// ascending edge-id order, so traversal order (and with it the set of
/// expanded paths) is deterministic for a given dataset.
#[derive(Debug)]
pub struct MemoryEngine {
    nodes: BTreeMap<NodeId, NodeRecord>,
    edges: BTreeMap<EdgeId, EdgeRecord>,
    /// Undirected incidence: for each node, `(edge id, other endpoint)`.
    adjacency: BTreeMap<NodeId, Vec<(EdgeId, NodeId)>>,
    registry: Mutex<HashMap<String, Projection>>,
}

impl MemoryEngine {
    /// Opens a JSON graph dataset from disk.
    ///
    /// This is the connection step of the engine contract: an unreadable
    /// file maps to `EngineError::Connectivity`, undecodable content to
    /// `EngineError::InvalidData`.
    pub fn open(path: &FsPath) -> Result<Self, EngineError> {
        let raw = fs::read_to_string(path).map_err(|e| EngineError::Connectivity {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let data: GraphData = serde_json::from_str(&raw)
            .map_err(|e| EngineError::InvalidData(format!("{}: {}", path.display(), e)))?;
        Self::from_data(data)
    }

    /// Builds an engine directly from in-memory records.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidData` on duplicate node/edge ids or
    /// on an edge referencing a node that is not in the dataset.
    pub fn from_data(data: GraphData) -> Result<Self, EngineError> {
        let mut nodes = BTreeMap::new();
        for record in data.nodes {
            if nodes.insert(record.id, record.clone()).is_some() {
                return Err(EngineError::InvalidData(format!(
                    "duplicate node id {}",
                    record.id
                )));
            }
        }

        let mut edges = BTreeMap::new();
        for record in data.edges {
            for endpoint in [record.source, record.target] {
                if !nodes.contains_key(&endpoint) {
                    return Err(EngineError::InvalidData(format!(
                        "edge {} references missing node {}",
                        record.id, endpoint
                    )));
                }
            }
            if edges.insert(record.id, record.clone()).is_some() {
                return Err(EngineError::InvalidData(format!(
                    "duplicate edge id {}",
                    record.id
                )));
            }
        }

        // Incidence lists get both directions of every edge; iterating the
        // edge store in id order keeps neighbor order reproducible.
        let mut adjacency: BTreeMap<NodeId, Vec<(EdgeId, NodeId)>> =
            nodes.keys().map(|&id| (id, Vec::new())).collect();
        for record in edges.values() {
            if let Some(list) = adjacency.get_mut(&record.source) {
                list.push((record.id, record.target));
            }
            if record.source != record.target {
                if let Some(list) = adjacency.get_mut(&record.target) {
                    list.push((record.id, record.source));
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            adjacency,
            registry: Mutex::new(HashMap::new()),
        })
    }

    fn registry(&self) -> MutexGuard<'_, HashMap<String, Projection>> {
        self.registry.lock().expect("projection registry mutex poisoned")
    }

    /// Names of currently live projections, for diagnostics and tests.
    pub fn projection_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registry().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    fn label_allows(filter: &[String], labels: &[String]) -> bool {
        filter.is_empty() || labels.iter().any(|label| filter.iter().any(|f| f == label))
    }

    fn type_allows(filter: &[String], rel_type: &str) -> bool {
        filter.is_empty() || filter.iter().any(|f| f == rel_type)
    }
}

impl GraphEngine for MemoryEngine {
    fn verify_capabilities(&self) -> Result<EngineCapabilities, EngineError> {
        Ok(EngineCapabilities {
            path_expansion: true,
            components: true,
        })
    }

    fn expand_paths(&self, request: &PathExpansion) -> Result<Vec<Path>, EngineError> {
        for endpoint in [request.start, request.end] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(EngineError::NodeNotFound(endpoint));
            }
        }

        // Breadth-first expansion tree. `used` is the relationship-global
        // uniqueness mask: an edge consumed anywhere in the expansion is
        // never traversed again, from any frontier entry.
        let mut used: HashSet<EdgeId> = HashSet::new();
        let mut found = Vec::new();
        let mut frontier: VecDeque<(NodeId, Path)> = VecDeque::new();
        frontier.push_back((
            request.start,
            Path {
                nodes: vec![request.start],
                edges: Vec::new(),
            },
        ));

        while let Some((here, prefix)) = frontier.pop_front() {
            if prefix.edges.len() >= request.max_hops {
                continue;
            }
            for &(edge_id, neighbor) in &self.adjacency[&here] {
                if used.contains(&edge_id) {
                    continue;
                }
                if !Self::type_allows(&request.relationship_types, &self.edges[&edge_id].rel_type)
                {
                    continue;
                }
                // The start node is exempt from the label filter; every
                // node reached by traversal is not.
                if !Self::label_allows(&request.node_labels, &self.nodes[&neighbor].labels) {
                    continue;
                }
                used.insert(edge_id);
                let mut path = prefix.clone();
                path.nodes.push(neighbor);
                path.edges.push(edge_id);
                if neighbor == request.end {
                    // Terminator: record the path, never expand past it.
                    found.push(path);
                } else {
                    frontier.push_back((neighbor, path));
                }
            }
        }

        Ok(found)
    }

    fn project_subgraph(&self, spec: &ProjectionSpec) -> Result<ProjectionInfo, EngineError> {
        let mut registry = self.registry();
        if registry.contains_key(&spec.name) {
            return Err(EngineError::ProjectionExists(spec.name.clone()));
        }

        let excluded: HashSet<EdgeId> = spec.excluded_edges.iter().copied().collect();
        let mut graph = UnGraph::new_undirected();
        let mut node_lookup = BTreeMap::new();
        for (id, record) in &self.nodes {
            if Self::label_allows(&spec.node_labels, &record.labels) {
                node_lookup.insert(*id, graph.add_node(*id));
            }
        }

        let mut relationship_count = 0usize;
        for (id, record) in &self.edges {
            if excluded.contains(id) || !Self::type_allows(&spec.relationship_types, &record.rel_type)
            {
                continue;
            }
            // Edges with an endpoint outside the label filter fall away
            // together with that endpoint.
            let (Some(&a), Some(&b)) = (
                node_lookup.get(&record.source),
                node_lookup.get(&record.target),
            ) else {
                continue;
            };
            graph.add_edge(a, b, *id);
            relationship_count += 1;
        }

        let info = ProjectionInfo {
            name: spec.name.clone(),
            node_count: node_lookup.len(),
            relationship_count,
        };
        registry.insert(
            spec.name.clone(),
            Projection {
                graph,
                node_lookup,
                properties: HashMap::new(),
            },
        );
        Ok(info)
    }

    fn run_components(
        &self,
        projection: &str,
        mutate_property: &str,
    ) -> Result<usize, EngineError> {
        let mut registry = self.registry();
        let proj = registry
            .get_mut(projection)
            .ok_or_else(|| EngineError::ProjectionNotFound(projection.to_string()))?;

        let mut sets = UnionFind::<usize>::new(proj.graph.node_count());
        for edge in proj.graph.edge_references() {
            sets.union(edge.source().index(), edge.target().index());
        }
        let labeling = sets.into_labeling();

        let mut assignment = BTreeMap::new();
        let mut distinct: HashSet<ComponentId> = HashSet::new();
        for ix in proj.graph.node_indices() {
            let component = labeling[ix.index()] as ComponentId;
            assignment.insert(proj.graph[ix], component);
            distinct.insert(component);
        }
        proj.properties
            .insert(mutate_property.to_string(), assignment);
        Ok(distinct.len())
    }

    fn read_node_property(
        &self,
        projection: &str,
        node: NodeId,
        property: &str,
    ) -> Result<Option<ComponentId>, EngineError> {
        let registry = self.registry();
        let proj = registry
            .get(projection)
            .ok_or_else(|| EngineError::ProjectionNotFound(projection.to_string()))?;
        if !proj.node_lookup.contains_key(&node) {
            // Absent: the node never entered the projection.
            return Ok(None);
        }
        Ok(proj
            .properties
            .get(property)
            .and_then(|assignment| assignment.get(&node).copied()))
    }

    fn bridging_edges(
        &self,
        projection: &str,
        edge_ids: &[EdgeId],
        components: [ComponentId; 2],
        property: &str,
    ) -> Result<Vec<CutEdge>, EngineError> {
        let registry = self.registry();
        let proj = registry
            .get(projection)
            .ok_or_else(|| EngineError::ProjectionNotFound(projection.to_string()))?;
        let Some(assignment) = proj.properties.get(property) else {
            return Ok(Vec::new());
        };

        let mut hits = Vec::new();
        for id in edge_ids {
            let Some(record) = self.edges.get(id) else {
                continue;
            };
            let (Some(&sc), Some(&tc)) = (
                assignment.get(&record.source),
                assignment.get(&record.target),
            ) else {
                continue;
            };
            if sc != tc && components.contains(&sc) && components.contains(&tc) {
                hits.push(CutEdge {
                    id: record.id,
                    source: record.source,
                    target: record.target,
                    rel_type: record.rel_type.clone(),
                });
            }
        }
        Ok(hits)
    }

    fn drop_projection(&self, name: &str) -> Result<(), EngineError> {
        match self.registry().remove(name) {
            Some(_) => Ok(()),
            None => Err(EngineError::ProjectionNotFound(name.to_string())),
        }
    }
}

/// Single-label, single-type fixture graph from `(edge id, source, target)`
/// triples, in the style of `UnGraph::from_edges` fixtures.
#[cfg(test)]
pub(crate) fn engine_from_edges(edges: &[(EdgeId, NodeId, NodeId)]) -> MemoryEngine {
    let mut node_ids: Vec<NodeId> = edges.iter().flat_map(|&(_, a, b)| [a, b]).collect();
    node_ids.sort_unstable();
    node_ids.dedup();
    let data = GraphData {
        nodes: node_ids
            .into_iter()
            .map(|id| NodeRecord {
                id,
                labels: vec!["Demo".to_string()],
            })
            .collect(),
        edges: edges
            .iter()
            .map(|&(id, source, target)| EdgeRecord {
                id,
                rel_type: "LINK".to_string(),
                source,
                target,
                weight: None,
            })
            .collect(),
    };
    MemoryEngine::from_data(data).expect("valid fixture graph")
}
