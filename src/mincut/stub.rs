//! Hand-rolled engine stub for exercising the orchestration seams that
//! the in-process backend cannot be steered into (degenerate component
//! counts, scripted component labels) and for observing call order.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::engine::{
    ComponentId, CutEdge, EdgeId, EngineCapabilities, EngineError, GraphEngine, NodeId, Path,
    PathExpansion, ProjectionInfo, ProjectionSpec,
};

pub(crate) struct StubEngine {
    pub paths: Vec<Path>,
    pub component_count: usize,
    pub components: HashMap<NodeId, ComponentId>,
    /// Edges eligible for `bridging_edges`; each call returns the subset
    /// whose ids are in the queried batch.
    pub bridging: Vec<CutEdge>,
    pub capabilities: EngineCapabilities,
    /// Operation journal, in call order.
    pub calls: RefCell<Vec<String>>,
}

impl Default for StubEngine {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            component_count: 2,
            components: HashMap::new(),
            bridging: Vec::new(),
            capabilities: EngineCapabilities {
                path_expansion: true,
                components: true,
            },
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl StubEngine {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl GraphEngine for StubEngine {
    fn verify_capabilities(&self) -> Result<EngineCapabilities, EngineError> {
        Ok(self.capabilities)
    }

    fn expand_paths(&self, _request: &PathExpansion) -> Result<Vec<Path>, EngineError> {
        self.record("expand".to_string());
        Ok(self.paths.clone())
    }

    fn project_subgraph(&self, spec: &ProjectionSpec) -> Result<ProjectionInfo, EngineError> {
        self.record(format!("project:{}", spec.name));
        Ok(ProjectionInfo {
            name: spec.name.clone(),
            node_count: self.components.len(),
            relationship_count: 0,
        })
    }

    fn run_components(
        &self,
        projection: &str,
        _mutate_property: &str,
    ) -> Result<usize, EngineError> {
        self.record(format!("wcc:{projection}"));
        Ok(self.component_count)
    }

    fn read_node_property(
        &self,
        _projection: &str,
        node: NodeId,
        _property: &str,
    ) -> Result<Option<ComponentId>, EngineError> {
        Ok(self.components.get(&node).copied())
    }

    fn bridging_edges(
        &self,
        _projection: &str,
        edge_ids: &[EdgeId],
        _components: [ComponentId; 2],
        _property: &str,
    ) -> Result<Vec<CutEdge>, EngineError> {
        self.record(format!("bridge:{}", edge_ids.len()));
        Ok(self
            .bridging
            .iter()
            .filter(|edge| edge_ids.contains(&edge.id))
            .cloned()
            .collect())
    }

    fn drop_projection(&self, name: &str) -> Result<(), EngineError> {
        self.record(format!("drop:{name}"));
        Ok(())
    }
}
