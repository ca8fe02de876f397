//! Cut-edge selection: the masked edges that bridge the source and
//! target components of the residual projection.

use super::components::COMPONENT_PROPERTY;
use super::error::{MinCutError, Phase};
use crate::engine::{ComponentId, CutEdge, EdgeId, GraphEngine, NodeId};

/// Masked-edge ids are filtered through the engine in chunks of this many
/// ids per query, matching the original's query-size ceiling.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Outcome of the selection step.
#[derive(Debug)]
pub(crate) struct Selection {
    pub edges: Vec<CutEdge>,
    /// True when both endpoints landed in one residual component, in
    /// which case `edges` is empty by policy.
    pub same_component: bool,
}

/// Selects, among the masked edges, those whose endpoints sit in the two
/// components containing `source` and `target` respectively.
///
/// The masked ids are queried in fixed-size batches; the batch size only
/// changes the number of engine round trips, never the accumulated set.
///
/// # Errors
/// `EndpointNotProjected` when either endpoint carries no component
/// label, meaning the node label filter kept it out of the projection.
pub(crate) fn select_cut_edges<E: GraphEngine>(
    engine: &E,
    projection: &str,
    masked: &[EdgeId],
    source: NodeId,
    target: NodeId,
    batch_size: usize,
) -> Result<Selection, MinCutError> {
    let source_component = read_component(engine, projection, source)?;
    let target_component = read_component(engine, projection, target)?;

    if source_component == target_component {
        // Masking left both endpoints in one component; documented policy
        // is an empty cut, flagged so the caller can warn.
        return Ok(Selection {
            edges: Vec::new(),
            same_component: true,
        });
    }

    let mut edges = Vec::new();
    for batch in masked.chunks(batch_size.max(1)) {
        let mut hits = engine
            .bridging_edges(
                projection,
                batch,
                [source_component, target_component],
                COMPONENT_PROPERTY,
            )
            .map_err(|source| MinCutError::Engine {
                phase: Phase::Selection,
                source,
            })?;
        edges.append(&mut hits);
    }

    Ok(Selection {
        edges,
        same_component: false,
    })
}

fn read_component<E: GraphEngine>(
    engine: &E,
    projection: &str,
    node: NodeId,
) -> Result<ComponentId, MinCutError> {
    engine
        .read_node_property(projection, node, COMPONENT_PROPERTY)
        .map_err(|source| MinCutError::Engine {
            phase: Phase::Selection,
            source,
        })?
        .ok_or(MinCutError::EndpointNotProjected(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mincut::stub::StubEngine;

    fn stub_with_components(pairs: &[(NodeId, ComponentId)]) -> StubEngine {
        let mut stub = StubEngine::default();
        for &(node, component) in pairs {
            stub.components.insert(node, component);
        }
        stub
    }

    #[test]
    fn same_component_yields_an_empty_cut_by_policy() {
        let stub = stub_with_components(&[(1, 7), (9, 7)]);
        let selection = select_cut_edges(&stub, "p", &[0, 1, 2], 1, 9, 1000).unwrap();
        assert!(selection.same_component);
        assert!(selection.edges.is_empty());
        // The policy short-circuits before any batch query is issued.
        assert!(!stub.calls.borrow().iter().any(|c| c.starts_with("bridge")));
    }

    #[test]
    fn missing_endpoint_label_is_fatal() {
        let stub = stub_with_components(&[(9, 7)]);
        let err = select_cut_edges(&stub, "p", &[0], 1, 9, 1000).unwrap_err();
        assert!(matches!(err, MinCutError::EndpointNotProjected(1)));
    }

    #[test]
    fn batches_accumulate_across_round_trips() {
        let mut stub = stub_with_components(&[(1, 7), (9, 8)]);
        stub.bridging = vec![
            CutEdge {
                id: 0,
                source: 1,
                target: 9,
                rel_type: "LINK".to_string(),
            },
            CutEdge {
                id: 4,
                source: 1,
                target: 9,
                rel_type: "LINK".to_string(),
            },
        ];
        let selection = select_cut_edges(&stub, "p", &[0, 1, 2, 3, 4], 1, 9, 2).unwrap();

        let mut ids: Vec<EdgeId> = selection.edges.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        assert_eq!(vec![0, 4], ids);
        // Five ids at batch size two means three round trips.
        let bridge_calls = stub
            .calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with("bridge"))
            .count();
        assert_eq!(3, bridge_calls);
    }
}
