//! Weak-connectivity computation over the projection.

use super::error::{MinCutError, Phase};
use crate::engine::GraphEngine;

/// Node property the components computation mutates in place. Reading it
/// back per endpoint avoids materializing an id-to-component mapping over
/// a potentially huge node set.
pub(crate) const COMPONENT_PROPERTY: &str = "componentId";

/// Runs weakly-connected components in mutate mode and validates that
/// removing the masked edges actually split the projection.
///
/// # Errors
/// `DegenerateComponents` when the projection stayed in one piece: the
/// enumerated paths were supposed to contain a separator, so a count of
/// one means the filters or the traversal undercut the assumption, and
/// silently returning a cut would be lying.
pub(crate) fn compute_components<E: GraphEngine>(
    engine: &E,
    projection: &str,
    masked: usize,
) -> Result<usize, MinCutError> {
    let components = engine
        .run_components(projection, COMPONENT_PROPERTY)
        .map_err(|source| MinCutError::Engine {
            phase: Phase::Components,
            source,
        })?;
    if components <= 1 {
        return Err(MinCutError::DegenerateComponents { components, masked });
    }
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{engine_from_edges, ProjectionSpec};

    #[test]
    fn split_projection_reports_its_component_count() {
        let engine = engine_from_edges(&[(0, 1, 2), (1, 3, 4)]);
        engine
            .project_subgraph(&ProjectionSpec {
                name: "p".to_string(),
                node_labels: Vec::new(),
                relationship_types: Vec::new(),
                excluded_edges: Vec::new(),
            })
            .unwrap();
        assert_eq!(2, compute_components(&engine, "p", 0).unwrap());
    }

    #[test]
    fn single_component_is_degenerate() {
        let engine = engine_from_edges(&[(0, 1, 2), (1, 2, 3)]);
        engine
            .project_subgraph(&ProjectionSpec {
                name: "p".to_string(),
                node_labels: Vec::new(),
                relationship_types: Vec::new(),
                excluded_edges: Vec::new(),
            })
            .unwrap();
        let err = compute_components(&engine, "p", 5).unwrap_err();
        assert!(matches!(
            err,
            MinCutError::DegenerateComponents {
                components: 1,
                masked: 5
            }
        ));
    }
}
