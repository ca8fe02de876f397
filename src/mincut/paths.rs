//! Path enumeration and masked-edge extraction.

use std::collections::BTreeSet;

use super::error::{MinCutError, Phase};
use crate::engine::{EdgeId, GraphEngine, Path, PathExpansion};

/// Asks the engine for the expansion-tree paths between the endpoints.
///
/// An empty result is a valid answer (the endpoints are unreachable under
/// the filters within the hop bound) and is passed through untouched.
pub(crate) fn enumerate_paths<E: GraphEngine>(
    engine: &E,
    request: &PathExpansion,
) -> Result<Vec<Path>, MinCutError> {
    engine.expand_paths(request).map_err(|source| MinCutError::Engine {
        phase: Phase::PathEnumeration,
        source,
    })
}

/// Deduplicates the edges of all discovered paths into one sorted id list.
///
/// Set semantics: an edge appearing in several paths counts once. Sorting
/// keeps later batching reproducible across runs.
pub fn masked_edge_ids(paths: &[Path]) -> Vec<EdgeId> {
    let unique: BTreeSet<EdgeId> = paths
        .iter()
        .flat_map(|path| path.edges.iter().copied())
        .collect();
    unique.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_edges_are_deduplicated_and_sorted() {
        let paths = vec![
            Path {
                nodes: vec![1, 2, 4],
                edges: vec![7, 2],
            },
            Path {
                nodes: vec![1, 3, 4],
                edges: vec![7, 5],
            },
        ];
        assert_eq!(vec![2, 5, 7], masked_edge_ids(&paths));
    }

    #[test]
    fn no_paths_mean_no_masked_edges() {
        assert!(masked_edge_ids(&[]).is_empty());
    }
}
