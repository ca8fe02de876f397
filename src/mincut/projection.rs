//! Projection lifecycle: invocation-scoped names, creation with an
//! idempotent reset, and teardown that runs on every exit path.

use std::sync::atomic::{AtomicU64, Ordering};

use super::error::{MinCutError, Phase};
use crate::engine::{EngineError, GraphEngine, ProjectionInfo, ProjectionSpec};

static PROJECTION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Returns a projection name no other invocation in this process uses.
///
/// The per-call suffix keeps concurrent invocations from colliding on a
/// shared server-side resource name.
pub(crate) fn unique_projection_name() -> String {
    format!("min-cut-wcc-{}", PROJECTION_SEQ.fetch_add(1, Ordering::Relaxed))
}

/// Creates the projection and hands back a guard owning its teardown.
///
/// Any leftover projection under the same name is dropped first, so
/// creation is idempotent with respect to earlier crashed invocations;
/// the drop error for a name that was never live is ignored.
pub(crate) fn create_projection<'e, E: GraphEngine>(
    engine: &'e E,
    spec: &ProjectionSpec,
) -> Result<(ProjectionInfo, ProjectionGuard<'e, E>), MinCutError> {
    let _ = engine.drop_projection(&spec.name);
    let info = engine
        .project_subgraph(spec)
        .map_err(|source| MinCutError::Engine {
            phase: Phase::Projection,
            source,
        })?;
    Ok((
        info,
        ProjectionGuard {
            engine,
            name: spec.name.clone(),
            released: false,
        },
    ))
}

/// Owns one live projection. Dropping the guard drops the projection,
/// which is what guarantees teardown when a later phase exits early
/// with `?`.
pub(crate) struct ProjectionGuard<'e, E: GraphEngine> {
    engine: &'e E,
    name: String,
    released: bool,
}

impl<'e, E: GraphEngine> ProjectionGuard<'e, E> {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Drops the projection now and reports the engine's answer, for
    /// callers that want to surface a cleanup warning. The failure is
    /// recoverable either way: nothing else ever reuses this name.
    pub(crate) fn release(mut self) -> Result<(), EngineError> {
        self.released = true;
        self.engine.drop_projection(&self.name)
    }
}

impl<'e, E: GraphEngine> Drop for ProjectionGuard<'e, E> {
    fn drop(&mut self) {
        if !self.released {
            // Best-effort: a failed drop must never mask the error that
            // unwound us here.
            let _ = self.engine.drop_projection(&self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::engine_from_edges;

    fn spec(name: &str) -> ProjectionSpec {
        ProjectionSpec {
            name: name.to_string(),
            node_labels: Vec::new(),
            relationship_types: Vec::new(),
            excluded_edges: Vec::new(),
        }
    }

    #[test]
    fn names_are_unique_per_call() {
        assert_ne!(unique_projection_name(), unique_projection_name());
    }

    #[test]
    fn guard_drops_the_projection_on_scope_exit() {
        let engine = engine_from_edges(&[(0, 1, 2)]);
        {
            let (_info, _guard) = create_projection(&engine, &spec("scoped")).unwrap();
            assert_eq!(vec!["scoped".to_string()], engine.projection_names());
        }
        assert!(engine.projection_names().is_empty());
    }

    #[test]
    fn release_reports_the_drop_result() {
        let engine = engine_from_edges(&[(0, 1, 2)]);
        let (_info, guard) = create_projection(&engine, &spec("released")).unwrap();
        assert!(guard.release().is_ok());
        assert!(engine.projection_names().is_empty());
    }

    #[test]
    fn creation_resets_a_leftover_projection() {
        let engine = engine_from_edges(&[(0, 1, 2)]);
        let (_info, first) = create_projection(&engine, &spec("stale")).unwrap();
        // Simulate a crashed invocation that never tore down.
        std::mem::forget(first);
        let (_info, second) = create_projection(&engine, &spec("stale")).unwrap();
        drop(second);
        assert!(engine.projection_names().is_empty());
    }
}
