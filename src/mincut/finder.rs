//! The cut orchestrator.
//!
//! Sequences the four phases over the engine capability interface:
//! 1. Enumerate expansion-tree paths between the endpoints (an empty
//!    result short-circuits to an empty cut).
//! 2. Deduplicate the path edges into the masked-edge set.
//! 3. Project the filtered graph without the masked edges and run the
//!    weak-connectivity computation over it (one component is fatal).
//! 4. Select the masked edges bridging the source and target components.
//!
//! The projection is torn down on every exit path: a guard owns it from
//! creation, so an error in any later phase still drops it. Each phase's
//! elapsed wall-clock time is recorded for diagnostics.

use std::time::{Duration, Instant};

use super::components;
use super::error::MinCutError;
use super::paths;
use super::projection;
use super::selector::{self, DEFAULT_BATCH_SIZE};
use crate::engine::{CutEdge, EngineError, GraphEngine, NodeId, PathExpansion, ProjectionSpec};

/// Default hop bound of the path enumeration.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 10;

/// Parameters of one cut computation. Empty filter lists mean
/// unrestricted labels or relationship types.
#[derive(Debug, Clone)]
pub struct MinCutRequest {
    pub source: NodeId,
    pub target: NodeId,
    pub relationship_types: Vec<String>,
    pub node_labels: Vec<String>,
    pub max_path_length: usize,
    pub batch_size: usize,
}

impl MinCutRequest {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            relationship_types: Vec::new(),
            node_labels: Vec::new(),
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Wall-clock time spent in each phase of one invocation.
#[derive(Debug, Clone, Default)]
pub struct PhaseTimings {
    pub path_enumeration: Duration,
    pub edge_extraction: Duration,
    pub projection: Duration,
    pub components: Duration,
    pub selection: Duration,
    pub cleanup: Duration,
}

/// The computed cut plus per-invocation diagnostics.
#[derive(Debug)]
pub struct MinCutOutcome {
    /// Edges bridging the source and target components. Element order is
    /// whatever the selection queries returned, not guaranteed stable.
    pub cut: Vec<CutEdge>,
    pub paths_found: usize,
    pub masked_edges: usize,
    /// Residual component count; `None` when enumeration found no paths
    /// and the later phases never ran.
    pub component_count: Option<usize>,
    /// True when both endpoints shared a residual component and the
    /// empty-cut policy applied.
    pub same_component: bool,
    /// A failed projection drop on the success path; recoverable, so it
    /// is reported instead of raised.
    pub cleanup_error: Option<EngineError>,
    pub timings: PhaseTimings,
}

impl MinCutOutcome {
    fn empty(paths_found: usize, timings: PhaseTimings) -> Self {
        Self {
            cut: Vec::new(),
            paths_found,
            masked_edges: 0,
            component_count: None,
            same_component: false,
            cleanup_error: None,
            timings,
        }
    }
}

/// Computes approximate minimum edge cuts over a graph engine.
pub struct MinCutFinder<'e, E: GraphEngine> {
    engine: &'e E,
}

impl<'e, E: GraphEngine> MinCutFinder<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Runs the full cut computation for `request`.
    ///
    /// Unreachable endpoints yield `Ok` with an empty cut; see
    /// [`MinCutError`] for the conditions that are fatal instead.
    ///
    /// # Errors
    /// `DegenerateComponents` when masking failed to split the graph,
    /// `EndpointNotProjected` when a label filter excluded an endpoint,
    /// and `Engine` for backend failures, tagged with the failing phase.
    pub fn find_min_cut(&self, request: &MinCutRequest) -> Result<MinCutOutcome, MinCutError> {
        let mut timings = PhaseTimings::default();

        let clock = Instant::now();
        let found = paths::enumerate_paths(
            self.engine,
            &PathExpansion {
                start: request.source,
                end: request.target,
                relationship_types: request.relationship_types.clone(),
                node_labels: request.node_labels.clone(),
                max_hops: request.max_path_length,
            },
        )?;
        timings.path_enumeration = clock.elapsed();

        if found.is_empty() {
            // Unreachable under the filters within the hop bound: an
            // empty cut, not an error.
            return Ok(MinCutOutcome::empty(0, timings));
        }

        let clock = Instant::now();
        let masked = paths::masked_edge_ids(&found);
        timings.edge_extraction = clock.elapsed();

        let clock = Instant::now();
        let spec = ProjectionSpec {
            name: projection::unique_projection_name(),
            node_labels: request.node_labels.clone(),
            relationship_types: request.relationship_types.clone(),
            excluded_edges: masked.clone(),
        };
        let (_info, guard) = projection::create_projection(self.engine, &spec)?;
        timings.projection = clock.elapsed();

        // From here on the guard owns the projection; every `?` below
        // still tears it down.
        let clock = Instant::now();
        let component_count =
            components::compute_components(self.engine, guard.name(), masked.len())?;
        timings.components = clock.elapsed();

        let clock = Instant::now();
        let selection = selector::select_cut_edges(
            self.engine,
            guard.name(),
            &masked,
            request.source,
            request.target,
            request.batch_size,
        )?;
        timings.selection = clock.elapsed();

        let clock = Instant::now();
        let cleanup_error = guard.release().err();
        timings.cleanup = clock.elapsed();

        Ok(MinCutOutcome {
            cut: selection.edges,
            paths_found: found.len(),
            masked_edges: masked.len(),
            component_count: Some(component_count),
            same_component: selection.same_component,
            cleanup_error,
            timings,
        })
    }
}
