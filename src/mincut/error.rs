use crate::engine::{EngineError, NodeId};
use std::fmt;
use thiserror::Error;

/// Phase of the cut computation in which an engine failure occurred.
/// Carried in error messages so a failing run names the step that broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PathEnumeration,
    Projection,
    Components,
    Selection,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::PathEnumeration => "path enumeration",
            Phase::Projection => "projection",
            Phase::Components => "component computation",
            Phase::Selection => "cut selection",
        };
        f.write_str(name)
    }
}

//─────────────────────────────────────────────────────────────────────────────

/// Error type for the cut computation.
///
/// A path enumeration that finds nothing is deliberately not represented
/// here: unreachable endpoints yield an empty result, not an error.
#[derive(Error, Debug)]
pub enum MinCutError {
    /// An engine call failed; tagged with the phase that issued it.
    #[error("{phase} failed: {source}")]
    Engine {
        phase: Phase,
        #[source]
        source: EngineError,
    },

    /// Removing the masked edges left the projection with one component
    /// (or none), so the enumerated paths cannot be a separator. This
    /// breaks the algorithm's working assumption and is fatal.
    #[error(
        "Excluding {masked} masked edge(s) left the projection with {components} \
         component(s); the enumerated paths do not separate the graph"
    )]
    DegenerateComponents { components: usize, masked: usize },

    /// An endpoint never entered the projection, which means the node
    /// label filter excluded it.
    #[error("Node {0} is not part of the projection; the node label filter excluded it")]
    EndpointNotProjected(NodeId),
}
