// error module
mod error;
// path enumeration and masked-edge extraction
mod paths;
// projection lifecycle
mod projection;
// weak-connectivity computation
mod components;
// cut-edge selection
mod selector;
// four-phase orchestration
mod finder;

#[cfg(test)]
mod stub;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the cut computation.
//─────────────────────────────────────────────────────────────────────────────
pub use error::{MinCutError, Phase};
pub use finder::{
    MinCutFinder, MinCutOutcome, MinCutRequest, PhaseTimings, DEFAULT_MAX_PATH_LENGTH,
};
pub use paths::masked_edge_ids;
pub use selector::DEFAULT_BATCH_SIZE;

use crate::engine::GraphEngine;

/// Computes the approximate minimum cut for `request` with a one-shot
/// finder over `engine`.
pub fn find_min_cut<E: GraphEngine>(
    engine: &E,
    request: &MinCutRequest,
) -> Result<MinCutOutcome, MinCutError> {
    MinCutFinder::new(engine).find_min_cut(request)
}
