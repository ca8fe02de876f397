//! Main application orchestrator.
//!
//! Coordinates the entire cut computation:
//! 1. Initializes logging.
//! 2. Parses and validates the label and relationship-type filters.
//! 3. Opens the graph dataset with the in-process engine.
//! 4. Verifies that the engine carries the required capabilities.
//! 5. Delegates to the cut finder, which enumerates paths, projects the
//!    residual graph, computes components and selects the cut edges.
//! 6. Logs the per-phase timings and diagnostics.
//! 7. Prints the formatted cut to stdout and optionally saves it.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling
//! verbosity. The finder guarantees the engine-side projection is torn
//! down on every exit path, so nothing here needs to clean up after a
//! failed run.

use super::cli::{self, Cli};
use super::error::AppError;
use super::logger;
use super::output;
use super::{verbose_eprintln, verbose_println};
use crate::engine::{EngineError, GraphEngine, MemoryEngine};
use crate::mincut::{self, MinCutRequest};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if any unrecoverable error occurs: an unreadable or
/// invalid dataset, a missing engine capability, an invalid filter
/// identifier, a fatal cut-computation error, or an I/O failure while
/// writing the output file.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode. This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("mincut.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (mincut.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to mincut.log");
        }
    }

    let node_labels = cli::parse_filter_list(&cli.node_labels)?;
    let relationship_types = cli::parse_filter_list(&cli.relationship_types)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Min-cut from node {} to node {}", cli.source, cli.target);
    verbose_println!(
        quiet_mode,
        "============================================================"
    );
    verbose_println!(quiet_mode, "Node labels: {:?}", node_labels);
    verbose_println!(quiet_mode, "Relationship types: {:?}", relationship_types);
    verbose_println!(quiet_mode, "Max path length: {}", cli.max_path_length);

    // Step 1: Open the graph dataset.
    verbose_println!(
        quiet_mode,
        "\n[STEP 1] Loading graph dataset from {}...",
        cli.graph_file.display()
    );
    let engine = MemoryEngine::open(&cli.graph_file).map_err(|e| {
        verbose_eprintln!(quiet_mode, "Failed to open graph dataset: {}", e);
        e
    })?;

    // Step 2: Verify capabilities. A backend without path expansion or
    // component computation cannot run the algorithm at all.
    verbose_println!(quiet_mode, "[STEP 2] Verifying engine capabilities...");
    let capabilities = engine.verify_capabilities()?;
    if !capabilities.path_expansion {
        return Err(EngineError::CapabilityMissing("path expansion").into());
    }
    if !capabilities.components {
        return Err(EngineError::CapabilityMissing("weakly connected components").into());
    }
    verbose_println!(quiet_mode, "   => Path expansion and components available.");

    // Step 3: Run the cut computation.
    verbose_println!(quiet_mode, "[STEP 3] Computing the cut...");
    let mut request = MinCutRequest::new(cli.source, cli.target);
    request.node_labels = node_labels;
    request.relationship_types = relationship_types;
    request.max_path_length = cli.max_path_length;

    let outcome = match mincut::find_min_cut(&engine, &request) {
        Ok(outcome) => outcome,
        Err(e) => {
            verbose_eprintln!(quiet_mode, "Cut computation failed: {}", e);
            if !quiet_mode {
                if let Err(flush_err) = logger::flush_global_logger() {
                    eprintln!(
                        "[WARNING] Failed to flush mincut.log on error: {}",
                        flush_err
                    );
                }
            }
            return Err(e.into());
        }
    };

    if outcome.paths_found == 0 {
        verbose_println!(
            quiet_mode,
            "   => No paths found between source and target; the cut is empty."
        );
    } else {
        verbose_println!(
            quiet_mode,
            "   => Found {} path(s), {} unique masked edge(s).",
            outcome.paths_found,
            outcome.masked_edges
        );
    }
    if let Some(components) = outcome.component_count {
        verbose_println!(quiet_mode, "   => Residual graph has {} components.", components);
    }
    if outcome.same_component {
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] Source and target share a component after masking; returning an empty cut."
        );
    }
    if let Some(cleanup_error) = &outcome.cleanup_error {
        // Recoverable: the next invocation uses a fresh projection name.
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] Failed to drop projection: {}",
            cleanup_error
        );
    }

    // Step 4: Log per-phase timings.
    verbose_println!(quiet_mode, "[STEP 4] Phase timings:");
    verbose_println!(
        quiet_mode,
        "   path enumeration: {:?}",
        outcome.timings.path_enumeration
    );
    verbose_println!(
        quiet_mode,
        "   edge extraction:  {:?}",
        outcome.timings.edge_extraction
    );
    verbose_println!(quiet_mode, "   projection:       {:?}", outcome.timings.projection);
    verbose_println!(quiet_mode, "   components:       {:?}", outcome.timings.components);
    verbose_println!(quiet_mode, "   selection:        {:?}", outcome.timings.selection);
    verbose_println!(quiet_mode, "   cleanup:          {:?}", outcome.timings.cleanup);

    // Step 5: Render and emit the result.
    verbose_println!(quiet_mode, "[STEP 5] Formatting output...");
    let rendered = output::format_cut(&outcome.cut, cli.output_format)?;
    println!("{}", rendered);

    if let Some(output_file) = &cli.output_file {
        match output::write_output(output_file, &rendered) {
            Ok(()) => {
                verbose_println!(
                    quiet_mode,
                    "Results saved to {}",
                    output_file.display()
                );
            }
            Err(e) => {
                verbose_eprintln!(
                    quiet_mode,
                    "Failed to save results to {}: {}",
                    output_file.display(),
                    e
                );
                return Err(AppError::Io(e));
            }
        }
    }

    // Final flush of mincut.log before exiting successfully.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of mincut.log: {}", e);
        }
    }

    Ok(())
}
