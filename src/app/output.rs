//! Rendering and persistence of the computed cut.
//!
//! Formats mirror the classic CLI contract: `text` for numbered lines,
//! `table` for a pipe-delimited table, `json` for machine consumption.

use clap::ValueEnum;
use std::fmt::Write as FmtWrite; // Alias to avoid conflict with std::io::Write
use std::fs::OpenOptions;
use std::io::{Error as IoError, BufWriter, Write};
use std::path::Path;

use super::error::AppError;
use crate::engine::CutEdge;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

/// Formats the cut according to the selected output format.
///
/// An empty cut renders as a fixed explanatory line in every format,
/// since there is nothing to tabulate or serialize.
pub fn format_cut(cut: &[CutEdge], format: OutputFormat) -> Result<String, AppError> {
    if cut.is_empty() {
        return Ok(
            "No min-cut found. The nodes might be disconnected or in the same component."
                .to_string(),
        );
    }

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(cut)?,
        OutputFormat::Table => {
            let mut table = String::from("| ID | Source | Target | Type |\n");
            table.push_str("|----|--------|--------|------|\n");
            for edge in cut {
                let _ = writeln!(
                    table,
                    "| {} | {} | {} | {} |",
                    edge.id, edge.source, edge.target, edge.rel_type
                );
            }
            table.truncate(table.trim_end().len());
            table
        }
        OutputFormat::Text => {
            let mut lines = format!("Found {} relationships in the min-cut:", cut.len());
            for (i, edge) in cut.iter().enumerate() {
                let _ = write!(
                    lines,
                    "\n  {}. ID: {}, From: {}, To: {}, Type: {}",
                    i + 1,
                    edge.id,
                    edge.source,
                    edge.target,
                    edge.rel_type
                );
            }
            lines
        }
    };
    Ok(rendered)
}

/// Writes the formatted output to a file, creating or overwriting it.
///
/// The writer is explicitly flushed so the caller sees the complete file
/// as soon as this returns.
pub fn write_output(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
