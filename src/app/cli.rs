use clap::Parser;
use std::path::PathBuf;

use super::error::AppError;
use super::output::OutputFormat;
use crate::mincut::DEFAULT_MAX_PATH_LENGTH;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds an approximate minimum edge cut between two nodes of a property graph.", long_about = None)]
pub struct Cli {
    /// Graph dataset (JSON) loaded into the in-process engine
    pub graph_file: PathBuf,

    /// Identifier of the source node
    #[clap(long)]
    pub source: u64,

    /// Identifier of the target node
    #[clap(long)]
    pub target: u64,

    /// Node labels to consider, comma-separated (empty = all labels)
    #[clap(long, default_value = "")]
    pub node_labels: String,

    /// Relationship types to traverse, comma-separated (empty = all types)
    #[clap(long, default_value = "")]
    pub relationship_types: String,

    /// Maximum path length considered during path enumeration
    #[clap(long, default_value_t = DEFAULT_MAX_PATH_LENGTH)]
    pub max_path_length: usize,

    /// Output format for the computed cut
    #[clap(long, value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Save the formatted output to this file in addition to stdout
    #[clap(long)]
    pub output_file: Option<PathBuf>,

    /// Suppress verbose output to mincut.log
    #[clap(short, long)]
    pub quiet: bool,
}

/// Splits a comma-separated filter list, trimming entries and skipping
/// empty ones. Each surviving identifier is checked against the
/// allow-list before it may reach the engine: filters come from the
/// command line and must never be interpolated anywhere unvalidated.
pub fn parse_filter_list(raw: &str) -> Result<Vec<String>, AppError> {
    let mut items = Vec::new();
    for item in raw.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if !is_valid_identifier(item) {
            return Err(AppError::InvalidFilter(item.to_string()));
        }
        items.push(item.to_string());
    }
    Ok(items)
}

/// Labels and relationship types are plain identifiers: ASCII
/// alphanumerics and underscores only.
fn is_valid_identifier(item: &str) -> bool {
    item.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
