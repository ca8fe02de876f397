use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Graph engine error: {0}")]
    Engine(#[from] crate::engine::EngineError),
    #[error("Min-cut computation error: {0}")]
    MinCut(#[from] crate::mincut::MinCutError),
    #[error("Invalid filter identifier '{0}': only alphanumerics and underscores are allowed")]
    InvalidFilter(String),
    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
