//! Error types for the printer library

use thiserror::Error;

/// Printer error types
#[derive(Debug, Error)]
pub enum PrintError {
    /// IO error while writing the document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid page or exporter configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Nothing to export
    #[error("Document has no pages")]
    EmptyDocument,
}

/// Result type for printer operations
pub type PrintResult<T> = Result<T, PrintError>;
