//! Client error types

use shared::AppError;
use thiserror::Error;

/// Client error type
///
/// "Not found" is not an error: lookups return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, non-success status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Feed is not well-formed XML
    #[error("Feed parse error: {0}")]
    Feed(#[from] roxmltree::Error),

    /// Feed entry exists but cannot become a line item
    #[error("Validation error: {0}")]
    Validation(#[from] AppError),

    /// Invalid client configuration
    #[error("Invalid config: {0}")]
    Config(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
