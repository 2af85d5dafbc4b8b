//! Session error types

use invoice_client::ClientError;
use invoice_printer::PrintError;
use shared::{AppError, ErrorCode};
use thiserror::Error;

use super::Mode;

/// Errors raised by command parsing and session operations
///
/// None of them leave the invoice half-updated.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unknown command: {0} (type `help`)")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No pending candidate, run `lookup <article-id>` first")]
    NoPendingCandidate,

    #[error("`{command}` is not available in {mode} mode, type `edit` first")]
    WrongMode { command: &'static str, mode: Mode },

    #[error(transparent)]
    App(#[from] AppError),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] ClientError),

    #[error("Render failed: {0}")]
    Render(PrintError),

    #[error("Export failed: {0}")]
    Export(#[from] PrintError),
}

impl SessionError {
    /// Shared error code for display next to the message
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::UnknownCommand(_)
            | SessionError::InvalidArgument(_)
            | SessionError::WrongMode { .. } => ErrorCode::InvalidRequest,
            SessionError::NoPendingCandidate => ErrorCode::InvoiceNoPendingItem,
            SessionError::App(e) => e.code,
            SessionError::Lookup(ClientError::Validation(e)) => e.code,
            SessionError::Lookup(ClientError::Http(e)) if e.is_timeout() => ErrorCode::TimeoutError,
            SessionError::Lookup(ClientError::Config(_)) => ErrorCode::ConfigError,
            SessionError::Lookup(_) => ErrorCode::NetworkError,
            SessionError::Render(_) => ErrorCode::InternalError,
            SessionError::Export(_) => ErrorCode::ExportFailed,
        }
    }
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
