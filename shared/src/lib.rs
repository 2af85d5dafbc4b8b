//! Shared types for the invoice desk
//!
//! Data model and error types used across the engine, printer and
//! catalog client crates.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CandidateFields, Company, CompanyField, Invoice, InvoiceField, LineItem};
