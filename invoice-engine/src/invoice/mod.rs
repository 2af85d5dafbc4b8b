//! Invoice state management
//!
//! - [`InvoiceState`] - single owner of the current invoice

pub mod state;

pub use state::InvoiceState;
