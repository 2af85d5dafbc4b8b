//! Invoice printing

pub mod renderer;

pub use renderer::InvoiceRenderer;
