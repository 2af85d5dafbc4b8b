//! Invoice data models

pub mod company;
pub mod invoice;
pub mod line_item;

// Re-exports
pub use company::*;
pub use invoice::*;
pub use line_item::*;
