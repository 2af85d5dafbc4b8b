//! # invoice-printer
//!
//! Printable document library - low-level layout and export only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - Fixed-width text layout (columns, alignment, separators)
//! - Pagination into fixed-size pages
//! - Exporting pages to disk
//!
//! Business logic (WHAT to print) stays in application code:
//! - Invoice rendering → invoice-engine
//!
//! ## Example
//!
//! ```ignore
//! use invoice_printer::{DocumentBuilder, DocumentExporter, PageFormat, TextFileExporter, paginate};
//!
//! let mut b = DocumentBuilder::new(PageFormat::A4.width);
//! b.line("INVOICE");
//! b.eq_sep();
//! b.line_lr("Total:", "250.00 KZT");
//!
//! let pages = paginate(b.finish(), PageFormat::A4)?;
//! let exporter = TextFileExporter::new("/tmp/exports");
//! let path = exporter.export("invoice-INV-1", &pages).await?;
//! ```

mod error;
mod export;
mod layout;
mod page;
mod text;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use export::{DocumentExporter, TextFileExporter, sanitize_stem};
pub use layout::{Align, Column, DocumentBuilder};
pub use page::{Page, PageFormat, paginate};
pub use text::{display_width, pad_to_width, truncate_to_width, wrap_to_width};
