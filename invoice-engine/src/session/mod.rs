//! Editing session
//!
//! Drives one invoice through the commands typed on the editing surface.
//! The session owns the [`InvoiceState`], the current [`Mode`] and at most
//! one pending lookup candidate, which only reaches the invoice on
//! `confirm`.

pub mod command;
pub mod error;


use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use invoice_client::ProductLookup;
use invoice_printer::{DocumentExporter, Page};
use shared::{AppError, CompanyField, Invoice, InvoiceField, LineItem};
use tracing::{debug, info, warn};

use crate::invoice::InvoiceState;
use crate::invoice_money::{calculate_totals, format_amount};
use crate::printing::InvoiceRenderer;

pub use command::{Command, HELP};
pub use error::{SessionError, SessionResult};

/// Editing surface mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Preview,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Edit => "edit",
            Mode::Preview => "preview",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

impl Reply {
    fn text(s: impl Into<String>) -> Self {
        Reply::Text(s.into())
    }
}

/// One invoice being edited
pub struct EditingSession<E: DocumentExporter> {
    state: InvoiceState,
    mode: Mode,
    pending: Option<LineItem>,
    lookup: Arc<dyn ProductLookup>,
    exporter: E,
    renderer: InvoiceRenderer,
}

impl<E: DocumentExporter> EditingSession<E> {
    pub fn new(
        state: InvoiceState,
        lookup: Arc<dyn ProductLookup>,
        exporter: E,
        renderer: InvoiceRenderer,
    ) -> Self {
        Self {
            state,
            mode: Mode::Edit,
            pending: None,
            lookup,
            exporter,
            renderer,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn state(&self) -> &InvoiceState {
        &self.state
    }

    pub fn invoice(&self) -> &Invoice {
        self.state.current()
    }

    /// Candidate waiting for `confirm` or `discard`
    pub fn pending(&self) -> Option<&LineItem> {
        self.pending.as_ref()
    }

    pub fn exporter(&self) -> &E {
        &self.exporter
    }

    /// Switch mode; the invoice is never touched
    pub fn switch_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = %self.mode, to = %mode, "Mode switched");
            self.mode = mode;
        }
    }

    fn ensure_edit(&self, command: &'static str) -> SessionResult<()> {
        if self.mode == Mode::Edit {
            Ok(())
        } else {
            Err(SessionError::WrongMode {
                command,
                mode: self.mode,
            })
        }
    }

    // ========== Editing ==========

    /// Overwrite one sender field, then replace the sender wholesale
    pub fn update_sender(&mut self, field: CompanyField, value: &str) -> SessionResult<&Invoice> {
        self.ensure_edit("sender")?;
        let sender = self.invoice().sender.with_field(field, value);
        Ok(self.state.set_sender(sender))
    }

    /// Overwrite one recipient field, then replace the recipient wholesale
    pub fn update_recipient(&mut self, field: CompanyField, value: &str) -> SessionResult<&Invoice> {
        self.ensure_edit("recipient")?;
        let recipient = self.invoice().recipient.with_field(field, value);
        Ok(self.state.set_recipient(recipient))
    }

    pub fn set_field(&mut self, field: InvoiceField, value: &str) -> SessionResult<&Invoice> {
        self.ensure_edit("set")?;
        Ok(self.state.set_field(field, value))
    }

    pub fn remove_item(&mut self, index: usize) -> SessionResult<&Invoice> {
        self.ensure_edit("remove")?;
        Ok(self.state.remove_item(index))
    }

    /// Look an article up and hold the result as the pending candidate
    ///
    /// A found candidate replaces any earlier one; "not found" clears it.
    /// A failed lookup leaves the pending candidate as it was.
    pub async fn lookup(&mut self, article_id: &str) -> SessionResult<Option<&LineItem>> {
        self.ensure_edit("lookup")?;

        let found = match self.lookup.lookup(article_id).await {
            Ok(found) => found,
            Err(e) => {
                warn!(article_id, error = %e, "Product lookup failed");
                return Err(e.into());
            }
        };

        match &found {
            Some(item) => debug!(article_id, id = %item.id, "Candidate pending"),
            None => debug!(article_id, "No product for article id"),
        }
        self.pending = found;
        Ok(self.pending.as_ref())
    }

    /// Add the pending candidate, optionally with another quantity
    pub fn confirm(&mut self, quantity: Option<u32>) -> SessionResult<&Invoice> {
        self.ensure_edit("confirm")?;
        if quantity == Some(0) {
            return Err(AppError::validation("quantity must be positive").into());
        }
        let candidate = self.pending.take().ok_or(SessionError::NoPendingCandidate)?;
        let item = match quantity {
            Some(qty) => candidate.with_quantity(qty),
            None => candidate,
        };
        Ok(self.state.add_item(item))
    }

    /// Drop the pending candidate, returning it
    pub fn discard(&mut self) -> SessionResult<Option<LineItem>> {
        self.ensure_edit("discard")?;
        Ok(self.pending.take())
    }

    // ========== Output ==========

    /// Paginated printable invoice
    pub fn render(&self) -> SessionResult<Vec<Page>> {
        self.renderer
            .render(self.invoice())
            .map_err(SessionError::Render)
    }

    /// Printable invoice as terminal text
    pub fn preview(&self) -> SessionResult<String> {
        let pages = self.render()?;
        Ok(pages
            .iter()
            .map(Page::render)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Export the printable invoice under `invoice-<number>`
    pub async fn export(&self) -> SessionResult<PathBuf> {
        let pages = self.render()?;
        let stem = self.invoice().export_stem();
        let path = self.exporter.export(&stem, &pages).await?;
        info!(number = %self.invoice().number, path = %path.display(), "Invoice exported");
        Ok(path)
    }

    /// Numbered item list with line totals
    pub fn items_listing(&self) -> String {
        let invoice = self.invoice();
        if invoice.items.is_empty() {
            return "(no items)".to_string();
        }
        let totals = calculate_totals(&invoice.items);
        invoice
            .items
            .iter()
            .zip(&totals.lines)
            .map(|(item, line)| {
                format!(
                    "{}. {} [{}] {} x{} = {}",
                    line.index,
                    item.title,
                    item.id,
                    item.price,
                    item.quantity,
                    format_amount(line.total)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Grand total line, with a warning for unparsable prices
    pub fn total_summary(&self) -> String {
        let totals = calculate_totals(&self.invoice().items);
        let mut out = format!("Total: {}", totals.display_grand_total());
        let invalid = totals.invalid_lines();
        if !invalid.is_empty() {
            let list = invalid
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("\nwarning: unparsable price on item(s) {}", list));
        }
        out
    }

    /// Run one parsed command
    pub async fn execute(&mut self, command: Command) -> SessionResult<Reply> {
        debug!(command = command.name(), mode = %self.mode, "Executing command");

        let reply = match command {
            Command::Edit => {
                self.switch_mode(Mode::Edit);
                Reply::text("Edit mode")
            }
            Command::Preview => {
                self.switch_mode(Mode::Preview);
                Reply::Text(self.preview()?)
            }
            Command::Sender(field, value) => {
                self.update_sender(field, &value)?;
                Reply::text(format!("Sender {} updated", field.as_str()))
            }
            Command::Recipient(field, value) => {
                self.update_recipient(field, &value)?;
                Reply::text(format!("Recipient {} updated", field.as_str()))
            }
            Command::Set(field, value) => {
                let invoice = self.set_field(field, &value)?;
                Reply::text(format!("{} = {}", field.as_str(), invoice.field(field)))
            }
            Command::Lookup(article_id) => match self.lookup(&article_id).await? {
                Some(item) => Reply::text(format!(
                    "Found: {} ({}) {}\nType `confirm [qty]` to add it or `discard` to drop it",
                    item.title, item.brand, item.price
                )),
                None => Reply::text(format!("No product found for article id '{}'", article_id)),
            },
            Command::Confirm(quantity) => {
                let invoice = self.confirm(quantity)?;
                let added = invoice.items.len();
                Reply::text(format!("Item added ({} in invoice)", added))
            }
            Command::Discard => match self.discard()? {
                Some(item) => Reply::text(format!("Discarded {}", item.title)),
                None => Reply::text("Nothing to discard"),
            },
            Command::Remove(index) => {
                let before = self.invoice().items.len();
                let after = self.remove_item(index)?.items.len();
                if after < before {
                    Reply::text(format!("Item {} removed", index))
                } else {
                    Reply::text(format!("No item at index {}", index))
                }
            }
            Command::Items => Reply::Text(self.items_listing()),
            Command::Total => Reply::Text(self.total_summary()),
            Command::Show => {
                let json = serde_json::to_string_pretty(self.invoice())
                    .map_err(|e| AppError::internal(e.to_string()))?;
                Reply::Text(json)
            }
            Command::Export => {
                let path = self.export().await?;
                Reply::text(format!("Exported to {}", path.display()))
            }
            Command::Help => Reply::text(HELP),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }
}
