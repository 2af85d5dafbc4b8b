//! Invoice Model
//!
//! The invoice is an immutable value: every `with_*` method borrows the
//! current invoice and returns a new one.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::company::Company;
use super::line_item::LineItem;

/// Calendar date format used for `date` and `due_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default payment term in days
pub const DEFAULT_DUE_IN_DAYS: u64 = 30;

/// Longest accepted payment term (about a hundred years)
pub const MAX_DUE_IN_DAYS: u64 = 36_500;

/// Invoice entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub number: String,
    /// Issue date (YYYY-MM-DD)
    pub date: String,
    /// Due date (YYYY-MM-DD)
    pub due_date: String,
    pub sender: Company,
    pub recipient: Company,
    /// Display and summation order
    pub items: Vec<LineItem>,
    pub notes: String,
}

/// Simple metadata fields that can be replaced one at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceField {
    Number,
    Date,
    DueDate,
    Notes,
}

impl InvoiceField {
    pub const ALL: [InvoiceField; 4] = [Self::Number, Self::Date, Self::DueDate, Self::Notes];

    /// Parse a field name as typed on the editing surface
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "number" => Some(Self::Number),
            "date" => Some(Self::Date),
            "dueDate" | "due_date" | "due-date" => Some(Self::DueDate),
            "notes" => Some(Self::Notes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::DueDate => "dueDate",
            Self::Notes => "notes",
        }
    }
}

impl Invoice {
    /// Fresh invoice for a new editing session
    ///
    /// number = `INV-<unix millis>`, date = `now` as a UTC calendar date,
    /// due date = date + `due_in_days` (clamped to the last representable
    /// date), everything else empty.
    pub fn draft(now: DateTime<Utc>, due_in_days: u64) -> Self {
        let today = now.date_naive();
        let due = today
            .checked_add_days(Days::new(due_in_days))
            .unwrap_or(NaiveDate::MAX);

        Self {
            number: format!("INV-{}", now.timestamp_millis()),
            date: today.format(DATE_FORMAT).to_string(),
            due_date: due.format(DATE_FORMAT).to_string(),
            sender: Company::default(),
            recipient: Company::default(),
            items: Vec::new(),
            notes: String::new(),
        }
    }

    /// Read a metadata field
    pub fn field(&self, field: InvoiceField) -> &str {
        match field {
            InvoiceField::Number => &self.number,
            InvoiceField::Date => &self.date,
            InvoiceField::DueDate => &self.due_date,
            InvoiceField::Notes => &self.notes,
        }
    }

    pub fn with_sender(&self, sender: Company) -> Self {
        Self {
            sender,
            ..self.clone()
        }
    }

    pub fn with_recipient(&self, recipient: Company) -> Self {
        Self {
            recipient,
            ..self.clone()
        }
    }

    /// Replace exactly one metadata field; no cross-field checks
    pub fn with_field(&self, field: InvoiceField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            InvoiceField::Number => next.number = value,
            InvoiceField::Date => next.date = value,
            InvoiceField::DueDate => next.due_date = value,
            InvoiceField::Notes => next.notes = value,
        }
        next
    }

    /// Append an item; duplicates and malformed prices are accepted
    pub fn with_item(&self, item: LineItem) -> Self {
        let mut next = self.clone();
        next.items.push(item);
        next
    }

    /// Remove the item at `index`
    ///
    /// An index outside `0..items.len()` returns an identical copy.
    pub fn without_item(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.items.len() {
            next.items.remove(index);
        }
        next
    }

    /// File stem used when exporting this invoice
    pub fn export_stem(&self) -> String {
        format!("invoice-{}", self.number)
    }
}
