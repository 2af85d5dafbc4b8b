//! Invoice state manager
//!
//! Holds the single current invoice of an editing session. Every operation
//! builds a new [`Invoice`] from the current one and swaps it in, so any
//! snapshot a caller took earlier stays exactly as it was.

use shared::{Company, Invoice, InvoiceField, LineItem};
use tracing::debug;

use crate::utils::Clock;

/// Owner of the current invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceState {
    current: Invoice,
    /// Number of operations that actually changed the invoice
    revision: u64,
}

impl InvoiceState {
    /// Start from an existing invoice
    pub fn new(invoice: Invoice) -> Self {
        Self {
            current: invoice,
            revision: 0,
        }
    }

    /// Start from a fresh draft dated by `clock`
    pub fn draft(clock: &dyn Clock, due_in_days: u64) -> Self {
        let invoice = Invoice::draft(clock.now(), due_in_days);
        debug!(number = %invoice.number, date = %invoice.date, due_date = %invoice.due_date, "Invoice drafted");
        Self::new(invoice)
    }

    /// Current invoice
    pub fn current(&self) -> &Invoice {
        &self.current
    }

    /// Owned copy of the current invoice
    pub fn snapshot(&self) -> Invoice {
        self.current.clone()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the invoice if `next` differs from the current one
    fn apply(&mut self, next: Invoice, op: &'static str) -> &Invoice {
        if next != self.current {
            self.current = next;
            self.revision += 1;
            debug!(op, revision = self.revision, items = self.current.items.len(), "Invoice updated");
        } else {
            debug!(op, "Invoice unchanged");
        }
        &self.current
    }

    /// Replace the sender wholesale
    pub fn set_sender(&mut self, company: Company) -> &Invoice {
        let next = self.current.with_sender(company);
        self.apply(next, "set_sender")
    }

    /// Replace the recipient wholesale
    pub fn set_recipient(&mut self, company: Company) -> &Invoice {
        let next = self.current.with_recipient(company);
        self.apply(next, "set_recipient")
    }

    /// Replace one metadata field; no cross-field validation
    pub fn set_field(&mut self, field: InvoiceField, value: impl Into<String>) -> &Invoice {
        let next = self.current.with_field(field, value);
        self.apply(next, field.as_str())
    }

    /// Append an item without any validation
    pub fn add_item(&mut self, item: LineItem) -> &Invoice {
        let next = self.current.with_item(item);
        self.apply(next, "add_item")
    }

    /// Remove the item at `index`; out of range is a no-op
    pub fn remove_item(&mut self, index: usize) -> &Invoice {
        if index >= self.current.items.len() {
            debug!(index, len = self.current.items.len(), "Remove ignored, index out of range");
            return &self.current;
        }
        let next = self.current.without_item(index);
        self.apply(next, "remove_item")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::at_millis(1_705_314_600_000) // 2024-01-15T10:30:00Z
    }

    fn item(id: &str) -> LineItem {
        LineItem {
            id: id.to_string(),
            title: format!("Product {}", id),
            price: "100.00 KZT".to_string(),
            quantity: 1,
            brand: "Brand".to_string(),
            image: String::new(),
        }
    }

    fn company(name: &str) -> Company {
        Company {
            name: name.to_string(),
            address: "Abay 1, Almaty".to_string(),
            phone: "+7 700 000 00 00".to_string(),
            email: "billing@example.kz".to_string(),
            tax_id: "123456789012".to_string(),
        }
    }

    fn ids(invoice: &Invoice) -> Vec<&str> {
        invoice.items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_draft_uses_clock() {
        let state = InvoiceState::draft(&clock(), 30);
        let invoice = state.current();
        assert_eq!(invoice.number, "INV-1705314600000");
        assert_eq!(invoice.date, "2024-01-15");
        assert_eq!(invoice.due_date, "2024-02-14");
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_add_item_appends_in_call_order() {
        let mut state = InvoiceState::draft(&clock(), 30);
        for id in ["a", "b", "a", "c"] {
            state.add_item(item(id));
        }
        assert_eq!(ids(state.current()), ["a", "b", "a", "c"]);
        assert_eq!(state.revision(), 4);
    }

    #[test]
    fn test_add_item_accepts_malformed_price() {
        let mut state = InvoiceState::draft(&clock(), 30);
        let mut bad = item("x");
        bad.price = "not a price".to_string();
        state.add_item(bad);
        assert_eq!(state.current().items.len(), 1);
    }

    #[test]
    fn test_remove_item_in_range() {
        let mut state = InvoiceState::draft(&clock(), 30);
        for id in ["a", "b", "c", "d"] {
            state.add_item(item(id));
        }
        state.remove_item(1);
        assert_eq!(ids(state.current()), ["a", "c", "d"]);
        state.remove_item(2);
        assert_eq!(ids(state.current()), ["a", "c"]);
        state.remove_item(0);
        assert_eq!(ids(state.current()), ["c"]);
    }

    #[test]
    fn test_remove_duplicate_by_position() {
        let mut state = InvoiceState::draft(&clock(), 30);
        state.add_item(item("a"));
        state.add_item(item("b"));
        state.add_item(item("a"));
        state.remove_item(2);
        assert_eq!(ids(state.current()), ["a", "b"]);
    }

    #[test]
    fn test_remove_item_out_of_range_is_noop() {
        let mut state = InvoiceState::draft(&clock(), 30);
        state.add_item(item("a"));
        state.add_item(item("b"));
        let before = state.clone();

        state.remove_item(2);
        state.remove_item(usize::MAX);
        assert_eq!(state, before);

        let mut empty = InvoiceState::draft(&clock(), 30);
        empty.remove_item(0);
        assert!(empty.current().items.is_empty());
        assert_eq!(empty.revision(), 0);
    }

    #[test]
    fn test_set_field_replaces_only_target() {
        let mut state = InvoiceState::draft(&clock(), 30);
        state.set_sender(company("Sender LLP"));
        state.add_item(item("a"));

        for field in InvoiceField::ALL {
            let before = state.snapshot();
            state.set_field(field, "2030-12-31");
            let after = state.current();

            assert_eq!(after.field(field), "2030-12-31");
            for other in InvoiceField::ALL.iter().filter(|f| **f != field) {
                assert_eq!(after.field(*other), before.field(*other));
            }
            assert_eq!(after.sender, before.sender);
            assert_eq!(after.recipient, before.recipient);
            assert_eq!(after.items, before.items);
        }
    }

    #[test]
    fn test_set_field_no_cross_validation() {
        let mut state = InvoiceState::draft(&clock(), 30);
        state.set_field(InvoiceField::DueDate, "1999-01-01");
        state.set_field(InvoiceField::Date, "not a date");
        assert_eq!(state.current().due_date, "1999-01-01");
        assert_eq!(state.current().date, "not a date");
    }

    #[test]
    fn test_set_sender_is_idempotent() {
        let mut once = InvoiceState::draft(&clock(), 30);
        once.set_sender(company("Acme"));

        let mut twice = InvoiceState::draft(&clock(), 30);
        twice.set_sender(company("Acme"));
        twice.set_sender(company("Acme"));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sender_and_recipient_are_independent() {
        let mut state = InvoiceState::draft(&clock(), 30);
        state.set_sender(company("Sender"));
        state.set_recipient(Company::default());
        assert_eq!(state.current().sender.name, "Sender");
        assert!(state.current().recipient.is_empty());

        state.set_recipient(company("Recipient"));
        assert_eq!(state.current().sender.name, "Sender");
        assert_eq!(state.current().recipient.name, "Recipient");
    }

    #[test]
    fn test_snapshots_are_not_affected_by_later_edits() {
        let mut state = InvoiceState::draft(&clock(), 30);
        state.add_item(item("a"));
        let snapshot = state.snapshot();

        state.add_item(item("b"));
        state.set_field(InvoiceField::Notes, "thanks");
        state.set_sender(company("Other"));

        assert_eq!(ids(&snapshot), ["a"]);
        assert_eq!(snapshot.notes, "");
        assert!(snapshot.sender.is_empty());
    }
}
