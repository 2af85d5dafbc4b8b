//! Printable invoice renderer
//!
//! Lays an [`Invoice`] out as fixed-width text and splits it into pages of
//! one fixed format. Amount columns are sized from the widest computed
//! amount, so line totals and the grand total are never cut.

use invoice_printer::{
    Column, DocumentBuilder, Page, PageFormat, PrintError, PrintResult, display_width, paginate,
    wrap_to_width,
};
use shared::{Company, Invoice, LineItem};

use crate::invoice_money::{InvoiceTotals, calculate_totals, format_amount};

const PRICE_WIDTH: usize = 14;
/// Price strings longer than this wrap inside their column
const PRICE_MAX_WIDTH: usize = 20;
const PRICE_MIN_WIDTH: usize = 8;
const QTY_WIDTH: usize = 5;
const QTY_MIN_WIDTH: usize = 3;
const TOTAL_WIDTH: usize = 14;
const BRAND_MAX_WIDTH: usize = 14;
const BRAND_MIN_WIDTH: usize = 6;
const ITEM_MIN_WIDTH: usize = 10;

/// Spaces between the five table columns
const COLUMN_GAPS: usize = 4;

/// Column widths of the item table for one invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TableLayout {
    item: usize,
    brand: usize,
    price: usize,
    qty: usize,
    total: usize,
}

impl TableLayout {
    /// Fit the table into `width` columns
    ///
    /// Qty and Total always get their widest value. Price shrinks (and wraps)
    /// before Item and Brand drop below their minimum.
    fn fit(width: usize, items: &[LineItem], totals: &InvoiceTotals) -> PrintResult<Self> {
        let widest_price = widest("Price", items.iter().map(|i| i.price.clone()));
        let widest_qty = widest("Qty", items.iter().map(|i| i.quantity.to_string()));
        let widest_total = widest(
            "Total",
            totals
                .lines
                .iter()
                .map(|l| format_amount(l.total))
                .chain(std::iter::once(totals.display_grand_total())),
        );

        let mut price = widest_price.clamp(PRICE_WIDTH, PRICE_MAX_WIDTH);
        let mut qty = widest_qty.max(QTY_WIDTH);
        let total = widest_total.max(TOTAL_WIDTH);

        let minimum_rest = ITEM_MIN_WIDTH + BRAND_MIN_WIDTH;
        if price + qty + total + COLUMN_GAPS + minimum_rest > width {
            price = PRICE_MIN_WIDTH;
            qty = widest_qty.max(QTY_MIN_WIDTH);
        }

        let fixed = price + qty + total + COLUMN_GAPS;
        if fixed + minimum_rest > width {
            return Err(PrintError::InvalidConfig(format!(
                "page width {} cannot fit an item table with {}-column amounts",
                width, total
            )));
        }

        let rest = width - fixed;
        let brand = (rest / 3).clamp(BRAND_MIN_WIDTH, BRAND_MAX_WIDTH);
        Ok(Self {
            item: rest - brand,
            brand,
            price,
            qty,
            total,
        })
    }

    fn columns(&self) -> [Column; 5] {
        [
            Column::left(self.item),
            Column::left(self.brand),
            Column::right(self.price),
            Column::right(self.qty),
            Column::right(self.total),
        ]
    }

    /// Full table width, gaps included
    fn width(&self) -> usize {
        self.item + self.brand + self.price + self.qty + self.total + COLUMN_GAPS
    }
}

fn widest(header: &str, values: impl Iterator<Item = String>) -> usize {
    values
        .map(|v| display_width(&v))
        .fold(display_width(header), usize::max)
}

/// Invoice renderer
pub struct InvoiceRenderer {
    format: PageFormat,
}

impl InvoiceRenderer {
    pub fn new(format: PageFormat) -> Self {
        Self { format }
    }

    /// Render to pages
    pub fn render(&self, invoice: &Invoice) -> PrintResult<Vec<Page>> {
        paginate(self.render_lines(invoice)?, self.format)
    }

    /// Render to unpaginated lines
    pub fn render_lines(&self, invoice: &Invoice) -> PrintResult<Vec<String>> {
        let totals = calculate_totals(&invoice.items);
        let table = TableLayout::fit(self.format.width, &invoice.items, &totals)?;
        let mut b = DocumentBuilder::new(self.format.width);

        self.render_header(&mut b, invoice);
        self.render_parties(&mut b, invoice);
        self.render_items(&mut b, invoice, &totals, &table);
        self.render_notes(&mut b, invoice);

        Ok(b.finish())
    }

    /// Title, number and dates
    fn render_header(&self, b: &mut DocumentBuilder, invoice: &Invoice) {
        b.line_lr("INVOICE", &format!("Date: {}", invoice.date));
        b.line_lr(
            &format!("#{}", invoice.number),
            &format!("Due Date: {}", invoice.due_date),
        );
        b.eq_sep();
        b.blank();
    }

    /// Sender and recipient side by side
    fn render_parties(&self, b: &mut DocumentBuilder, invoice: &Invoice) {
        let half = (self.format.width - 1) / 2;
        let left = company_block("From:", &invoice.sender, half);
        let right = company_block("To:", &invoice.recipient, half);
        let cols = [Column::left(half), Column::left(half)];

        for i in 0..left.len().max(right.len()) {
            b.row(&cols, &[cell(&left, i), cell(&right, i)]);
        }
        b.blank();
    }

    /// Item table with line totals and the grand total
    fn render_items(
        &self,
        b: &mut DocumentBuilder,
        invoice: &Invoice,
        totals: &InvoiceTotals,
        table: &TableLayout,
    ) {
        let columns = table.columns();

        b.row(&columns, &["Item", "Brand", "Price", "Qty", "Total"]);
        b.dash_sep();

        for (item, line) in invoice.items.iter().zip(&totals.lines) {
            let title = wrap_to_width(&item.title, table.item);
            let brand = wrap_to_width(&item.brand, table.brand);
            let price = wrap_to_width(&item.price, table.price);
            let qty = item.quantity.to_string();
            let line_total = format_amount(line.total);

            let rows = title.len().max(brand.len()).max(price.len());
            for i in 0..rows {
                let (qty, line_total) = if i == 0 {
                    (qty.as_str(), line_total.as_str())
                } else {
                    ("", "")
                };
                b.row(
                    &columns,
                    &[cell(&title, i), cell(&brand, i), cell(&price, i), qty, line_total],
                );
            }
        }

        b.dash_sep();
        let label_width = table.width() - table.total - 1;
        let grand_total = totals.display_grand_total();
        b.row(
            &[Column::right(label_width), Column::right(table.total)],
            &["Total:", grand_total.as_str()],
        );
    }

    fn render_notes(&self, b: &mut DocumentBuilder, invoice: &Invoice) {
        if invoice.notes.trim().is_empty() {
            return;
        }
        b.blank();
        b.line("Notes:");
        b.line(&invoice.notes);
    }
}

impl Default for InvoiceRenderer {
    fn default() -> Self {
        Self::new(PageFormat::A4)
    }
}

fn cell(lines: &[String], i: usize) -> &str {
    lines.get(i).map(String::as_str).unwrap_or("")
}

fn company_block(title: &str, company: &Company, width: usize) -> Vec<String> {
    let mut lines = vec![title.to_string()];
    for field in [&company.name, &company.address, &company.phone, &company.email] {
        lines.extend(wrap_to_width(field, width));
    }
    lines.extend(wrap_to_width(&format!("Tax ID: {}", company.tax_id), width));
    lines
}
