//! Money calculation utilities using rust_decimal
//!
//! Line totals and the grand total are computed from the leading numeric
//! token of each item's price string. A price that does not parse makes its
//! amount `NotANumber`, and that poisons every sum it takes part in: a bad
//! item shows up as `NaN` in the total instead of being counted as zero.

use rust_decimal::prelude::*;
use shared::LineItem;
use std::fmt;
use std::ops::Add;

/// Currency label printed after every computed amount
///
/// Fixed, independent of the label in the item's own price string.
pub const DISPLAY_CURRENCY: &str = "KZT";

/// Rounding for display (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// A computed amount, or the result of a failed price parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    Value(Decimal),
    NotANumber,
}

impl Amount {
    pub const ZERO: Amount = Amount::Value(Decimal::ZERO);

    pub fn is_nan(&self) -> bool {
        matches!(self, Amount::NotANumber)
    }

    /// Multiply by a quantity; overflow is `NotANumber`
    pub fn times(self, quantity: u32) -> Amount {
        match self {
            Amount::Value(v) => v
                .checked_mul(Decimal::from(quantity))
                .map_or(Amount::NotANumber, Amount::Value),
            Amount::NotANumber => Amount::NotANumber,
        }
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        match (self, rhs) {
            (Amount::Value(a), Amount::Value(b)) => {
                a.checked_add(b).map_or(Amount::NotANumber, Amount::Value)
            }
            _ => Amount::NotANumber,
        }
    }
}

impl From<Option<Decimal>> for Amount {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Amount::NotANumber, Amount::Value)
    }
}

/// Two decimals, or `NaN`
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(v) => {
                let mut rounded =
                    v.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
                rounded.rescale(DECIMAL_PLACES);
                if rounded.is_zero() {
                    rounded.set_sign_positive(true);
                }
                write!(f, "{}", rounded)
            }
            Amount::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Amount with the display currency, e.g. `"250.00 KZT"` or `"NaN KZT"`
pub fn format_amount(amount: Amount) -> String {
    format!("{} {}", amount, DISPLAY_CURRENCY)
}

/// Unit price of an item
pub fn unit_price(item: &LineItem) -> Amount {
    item.unit_price().into()
}

/// Unit price × quantity
pub fn calculate_line_total(item: &LineItem) -> Amount {
    unit_price(item).times(item.quantity)
}

/// Sum of all line totals, accumulated in item order
pub fn calculate_grand_total(items: &[LineItem]) -> Amount {
    items
        .iter()
        .map(calculate_line_total)
        .fold(Amount::ZERO, |acc, line| acc + line)
}

/// Per-item breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTotal {
    /// Position in the invoice
    pub index: usize,
    pub unit_price: Amount,
    pub quantity: u32,
    pub total: Amount,
}

/// Totals for a whole invoice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceTotals {
    pub lines: Vec<LineTotal>,
    pub grand_total: Amount,
}

impl InvoiceTotals {
    /// Grand total with currency label
    pub fn display_grand_total(&self) -> String {
        format_amount(self.grand_total)
    }

    /// Indices of items whose price could not be parsed
    pub fn invalid_lines(&self) -> Vec<usize> {
        self.lines
            .iter()
            .filter(|l| l.unit_price.is_nan())
            .map(|l| l.index)
            .collect()
    }
}

/// Compute line totals and the grand total in one pass
pub fn calculate_totals(items: &[LineItem]) -> InvoiceTotals {
    let lines: Vec<LineTotal> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let unit = unit_price(item);
            LineTotal {
                index,
                unit_price: unit,
                quantity: item.quantity,
                total: unit.times(item.quantity),
            }
        })
        .collect();

    let grand_total = lines
        .iter()
        .fold(Amount::ZERO, |acc, line| acc + line.total);

    if grand_total.is_nan() {
        tracing::debug!(items = items.len(), "Grand total is not a number");
    }

    InvoiceTotals { lines, grand_total }
}
