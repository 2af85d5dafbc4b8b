//! Line Item Model
//!
//! One billable product entry. The price is kept exactly as the source
//! provided it (`"<number> <currency>"`); only the leading number is ever
//! interpreted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{AppError, AppResult, ErrorCode};

/// Line item entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Article id, unique per invoice by convention only
    pub id: String,
    pub title: String,
    /// Price as displayed by the source, e.g. `"100.00 KZT"`
    pub price: String,
    pub quantity: u32,
    pub brand: String,
    /// Image URI
    pub image: String,
}

/// Untrusted fields of a lookup candidate
///
/// `quantity` is signed so that bad input from the outside can be reported
/// instead of being silently wrapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateFields {
    pub id: String,
    pub title: String,
    pub price: String,
    pub quantity: i64,
    pub brand: String,
    pub image: String,
}

/// Largest number of integer digits a [`Decimal`] can hold
const MAX_INTEGER_DIGITS: i64 = 29;
/// Smallest magnitude a [`Decimal`] can hold is `1e-28`
const MAX_SCALE: i64 = 28;

/// Parse the amount at the start of a price string
///
/// Only the first space-separated segment is read. Leading whitespace is
/// skipped and the longest `[+-]digits[.digits][e[+-]digits]` prefix is
/// taken, so `"100.00KZT"` is `100` and `"12abc"` is `12`. `Infinity` and
/// values past the decimal range saturate to [`Decimal::MAX`] or
/// [`Decimal::MIN`]; magnitudes below `1e-28` become zero. Returns `None`
/// when no digit leads the segment.
pub fn parse_price_token(price: &str) -> Option<Decimal> {
    let segment = price.split(' ').next().unwrap_or_default().trim_start();
    let (negative, unsigned) = match segment.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, segment.strip_prefix('+').unwrap_or(segment)),
    };

    if unsigned.starts_with("Infinity") {
        tracing::warn!(price, "Infinite price saturated to the decimal range");
        return Some(saturated(negative));
    }

    let number = NumericPrefix::scan(unsigned)?;
    let digits = format!("{}{}", number.integer, number.fraction);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }

    // value = digits * 10^shift
    let shift = number
        .exponent
        .saturating_sub(number.fraction.len() as i64);
    let magnitude = (digits.len() as i64).saturating_add(shift);
    if magnitude > MAX_INTEGER_DIGITS {
        tracing::warn!(price, "Price exceeds the decimal range, saturated");
        return Some(saturated(negative));
    }
    if magnitude <= -MAX_SCALE {
        return Some(Decimal::ZERO);
    }

    let plain = if shift >= 0 {
        format!("{}{}", digits, "0".repeat(shift as usize))
    } else {
        let scale = shift.unsigned_abs() as usize;
        let (int, frac) = if scale < digits.len() {
            let (int, frac) = digits.split_at(digits.len() - scale);
            (int.to_string(), frac.to_string())
        } else {
            ("0".to_string(), format!("{}{}", "0".repeat(scale - digits.len()), digits))
        };
        // Keep at most 28 significant digits
        let int_digits = if int == "0" { 0 } else { int.len() };
        let kept = frac.len().min((MAX_SCALE as usize).saturating_sub(int_digits));
        format!("{}.{}", int, &frac[..kept])
    };

    match Decimal::from_str(&plain) {
        Ok(value) if negative => Some(-value),
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(price, error = %e, "Price exceeds the decimal range, saturated");
            Some(saturated(negative))
        }
    }
}

fn saturated(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

/// Numeric prefix of an unsigned token
struct NumericPrefix<'a> {
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
}

impl<'a> NumericPrefix<'a> {
    fn scan(s: &'a str) -> Option<Self> {
        let integer = leading_digits(s);
        let mut rest = &s[integer.len()..];

        let mut fraction = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            fraction = leading_digits(after_dot);
            rest = &after_dot[fraction.len()..];
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }

        let mut exponent = 0i64;
        if let Some(after_e) = rest.strip_prefix(['e', 'E']) {
            let (sign, unsigned) = match after_e.strip_prefix('-') {
                Some(r) => (-1, r),
                None => (1, after_e.strip_prefix('+').unwrap_or(after_e)),
            };
            let exp_digits = leading_digits(unsigned);
            if !exp_digits.is_empty() {
                let value = exp_digits.bytes().fold(0i64, |acc, b| {
                    acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
                });
                exponent = sign * value;
            }
        }

        Some(Self {
            integer,
            fraction,
            exponent,
        })
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}

impl LineItem {
    /// Build a line item from lookup data, validating at the boundary
    ///
    /// Requires a non-empty title, a price whose leading token parses as a
    /// number and a positive quantity that fits `u32`.
    pub fn candidate(fields: CandidateFields) -> AppResult<Self> {
        let title = fields.title.trim();
        if title.is_empty() {
            tracing::debug!(id = %fields.id, "Rejecting candidate without title");
            return Err(AppError::new(ErrorCode::ProductTitleRequired)
                .with_detail("id", fields.id.clone()));
        }

        if parse_price_token(&fields.price).is_none() {
            tracing::debug!(id = %fields.id, price = %fields.price, "Rejecting candidate with malformed price");
            return Err(AppError::invalid_price(fields.price.clone()).with_detail("id", fields.id));
        }

        let quantity = match u32::try_from(fields.quantity) {
            Ok(q) if q > 0 => q,
            _ => {
                return Err(AppError::with_message(
                    ErrorCode::ProductInvalidQuantity,
                    format!("quantity must be positive, got {}", fields.quantity),
                )
                .with_detail("quantity", fields.quantity));
            }
        };

        Ok(Self {
            id: fields.id,
            title: title.to_string(),
            price: fields.price,
            quantity,
            brand: fields.brand,
            image: fields.image,
        })
    }

    /// Parsed unit price, `None` when the price is malformed
    pub fn unit_price(&self) -> Option<Decimal> {
        parse_price_token(&self.price)
    }

    /// Copy with a different quantity
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(title: &str, price: &str, quantity: i64) -> CandidateFields {
        CandidateFields {
            id: "A-1".to_string(),
            title: title.to_string(),
            price: price.to_string(),
            quantity,
            brand: "Brand".to_string(),
            image: "https://example.com/a.jpg".to_string(),
        }
    }

    #[test]
    fn test_parse_price_token() {
        assert_eq!(parse_price_token("100.00 KZT"), Some(Decimal::new(10000, 2)));
        assert_eq!(parse_price_token("-3.5 EUR"), Some(Decimal::new(-35, 1)));
        assert_eq!(parse_price_token("+7 USD"), Some(Decimal::from(7)));
        assert_eq!(parse_price_token("1e3 KZT"), Some(Decimal::from(1000)));
        assert_eq!(parse_price_token(".5 KZT"), Some(Decimal::new(5, 1)));
        assert_eq!(parse_price_token("5. KZT"), Some(Decimal::from(5)));
        assert_eq!(parse_price_token("\t42 KZT"), Some(Decimal::from(42)));
        assert_eq!(parse_price_token("abc"), None);
        assert_eq!(parse_price_token(""), None);
        assert_eq!(parse_price_token("-.e5"), None);
        // Segment before the first space is empty
        assert_eq!(parse_price_token(" 100 KZT"), None);
    }

    #[test]
    fn test_parse_price_token_reads_numeric_prefix() {
        assert_eq!(parse_price_token("100.00KZT"), Some(Decimal::new(10000, 2)));
        assert_eq!(parse_price_token("12abc KZT"), Some(Decimal::from(12)));
        assert_eq!(parse_price_token("1_000 KZT"), Some(Decimal::from(1)));
        assert_eq!(parse_price_token("2.5.1 KZT"), Some(Decimal::new(25, 1)));
        // Exponent markers without digits are not part of the number
        assert_eq!(parse_price_token("3e KZT"), Some(Decimal::from(3)));
        assert_eq!(parse_price_token("3e+x KZT"), Some(Decimal::from(3)));
        assert_eq!(parse_price_token("1.5E2"), Some(Decimal::from(150)));
    }

    #[test]
    fn test_parse_price_token_out_of_range() {
        assert_eq!(parse_price_token("1e30 KZT"), Some(Decimal::MAX));
        assert_eq!(parse_price_token("-1e30 KZT"), Some(Decimal::MIN));
        assert_eq!(parse_price_token("Infinity KZT"), Some(Decimal::MAX));
        assert_eq!(parse_price_token("-Infinity"), Some(Decimal::MIN));
        assert_eq!(
            parse_price_token("1e99999999999999999999 KZT"),
            Some(Decimal::MAX)
        );
        assert_eq!(parse_price_token("1e-40 KZT"), Some(Decimal::ZERO));
        assert_eq!(parse_price_token("0.000e5"), Some(Decimal::ZERO));
        assert_eq!(
            parse_price_token("0.12345678901234567890123456789999"),
            Some(Decimal::from_str("0.1234567890123456789012345678").unwrap())
        );

        let close_to_max = parse_price_token("7.9e28 KZT").unwrap();
        assert_eq!(close_to_max, Decimal::from_str("79000000000000000000000000000").unwrap());
        let tiny = parse_price_token("1e-28").unwrap();
        assert_eq!(tiny, Decimal::new(1, 28));
        let long = parse_price_token("1234567890.123456789012345678901234 KZT").unwrap();
        assert_eq!(long, Decimal::from_str("1234567890.123456789012345678").unwrap());
    }

    #[test]
    fn test_candidate_valid() {
        let item = LineItem::candidate(fields("  Phone  ", "100.00 KZT", 1)).unwrap();
        assert_eq!(item.title, "Phone");
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, "100.00 KZT");
    }

    #[test]
    fn test_candidate_accepts_price_without_separator() {
        let item = LineItem::candidate(fields("Phone", "100.00KZT", 1)).unwrap();
        assert_eq!(item.price, "100.00KZT");
        assert_eq!(item.unit_price(), Some(Decimal::new(10000, 2)));
    }

    #[test]
    fn test_candidate_rejects_empty_title() {
        let err = LineItem::candidate(fields("   ", "100.00 KZT", 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductTitleRequired);
    }

    #[test]
    fn test_candidate_rejects_bad_price() {
        let err = LineItem::candidate(fields("Phone", "free", 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
    }

    #[test]
    fn test_candidate_rejects_non_positive_quantity() {
        for q in [0, -2, i64::from(u32::MAX) + 1] {
            let err = LineItem::candidate(fields("Phone", "1 KZT", q)).unwrap_err();
            assert_eq!(err.code, ErrorCode::ProductInvalidQuantity, "quantity {}", q);
        }
    }

    #[test]
    fn test_unit_price_malformed() {
        let item = LineItem {
            id: "x".to_string(),
            title: "x".to_string(),
            price: "abc".to_string(),
            quantity: 1,
            brand: String::new(),
            image: String::new(),
        };
        assert_eq!(item.unit_price(), None);
        assert_eq!(item.with_quantity(4).quantity, 4);
    }
}
