//! Unified error codes for the invoice desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Invoice errors
//! - 6xxx: Product errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they survive a JSON
/// round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Invoice ====================
    /// Unknown invoice metadata field
    InvoiceFieldUnknown = 4001,
    /// No lookup candidate is waiting for confirmation
    InvoiceNoPendingItem = 4002,

    // ==================== 6xxx: Product ====================
    /// Product price cannot be parsed
    ProductInvalidPrice = 6002,
    /// Product quantity must be positive
    ProductInvalidQuantity = 6003,
    /// Product title is empty
    ProductTitleRequired = 6004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Document export failed
    ExportFailed = 9202,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            ErrorCode::InvoiceFieldUnknown => "Unknown invoice field",
            ErrorCode::InvoiceNoPendingItem => "No product is waiting to be added",

            ErrorCode::ProductInvalidPrice => "Product price is not a number",
            ErrorCode::ProductInvalidQuantity => "Product quantity must be positive",
            ErrorCode::ProductTitleRequired => "Product title is required",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::ExportFailed => "Document export failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            4001 => Ok(ErrorCode::InvoiceFieldUnknown),
            4002 => Ok(ErrorCode::InvoiceNoPendingItem),

            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6003 => Ok(ErrorCode::ProductInvalidQuantity),
            6004 => Ok(ErrorCode::ProductTitleRequired),

            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9202 => Ok(ErrorCode::ExportFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::InvoiceFieldUnknown.code(), 4001);
        assert_eq!(ErrorCode::ProductInvalidPrice.code(), 6002);
        assert_eq!(ErrorCode::ExportFailed.code(), 9202);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(6002), Ok(ErrorCode::ProductInvalidPrice));
        assert_eq!(ErrorCode::try_from(9005), Ok(ErrorCode::ConfigError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductTitleRequired).unwrap();
        assert_eq!(json, "6004");

        let back: ErrorCode = serde_json::from_str("6003").unwrap();
        assert_eq!(back, ErrorCode::ProductInvalidQuantity);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("1234");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::InvalidRequest.to_string(), "5");
        assert_eq!(InvalidErrorCode(77).to_string(), "invalid error code: 77");
    }
}
