//! Company Model

use serde::{Deserialize, Serialize};

/// A party on the invoice (sender or recipient)
///
/// All fields are free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub tax_id: String,
}

/// Single editable company field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    Address,
    Phone,
    Email,
    TaxId,
}

impl CompanyField {
    /// Parse a field name as typed on the editing surface
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "address" => Some(Self::Address),
            "phone" => Some(Self::Phone),
            "email" => Some(Self::Email),
            "taxId" | "tax_id" | "tax-id" => Some(Self::TaxId),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::TaxId => "taxId",
        }
    }
}

impl Company {
    /// Return a copy with one field overwritten
    ///
    /// This is the field-level overwrite the form performs before the whole
    /// company is handed to the state manager.
    pub fn with_field(&self, field: CompanyField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            CompanyField::Name => next.name = value,
            CompanyField::Address => next.address = value,
            CompanyField::Phone => next.phone = value,
            CompanyField::Email => next.email = value,
            CompanyField::TaxId => next.tax_id = value,
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.address.is_empty()
            && self.phone.is_empty()
            && self.email.is_empty()
            && self.tax_id.is_empty()
    }
}
