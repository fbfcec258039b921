//! Product identifier (SKU) value object.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A product identifier as it appears in the source data.
///
/// The stored case is preserved for display; matching against user input is
/// case-insensitive (Unicode case folding, so `sku1` finds `SKU1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Create a SKU from source data.
    ///
    /// Rejects identifiers that are empty after trimming; surrounding
    /// whitespace is stripped so stored ids and user input normalize the
    /// same way.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against an already-trimmed identifier.
    pub fn matches(&self, identifier: &str) -> bool {
        self.0.to_lowercase() == identifier.to_lowercase()
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl AsRef<str> for Sku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
