//! # Postal Code
//!
//! Brazilian CEP as accepted for the shipment origin.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum accepted length (`"01310100"`).
const MIN_LEN: usize = 8;

/// Maximum accepted length (`"01310-100"`).
const MAX_LEN: usize = 9;

/// A validated CEP: 8 digits, optionally with the hyphen (8 or 9 characters).
///
/// # Examples
///
/// ```
/// use correios_rates::domain::value_objects::PostalCode;
///
/// assert!(PostalCode::parse("01310-100").is_ok());
/// assert!(PostalCode::parse("0131").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Parses a postal code, checking only its length.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPostalCode` if the code is not 8 or 9
    /// characters long.
    pub fn parse(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        let len = raw.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(DomainError::invalid_postal_code(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PostalCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
