//! # Domain Errors
//!
//! Error types for packing, rescaling and value-object validation.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A carrier monetary field could not be parsed.
    #[error("invalid carrier amount: {0:?}")]
    InvalidAmount(String),

    /// A postal code does not match the carrier's format.
    #[error("invalid postal code: {0:?}")]
    InvalidPostalCode(String),

    /// An envelope definition is inconsistent.
    #[error("invalid carrier envelope: {0}")]
    InvalidEnvelope(&'static str),

    /// Checked arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl DomainError {
    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(raw: impl Into<String>) -> Self {
        Self::InvalidAmount(raw.into())
    }

    /// Creates an invalid postal code error.
    #[must_use]
    pub fn invalid_postal_code(raw: impl Into<String>) -> Self {
        Self::InvalidPostalCode(raw.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_text() {
        let err = DomainError::invalid_amount("1,2,3");
        assert_eq!(err.to_string(), "invalid carrier amount: \"1,2,3\"");

        let err = DomainError::invalid_postal_code("123");
        assert!(err.to_string().contains("123"));
    }

    #[test]
    fn arithmetic_errors_are_transparent() {
        let err: DomainError = ArithmeticError::Overflow.into();
        assert_eq!(err.to_string(), "arithmetic overflow");
    }
}
