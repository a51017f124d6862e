//! # Application Errors
//!
//! Error types for the application layer.
//!
//! Only failures that abort a rate computation are errors. Validation
//! problems, per-service carrier errors and "no services available" are
//! reported inline in the response and never surface here.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Configuration(String)               - Misconfigured deployment (fatal)
//! ├── Domain(DomainError)                 - Packing/rescaling failures
//! └── Infrastructure(InfrastructureError) - Settings and storage failures
//! ```
//!
//! # Examples
//!
//! ```
//! use correios_rates::application::error::{ApplicationError, InfrastructureError};
//!
//! let err = ApplicationError::configuration("could not load \"kg\" measure weight");
//! assert!(err.is_fatal());
//!
//! let infra_err = InfrastructureError::configuration("missing url");
//! let app_err: ApplicationError = infra_err.into();
//! assert!(!app_err.is_fatal());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;
use tracing::error;

/// Infrastructure layer error.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Settings could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Settings store failure.
    #[error("settings store error: {0}")]
    Storage(String),
}

impl InfrastructureError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<config::ConfigError> for InfrastructureError {
    fn from(error: config::ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type for infrastructure operations.
pub type InfrastructureResult<T> = Result<T, InfrastructureError>;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The deployment is misconfigured: a measure unit cannot be resolved or
    /// the origin postal code is missing or invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Domain error from packing or quote normalization.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Infrastructure error from settings or storage.
    #[error("infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl ApplicationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a configuration error and logs it at fatal severity.
    #[must_use]
    pub fn fatal(message: impl Into<String>) -> Self {
        let message = message.into();
        error!(fatal = true, "{message}");
        Self::Configuration(message)
    }

    /// Returns true if this error means the deployment must be fixed before
    /// any computation can succeed.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ArithmeticError;

    #[test]
    fn infrastructure_error_configuration() {
        let err = InfrastructureError::configuration("missing url");
        assert!(err.to_string().contains("configuration"));
        assert!(err.to_string().contains("missing url"));
    }

    #[test]
    fn infrastructure_error_from_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: InfrastructureError = json_err.into();
        assert!(err.to_string().contains("serialization"));
    }

    #[test]
    fn infrastructure_error_storage() {
        let err = InfrastructureError::storage("poisoned");
        assert_eq!(err.to_string(), "settings store error: poisoned");
    }

    #[test]
    fn application_error_configuration_is_fatal() {
        let err = ApplicationError::configuration("origin postal code missing");
        assert!(err.is_fatal());
        assert!(err.to_string().contains("origin postal code missing"));
    }

    #[test]
    fn fatal_error_is_a_configuration_error() {
        let err = ApplicationError::fatal("could not load \"kg\" measure weight");
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "configuration error: could not load \"kg\" measure weight"
        );
    }

    #[test]
    fn application_error_from_domain_error() {
        let domain_err = DomainError::invalid_amount("x");
        let app_err: ApplicationError = domain_err.into();
        assert!(app_err.to_string().contains("domain"));
        assert!(!app_err.is_fatal());
    }

    #[test]
    fn application_error_from_arithmetic_via_domain() {
        let domain_err: DomainError = ArithmeticError::Overflow.into();
        let app_err: ApplicationError = domain_err.into();
        assert!(app_err.to_string().contains("overflow"));
    }

    #[test]
    fn application_error_from_infrastructure_error() {
        let infra_err = InfrastructureError::storage("down");
        let app_err: ApplicationError = infra_err.into();
        assert!(app_err.to_string().contains("infrastructure"));
    }
}
