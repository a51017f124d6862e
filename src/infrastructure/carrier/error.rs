//! # Carrier Errors
//!
//! Transport-level failures of the rate service.
//!
//! Per-service errors (a quote whose error code is not `"0"`) are data, not
//! errors; this type covers the call itself failing.
//!
//! # Examples
//!
//! ```
//! use correios_rates::infrastructure::carrier::error::CarrierError;
//!
//! let error = CarrierError::timeout("rate service did not answer in 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = CarrierError::authentication("invalid company code");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for rate service calls.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// Request timed out.
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("carrier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Contract credentials rejected.
    #[error("carrier authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// The request was rejected as a whole.
    #[error("carrier invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The response could not be understood.
    #[error("carrier protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
    },

    /// The rate service is down.
    #[error("carrier unavailable: {message}")]
    Unavailable {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Returns true if a later computation may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::Unavailable { .. }
        )
    }

    /// Returns the timeout in milliseconds, if known.
    #[must_use]
    pub fn timeout_ms(&self) -> Option<u64> {
        match self {
            Self::Timeout { timeout_ms, .. } => *timeout_ms,
            _ => None,
        }
    }
}

/// Result type for rate service calls.
pub type CarrierResult<T> = Result<T, CarrierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        let error = CarrierError::timeout_with_duration("slow", 5000);
        assert!(error.is_retryable());
        assert_eq!(error.timeout_ms(), Some(5000));
    }

    #[test]
    fn connection_and_unavailable_are_retryable() {
        assert!(CarrierError::connection("refused").is_retryable());
        assert!(CarrierError::unavailable("maintenance").is_retryable());
    }

    #[test]
    fn client_side_errors_are_not_retryable() {
        assert!(!CarrierError::authentication("bad password").is_retryable());
        assert!(!CarrierError::invalid_request("no services").is_retryable());
        assert!(!CarrierError::protocol("bad xml").is_retryable());
    }

    #[test]
    fn display_format() {
        let display = CarrierError::timeout("request timed out").to_string();
        assert!(display.contains("timeout"));
        assert!(display.contains("request timed out"));
    }
}
