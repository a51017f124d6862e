//! # Quote Requestor Trait
//!
//! Port definition for the carrier's rate service.
//!
//! The transport (request signing, SOAP call, XML parsing) lives behind this
//! trait. A rate computation awaits exactly one call.
//!
//! # Examples
//!
//! ```ignore
//! use correios_rates::infrastructure::carrier::traits::QuoteRequestor;
//!
//! struct SoapRequestor { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl QuoteRequestor for SoapRequestor {
//!     // ... implement calculate
//! }
//! ```

use crate::domain::entities::{QuoteRequest, ServiceQuote};
use crate::infrastructure::carrier::error::CarrierResult;
use async_trait::async_trait;
use std::fmt;

/// Trait for carrier rate services.
#[async_trait]
pub trait QuoteRequestor: Send + Sync + fmt::Debug {
    /// Prices every requested service for the request's parcels.
    ///
    /// Returns `Ok(None)` when the service produced no result at all, and
    /// `Ok(Some(quotes))` with one entry per service otherwise; individual
    /// entries may carry a carrier error code.
    ///
    /// # Errors
    ///
    /// Returns a `CarrierError` if the call itself fails.
    async fn calculate(&self, request: &QuoteRequest) -> CarrierResult<Option<Vec<ServiceQuote>>>;

    /// Returns the name of this requestor, for diagnostics.
    fn name(&self) -> &'static str;
}
