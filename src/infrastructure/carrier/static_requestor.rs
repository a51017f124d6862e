//! # Static Quote Requestor
//!
//! A [`QuoteRequestor`] that replays a fixed response.
//!
//! Used by the CLI to run a computation against a recorded carrier response
//! and by tests to script the carrier. Every request received is kept so
//! callers can inspect what would have been sent.

use crate::domain::entities::{QuoteRequest, ServiceQuote};
use crate::infrastructure::carrier::error::{CarrierError, CarrierResult};
use crate::infrastructure::carrier::traits::QuoteRequestor;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Replays a canned carrier response.
#[derive(Debug)]
pub struct StaticQuoteRequestor {
    response: CarrierResult<Option<Vec<ServiceQuote>>>,
    received: Mutex<Vec<QuoteRequest>>,
}

impl StaticQuoteRequestor {
    /// Answers every request with the given quotes.
    #[must_use]
    pub fn with_quotes(quotes: Vec<ServiceQuote>) -> Self {
        Self::from_response(Ok(Some(quotes)))
    }

    /// Answers every request with no result.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_response(Ok(None))
    }

    /// Fails every request with the given error.
    #[must_use]
    pub fn failing(error: CarrierError) -> Self {
        Self::from_response(Err(error))
    }

    fn from_response(response: CarrierResult<Option<Vec<ServiceQuote>>>) -> Self {
        Self {
            response,
            received: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    #[must_use]
    pub fn received(&self) -> Vec<QuoteRequest> {
        self.received.lock().clone()
    }

    /// Number of requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.received.lock().len()
    }
}

#[async_trait]
impl QuoteRequestor for StaticQuoteRequestor {
    async fn calculate(&self, request: &QuoteRequest) -> CarrierResult<Option<Vec<ServiceQuote>>> {
        self.received.lock().push(request.clone());
        self.response.clone()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::PostalCode;

    fn request() -> QuoteRequest {
        QuoteRequest::new(PostalCode::parse("01310100").unwrap(), "22041001")
    }

    #[tokio::test]
    async fn replays_quotes_and_records_requests() {
        let requestor =
            StaticQuoteRequestor::with_quotes(vec![ServiceQuote::success("04510", "20,00", 5)]);

        let quotes = requestor.calculate(&request()).await.unwrap().unwrap();

        assert_eq!(quotes.len(), 1);
        assert_eq!(requestor.call_count(), 1);
        assert_eq!(requestor.received()[0].destination, "22041001");
    }

    #[tokio::test]
    async fn empty_returns_none() {
        let requestor = StaticQuoteRequestor::empty();
        assert!(requestor.calculate(&request()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failing_returns_error() {
        let requestor = StaticQuoteRequestor::failing(CarrierError::timeout("slow"));
        let result = requestor.calculate(&request()).await;
        assert!(matches!(result, Err(CarrierError::Timeout { .. })));
    }
}
