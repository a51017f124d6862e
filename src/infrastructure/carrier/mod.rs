//! # Carrier Integration
//!
//! The rate service port and its local implementation.
//!
//! - [`QuoteRequestor`]: async port for the carrier rate service
//! - [`StaticQuoteRequestor`]: replays a recorded response
//! - [`CarrierError`]: transport-level failures

pub mod error;
pub mod static_requestor;
pub mod traits;

pub use error::{CarrierError, CarrierResult};
pub use static_requestor::StaticQuoteRequestor;
pub use traits::QuoteRequestor;
