//! # Domain Entities
//!
//! Per-computation value objects flowing through a rate computation.
//!
//! - [`ParcelDescriptor`] / [`PackedShipment`]: the representative parcel
//! - [`QuoteRequest`]: what is sent to the carrier
//! - [`ServiceQuote`]: what comes back, per service
//! - [`ShippingOption`]: what the customer sees

pub mod parcel;
pub mod quote_request;
pub mod service_quote;
pub mod shipping_option;

pub use parcel::{PackedShipment, ParcelDescriptor};
pub use quote_request::QuoteRequest;
pub use service_quote::{SUCCESS_CODE, ServiceQuote};
pub use shipping_option::ShippingOption;
