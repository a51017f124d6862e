//! # Correios Rates
//!
//! Real-time shipping rates from the Brazilian postal service (Correios).
//!
//! A computation turns a cart into carrier-compliant parcels, asks the
//! carrier for prices once, scales the answer back up to the whole shipment
//! and ranks the result into customer-facing shipping options.
//!
//! # Architecture
//!
//! - [`domain`]: parcel packing, quote rescaling, service catalog and the
//!   value objects they work on
//! - [`application`]: unit normalization, option ranking and the
//!   [`CorreiosRateProvider`](application::services::CorreiosRateProvider)
//! - [`infrastructure`]: the carrier port, settings and local collaborators
//!
//! # Examples
//!
//! ```
//! use correios_rates::application::dto::{Address, CartItem, ShippingOptionRequest};
//! use correios_rates::application::services::CorreiosRateProvider;
//! use correios_rates::domain::entities::ServiceQuote;
//! use correios_rates::infrastructure::carrier::StaticQuoteRequestor;
//! use correios_rates::infrastructure::cart::StackedCartCalculator;
//! use correios_rates::infrastructure::measures::UnitTableMeasureService;
//! use correios_rates::infrastructure::origin::StaticOriginAddress;
//! use correios_rates::infrastructure::settings::CorreiosSettings;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let provider = CorreiosRateProvider::new(
//!     CorreiosSettings::default(),
//!     Arc::new(UnitTableMeasureService::metric_primary()),
//!     Arc::new(StackedCartCalculator::new()),
//!     Arc::new(StaticOriginAddress::postal_code("01310100")),
//!     Arc::new(StaticQuoteRequestor::with_quotes(vec![
//!         ServiceQuote::success("04510", "22,50", 7),
//!     ])),
//! );
//!
//! let item = CartItem {
//!     sku: "BOOK-1".to_string(),
//!     quantity: 1,
//!     unit_price: Decimal::from(80),
//!     length: Decimal::from(25),
//!     width: Decimal::from(15),
//!     height: Decimal::from(10),
//!     weight: Decimal::ONE,
//!     additional_shipping_charge: Decimal::ZERO,
//! };
//! let request = ShippingOptionRequest::new(vec![item], Some(Address::with_postal_code("22041001")));
//!
//! let response = provider.get_shipping_options(&request).await.unwrap();
//! assert_eq!(response.shipping_options[0].name, "PAC");
//! # });
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
