//! # Data Transfer Objects
//!
//! Request and response shapes of the rate computation entry point, plus
//! the descriptors the hosting store asks a rate provider for.

use crate::domain::entities::ShippingOption;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    /// Recipient or sender name.
    #[serde(default)]
    pub name: Option<String>,
    /// Street line.
    #[serde(default)]
    pub street: Option<String>,
    /// City.
    #[serde(default)]
    pub city: Option<String>,
    /// State abbreviation.
    #[serde(default)]
    pub state: Option<String>,
    /// Postal code (CEP).
    #[serde(default)]
    pub zip_postal_code: Option<String>,
}

impl Address {
    /// Creates an address with only a postal code.
    #[must_use]
    pub fn with_postal_code(code: impl Into<String>) -> Self {
        Self {
            zip_postal_code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Returns the postal code if present and not blank.
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.zip_postal_code
            .as_deref()
            .filter(|code| !code.trim().is_empty())
    }
}

/// A cart line with its physical attributes in the store's primary units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product SKU.
    pub sku: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price after item-level discounts.
    pub unit_price: Decimal,
    /// Unit length.
    pub length: Decimal,
    /// Unit width.
    pub width: Decimal,
    /// Unit height.
    pub height: Decimal,
    /// Unit weight.
    pub weight: Decimal,
    /// Per-unit additional shipping charge configured on the product.
    #[serde(default)]
    pub additional_shipping_charge: Decimal,
}

/// A request for shipping options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShippingOptionRequest {
    /// Items to ship.
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Destination address.
    #[serde(default)]
    pub shipping_address: Option<Address>,
}

impl ShippingOptionRequest {
    /// Creates a request for the given items and destination.
    #[must_use]
    pub fn new(items: Vec<CartItem>, shipping_address: Option<Address>) -> Self {
        Self {
            items,
            shipping_address,
        }
    }

    /// Destination postal code, if present and not blank.
    #[must_use]
    pub fn destination_postal_code(&self) -> Option<&str> {
        self.shipping_address.as_ref().and_then(Address::postal_code)
    }
}

/// The result of a rate computation: options or user-facing errors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShippingOptionResponse {
    /// Ranked options, cheapest first.
    pub shipping_options: Vec<ShippingOption>,
    /// User-facing error messages.
    pub errors: Vec<String>,
}

impl ShippingOptionResponse {
    /// Creates an empty response.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user-facing error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// True when there are no errors.
    #[must_use]
    pub fn success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// How a provider prices shipments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateComputationMethodType {
    /// Rates are known before checkout.
    Offline,
    /// Rates require a live carrier call.
    Realtime,
}

impl fmt::Display for RateComputationMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offline => write!(f, "OFFLINE"),
            Self::Realtime => write!(f, "REALTIME"),
        }
    }
}

/// Where the admin UI finds the provider's configuration screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationRoute {
    /// Action name.
    pub action_name: String,
    /// Controller name.
    pub controller_name: String,
    /// Extra route values, passed through untouched.
    pub route_values: BTreeMap<String, Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_postal_code_is_missing() {
        let request =
            ShippingOptionRequest::new(Vec::new(), Some(Address::with_postal_code("   ")));
        assert_eq!(request.destination_postal_code(), None);

        let request = ShippingOptionRequest::new(Vec::new(), Some(Address::default()));
        assert_eq!(request.destination_postal_code(), None);
    }

    #[test]
    fn postal_code_is_read_from_address() {
        let request =
            ShippingOptionRequest::new(Vec::new(), Some(Address::with_postal_code("22041-001")));
        assert_eq!(request.destination_postal_code(), Some("22041-001"));
    }

    #[test]
    fn response_success_tracks_errors() {
        let mut response = ShippingOptionResponse::new();
        assert!(response.success());
        response.add_error("boom");
        assert!(!response.success());
    }

    #[test]
    fn method_type_serializes_uppercase() {
        let json = serde_json::to_string(&RateComputationMethodType::Realtime).unwrap_or_default();
        assert_eq!(json, "\"REALTIME\"");
    }
}
