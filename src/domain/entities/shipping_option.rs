//! # Shipping Option
//!
//! A priced, described option shown to the customer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A customer-facing shipping option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    /// Public service name (e.g. `"PAC"`).
    pub name: String,
    /// Lead time description.
    pub description: String,
    /// Final rate including surcharges.
    pub rate: Decimal,
}

impl ShippingOption {
    /// Creates a new option.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            rate,
        }
    }

    /// The lead time text for a number of business days.
    #[must_use]
    pub fn lead_time_description(business_days: u32) -> String {
        format!("Average delivery time {business_days} business days")
    }
}

impl fmt::Display for ShippingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.description, self.rate)
    }
}
