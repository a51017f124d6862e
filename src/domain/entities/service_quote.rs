//! # Service Quote
//!
//! One carrier service entry from a rate response.
//!
//! Monetary fields stay in the carrier's pt-BR text form; they are parsed
//! into [`CarrierAmount`] whenever arithmetic or ordering is needed and
//! re-serialized the same way.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::entities::ServiceQuote;
//!
//! let ok = ServiceQuote::success("04510", "22,50", 6);
//! assert!(ok.is_success());
//!
//! let failed = ServiceQuote::failure("04014", "-888", "Erro ao calcular tarifa");
//! assert!(!failed.is_success());
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::CarrierAmount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The carrier's success marker in `error_code`.
pub const SUCCESS_CODE: &str = "0";

/// A per-service quote or per-service error returned by the carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceQuote {
    /// Carrier service code (e.g. `"04510"`).
    pub service_code: String,
    /// Base price.
    pub price: String,
    /// Surcharge for receipt notice (aviso de recebimento).
    pub receipt_notice_price: String,
    /// Surcharge for own-hands delivery (mão própria).
    pub own_hands_price: String,
    /// Surcharge for declared value.
    pub declared_value_price: String,
    /// Delivery time in business days.
    pub delivery_days: u32,
    /// Whether home delivery is available.
    #[serde(default)]
    pub home_delivery: bool,
    /// Whether saturday delivery is available.
    #[serde(default)]
    pub saturday_delivery: bool,
    /// `"0"` on success, carrier error code otherwise.
    pub error_code: String,
    /// Carrier error message, empty on success.
    #[serde(default)]
    pub error_message: String,
}

impl ServiceQuote {
    /// Creates a successful quote with zero surcharges.
    #[must_use]
    pub fn success(service_code: impl Into<String>, price: impl Into<String>, delivery_days: u32) -> Self {
        Self {
            service_code: service_code.into(),
            price: price.into(),
            receipt_notice_price: "0,00".to_string(),
            own_hands_price: "0,00".to_string(),
            declared_value_price: "0,00".to_string(),
            delivery_days,
            home_delivery: true,
            saturday_delivery: false,
            error_code: SUCCESS_CODE.to_string(),
            error_message: String::new(),
        }
    }

    /// Creates an erroring quote.
    #[must_use]
    pub fn failure(
        service_code: impl Into<String>,
        error_code: impl Into<String>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            service_code: service_code.into(),
            price: "0".to_string(),
            receipt_notice_price: "0".to_string(),
            own_hands_price: "0".to_string(),
            declared_value_price: "0".to_string(),
            delivery_days: 0,
            home_delivery: false,
            saturday_delivery: false,
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }

    /// Sets the three surcharge fields.
    #[must_use]
    pub fn with_surcharges(
        mut self,
        receipt_notice: impl Into<String>,
        own_hands: impl Into<String>,
        declared_value: impl Into<String>,
    ) -> Self {
        self.receipt_notice_price = receipt_notice.into();
        self.own_hands_price = own_hands.into();
        self.declared_value_price = declared_value.into();
        self
    }

    /// True when the carrier priced this service.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error_code.trim() == SUCCESS_CODE
    }

    /// Parses the base price.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the price is not a pt-BR decimal.
    pub fn parsed_price(&self) -> DomainResult<CarrierAmount> {
        CarrierAmount::parse_pt_br(&self.price)
    }
}

impl fmt::Display for ServiceQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            write!(
                f,
                "ServiceQuote({} price={} days={})",
                self.service_code, self.price, self.delivery_days
            )
        } else {
            write!(
                f,
                "ServiceQuote({} error={} {})",
                self.service_code, self.error_code, self.error_message
            )
        }
    }
}
