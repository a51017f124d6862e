//! # Inbound Ports
//!
//! Collaborators supplied by the hosting store.
//!
//! - [`MeasureService`]: measure unit lookup and conversion
//! - [`CartCalculator`]: cart totals (physical profile, subtotal, charges)
//! - [`OriginAddressSource`]: the configured shipping origin

use crate::application::dto::{Address, CartItem};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{ArithmeticResult, CartPhysicalProfile, CheckedArithmetic};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A measure unit known to the store.
///
/// `ratio` converts from the store's primary unit: `value_in_unit =
/// primary_value * ratio`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureUnit {
    /// Stable keyword (e.g. `"kg"`, `"millimetres"`).
    pub system_keyword: String,
    /// Display name.
    pub name: String,
    /// Conversion ratio from the primary unit.
    pub ratio: Decimal,
}

impl MeasureUnit {
    /// Creates a unit.
    #[must_use]
    pub fn new(system_keyword: impl Into<String>, name: impl Into<String>, ratio: Decimal) -> Self {
        Self {
            system_keyword: system_keyword.into(),
            name: name.into(),
            ratio,
        }
    }
}

/// Measure unit lookup and conversion.
pub trait MeasureService: Send + Sync + fmt::Debug {
    /// Weight unit by keyword, `None` when unknown.
    fn weight_by_keyword(&self, keyword: &str) -> Option<MeasureUnit>;

    /// Dimension unit by keyword, `None` when unknown.
    fn dimension_by_keyword(&self, keyword: &str) -> Option<MeasureUnit>;

    /// Converts a weight from the primary weight unit.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product overflows.
    fn convert_from_primary_weight(&self, value: Decimal, unit: &MeasureUnit) -> ArithmeticResult<Decimal> {
        value.safe_mul(unit.ratio)
    }

    /// Converts a dimension from the primary dimension unit.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the product overflows.
    fn convert_from_primary_dimension(&self, value: Decimal, unit: &MeasureUnit) -> ArithmeticResult<Decimal> {
        value.safe_mul(unit.ratio)
    }
}

/// Cart totals computed by the store.
pub trait CartCalculator: Send + Sync + fmt::Debug {
    /// Aggregate length/width/height/weight of the cart in primary units.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    fn physical_profile(&self, items: &[CartItem]) -> DomainResult<CartPhysicalProfile>;

    /// Cart subtotal after discounts.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    fn subtotal_with_discounts(&self, items: &[CartItem]) -> DomainResult<Decimal>;

    /// Additional shipping charge configured on the cart's products.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    fn additional_shipping_charge(&self, items: &[CartItem]) -> DomainResult<Decimal>;
}

/// The store's configured shipping origin.
pub trait OriginAddressSource: Send + Sync + fmt::Debug {
    /// The origin address, `None` when not configured.
    fn origin_address(&self) -> Option<Address>;
}
