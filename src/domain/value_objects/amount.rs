//! # Carrier Amount
//!
//! Monetary values as serialized by the carrier.
//!
//! Correios reports every monetary field as a Brazilian Portuguese (pt-BR)
//! formatted decimal string: comma as decimal separator, point as the
//! optional group separator (`"1.234,56"`). [`CarrierAmount`] parses that
//! representation into a [`Decimal`] at the boundary and renders it back
//! the same way, without group separators and preserving the scale.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::value_objects::amount::CarrierAmount;
//!
//! let amount: CarrierAmount = "1.234,56".parse().unwrap();
//! assert_eq!(amount.to_string(), "1234,56");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::CheckedArithmetic;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

const DECIMAL_SEPARATOR: char = ',';
const GROUP_SEPARATOR: char = '.';

/// A carrier monetary value backed by a fixed-point decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CarrierAmount(Decimal);

impl CarrierAmount {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wraps a decimal value.
    #[inline]
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the inner decimal value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }

    /// Parses a pt-BR formatted amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the text is empty, contains
    /// characters other than digits, a sign and the two separators, or has
    /// more than one decimal separator.
    pub fn parse_pt_br(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_amount(raw));
        }

        let allowed = |c: char| {
            c.is_ascii_digit() || c == '-' || c == '+' || c == DECIMAL_SEPARATOR || c == GROUP_SEPARATOR
        };
        if !trimmed.chars().all(allowed)
            || trimmed.matches(DECIMAL_SEPARATOR).count() > 1
        {
            return Err(DomainError::invalid_amount(raw));
        }

        let invariant: String = trimmed
            .chars()
            .filter(|c| *c != GROUP_SEPARATOR)
            .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
            .collect();

        Decimal::from_str(&invariant)
            .map(Self)
            .map_err(|_| DomainError::invalid_amount(raw))
    }

    /// Multiplies the amount by a parcel count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    pub fn times(self, count: u32) -> DomainResult<Self> {
        Ok(Self(self.0.safe_mul(Decimal::from(count))?))
    }
}

impl FromStr for CarrierAmount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_pt_br(s)
    }
}

impl fmt::Display for CarrierAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let invariant = self.0.to_string();
        write!(f, "{}", invariant.replace('.', ","))
    }
}

impl From<CarrierAmount> for Decimal {
    fn from(amount: CarrierAmount) -> Self {
        amount.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_decimal() {
        let amount = CarrierAmount::parse_pt_br("12,34").unwrap();
        assert_eq!(amount.get(), Decimal::new(1234, 2));
    }

    #[test]
    fn parses_group_separators() {
        let amount = CarrierAmount::parse_pt_br("1.234,56").unwrap();
        assert_eq!(amount.get(), Decimal::new(123456, 2));
    }

    #[test]
    fn parses_whole_numbers_and_whitespace() {
        assert_eq!(CarrierAmount::parse_pt_br(" 0 ").unwrap(), CarrierAmount::ZERO);
        assert_eq!(
            CarrierAmount::parse_pt_br("-3,5").unwrap().get(),
            Decimal::new(-35, 1)
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(CarrierAmount::parse_pt_br("").is_err());
        assert!(CarrierAmount::parse_pt_br("abc").is_err());
        assert!(CarrierAmount::parse_pt_br("1,2,3").is_err());
        assert!(CarrierAmount::parse_pt_br("1_000").is_err());
    }

    #[test]
    fn renders_with_comma_and_original_scale() {
        let amount = CarrierAmount::parse_pt_br("30,00").unwrap();
        assert_eq!(amount.to_string(), "30,00");
        assert_eq!(amount.times(3).unwrap().to_string(), "90,00");
    }

    #[test]
    fn times_one_is_identity_on_text() {
        let amount: CarrierAmount = "12,34".parse().unwrap();
        assert_eq!(amount.times(1).unwrap().to_string(), "12,34");
    }

    #[test]
    fn text_form_is_the_only_representation() {
        let amount: CarrierAmount = "1.000,10".parse().unwrap();
        let rendered = amount.to_string();
        assert_eq!(rendered, "1000,10");
        assert_eq!(rendered.parse::<CarrierAmount>().unwrap(), amount);
    }

    #[test]
    fn orders_numerically() {
        let nine: CarrierAmount = "9,90".parse().unwrap();
        let eighteen: CarrierAmount = "18,50".parse().unwrap();
        assert!(nine < eighteen);
    }
}
