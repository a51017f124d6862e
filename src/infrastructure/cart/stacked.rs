//! # Stacked Cart Calculator
//!
//! A [`CartCalculator`] that stacks every unit of every line on top of each
//! other.
//!
//! ```text
//! length = max(item length)
//! width  = max(item width)
//! height = sum(item height x quantity)
//! weight = sum(item weight x quantity)
//! ```

use crate::application::dto::CartItem;
use crate::application::ports::CartCalculator;
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{CartPhysicalProfile, CheckedArithmetic};
use rust_decimal::Decimal;

/// Cart totals computed by stacking items.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedCartCalculator {
    order_discount: Decimal,
}

impl StackedCartCalculator {
    /// Creates a calculator without order-level discount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a flat order-level discount to the subtotal.
    #[must_use]
    pub fn with_order_discount(mut self, discount: Decimal) -> Self {
        self.order_discount = discount;
        self
    }
}

fn sum_by<F>(items: &[CartItem], per_unit: F) -> DomainResult<Decimal>
where
    F: Fn(&CartItem) -> Decimal,
{
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        let line = per_unit(item).safe_mul(Decimal::from(item.quantity))?;
        Ok(total.safe_add(line)?)
    })
}

impl CartCalculator for StackedCartCalculator {
    fn physical_profile(&self, items: &[CartItem]) -> DomainResult<CartPhysicalProfile> {
        let length = items.iter().map(|i| i.length).max().unwrap_or_default();
        let width = items.iter().map(|i| i.width).max().unwrap_or_default();
        let height = sum_by(items, |i| i.height)?;
        let weight = sum_by(items, |i| i.weight)?;
        Ok(CartPhysicalProfile::new(length, width, height, weight))
    }

    fn subtotal_with_discounts(&self, items: &[CartItem]) -> DomainResult<Decimal> {
        let subtotal = sum_by(items, |i| i.unit_price)?;
        Ok(subtotal.safe_sub(self.order_discount)?.max(Decimal::ZERO))
    }

    fn additional_shipping_charge(&self, items: &[CartItem]) -> DomainResult<Decimal> {
        sum_by(items, |i| i.additional_shipping_charge)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(quantity: u32, price: i64, dims: (i64, i64, i64), weight: i64) -> CartItem {
        CartItem {
            sku: format!("SKU-{price}"),
            quantity,
            unit_price: Decimal::new(price, 2),
            length: Decimal::from(dims.0),
            width: Decimal::from(dims.1),
            height: Decimal::from(dims.2),
            weight: Decimal::new(weight, 1),
            additional_shipping_charge: Decimal::ZERO,
        }
    }

    #[test]
    fn stacks_heights_and_weights() {
        let items = vec![item(2, 1000, (20, 10, 5), 15), item(1, 500, (30, 8, 4), 5)];
        let profile = StackedCartCalculator::new().physical_profile(&items).unwrap();

        assert_eq!(profile.length, Decimal::from(30));
        assert_eq!(profile.width, Decimal::from(10));
        assert_eq!(profile.height, Decimal::from(14));
        assert_eq!(profile.weight, Decimal::new(35, 1));
    }

    #[test]
    fn empty_cart_is_zero() {
        let profile = StackedCartCalculator::new().physical_profile(&[]).unwrap();
        assert_eq!(profile, CartPhysicalProfile::default());
    }

    #[test]
    fn subtotal_applies_order_discount() {
        let items = vec![item(2, 1000, (1, 1, 1), 1)];
        let calculator = StackedCartCalculator::new().with_order_discount(Decimal::new(250, 2));
        assert_eq!(calculator.subtotal_with_discounts(&items).unwrap(), Decimal::new(1750, 2));
    }

    #[test]
    fn discount_never_goes_negative() {
        let items = vec![item(1, 100, (1, 1, 1), 1)];
        let calculator = StackedCartCalculator::new().with_order_discount(Decimal::from(5));
        assert_eq!(calculator.subtotal_with_discounts(&items).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn overflowing_discount_is_an_error() {
        let items = vec![item(1, 100, (1, 1, 1), 1)];
        let calculator = StackedCartCalculator::new().with_order_discount(Decimal::MIN);
        assert!(calculator.subtotal_with_discounts(&items).is_err());
    }

    #[test]
    fn additional_charge_scales_with_quantity() {
        let mut line = item(3, 100, (1, 1, 1), 1);
        line.additional_shipping_charge = Decimal::new(150, 2);
        let charge = StackedCartCalculator::new()
            .additional_shipping_charge(&[line])
            .unwrap();
        assert_eq!(charge, Decimal::new(450, 2));
    }
}
