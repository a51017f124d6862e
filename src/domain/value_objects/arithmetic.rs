//! # Checked Arithmetic
//!
//! Safe integer and decimal helpers used by unit normalization and
//! parcel packing.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`ceil_div`] - Integer division rounding up
//! - [`ceil_to_u32`] - Decimal ceiling into a carrier integer unit
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::value_objects::arithmetic::{ceil_div, CheckedArithmetic};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(ceil_div(61, 30).unwrap(), 3);
//!
//! let total = Decimal::new(3000, 2).safe_mul(Decimal::from(3)).unwrap();
//! assert_eq!(total.to_string(), "90.00");
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Division by zero attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// Invalid value provided (e.g., a measurement that cannot be represented).
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Integer division rounding towards positive infinity.
///
/// # Errors
///
/// Returns `ArithmeticError::DivisionByZero` if `denominator` is zero.
///
/// # Examples
///
/// ```
/// use correios_rates::domain::value_objects::arithmetic::ceil_div;
///
/// assert_eq!(ceil_div(300, 200).unwrap(), 2);
/// assert_eq!(ceil_div(200, 200).unwrap(), 1);
/// assert_eq!(ceil_div(0, 200).unwrap(), 0);
/// ```
#[inline]
#[must_use = "this returns the result of the operation, without modifying the original"]
pub fn ceil_div(numerator: u32, denominator: u32) -> ArithmeticResult<u32> {
    if denominator == 0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(numerator.div_ceil(denominator))
}

/// Rounds a decimal up to the next whole number and converts it to `u32`.
///
/// Negative inputs clamp to zero; the callers apply their own floors.
///
/// # Errors
///
/// Returns `ArithmeticError::Overflow` if the ceiling does not fit in a `u32`.
#[inline]
pub fn ceil_to_u32(value: Decimal) -> ArithmeticResult<u32> {
    let ceiled = value.ceil();
    if ceiled.is_sign_negative() {
        return Ok(0);
    }
    ceiled.to_u32().ok_or(ArithmeticError::Overflow)
}

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking on overflow or division by zero.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely divide two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::DivisionByZero` if the divisor is zero.
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        self.checked_div(rhs).ok_or(ArithmeticError::Overflow)
    }
}

impl CheckedArithmetic for u32 {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_div(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_div(rhs).ok_or(ArithmeticError::DivisionByZero)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod arithmetic_error {
        use super::*;

        #[test]
        fn display_formats_correctly() {
            assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
            assert_eq!(
                ArithmeticError::DivisionByZero.to_string(),
                "division by zero"
            );
            assert_eq!(
                ArithmeticError::InvalidValue("negative").to_string(),
                "invalid value: negative"
            );
        }
    }

    mod ceil_div_tests {
        use super::*;

        #[test]
        fn rounds_partial_quotient_up() {
            assert_eq!(ceil_div(61, 30).unwrap(), 3);
            assert_eq!(ceil_div(201, 200).unwrap(), 2);
        }

        #[test]
        fn exact_quotient_is_unchanged() {
            assert_eq!(ceil_div(60, 30).unwrap(), 2);
        }

        #[test]
        fn zero_denominator_fails() {
            assert_eq!(ceil_div(10, 0), Err(ArithmeticError::DivisionByZero));
        }
    }

    mod ceil_to_u32_tests {
        use super::*;

        #[test]
        fn fractional_values_round_up() {
            assert_eq!(ceil_to_u32(Decimal::new(2501, 1)).unwrap(), 251);
            assert_eq!(ceil_to_u32(Decimal::new(1, 3)).unwrap(), 1);
        }

        #[test]
        fn whole_values_are_kept() {
            assert_eq!(ceil_to_u32(Decimal::new(250, 0)).unwrap(), 250);
        }

        #[test]
        fn negative_values_clamp_to_zero() {
            assert_eq!(ceil_to_u32(Decimal::new(-5, 0)).unwrap(), 0);
        }

        #[test]
        fn huge_values_overflow() {
            let huge = Decimal::from(u64::MAX);
            assert_eq!(ceil_to_u32(huge), Err(ArithmeticError::Overflow));
        }
    }

    mod checked_arithmetic_decimal {
        use super::*;

        #[test]
        fn safe_add_works() {
            let a = Decimal::new(1850, 2);
            let b = Decimal::new(500, 2);
            assert_eq!(a.safe_add(b).unwrap(), Decimal::new(2350, 2));
        }

        #[test]
        fn safe_sub_works() {
            let a = Decimal::new(2000, 2);
            assert_eq!(a.safe_sub(Decimal::new(250, 2)).unwrap(), Decimal::new(1750, 2));
        }

        #[test]
        fn safe_sub_overflow_fails() {
            assert_eq!(Decimal::MIN.safe_sub(Decimal::ONE), Err(ArithmeticError::Overflow));
        }

        #[test]
        fn safe_mul_keeps_scale() {
            let a = Decimal::new(3000, 2);
            let product = a.safe_mul(Decimal::from(3)).unwrap();
            assert_eq!(product, Decimal::new(9000, 2));
            assert_eq!(product.scale(), 2);
        }

        #[test]
        fn safe_div_by_zero_fails() {
            let a = Decimal::new(100, 0);
            assert_eq!(a.safe_div(Decimal::ZERO), Err(ArithmeticError::DivisionByZero));
        }
    }

    mod checked_arithmetic_u32 {
        use super::*;

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(u32::MAX.safe_add(1), Err(ArithmeticError::Overflow));
        }

        #[test]
        fn safe_sub_underflow_fails() {
            assert_eq!(0u32.safe_sub(1), Err(ArithmeticError::Overflow));
        }

        #[test]
        fn safe_mul_works() {
            assert_eq!(10u32.safe_mul(5).unwrap(), 50);
        }

        #[test]
        fn safe_div_truncates() {
            assert_eq!(7u32.safe_div(2).unwrap(), 3);
        }

        #[test]
        fn safe_div_by_zero_fails() {
            assert_eq!(100u32.safe_div(0), Err(ArithmeticError::DivisionByZero));
        }
    }
}
