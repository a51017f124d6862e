//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Measurements
//!
//! - [`CartPhysicalProfile`]: raw cart totals in the store's measure system
//! - [`NormalizedDimensions`]: carrier units, floored and consistent
//! - [`CarrierEnvelope`]: single-parcel size and weight limits
//!
//! ## Money and Addressing
//!
//! - [`CarrierAmount`]: pt-BR formatted carrier decimal
//! - [`PostalCode`]: validated CEP
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations

pub mod amount;
pub mod arithmetic;
pub mod envelope;
pub mod measurements;
pub mod postal_code;

pub use amount::CarrierAmount;
pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, ceil_div, ceil_to_u32};
pub use envelope::CarrierEnvelope;
pub use measurements::{CartPhysicalProfile, NormalizedDimensions};
pub use postal_code::PostalCode;
