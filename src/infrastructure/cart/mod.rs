//! # Cart
//!
//! Local implementations of the cart totals port.

pub mod stacked;

pub use stacked::StackedCartCalculator;
