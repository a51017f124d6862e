//! # Application Layer
//!
//! Orchestrates a rate computation from cart to shipping options.
//!
//! - [`dto`]: request and response shapes
//! - [`ports`]: collaborators supplied by the hosting store
//! - [`services`]: unit normalization, option ranking and the rate provider
//! - [`error`]: application and infrastructure errors

pub mod dto;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
