//! # Domain Layer
//!
//! Carrier-independent shipping concepts and the packing algorithm.
//!
//! - [`value_objects`]: measurements, envelope, amounts, postal codes
//! - [`entities`]: parcels, quote requests, service quotes, options
//! - [`services`]: packer, rescaler, service catalog
//! - [`errors`]: domain error type

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
