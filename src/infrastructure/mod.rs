//! # Infrastructure Layer
//!
//! Adapters for the collaborators around the rate computation.
//!
//! - [`carrier`]: the carrier rate service port and a replaying requestor
//! - [`settings`]: carrier settings loading and persistence
//! - [`measures`]: measure unit table
//! - [`cart`]: stacked cart totals
//! - [`origin`]: fixed shipping origin

pub mod carrier;
pub mod cart;
pub mod measures;
pub mod origin;
pub mod settings;
