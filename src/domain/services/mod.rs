//! # Domain Services
//!
//! Pure packing and quote-normalization logic.
//!
//! ## Services
//!
//! - [`ParcelPacker`]: single parcel vs. N identical parcels
//! - [`rescale`]: scales per-parcel quotes to the whole shipment
//! - [`service_catalog`]: service code to display name mapping

pub mod parcel_packer;
pub mod quote_rescaler;
pub mod service_catalog;

pub use parcel_packer::ParcelPacker;
pub use quote_rescaler::rescale;
pub use service_catalog::CarrierService;
