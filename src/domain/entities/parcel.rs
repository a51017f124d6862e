//! # Parcel
//!
//! The representative parcel submitted to the carrier.
//!
//! A cart that does not fit the carrier envelope is approximated as `count`
//! identical parcels; only one [`ParcelDescriptor`] is ever sent, and the
//! returned prices are multiplied by the count afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single parcel as the carrier expects it (cm / kg).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParcelDescriptor {
    /// Length in centimeters.
    pub length: u32,
    /// Width in centimeters.
    pub width: u32,
    /// Height in centimeters.
    pub height: u32,
    /// Weight in kilograms.
    pub weight: u32,
    /// Declared value for insurance, zero when not declared.
    pub declared_value: Decimal,
    /// Box format (as opposed to roll/prism); always true for this packer.
    pub box_shaped: bool,
}

impl ParcelDescriptor {
    /// Creates a box-shaped parcel.
    #[must_use]
    pub fn boxed(length: u32, width: u32, height: u32, weight: u32, declared_value: Decimal) -> Self {
        Self {
            length,
            width,
            height,
            weight,
            declared_value,
            box_shaped: true,
        }
    }

    /// Sum of the three sides.
    #[must_use]
    pub fn total_size(&self) -> u32 {
        self.length
            .saturating_add(self.width)
            .saturating_add(self.height)
    }
}

impl fmt::Display for ParcelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parcel({}x{}x{} cm, {} kg, declared {})",
            self.length, self.width, self.height, self.weight, self.declared_value
        )
    }
}

/// Outcome of packing: the representative parcel and how many it stands for.
///
/// # Invariants
///
/// - `count >= 1`
/// - when `count > 1` the parcel carries the per-parcel share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedShipment {
    parcel: ParcelDescriptor,
    count: u32,
}

impl PackedShipment {
    /// A cart that fits in one parcel.
    #[must_use]
    pub fn single(parcel: ParcelDescriptor) -> Self {
        Self { parcel, count: 1 }
    }

    /// A cart approximated as `count` identical parcels; a zero count is
    /// raised to 1.
    #[must_use]
    pub fn split(parcel: ParcelDescriptor, count: u32) -> Self {
        Self {
            parcel,
            count: count.max(1),
        }
    }

    /// The representative parcel.
    #[inline]
    #[must_use]
    pub fn parcel(&self) -> &ParcelDescriptor {
        &self.parcel
    }

    /// Number of physical parcels approximated.
    #[inline]
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// True when quotes must be rescaled.
    #[inline]
    #[must_use]
    pub fn is_split(&self) -> bool {
        self.count > 1
    }

    /// Consumes the shipment, returning the parcel.
    #[must_use]
    pub fn into_parcel(self) -> ParcelDescriptor {
        self.parcel
    }
}
