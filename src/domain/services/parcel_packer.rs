//! # Parcel Packer
//!
//! Decides whether a cart fits in one parcel or must be approximated as N
//! identical parcels.
//!
//! # Algorithm
//!
//! ```text
//! too small?  -> substitute the envelope's minimum box
//! fits?       -> one parcel, full weight/dimensions/declared value
//! otherwise   -> N = max(ceil(weight / max_weight), ceil(total / max_total))
//!                per-parcel = value / N (floored at 1), width raised to height
//! ```
//!
//! Only one representative parcel is emitted; the carrier's price for it is
//! multiplied by N afterwards (see [`rescale`](super::quote_rescaler::rescale)).
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::services::ParcelPacker;
//! use correios_rates::domain::value_objects::{CarrierEnvelope, NormalizedDimensions};
//! use rust_decimal::Decimal;
//!
//! let packer = ParcelPacker::new(CarrierEnvelope::correios_box()).unwrap();
//! let shipment = packer
//!     .pack(&NormalizedDimensions::new(25, 10, 10, 61), Decimal::new(300, 0))
//!     .unwrap();
//!
//! assert_eq!(shipment.count(), 3);
//! assert_eq!(shipment.parcel().weight, 20);
//! assert_eq!(shipment.parcel().declared_value, Decimal::new(100, 0));
//! ```

use crate::domain::entities::{PackedShipment, ParcelDescriptor};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{
    CarrierEnvelope, CheckedArithmetic, NormalizedDimensions, ceil_div,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Packs normalized cart dimensions into a representative parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParcelPacker {
    envelope: CarrierEnvelope,
}

impl ParcelPacker {
    /// Creates a packer for the given envelope.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEnvelope` if the envelope cannot drive
    /// the split computation.
    pub fn new(envelope: CarrierEnvelope) -> DomainResult<Self> {
        envelope.validate()?;
        Ok(Self { envelope })
    }

    /// Returns the envelope in use.
    #[inline]
    #[must_use]
    pub fn envelope(&self) -> &CarrierEnvelope {
        &self.envelope
    }

    /// Packs the cart.
    ///
    /// `declared_value` is the full cart value to declare, or zero when value
    /// declaration is disabled.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` on overflow.
    pub fn pack(
        &self,
        dims: &NormalizedDimensions,
        declared_value: Decimal,
    ) -> DomainResult<PackedShipment> {
        let envelope = &self.envelope;
        let weight = dims.weight();
        let (mut length, mut width, mut height) = (dims.length(), dims.width(), dims.height());

        if envelope.is_too_small(length, height, width) {
            (length, width, height) = envelope.minimum_box();
            debug!(length, width, height, "parcel below minimum, using minimum box");
        }

        let too_heavy = envelope.is_too_heavy(weight);
        let too_large = envelope.is_too_large(length, height, width);

        if !too_heavy && !too_large {
            debug!(length, width, height, weight, "single parcel");
            return Ok(PackedShipment::single(ParcelDescriptor::boxed(
                length,
                width,
                height,
                weight,
                declared_value,
            )));
        }

        let by_weight = if too_heavy {
            ceil_div(weight, envelope.max_weight())?
        } else {
            1
        };
        let by_dims = if too_large {
            let total = length.safe_add(width)?.safe_add(height)?;
            ceil_div(total, envelope.max_total_dimension())?
        } else {
            1
        };
        let count = by_weight.max(by_dims).max(1);

        let share = |value: u32| -> DomainResult<u32> { Ok(value.safe_div(count)?.max(1)) };
        let weight_share = share(weight)?;
        let length_share = share(length)?;
        let height_share = share(height)?;
        let mut width_share = share(width)?;

        // After splitting the width, not the length, absorbs an oversized height.
        if height_share > width_share {
            width_share = height_share;
        }

        let declared_share = declared_value.safe_div(Decimal::from(count))?;

        debug!(
            count,
            by_weight,
            by_dims,
            length = length_share,
            width = width_share,
            height = height_share,
            weight = weight_share,
            "multiple parcels"
        );

        Ok(PackedShipment::split(
            ParcelDescriptor::boxed(
                length_share,
                width_share,
                height_share,
                weight_share,
                declared_share,
            ),
            count,
        ))
    }
}

impl Default for ParcelPacker {
    fn default() -> Self {
        Self {
            envelope: CarrierEnvelope::correios_box(),
        }
    }
}
