//! # Carrier Envelope
//!
//! Physical limits a parcel must satisfy to be quoted as a single box.
//!
//! The envelope is an explicit value object handed to the packer, so
//! alternate limits can be exercised in tests without touching any
//! process-wide state.
//!
//! # Examples
//!
//! ```
//! use correios_rates::domain::value_objects::CarrierEnvelope;
//!
//! let envelope = CarrierEnvelope::correios_box();
//! assert_eq!(envelope.max_weight(), 30);
//! assert!(envelope.is_too_large(110, 10, 10));
//! assert!(envelope.is_too_small(10, 10, 2));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Maximum weight of a box, in kilograms.
const MAX_PACKAGE_WEIGHT: u32 = 30;

/// Maximum sum of length, width and height, in centimeters.
const MAX_PACKAGE_TOTAL_DIMENSION: u32 = 200;

/// Maximum size of any single side, in centimeters.
const MAX_PACKAGE_SIDE: u32 = 105;

const MIN_PACKAGE_LENGTH: u32 = 16;
const MIN_PACKAGE_WIDTH: u32 = 11;
const MIN_PACKAGE_HEIGHT: u32 = 2;
const MIN_PACKAGE_TOTAL_DIMENSION: u32 = 29;

/// Size and weight limits for the box format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CarrierEnvelope {
    max_weight: u32,
    max_total_dimension: u32,
    max_side: u32,
    min_length: u32,
    min_width: u32,
    min_height: u32,
    min_total_dimension: u32,
}

impl CarrierEnvelope {
    /// The Correios box-format envelope.
    #[must_use]
    pub const fn correios_box() -> Self {
        Self {
            max_weight: MAX_PACKAGE_WEIGHT,
            max_total_dimension: MAX_PACKAGE_TOTAL_DIMENSION,
            max_side: MAX_PACKAGE_SIDE,
            min_length: MIN_PACKAGE_LENGTH,
            min_width: MIN_PACKAGE_WIDTH,
            min_height: MIN_PACKAGE_HEIGHT,
            min_total_dimension: MIN_PACKAGE_TOTAL_DIMENSION,
        }
    }

    /// Sets the maximum weight.
    #[must_use]
    pub const fn with_max_weight(mut self, kg: u32) -> Self {
        self.max_weight = kg;
        self
    }

    /// Sets the maximum total linear dimension.
    #[must_use]
    pub const fn with_max_total_dimension(mut self, cm: u32) -> Self {
        self.max_total_dimension = cm;
        self
    }

    /// Sets the maximum size of a single side.
    #[must_use]
    pub const fn with_max_side(mut self, cm: u32) -> Self {
        self.max_side = cm;
        self
    }

    /// Sets the canonical minimum box (length, width, height).
    #[must_use]
    pub const fn with_minimum_box(mut self, length: u32, width: u32, height: u32) -> Self {
        self.min_length = length;
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Sets the minimum total linear dimension.
    #[must_use]
    pub const fn with_min_total_dimension(mut self, cm: u32) -> Self {
        self.min_total_dimension = cm;
        self
    }

    /// Checks that the limits can drive the packer.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEnvelope` when a maximum is zero or the
    /// minimum box does not fit inside the maximums.
    pub fn validate(&self) -> DomainResult<()> {
        if self.max_weight == 0 {
            return Err(DomainError::InvalidEnvelope("max weight must be positive"));
        }
        if self.max_total_dimension == 0 {
            return Err(DomainError::InvalidEnvelope(
                "max total dimension must be positive",
            ));
        }
        let (length, width, height) = self.minimum_box();
        if self.is_too_large(length, height, width) {
            return Err(DomainError::InvalidEnvelope(
                "minimum box exceeds the maximum limits",
            ));
        }
        Ok(())
    }

    /// Maximum weight in kilograms.
    #[inline]
    #[must_use]
    pub const fn max_weight(&self) -> u32 {
        self.max_weight
    }

    /// Maximum total linear dimension in centimeters.
    #[inline]
    #[must_use]
    pub const fn max_total_dimension(&self) -> u32 {
        self.max_total_dimension
    }

    /// Maximum single side in centimeters.
    #[inline]
    #[must_use]
    pub const fn max_side(&self) -> u32 {
        self.max_side
    }

    /// Minimum total linear dimension in centimeters.
    #[inline]
    #[must_use]
    pub const fn min_total_dimension(&self) -> u32 {
        self.min_total_dimension
    }

    /// The canonical minimum box as `(length, width, height)`.
    #[inline]
    #[must_use]
    pub const fn minimum_box(&self) -> (u32, u32, u32) {
        (self.min_length, self.min_width, self.min_height)
    }

    /// Sum of the three sides, saturating.
    #[inline]
    #[must_use]
    pub const fn total_size(length: u32, height: u32, width: u32) -> u32 {
        length.saturating_add(height).saturating_add(width)
    }

    /// True when the total or any side is below its minimum.
    #[must_use]
    pub const fn is_too_small(&self, length: u32, height: u32, width: u32) -> bool {
        Self::total_size(length, height, width) < self.min_total_dimension
            || length < self.min_length
            || height < self.min_height
            || width < self.min_width
    }

    /// True when the total or any side exceeds its maximum.
    #[must_use]
    pub const fn is_too_large(&self, length: u32, height: u32, width: u32) -> bool {
        Self::total_size(length, height, width) > self.max_total_dimension
            || length > self.max_side
            || height > self.max_side
            || width > self.max_side
    }

    /// True when the weight exceeds the maximum.
    #[inline]
    #[must_use]
    pub const fn is_too_heavy(&self, weight: u32) -> bool {
        weight > self.max_weight
    }
}

impl Default for CarrierEnvelope {
    fn default() -> Self {
        Self::correios_box()
    }
}
