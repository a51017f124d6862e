//! # Measurements
//!
//! Cart physical attributes before and after conversion to carrier units.
//!
//! - [`CartPhysicalProfile`]: raw aggregate totals in the store's primary
//!   measure system
//! - [`NormalizedDimensions`]: whole centimeters and kilograms, floored at 1

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate cart measurements in the store's primary measure units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartPhysicalProfile {
    /// Total length.
    pub length: Decimal,
    /// Total width.
    pub width: Decimal,
    /// Total height.
    pub height: Decimal,
    /// Total weight.
    pub weight: Decimal,
}

impl CartPhysicalProfile {
    /// Creates a profile from raw totals.
    #[must_use]
    pub fn new(length: Decimal, width: Decimal, height: Decimal, weight: Decimal) -> Self {
        Self {
            length,
            width,
            height,
            weight,
        }
    }
}

/// Cart measurements in carrier units (cm / kg).
///
/// # Invariants
///
/// - Every field is at least 1
/// - `height <= length` (the length is raised, never rejected)
///
/// # Examples
///
/// ```
/// use correios_rates::domain::value_objects::NormalizedDimensions;
///
/// let dims = NormalizedDimensions::new(10, 0, 40, 0);
/// assert_eq!(dims.length(), 40);
/// assert_eq!(dims.width(), 1);
/// assert_eq!(dims.weight(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedDimensions {
    length: u32,
    width: u32,
    height: u32,
    weight: u32,
}

impl NormalizedDimensions {
    /// Builds normalized dimensions, applying the floor of 1 and the
    /// height/length rule.
    #[must_use]
    pub fn new(length: u32, width: u32, height: u32, weight: u32) -> Self {
        let height = height.max(1);
        let mut length = length.max(1);
        if height > length {
            length = height;
        }
        Self {
            length,
            width: width.max(1),
            height,
            weight: weight.max(1),
        }
    }

    /// Length in centimeters.
    #[inline]
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Width in centimeters.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in centimeters.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Weight in kilograms.
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }
}

impl fmt::Display for NormalizedDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{} cm, {} kg",
            self.length, self.width, self.height, self.weight
        )
    }
}
