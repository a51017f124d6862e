//! # Unit Normalizer
//!
//! Converts cart totals into the carrier's whole centimeters and kilograms.
//!
//! ```text
//! dimension = ceil(convert(raw, millimetres)) / 10   (integer truncation)
//! weight    = ceil(convert(raw, kg))
//! ```
//!
//! Every field is floored at 1 and the length is raised to the height when
//! the height exceeds it. Failing to resolve either unit is a fatal
//! configuration error.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{MeasureService, MeasureUnit};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{
    CartPhysicalProfile, CheckedArithmetic, NormalizedDimensions, ceil_to_u32,
};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Keyword of the weight unit the carrier expects.
pub const WEIGHT_KEYWORD: &str = "kg";

/// Keyword of the dimension unit cart totals are converted into before the
/// division by 10.
pub const DIMENSION_KEYWORD: &str = "millimetres";

/// Millimetres per centimeter.
const MM_PER_CM: u32 = 10;

/// Normalizes cart measurements through the store's measure service.
#[derive(Debug, Clone)]
pub struct UnitNormalizer {
    measures: Arc<dyn MeasureService>,
    weight_keyword: String,
    dimension_keyword: String,
}

impl UnitNormalizer {
    /// Creates a normalizer using the carrier's default unit keywords.
    #[must_use]
    pub fn new(measures: Arc<dyn MeasureService>) -> Self {
        Self::with_keywords(measures, WEIGHT_KEYWORD, DIMENSION_KEYWORD)
    }

    /// Creates a normalizer resolving other unit keywords.
    #[must_use]
    pub fn with_keywords(
        measures: Arc<dyn MeasureService>,
        weight_keyword: impl Into<String>,
        dimension_keyword: impl Into<String>,
    ) -> Self {
        Self {
            measures,
            weight_keyword: weight_keyword.into(),
            dimension_keyword: dimension_keyword.into(),
        }
    }

    /// Converts a cart profile into carrier units.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Configuration` if the weight or dimension unit
    ///   cannot be resolved
    /// - `ApplicationError::Domain` on arithmetic overflow
    pub fn normalize(&self, profile: &CartPhysicalProfile) -> ApplicationResult<NormalizedDimensions> {
        let weight_unit = self.resolve_weight_unit()?;
        let dimension_unit = self.resolve_dimension_unit()?;

        let length = self.to_centimeters(profile.length, &dimension_unit)?;
        let width = self.to_centimeters(profile.width, &dimension_unit)?;
        let height = self.to_centimeters(profile.height, &dimension_unit)?;

        let kilograms = self
            .measures
            .convert_from_primary_weight(profile.weight, &weight_unit)
            .map_err(DomainError::from)?;
        let weight = ceil_to_u32(kilograms).map_err(DomainError::from)?;

        Ok(NormalizedDimensions::new(length, width, height, weight))
    }

    fn to_centimeters(&self, raw: Decimal, unit: &MeasureUnit) -> ApplicationResult<u32> {
        let converted = self
            .measures
            .convert_from_primary_dimension(raw, unit)
            .map_err(DomainError::from)?;
        let millimetres = ceil_to_u32(converted).map_err(DomainError::from)?;
        Ok(millimetres.safe_div(MM_PER_CM).map_err(DomainError::from)?)
    }

    fn resolve_weight_unit(&self) -> ApplicationResult<MeasureUnit> {
        self.measures
            .weight_by_keyword(&self.weight_keyword)
            .ok_or_else(|| {
                ApplicationError::fatal(format!(
                    "could not load \"{}\" measure weight",
                    self.weight_keyword
                ))
            })
    }

    fn resolve_dimension_unit(&self) -> ApplicationResult<MeasureUnit> {
        self.measures
            .dimension_by_keyword(&self.dimension_keyword)
            .ok_or_else(|| {
                ApplicationError::fatal(format!(
                    "could not load \"{}\" measure dimension",
                    self.dimension_keyword
                ))
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::measures::UnitTableMeasureService;
    use proptest::prelude::*;

    /// Primary units are centimeters and kilograms, like a default store.
    fn normalizer() -> UnitNormalizer {
        UnitNormalizer::new(Arc::new(UnitTableMeasureService::metric_primary()))
    }

    fn profile(length: i64, width: i64, height: i64, weight: i64) -> CartPhysicalProfile {
        CartPhysicalProfile::new(
            Decimal::new(length, 1),
            Decimal::new(width, 1),
            Decimal::new(height, 1),
            Decimal::new(weight, 1),
        )
    }

    #[test]
    fn converts_centimeter_totals() {
        // 25.0 x 15.0 x 10.0 cm, 5.0 kg
        let dims = normalizer().normalize(&profile(250, 150, 100, 50)).unwrap();
        assert_eq!(dims, NormalizedDimensions::new(25, 15, 10, 5));
    }

    #[test]
    fn ceiling_happens_before_truncating_division() {
        // 25.01 cm -> 250.1 mm -> 251 -> 25 cm
        // 15.89 cm -> 158.9 mm -> 159 -> 15 cm
        let profile = CartPhysicalProfile::new(
            Decimal::new(2501, 2),
            Decimal::new(1589, 2),
            Decimal::new(1, 1),
            Decimal::new(1, 2),
        );
        let dims = normalizer().normalize(&profile).unwrap();
        assert_eq!(dims.length(), 25);
        assert_eq!(dims.width(), 15);
        assert_eq!(dims.height(), 1);
        assert_eq!(dims.weight(), 1);
    }

    #[test]
    fn ceiling_can_reach_the_next_centimeter() {
        // 15.91 cm -> 159.1 mm -> 160 -> 16 cm
        // 15.99 cm -> 159.9 mm -> 160 -> 16 cm
        let profile = CartPhysicalProfile::new(
            Decimal::new(2000, 2),
            Decimal::new(1591, 2),
            Decimal::new(1599, 2),
            Decimal::ONE,
        );
        let dims = normalizer().normalize(&profile).unwrap();
        assert_eq!(dims.width(), 16);
        assert_eq!(dims.height(), 16);
    }

    #[test]
    fn weight_rounds_up() {
        let dims = normalizer().normalize(&profile(250, 150, 100, 301)).unwrap();
        assert_eq!(dims.weight(), 31);
    }

    #[test]
    fn empty_cart_is_floored_to_one() {
        let dims = normalizer().normalize(&CartPhysicalProfile::default()).unwrap();
        assert_eq!(dims, NormalizedDimensions::new(1, 1, 1, 1));
    }

    #[test]
    fn tall_cart_raises_length() {
        let dims = normalizer().normalize(&profile(100, 150, 400, 10)).unwrap();
        assert_eq!(dims.length(), 40);
        assert_eq!(dims.height(), 40);
    }

    #[test]
    fn missing_weight_unit_is_fatal() {
        let normalizer = UnitNormalizer::with_keywords(
            Arc::new(UnitTableMeasureService::metric_primary()),
            "stone",
            DIMENSION_KEYWORD,
        );
        let err = normalizer.normalize(&profile(1, 1, 1, 1)).unwrap_err();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("stone"));
    }

    #[test]
    fn missing_dimension_unit_is_fatal() {
        let normalizer = UnitNormalizer::new(Arc::new(UnitTableMeasureService::new()));
        let err = normalizer.normalize(&profile(1, 1, 1, 1)).unwrap_err();
        assert!(err.is_fatal());
    }

    proptest! {
        #[test]
        fn normalized_fields_are_positive_and_consistent(
            l in 0i64..1_000_000, w in 0i64..1_000_000, h in 0i64..1_000_000, kg in 0i64..1_000_000
        ) {
            let dims = normalizer().normalize(&profile(l, w, h, kg)).unwrap();
            prop_assert!(dims.length() >= 1);
            prop_assert!(dims.width() >= 1);
            prop_assert!(dims.height() >= 1);
            prop_assert!(dims.weight() >= 1);
            prop_assert!(dims.height() <= dims.length());
        }
    }
}
