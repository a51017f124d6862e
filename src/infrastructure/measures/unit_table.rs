//! # Unit Table Measure Service
//!
//! A [`MeasureService`] backed by a fixed table of units.
//!
//! Each unit carries its ratio to the store's primary unit, so a store whose
//! primary dimension is the inch lists millimetres with a ratio of 25.4.
//!
//! # Examples
//!
//! ```
//! use correios_rates::application::ports::MeasureService;
//! use correios_rates::infrastructure::measures::UnitTableMeasureService;
//! use rust_decimal::Decimal;
//!
//! let measures = UnitTableMeasureService::imperial_primary();
//! let mm = measures.dimension_by_keyword("millimetres").unwrap();
//! let converted = measures.convert_from_primary_dimension(Decimal::TWO, &mm).unwrap();
//! assert_eq!(converted, Decimal::new(508, 1));
//! ```

use crate::application::ports::{MeasureService, MeasureUnit};
use rust_decimal::Decimal;

/// Measure units held in memory.
#[derive(Debug, Clone, Default)]
pub struct UnitTableMeasureService {
    weights: Vec<MeasureUnit>,
    dimensions: Vec<MeasureUnit>,
}

impl UnitTableMeasureService {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for a store keeping centimeters and kilograms.
    #[must_use]
    pub fn metric_primary() -> Self {
        Self::new()
            .with_dimension(MeasureUnit::new("centimetres", "centimeter(s)", Decimal::ONE))
            .with_dimension(MeasureUnit::new("millimetres", "millimetre(s)", Decimal::TEN))
            .with_dimension(MeasureUnit::new("meters", "meter(s)", Decimal::new(1, 2)))
            .with_weight(MeasureUnit::new("kg", "kg(s)", Decimal::ONE))
            .with_weight(MeasureUnit::new("grams", "gram(s)", Decimal::ONE_THOUSAND))
    }

    /// Table for a store keeping inches and pounds.
    #[must_use]
    pub fn imperial_primary() -> Self {
        Self::new()
            .with_dimension(MeasureUnit::new("inches", "inch(es)", Decimal::ONE))
            .with_dimension(MeasureUnit::new("feet", "feet", Decimal::new(833_333, 7)))
            .with_dimension(MeasureUnit::new("meters", "meter(s)", Decimal::new(254, 4)))
            .with_dimension(MeasureUnit::new("millimetres", "millimetre(s)", Decimal::new(254, 1)))
            .with_weight(MeasureUnit::new("ounce", "ounce(s)", Decimal::from(16)))
            .with_weight(MeasureUnit::new("lb", "lb(s)", Decimal::ONE))
            .with_weight(MeasureUnit::new("kg", "kg(s)", Decimal::new(4536, 4)))
            .with_weight(MeasureUnit::new("grams", "gram(s)", Decimal::new(45_359, 2)))
    }

    /// Adds a weight unit.
    #[must_use]
    pub fn with_weight(mut self, unit: MeasureUnit) -> Self {
        self.weights.push(unit);
        self
    }

    /// Adds a dimension unit.
    #[must_use]
    pub fn with_dimension(mut self, unit: MeasureUnit) -> Self {
        self.dimensions.push(unit);
        self
    }
}

fn lookup(units: &[MeasureUnit], keyword: &str) -> Option<MeasureUnit> {
    units
        .iter()
        .find(|unit| unit.system_keyword.eq_ignore_ascii_case(keyword.trim()))
        .cloned()
}

impl MeasureService for UnitTableMeasureService {
    fn weight_by_keyword(&self, keyword: &str) -> Option<MeasureUnit> {
        lookup(&self.weights, keyword)
    }

    fn dimension_by_keyword(&self, keyword: &str) -> Option<MeasureUnit> {
        lookup(&self.dimensions, keyword)
    }
}
