//! # Measures
//!
//! Local implementations of the measure unit port.

pub mod unit_table;

pub use unit_table::UnitTableMeasureService;
