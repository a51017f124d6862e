//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! - [`UnitNormalizer`]: cart totals to carrier units
//! - [`RankingStrategy`]: strategies for turning quotes into options
//! - [`CorreiosRateProvider`]: one rate computation end to end

pub mod option_ranker;
pub mod rate_provider;
pub mod unit_normalizer;

pub use option_ranker::{
    CheapestPerServiceStrategy, NO_SERVICES_AVAILABLE, RankedOption, RankingAdjustments,
    RankingOutcome, RankingStrategy,
};
pub use rate_provider::CorreiosRateProvider;
pub use unit_normalizer::UnitNormalizer;
