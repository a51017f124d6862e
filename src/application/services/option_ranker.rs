//! # Option Ranker
//!
//! Strategies for turning carrier quotes into shipping options.
//!
//! This module provides the [`RankingStrategy`] trait and the
//! [`CheapestPerServiceStrategy`] used by the rate provider: successful
//! quotes are sorted by price, mapped to their public service name and
//! deduplicated so each name appears once, at its cheapest price.
//!
//! # Examples
//!
//! ```
//! use correios_rates::application::services::option_ranker::{
//!     CheapestPerServiceStrategy, RankingAdjustments, RankingStrategy,
//! };
//! use correios_rates::domain::entities::ServiceQuote;
//! use rust_decimal::Decimal;
//!
//! let quotes = vec![
//!     ServiceQuote::success("04014", "20,00", 2),
//!     ServiceQuote::success("04162", "18,50", 3),
//! ];
//! let outcome = CheapestPerServiceStrategy::new()
//!     .rank(&quotes, &RankingAdjustments::default())
//!     .unwrap();
//!
//! assert_eq!(outcome.options.len(), 1);
//! assert_eq!(outcome.options[0].option.rate, Decimal::new(1850, 2));
//! ```

use crate::domain::entities::{ServiceQuote, ShippingOption};
use crate::domain::errors::DomainResult;
use crate::domain::services::service_catalog;
use crate::domain::value_objects::CheckedArithmetic;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, error};

/// User-facing error when no service produced an option.
pub const NO_SERVICES_AVAILABLE: &str = "No shipping services are currently available";

/// Store-side adjustments applied to every option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankingAdjustments {
    /// Additional shipping charge configured on the cart's products.
    pub additional_charge: Decimal,
    /// Flat surcharge configured for the carrier.
    pub surcharge: Decimal,
    /// Business days added to every delivery estimate.
    pub lead_time_adjustment_days: u32,
}

impl RankingAdjustments {
    /// Creates adjustments.
    #[must_use]
    pub fn new(additional_charge: Decimal, surcharge: Decimal, lead_time_adjustment_days: u32) -> Self {
        Self {
            additional_charge,
            surcharge,
            lead_time_adjustment_days,
        }
    }

    /// Total amount added to each carrier price.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` via `DomainError` on overflow.
    pub fn extra_cost(&self) -> DomainResult<Decimal> {
        Ok(self.additional_charge.safe_add(self.surcharge)?)
    }
}

/// A shipping option with its ranking information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedOption {
    /// The option offered to the customer.
    pub option: ShippingOption,
    /// The rank (1 = cheapest).
    pub rank: usize,
    /// Carrier code of the service that produced the option.
    pub service_code: String,
}

impl RankedOption {
    /// Creates a new ranked option.
    #[must_use]
    pub fn new(option: ShippingOption, rank: usize, service_code: impl Into<String>) -> Self {
        Self {
            option,
            rank,
            service_code: service_code.into(),
        }
    }

    /// Returns true if this is the cheapest option (rank 1).
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for RankedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RankedOption(#{} service={} option={})",
            self.rank, self.service_code, self.option
        )
    }
}

/// Options produced from one carrier response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankingOutcome {
    /// Ranked options, cheapest first.
    pub options: Vec<RankedOption>,
    /// User-facing errors.
    pub errors: Vec<String>,
}

impl RankingOutcome {
    /// Builds an outcome, adding the "no services" error when empty.
    #[must_use]
    pub fn from_options(options: Vec<RankedOption>) -> Self {
        if options.is_empty() {
            Self::unavailable()
        } else {
            Self {
                options,
                errors: Vec::new(),
            }
        }
    }

    /// Outcome for a carrier that offered nothing.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            options: Vec::new(),
            errors: vec![NO_SERVICES_AVAILABLE.to_string()],
        }
    }

    /// Options without ranking information.
    #[must_use]
    pub fn into_shipping_options(self) -> (Vec<ShippingOption>, Vec<String>) {
        (
            self.options.into_iter().map(|ranked| ranked.option).collect(),
            self.errors,
        )
    }
}

/// Trait for ranking strategies.
///
/// Implementations decide which carrier quotes become options and in what
/// order.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the given quotes.
    ///
    /// # Arguments
    ///
    /// * `quotes` - Quotes for the whole shipment, successful or not
    /// * `adjustments` - Store-side cost and lead time adjustments
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidAmount` if a successful quote has a malformed
    ///   price
    /// - `DomainError::Arithmetic` if an adjusted rate overflows
    fn rank(&self, quotes: &[ServiceQuote], adjustments: &RankingAdjustments) -> DomainResult<RankingOutcome>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Cheapest option per public service name.
///
/// - erroring quotes are logged and produce no option
/// - a successful quote with a malformed price fails the whole ranking
/// - successful quotes are sorted by price, ties keep carrier order
/// - the first quote for each public name wins
#[derive(Debug, Clone, Default)]
pub struct CheapestPerServiceStrategy;

impl CheapestPerServiceStrategy {
    /// Creates a new cheapest-per-service strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for CheapestPerServiceStrategy {
    fn rank(&self, quotes: &[ServiceQuote], adjustments: &RankingAdjustments) -> DomainResult<RankingOutcome> {
        let mut priced: Vec<(Decimal, &ServiceQuote)> = Vec::with_capacity(quotes.len());

        for quote in quotes {
            debug!(
                service_code = %quote.service_code,
                price = %quote.price,
                receipt_notice_price = %quote.receipt_notice_price,
                own_hands_price = %quote.own_hands_price,
                declared_value_price = %quote.declared_value_price,
                delivery_days = quote.delivery_days,
                home_delivery = quote.home_delivery,
                saturday_delivery = quote.saturday_delivery,
                error_code = %quote.error_code,
                error_message = %quote.error_message,
                "Carrier service response"
            );

            if !quote.is_success() {
                error!(
                    service = %service_catalog::full_name(&quote.service_code),
                    error_code = %quote.error_code.trim(),
                    error_message = %quote.error_message,
                    "Correios service returned an error"
                );
                continue;
            }

            let price = quote.parsed_price().inspect_err(|e| {
                error!(
                    service = %service_catalog::full_name(&quote.service_code),
                    error = %e,
                    "Correios service returned an unreadable price"
                );
            })?;
            priced.push((price.get(), quote));
        }

        priced.sort_by(|a, b| a.0.cmp(&b.0));

        let extra_cost = adjustments.extra_cost()?;
        let mut seen = HashSet::new();
        let mut options = Vec::new();

        for (price, quote) in priced {
            let name = service_catalog::public_name(&quote.service_code);
            if !seen.insert(name.clone()) {
                continue;
            }

            let days = quote
                .delivery_days
                .saturating_add(adjustments.lead_time_adjustment_days);
            let option = ShippingOption::new(
                name,
                ShippingOption::lead_time_description(days),
                price.safe_add(extra_cost)?,
            );
            options.push(RankedOption::new(option, options.len() + 1, quote.service_code.trim()));
        }

        Ok(RankingOutcome::from_options(options))
    }

    fn name(&self) -> &'static str {
        "CheapestPerService"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use proptest::prelude::*;

    fn rank(quotes: &[ServiceQuote]) -> RankingOutcome {
        CheapestPerServiceStrategy::new()
            .rank(quotes, &RankingAdjustments::default())
            .unwrap()
    }

    #[test]
    fn ranked_option_is_best() {
        let option = ShippingOption::new("PAC", "x", Decimal::ONE);
        assert!(RankedOption::new(option.clone(), 1, "04510").is_best());
        assert!(!RankedOption::new(option, 2, "04510").is_best());
    }

    #[test]
    fn duplicate_names_keep_cheapest() {
        let quotes = vec![
            ServiceQuote::success("04014", "20,00", 2),
            ServiceQuote::success("40010", "18,50", 4),
        ];

        let outcome = rank(&quotes);

        assert_eq!(outcome.options.len(), 1);
        assert_eq!(outcome.options[0].option.name, "SEDEX");
        assert_eq!(outcome.options[0].option.rate, Decimal::new(1850, 2));
        assert_eq!(outcome.options[0].service_code, "40010");
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn sorts_numerically_not_lexically() {
        let quotes = vec![
            ServiceQuote::success("04014", "100,00", 1),
            ServiceQuote::success("04510", "9,90", 6),
            ServiceQuote::success("04782", "25,10", 2),
        ];

        let outcome = rank(&quotes);
        let names: Vec<_> = outcome.options.iter().map(|o| o.option.name.as_str()).collect();

        assert_eq!(names, vec!["PAC", "SEDEX 12", "SEDEX"]);
        assert_eq!(outcome.options[2].rank, 3);
    }

    #[test]
    fn applies_adjustments() {
        let quotes = vec![ServiceQuote::success("04510", "20,00", 7)];
        let adjustments = RankingAdjustments::new(Decimal::new(250, 2), Decimal::new(5, 0), 2);

        let outcome = CheapestPerServiceStrategy::new()
            .rank(&quotes, &adjustments)
            .unwrap();

        let option = &outcome.options[0].option;
        assert_eq!(option.rate, Decimal::new(2750, 2));
        assert_eq!(option.description, "Average delivery time 9 business days");
    }

    #[test]
    fn erroring_services_are_excluded() {
        let quotes = vec![
            ServiceQuote::failure("04014", "-3", "CEP de destino invalido"),
            ServiceQuote::success("04510", "20,00", 7),
        ];

        let outcome = rank(&quotes);

        assert_eq!(outcome.options.len(), 1);
        assert_eq!(outcome.options[0].option.name, "PAC");
    }

    #[test]
    fn all_erroring_is_unavailable() {
        let quotes = vec![
            ServiceQuote::failure("04014", "-3", "CEP de destino invalido"),
            ServiceQuote::failure("04510", "-3", "CEP de destino invalido"),
        ];

        let outcome = rank(&quotes);

        assert!(outcome.options.is_empty());
        assert_eq!(outcome.errors, vec![NO_SERVICES_AVAILABLE.to_string()]);
    }

    #[test]
    fn unreadable_price_fails_ranking() {
        let quotes = vec![
            ServiceQuote::success("04014", "n/a", 1),
            ServiceQuote::success("04510", "20,00", 7),
        ];

        let err = CheapestPerServiceStrategy::new()
            .rank(&quotes, &RankingAdjustments::default())
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidAmount(_)));
    }

    #[test]
    fn unreadable_price_of_erroring_service_is_ignored() {
        let mut failed = ServiceQuote::failure("04014", "-3", "CEP de destino invalido");
        failed.price = "n/a".to_string();
        let quotes = vec![failed, ServiceQuote::success("04510", "20,00", 7)];

        let outcome = rank(&quotes);

        assert_eq!(outcome.options.len(), 1);
        assert_eq!(outcome.options[0].service_code, "04510");
    }

    #[test]
    fn unknown_service_uses_code_as_name() {
        let outcome = rank(&[ServiceQuote::success("99999", "10,00", 3)]);
        assert_eq!(outcome.options[0].option.name, "99999");
    }

    #[test]
    fn empty_response_is_unavailable() {
        assert_eq!(rank(&[]), RankingOutcome::unavailable());
    }

    #[test]
    fn into_shipping_options_drops_ranking() {
        let (options, errors) = rank(&[ServiceQuote::success("04510", "20,00", 7)]).into_shipping_options();
        assert_eq!(options.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn strategy_name() {
        assert_eq!(CheapestPerServiceStrategy::new().name(), "CheapestPerService");
    }

    proptest! {
        #[test]
        fn options_are_sorted_and_unique(cents in proptest::collection::vec(1i64..1_000_000, 1..8)) {
            let codes = ["04014", "04510", "04782", "40010", "41106", "04790", "81019"];
            let quotes: Vec<ServiceQuote> = cents
                .iter()
                .zip(codes.iter().cycle())
                .map(|(c, code)| {
                    let price = Decimal::new(*c, 2).to_string().replace('.', ",");
                    ServiceQuote::success(*code, price, 3)
                })
                .collect();

            let outcome = rank(&quotes);

            let rates: Vec<Decimal> = outcome.options.iter().map(|o| o.option.rate).collect();
            prop_assert!(rates.windows(2).all(|w| w[0] <= w[1]));

            let names: HashSet<&str> = outcome.options.iter().map(|o| o.option.name.as_str()).collect();
            prop_assert_eq!(names.len(), outcome.options.len());
        }
    }
}
