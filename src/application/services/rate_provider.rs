//! # Correios Rate Provider
//!
//! Orchestrates one shipping rate computation.
//!
//! ```text
//! cart items -> UnitNormalizer -> ParcelPacker -> QuoteRequestor (once)
//!            -> rescale (when split) -> RankingStrategy -> response
//! ```
//!
//! Validation problems and carrier unavailability are reported inline in
//! the [`ShippingOptionResponse`]. Only misconfiguration and malformed
//! carrier amounts abort the computation with an error.

use crate::application::dto::{
    ConfigurationRoute, RateComputationMethodType, ShippingOptionRequest, ShippingOptionResponse,
};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::{CartCalculator, MeasureService, OriginAddressSource};
use crate::application::services::option_ranker::{
    CheapestPerServiceStrategy, NO_SERVICES_AVAILABLE, RankingAdjustments, RankingStrategy,
};
use crate::application::services::unit_normalizer::UnitNormalizer;
use crate::domain::entities::QuoteRequest;
use crate::domain::services::{ParcelPacker, rescale};
use crate::domain::value_objects::{CarrierEnvelope, PostalCode};
use crate::infrastructure::carrier::QuoteRequestor;
use crate::infrastructure::settings::{CorreiosSettings, SettingsStore};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

/// Error shown when the cart is empty.
pub const NO_ITEMS: &str = "No items to ship";

/// Error shown when the request has no shipping address.
pub const NO_SHIPPING_ADDRESS: &str = "Shipping address is not set";

/// Error shown when the shipping address has no postal code.
pub const NO_SHIPPING_POSTAL_CODE: &str = "Shipping postal code is not set";

/// Real-time Correios rate provider.
#[derive(Debug)]
pub struct CorreiosRateProvider {
    settings: CorreiosSettings,
    packer: ParcelPacker,
    normalizer: UnitNormalizer,
    cart: Arc<dyn CartCalculator>,
    origin: Arc<dyn OriginAddressSource>,
    requestor: Arc<dyn QuoteRequestor>,
    ranking_strategy: Arc<dyn RankingStrategy>,
}

impl CorreiosRateProvider {
    /// Creates a provider using the Correios box envelope and the
    /// cheapest-per-service ranking.
    #[must_use]
    pub fn new(
        settings: CorreiosSettings,
        measures: Arc<dyn MeasureService>,
        cart: Arc<dyn CartCalculator>,
        origin: Arc<dyn OriginAddressSource>,
        requestor: Arc<dyn QuoteRequestor>,
    ) -> Self {
        Self {
            settings,
            packer: ParcelPacker::default(),
            normalizer: UnitNormalizer::new(measures),
            cart,
            origin,
            requestor,
            ranking_strategy: Arc::new(CheapestPerServiceStrategy::new()),
        }
    }

    /// Packs against another envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` if the envelope is inconsistent.
    pub fn with_envelope(mut self, envelope: CarrierEnvelope) -> ApplicationResult<Self> {
        self.packer = ParcelPacker::new(envelope)?;
        Ok(self)
    }

    /// Ranks options with another strategy.
    #[must_use]
    pub fn with_ranking_strategy(mut self, strategy: Arc<dyn RankingStrategy>) -> Self {
        self.ranking_strategy = strategy;
        self
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &CorreiosSettings {
        &self.settings
    }

    /// Computes shipping options for a cart.
    ///
    /// The carrier is called at most once.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Configuration` if a measure unit or the origin
    ///   postal code cannot be resolved
    /// - `ApplicationError::Domain` if a successful quote carries a malformed
    ///   amount, or on arithmetic overflow
    pub async fn get_shipping_options(
        &self,
        request: &ShippingOptionRequest,
    ) -> ApplicationResult<ShippingOptionResponse> {
        let computation_id = Uuid::new_v4();
        let span = info_span!(
            "shipping_computation",
            %computation_id,
            requestor = self.requestor.name(),
            ranking = self.ranking_strategy.name(),
        );
        self.compute(request).instrument(span).await
    }

    async fn compute(&self, request: &ShippingOptionRequest) -> ApplicationResult<ShippingOptionResponse> {
        let mut response = ShippingOptionResponse::new();

        if request.items.is_empty() {
            response.add_error(NO_ITEMS);
            return Ok(response);
        }
        let Some(address) = request.shipping_address.as_ref() else {
            response.add_error(NO_SHIPPING_ADDRESS);
            return Ok(response);
        };
        let Some(destination) = address.postal_code() else {
            response.add_error(NO_SHIPPING_POSTAL_CODE);
            return Ok(response);
        };

        let profile = self.cart.physical_profile(&request.items)?;
        let dims = self.normalizer.normalize(&profile)?;
        let origin = self.origin_postal_code()?;
        let declared_value = if self.settings.include_declared_value {
            self.cart.subtotal_with_discounts(&request.items)?
        } else {
            Decimal::ZERO
        };
        let shipment = self.packer.pack(&dims, declared_value)?;

        debug!(
            %dims,
            parcel = %shipment.parcel(),
            count = shipment.count(),
            "packed shipment"
        );

        let quote_request = QuoteRequest::new(origin, destination.trim())
            .with_credentials(&self.settings.company_code, &self.settings.password)
            .with_services(self.settings.services_offered.clone())
            .with_features(
                self.settings.include_receipt_notice,
                self.settings.include_own_hands,
            )
            .with_parcel(shipment.parcel().clone());

        let quotes = match self.requestor.calculate(&quote_request).await {
            Ok(Some(quotes)) => quotes,
            Ok(None) => {
                warn!(requestor = self.requestor.name(), "carrier returned no result");
                response.add_error(NO_SERVICES_AVAILABLE);
                return Ok(response);
            }
            Err(e) => {
                error!(
                    requestor = self.requestor.name(),
                    error = %e,
                    retryable = e.is_retryable(),
                    "carrier request failed"
                );
                response.add_error(NO_SERVICES_AVAILABLE);
                return Ok(response);
            }
        };

        let quotes = rescale(quotes, shipment.count())?;

        let adjustments = RankingAdjustments::new(
            self.cart.additional_shipping_charge(&request.items)?,
            self.settings.additional_cost,
            self.settings.additional_business_days,
        );
        let outcome = self.ranking_strategy.rank(&quotes, &adjustments)?;

        info!(
            quotes = quotes.len(),
            options = outcome.options.len(),
            parcels = shipment.count(),
            "shipping options computed"
        );

        let (options, errors) = outcome.into_shipping_options();
        response.shipping_options = options;
        for message in errors {
            response.add_error(message);
        }
        Ok(response)
    }

    fn origin_postal_code(&self) -> ApplicationResult<PostalCode> {
        let Some(address) = self.origin.origin_address() else {
            return Err(ApplicationError::fatal("shipping origin address is not configured"));
        };
        let Some(code) = address.postal_code() else {
            return Err(ApplicationError::fatal("shipping origin postal code is not configured"));
        };
        PostalCode::parse(code)
            .map_err(|e| ApplicationError::fatal(format!("shipping origin postal code is invalid: {e}")))
    }

    /// Fixed rate for the request; this provider only computes real-time
    /// rates.
    #[must_use]
    pub fn get_fixed_rate(&self, _request: &ShippingOptionRequest) -> Option<Decimal> {
        None
    }

    /// How this provider prices shipments.
    #[must_use]
    pub fn rate_computation_method_type(&self) -> RateComputationMethodType {
        RateComputationMethodType::Realtime
    }

    /// Route of the provider's configuration screen.
    #[must_use]
    pub fn configuration_route(&self) -> ConfigurationRoute {
        let mut route_values = BTreeMap::new();
        route_values.insert(
            "Namespaces".to_string(),
            Some("Nop.Plugin.Shipping.Correios.Controllers".to_string()),
        );
        route_values.insert("area".to_string(), None);
        ConfigurationRoute {
            action_name: "Configure".to_string(),
            controller_name: "ShippingCorreios".to_string(),
            route_values,
        }
    }

    /// Persists the default settings.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Infrastructure` if the store fails.
    pub async fn install(&self, store: &dyn SettingsStore) -> ApplicationResult<()> {
        store.save(&CorreiosSettings::install_defaults()).await?;
        info!("correios settings installed");
        Ok(())
    }

    /// Removes the persisted settings.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Infrastructure` if the store fails.
    pub async fn uninstall(&self, store: &dyn SettingsStore) -> ApplicationResult<()> {
        store.delete().await?;
        info!("correios settings removed");
        Ok(())
    }
}
