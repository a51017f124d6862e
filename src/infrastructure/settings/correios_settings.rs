//! # Correios Settings
//!
//! Carrier configuration for the rate provider.
//!
//! Settings are read with the `config` crate from an optional file, then
//! overridden by `CORREIOS__*` environment variables (after `.env` has been
//! loaded with `dotenvy`). Missing keys fall back to the defaults.
//!
//! ```text
//! CORREIOS__COMPANY_CODE=08082650
//! CORREIOS__SERVICES_OFFERED=04014,04510
//! CORREIOS__ADDITIONAL_COST=5.00
//! ```
//!
//! # Examples
//!
//! ```
//! use correios_rates::infrastructure::settings::CorreiosSettings;
//!
//! let settings = CorreiosSettings::from_toml(
//!     r#"
//!     company_code = "08082650"
//!     services_offered = ["04014"]
//!     additional_business_days = 2
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(settings.company_code, "08082650");
//! assert_eq!(settings.additional_business_days, 2);
//! assert!(settings.include_declared_value);
//! ```

use crate::application::error::{InfrastructureError, InfrastructureResult};
use config::{Config, Environment, File, FileFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CORREIOS";

/// Separator between nested keys in environment variables.
pub const ENV_SEPARATOR: &str = "__";

/// Default calculator endpoint.
pub const DEFAULT_URL: &str = "http://ws.correios.com.br/calculador/CalcPrecoPrazo.asmx";

/// Services quoted when none are configured: SEDEX and PAC, both "à vista".
pub const DEFAULT_SERVICES: &[&str] = &["04014", "04510"];

/// Correios carrier settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorreiosSettings {
    /// Calculator endpoint.
    pub url: String,
    /// Contract company code, empty without a contract.
    pub company_code: String,
    /// Contract password.
    pub password: String,
    /// Service codes to quote.
    pub services_offered: Vec<String>,
    /// Request receipt notice (aviso de recebimento).
    pub include_receipt_notice: bool,
    /// Request own-hands delivery (mão própria).
    pub include_own_hands: bool,
    /// Declare the cart subtotal for insurance.
    pub include_declared_value: bool,
    /// Business days added to every delivery estimate.
    pub additional_business_days: u32,
    /// Flat amount added to every rate.
    pub additional_cost: Decimal,
}

impl Default for CorreiosSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            company_code: String::new(),
            password: String::new(),
            services_offered: DEFAULT_SERVICES.iter().map(ToString::to_string).collect(),
            include_receipt_notice: false,
            include_own_hands: false,
            include_declared_value: true,
            additional_business_days: 0,
            additional_cost: Decimal::ZERO,
        }
    }
}

impl CorreiosSettings {
    /// Settings persisted when the provider is installed.
    #[must_use]
    pub fn install_defaults() -> Self {
        Self::default()
    }

    /// Loads settings from `.env` and `CORREIOS__*` variables.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if a value cannot be
    /// parsed.
    pub fn load() -> InfrastructureResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_builder(Config::builder())
    }

    /// Loads settings from an optional file, then the environment.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if the file exists but
    /// is invalid, or a value cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> InfrastructureResult<Self> {
        dotenvy::dotenv().ok();
        let path = path.as_ref();
        let Some(name) = path.to_str() else {
            return Err(InfrastructureError::configuration(format!(
                "settings path is not valid UTF-8: {}",
                path.display()
            )));
        };
        Self::from_builder(Config::builder().add_source(File::with_name(name).required(false)))
    }

    /// Parses settings from a TOML document, without the environment.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError::Configuration` if the document is
    /// invalid.
    pub fn from_toml(document: &str) -> InfrastructureResult<Self> {
        let settings = Config::builder()
            .add_source(File::from_str(document, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    fn from_builder(builder: config::ConfigBuilder<config::builder::DefaultState>) -> InfrastructureResult<Self> {
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .prefix_separator(ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("services_offered"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Whether contract credentials are configured.
    #[must_use]
    pub fn has_contract(&self) -> bool {
        !self.company_code.trim().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_install_payload() {
        let settings = CorreiosSettings::install_defaults();
        assert_eq!(settings.url, DEFAULT_URL);
        assert!(settings.company_code.is_empty());
        assert!(settings.password.is_empty());
        assert_eq!(settings.services_offered, vec!["04014", "04510"]);
        assert!(!settings.has_contract());
    }

    #[test]
    fn empty_document_gives_defaults() {
        let settings = CorreiosSettings::from_toml("").unwrap();
        assert_eq!(settings, CorreiosSettings::default());
    }

    #[test]
    fn document_overrides_fields() {
        let settings = CorreiosSettings::from_toml(
            r#"
            company_code = "08082650"
            password = "564321"
            include_receipt_notice = true
            include_own_hands = true
            include_declared_value = false
            additional_cost = "4.50"
            "#,
        )
        .unwrap();

        assert!(settings.has_contract());
        assert!(settings.include_receipt_notice);
        assert!(settings.include_own_hands);
        assert!(!settings.include_declared_value);
        assert_eq!(settings.additional_cost, Decimal::new(450, 2));
        assert_eq!(settings.url, DEFAULT_URL);
    }

    #[test]
    fn invalid_document_is_configuration_error() {
        let err = CorreiosSettings::from_toml("additional_business_days = \"soon\"").unwrap_err();
        assert!(matches!(err, InfrastructureError::Configuration(_)));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let settings = CorreiosSettings::load_from("does-not-exist/correios.toml");
        assert!(settings.is_ok());
    }
}
