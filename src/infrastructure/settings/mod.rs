//! # Settings
//!
//! Carrier settings and their persistence.

pub mod correios_settings;
pub mod store;

pub use correios_settings::CorreiosSettings;
pub use store::{InMemorySettingsStore, SettingsStore};
