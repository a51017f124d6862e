//! # Settings Store
//!
//! Port and in-memory implementation for persisted carrier settings.
//!
//! The hosting store owns settings persistence; the rate provider only
//! writes its defaults on install and removes them on uninstall.

use crate::application::error::InfrastructureResult;
use crate::infrastructure::settings::CorreiosSettings;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Persistence for carrier settings.
#[async_trait]
pub trait SettingsStore: Send + Sync + fmt::Debug {
    /// Saves settings, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError` if the settings cannot be stored.
    async fn save(&self, settings: &CorreiosSettings) -> InfrastructureResult<()>;

    /// Loads the stored settings, `None` when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError` if the stored value cannot be read.
    async fn load(&self) -> InfrastructureResult<Option<CorreiosSettings>>;

    /// Removes the stored settings.
    ///
    /// # Errors
    ///
    /// Returns `InfrastructureError` if the settings cannot be removed.
    async fn delete(&self) -> InfrastructureResult<()>;
}

/// In-memory implementation of [`SettingsStore`].
///
/// Keeps the settings serialized as JSON, the way a key-value settings
/// table would.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    storage: Arc<RwLock<Option<String>>>,
}

impl InMemorySettingsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.storage.read().await.is_none()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn save(&self, settings: &CorreiosSettings) -> InfrastructureResult<()> {
        let json = serde_json::to_string(settings)?;
        *self.storage.write().await = Some(json);
        Ok(())
    }

    async fn load(&self) -> InfrastructureResult<Option<CorreiosSettings>> {
        let storage = self.storage.read().await;
        match storage.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self) -> InfrastructureResult<()> {
        *self.storage.write().await = None;
        Ok(())
    }
}
