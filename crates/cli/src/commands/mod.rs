//! Subcommand implementations.
//!
//! Every command runs against one [`Context`]: configuration from the
//! environment and a file-backed store shared by all managers.

pub mod courses;
pub mod directory;
pub mod favorites;
pub mod menu;
pub mod order;
pub mod prefs;
pub mod testimonials;
pub mod theme;
pub mod visit;

use std::sync::Arc;

use harvest_hearth_client::catalog::Catalog;
use harvest_hearth_client::{ClientConfig, ClientError, DataStore, FileStore};
use harvest_hearth_core::{CatalogItem, ItemId};

/// Shared state for one CLI invocation.
pub struct Context {
    pub config: ClientConfig,
    pub store: DataStore,
}

impl Context {
    /// Load configuration and open the store file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid or the store file cannot
    /// be opened.
    pub fn from_env() -> Result<Self, ClientError> {
        let config = ClientConfig::from_env()?;
        let file = FileStore::open(config.store_path.clone(), config.storage_quota)?;
        tracing::debug!(path = %config.store_path.display(), "Store opened");
        Ok(Self {
            store: DataStore::new(Arc::new(file)),
            config,
        })
    }

    /// Load the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be fetched or parsed.
    pub async fn catalog(&self) -> Result<Catalog, ClientError> {
        Ok(Catalog::load(&self.config.catalog).await?)
    }

    /// Load the catalog and look up one item.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the catalog has no such item.
    pub async fn item(&self, id: i32) -> Result<CatalogItem, ClientError> {
        let catalog = self.catalog().await?;
        catalog
            .find(ItemId::new(id))
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("menu item {id}")))
    }
}
