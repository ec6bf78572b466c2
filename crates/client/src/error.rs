//! Client-level error type.
//!
//! Each module reports its own error enum; callers that drive several modules
//! (the CLI, integration code) use [`ClientError`] and `?` across them.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::store::StoreError;

/// Any error the client crate can return.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A store write was rejected; persisted state is unchanged.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Catalog or data file could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A referenced item does not exist in the loaded catalog.
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
