//! Key-value persistence for client state.
//!
//! Every persisted collection (favorites, order list, visit counter,
//! preferences, theme) lives under one string key in a [`KeyValueStore`]. The
//! store is injected, so the same managers run over a [`MemoryStore`] in tests
//! and a [`FileStore`] in the CLI.
//!
//! [`DataStore`] adds JSON encoding on top and owns the read policy: a missing
//! key or a value that fails to parse yields the caller's default, never an
//! error. Writes report failure (quota, unavailable storage) as
//! [`StoreError`]; the caller's state is unchanged and nothing is retried.
//!
//! Read-modify-write sequences are not atomic across processes sharing one
//! backing file: the last write wins.

mod file;
mod memory;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Default storage quota in bytes, the common browser local storage limit.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

/// Storage keys for persisted collections.
pub mod keys {
    /// Favorited catalog items (JSON array).
    pub const FAVORITES: &str = "hh_favorites";

    /// Order lines (JSON array).
    pub const ORDERS: &str = "hh_orders";

    /// Visit counter (JSON integer).
    pub const VISIT_COUNT: &str = "hh_visits";

    /// User preferences (JSON object).
    pub const USER_PREFERENCES: &str = "hh_preferences";

    /// Theme, stored raw as `dark` or `light`.
    pub const THEME: &str = "hh_theme";

    /// Last visit time, stored raw as epoch milliseconds.
    pub const LAST_VISIT: &str = "lastVisit";
}

/// Errors reported by storage writes.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would exceed the storage quota.
    #[error("storage quota exceeded writing {key:?}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    /// Storage cannot be used at all (disabled, lock poisoned).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Backing file could not be written.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded.
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for storage writes.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A flat string key-value store, the shape of browser local storage.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read at all.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected; the previous value is kept.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Bytes a single entry counts against the quota.
pub(crate) const fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// JSON-encoding wrapper over an injected [`KeyValueStore`].
///
/// Cheap to clone; all clones share the same backing store.
#[derive(Clone)]
pub struct DataStore {
    inner: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore").finish_non_exhaustive()
    }
}

impl DataStore {
    /// Wrap a shared key-value store.
    #[must_use]
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    /// A data store over a fresh, unlimited [`MemoryStore`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Read and decode `key`, returning `default` when the key is absent,
    /// unreadable, or does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.get_raw(key) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed stored value");
                default
            }
        }
    }

    /// Like [`get`](Self::get) with `T::default()` as the fallback.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key, T::default())
    }

    /// Encode and write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backing store rejects the
    /// write. The stored value is unchanged in that case.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }

    /// Read the raw stored string for `key`.
    ///
    /// Storage read failures are logged and reported as absent.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.inner.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage read failed");
                None
            }
        }
    }

    /// Write a raw string under `key` without JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value).inspect_err(|e| {
            tracing::warn!(key, error = %e, "Storage write failed");
        })
    }

    /// Delete `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.inner.remove(key).inspect_err(|e| {
            tracing::warn!(key, error = %e, "Storage remove failed");
        })
    }
}
