//! Harvest & Hearth client state.
//!
//! The logic behind the site pages, independent of any presentation layer:
//!
//! - [`store`] - key-value persistence (memory or file) with a typed JSON wrapper
//! - [`orders`] and [`favorites`] - the persisted order list and favorites
//! - [`catalog`] - menu loading and the filter pipeline
//! - [`session`] - menu page view state
//! - [`preferences`], [`theme`] - user preferences, visit tracking, dark mode
//! - [`carousel`], [`directory`], [`courses`] - the remaining page widgets
//!
//! Managers share one store:
//!
//! ```rust,ignore
//! let store = DataStore::new(Arc::new(FileStore::open(".hh-storage.json", None)?));
//! let orders = OrderManager::new(store.clone());
//! orders.add_to_order(&item)?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod courses;
pub mod directory;
pub mod error;
pub mod favorites;
pub mod orders;
pub mod preferences;
pub mod session;
pub mod store;
pub mod theme;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use store::{DataStore, FileStore, KeyValueStore, MemoryStore, StoreError};
