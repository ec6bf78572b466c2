//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `HH_STORE_PATH` - Storage file (default: `.hh-storage.json`)
//! - `HH_CATALOG` - Menu data file path or URL (default: `data/menu.json`)
//! - `HH_MEMBERS` - Directory members file (default: `data/members.json`)
//! - `HH_TESTIMONIALS` - Testimonials file (default: `data/testimonials.json`)
//! - `HH_COURSES` - Courses file (default: `data/courses.json`)
//! - `HH_ATTRACTIONS` - Discover page attractions (default: `data/attractions.json`)
//! - `HH_STORAGE_QUOTA_BYTES` - Storage quota, 0 for none (default: 5242880)
//! - `HH_CAROUSEL_INTERVAL_SECS` - Carousel auto-advance interval (default: 5)
//! - `HH_PREFERS_DARK` - Host colour-scheme hint, `true`/`false` (default: false)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::CatalogSource;
use crate::store::DEFAULT_QUOTA_BYTES;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backing file for the key-value store
    pub store_path: PathBuf,
    /// Where the menu catalog is fetched from
    pub catalog: CatalogSource,
    /// Chamber directory members file
    pub members_path: PathBuf,
    /// Testimonials file for the carousel
    pub testimonials_path: PathBuf,
    /// Certificate courses file
    pub courses_path: PathBuf,
    /// Discover page attractions file
    pub attractions_path: PathBuf,
    /// Byte quota for the store, `None` for unlimited
    pub storage_quota: Option<usize>,
    /// Carousel auto-advance interval
    pub carousel_interval: Duration,
    /// Host prefers a dark colour scheme
    pub prefers_dark: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(".hh-storage.json"),
            catalog: CatalogSource::Path(PathBuf::from("data/menu.json")),
            members_path: PathBuf::from("data/members.json"),
            testimonials_path: PathBuf::from("data/testimonials.json"),
            courses_path: PathBuf::from("data/courses.json"),
            attractions_path: PathBuf::from("data/attractions.json"),
            storage_quota: Some(DEFAULT_QUOTA_BYTES),
            carousel_interval: crate::carousel::DEFAULT_INTERVAL,
            prefers_dark: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let quota_bytes: usize = parse_or(
            "HH_STORAGE_QUOTA_BYTES",
            get("HH_STORAGE_QUOTA_BYTES"),
            DEFAULT_QUOTA_BYTES,
        )?;
        let interval_secs: u64 = parse_or(
            "HH_CAROUSEL_INTERVAL_SECS",
            get("HH_CAROUSEL_INTERVAL_SECS"),
            defaults.carousel_interval.as_secs(),
        )?;
        if interval_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "HH_CAROUSEL_INTERVAL_SECS".to_string(),
                "interval must be at least 1 second".to_string(),
            ));
        }

        Ok(Self {
            store_path: get("HH_STORE_PATH").map_or(defaults.store_path, PathBuf::from),
            catalog: get("HH_CATALOG").map_or(defaults.catalog, |s| {
                CatalogSource::from_str(&s).unwrap_or_else(|never| match never {})
            }),
            members_path: get("HH_MEMBERS").map_or(defaults.members_path, PathBuf::from),
            testimonials_path: get("HH_TESTIMONIALS")
                .map_or(defaults.testimonials_path, PathBuf::from),
            courses_path: get("HH_COURSES").map_or(defaults.courses_path, PathBuf::from),
            attractions_path: get("HH_ATTRACTIONS")
                .map_or(defaults.attractions_path, PathBuf::from),
            storage_quota: (quota_bytes > 0).then_some(quota_bytes),
            carousel_interval: Duration::from_secs(interval_secs),
            prefers_dark: parse_or("HH_PREFERS_DARK", get("HH_PREFERS_DARK"), false)?,
        })
    }
}

fn parse_or<T>(key: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.map_or(Ok(default), |v| {
        v.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}
