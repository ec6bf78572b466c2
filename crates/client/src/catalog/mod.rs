//! Catalog loading and lookup.
//!
//! A [`Catalog`] is one immutable snapshot of the menu, loaded once from a
//! static JSON document. Reloading replaces the snapshot wholesale. The
//! document is either a bare array of items or an object with a `menu` array.

pub mod filter;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use harvest_hearth_core::{CatalogItem, ItemId};

pub use filter::{CategoryFilter, FilterCriteria, PriceRange};

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not a valid catalog.
    #[error("invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Path(PathBuf),
    Url(Url),
}

impl FromStr for CatalogSource {
    type Err = std::convert::Infallible;

    /// `http://` and `https://` strings are URLs; anything else is a path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self::Url(url)),
            _ => Ok(Self::Path(PathBuf::from(s))),
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Read a JSON data file (members, testimonials, courses, attractions).
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as `T`.
pub async fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let body = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&body)?)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Items(Vec<CatalogItem>),
    Menu { menu: Vec<CatalogItem> },
}

/// One loaded catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    #[must_use]
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Parse a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is not an item array or `{ "menu": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        let items = match document {
            CatalogDocument::Items(items) | CatalogDocument::Menu { menu: items } => items,
        };
        Ok(Self { items })
    }

    /// Fetch and parse the catalog from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails, the server answers with a
    /// non-success status, or the document does not parse.
    #[instrument(skip_all, fields(source = %source))]
    pub async fn load(source: &CatalogSource) -> Result<Self, CatalogError> {
        let body = match source {
            CatalogSource::Path(path) => tokio::fs::read_to_string(path).await?,
            CatalogSource::Url(url) => {
                let response = reqwest::get(url.clone()).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CatalogError::Status(status.as_u16()));
                }
                response.text().await?
            }
        };

        let catalog = Self::from_json(&body)?;
        tracing::info!(items = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn find(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const MENU: &str = r#"{
        "menu": [
            {"id": 1, "name": "Soup", "price": 5, "category": "starter", "vegetarian": true},
            {"id": 2, "name": "Trout", "price": "24.50", "category": "main"}
        ]
    }"#;

    #[test]
    fn test_from_json_menu_object() {
        let catalog = Catalog::from_json(MENU).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(ItemId::new(2)).unwrap().name, "Trout");
        assert!(catalog.find(ItemId::new(3)).is_none());
    }

    #[test]
    fn test_from_json_bare_array() {
        let catalog = Catalog::from_json(r#"[{"id":1,"name":"Soup","price":5,"category":"starter"}]"#)
            .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(Catalog::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json(r#"{"items": 3}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_source_from_str() {
        assert!(matches!(
            "https://example.com/data/menu.json".parse::<CatalogSource>().unwrap(),
            CatalogSource::Url(_)
        ));
        assert_eq!(
            "data/menu.json".parse::<CatalogSource>().unwrap(),
            CatalogSource::Path(PathBuf::from("data/menu.json"))
        );
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.json");
        std::fs::write(&path, MENU).unwrap();

        let catalog = Catalog::load(&CatalogSource::Path(path)).await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let source = CatalogSource::Path(PathBuf::from("/nonexistent/menu.json"));
        assert!(matches!(
            Catalog::load(&source).await,
            Err(CatalogError::Io(_))
        ));
    }
}
