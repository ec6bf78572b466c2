//! Catalog records: the menu items, listings and other orderable entries
//! loaded from a static data file.

use serde::{Deserialize, Serialize};

use super::id::ItemId;
use super::price::Price;

/// A single catalog record (menu item).
///
/// Field names follow the camelCase keys of the JSON data files. Dietary flags
/// and the farm partner are optional in the source data and default to
/// `false` / `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within one loaded catalog snapshot.
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Price,
    /// One of a small closed set (e.g. `starter`, `main`, `dessert`).
    pub category: String,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub seasonal: bool,
    /// Farm or supplier the dish is sourced from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_partner: Option<String>,
    /// Image source identifier (relative path or URL).
    #[serde(default)]
    pub image: String,
}

impl CatalogItem {
    /// Minimal constructor used by tests and fixtures; optional fields empty.
    #[must_use]
    pub fn new(id: ItemId, name: &str, price: Price, category: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            description: String::new(),
            price,
            category: category.to_owned(),
            vegetarian: false,
            seasonal: false,
            farm_partner: None,
            image: String::new(),
        }
    }

    /// Set the vegetarian flag (builder style).
    #[must_use]
    pub const fn vegetarian(mut self, vegetarian: bool) -> Self {
        self.vegetarian = vegetarian;
        self
    }

    /// Set the seasonal flag (builder style).
    #[must_use]
    pub const fn seasonal(mut self, seasonal: bool) -> Self {
        self.seasonal = seasonal;
        self
    }

    /// Set the description (builder style).
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        description.clone_into(&mut self.description);
        self
    }

    /// Set the farm partner (builder style).
    #[must_use]
    pub fn with_farm_partner(mut self, partner: &str) -> Self {
        self.farm_partner = Some(partner.to_owned());
        self
    }
}

/// A favorited catalog item.
///
/// Favorites are verbatim copies of the catalog record at the time it was
/// saved, not references, so they survive catalog reloads unchanged.
pub type FavoriteEntry = CatalogItem;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_data_file_record() {
        let json = r#"{
            "id": 3,
            "name": "Roasted Beet Salad",
            "description": "Goat cheese, candied walnuts",
            "price": "11.50",
            "category": "starter",
            "vegetarian": true,
            "farmPartner": "Sunny Acres",
            "image": "images/beet-salad.webp"
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, ItemId::new(3));
        assert_eq!(item.price, Price::from_cents(1150));
        assert!(item.vegetarian);
        assert!(!item.seasonal);
        assert_eq!(item.farm_partner.as_deref(), Some("Sunny Acres"));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"id":1,"name":"Soup","price":5,"category":"starter"}"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert!(item.description.is_empty());
        assert!(item.farm_partner.is_none());
        assert!(item.image.is_empty());
    }
}
