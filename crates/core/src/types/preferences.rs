//! Stored user preferences and the filter/sort choices they remember.

use core::fmt;
use core::str::FromStr;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

/// Dietary filter applied to the menu.
///
/// Unknown values (from stale storage or a typo'd query) mean no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DietFilter {
    #[default]
    All,
    Vegetarian,
    Seasonal,
}

impl DietFilter {
    /// The stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Vegetarian => "vegetarian",
            Self::Seasonal => "seasonal",
        }
    }
}

impl From<&str> for DietFilter {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "vegetarian" => Self::Vegetarian,
            "seasonal" => Self::Seasonal,
            _ => Self::All,
        }
    }
}

impl From<String> for DietFilter {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromStr for DietFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for DietFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for the visible menu.
///
/// `Default` keeps the catalog's own order; the stored value for it is
/// `"name"`, which is what the menu page has always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum SortOrder {
    #[default]
    #[serde(rename = "name")]
    Default,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
}

impl SortOrder {
    /// The stored string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "name",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "price-asc" | "asc" => Self::PriceAsc,
            "price-desc" | "desc" => Self::PriceDesc,
            _ => Self::Default,
        }
    }
}

impl From<String> for SortOrder {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferences remembered between visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub dietary_restriction: DietFilter,
    pub sort_by: SortOrder,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences_shape() {
        let json = serde_json::to_value(UserPreferences::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "dietaryRestriction": "all", "sortBy": "name" })
        );
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{"dietaryRestriction":"vegan","sortBy":"rating"}"#).unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[test]
    fn test_missing_fields_default() {
        let prefs: UserPreferences = serde_json::from_str(r#"{"sortBy":"price-desc"}"#).unwrap();
        assert_eq!(prefs.dietary_restriction, DietFilter::All);
        assert_eq!(prefs.sort_by, SortOrder::PriceDesc);
    }

    #[test]
    fn test_diet_filter_parse_is_case_insensitive() {
        assert_eq!(DietFilter::from("Vegetarian"), DietFilter::Vegetarian);
        assert_eq!(DietFilter::from(" seasonal "), DietFilter::Seasonal);
        assert_eq!(DietFilter::from("all"), DietFilter::All);
    }
}
