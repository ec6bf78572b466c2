//! Catalog filter pipeline.
//!
//! Each stage takes a slice and returns a new vector; inputs are never
//! modified. [`FilterCriteria::apply`] runs category, diet, search and price
//! filters left to right and then sorts. A filter combination that matches
//! nothing yields an empty vector.

use core::fmt;

use rust_decimal::Decimal;

use harvest_hearth_core::{CatalogItem, DietFilter, Price, PriceParseError, SortOrder};

/// Category filter; `"all"` passes every item through.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == "all" {
            Self::All
        } else {
            Self::Only(s.to_owned())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category),
        }
    }
}

/// Inclusive price bounds; a missing bound is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriceRange {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
}

impl PriceRange {
    /// A range matching every price.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub const fn new(min: Option<Decimal>, max: Option<Decimal>) -> Self {
        Self { min, max }
    }

    /// Build a range from form text. Blank input leaves that bound open.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-blank bound is not a non-negative number.
    pub fn parse(min: &str, max: &str) -> Result<Self, PriceParseError> {
        let bound = |s: &str| -> Result<Option<Decimal>, PriceParseError> {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                Price::parse(s).map(|p| Some(p.amount()))
            }
        };
        Ok(Self::new(bound(min)?, bound(max)?))
    }

    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        let amount = price.amount();
        self.min.is_none_or(|min| min <= amount) && self.max.is_none_or(|max| amount <= max)
    }
}

/// Keep items in `category`, or everything for [`CategoryFilter::All`].
#[must_use]
pub fn filter_by_category(items: &[CatalogItem], category: &CategoryFilter) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| category.matches(item))
        .cloned()
        .collect()
}

/// Keep items whose dietary flag matches, or everything for
/// [`DietFilter::All`].
#[must_use]
pub fn filter_by_diet(items: &[CatalogItem], diet: DietFilter) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| match diet {
            DietFilter::All => true,
            DietFilter::Vegetarian => item.vegetarian,
            DietFilter::Seasonal => item.seasonal,
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring search over name, description, farm partner
/// and category. A blank term returns every item in input order.
#[must_use]
pub fn search(items: &[CatalogItem], term: &str) -> Vec<CatalogItem> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| {
            [
                Some(item.name.as_str()),
                Some(item.description.as_str()),
                item.farm_partner.as_deref(),
                Some(item.category.as_str()),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Keep items priced within `range` (inclusive).
#[must_use]
pub fn filter_by_price(items: &[CatalogItem], range: &PriceRange) -> Vec<CatalogItem> {
    items
        .iter()
        .filter(|item| range.contains(item.price))
        .cloned()
        .collect()
}

/// Sort a copy of `items`. Ties, and [`SortOrder::Default`], keep input order.
#[must_use]
pub fn sort_items(items: &[CatalogItem], order: SortOrder) -> Vec<CatalogItem> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::Default => {}
        SortOrder::PriceAsc => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    sorted
}

/// Distinct categories in first-seen order.
#[must_use]
pub fn unique_categories(items: &[CatalogItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Distinct farm partners, sorted.
#[must_use]
pub fn unique_farm_partners(items: &[CatalogItem]) -> Vec<String> {
    let mut partners: Vec<String> = items
        .iter()
        .filter_map(|item| item.farm_partner.clone())
        .collect();
    partners.sort();
    partners.dedup();
    partners
}

/// The full set of menu filter values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub diet: DietFilter,
    pub search: String,
    pub price: PriceRange,
    pub sort: SortOrder,
}

impl FilterCriteria {
    /// Run the pipeline over `items` and sort the result.
    #[must_use]
    pub fn apply(&self, items: &[CatalogItem]) -> Vec<CatalogItem> {
        let filtered = filter_by_category(items, &self.category);
        let filtered = filter_by_diet(&filtered, self.diet);
        let filtered = search(&filtered, &self.search);
        let filtered = filter_by_price(&filtered, &self.price);
        sort_items(&filtered, self.sort)
    }
}
