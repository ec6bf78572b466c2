//! Menu page view state.
//!
//! [`MenuSession`] owns everything the menu page used to keep in module-level
//! variables: the loaded catalog, the current filter values, and whether the
//! catalog fetch succeeded. Rendering reads [`MenuSession::visible`].

use rust_decimal::Decimal;

use harvest_hearth_core::{CatalogItem, DietFilter, ItemId, SortOrder, UserPreferences};

use crate::catalog::{Catalog, CatalogSource, CategoryFilter, FilterCriteria, PriceRange};

/// Message shown when the catalog cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load menu items";

/// Progress of the one catalog fetch per page load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Ready,
    /// User-visible error message. There is no retry.
    Failed(String),
}

/// View state for the menu page.
#[derive(Debug, Clone, Default)]
pub struct MenuSession {
    catalog: Catalog,
    criteria: FilterCriteria,
    state: FetchState,
}

impl MenuSession {
    /// A session in the loading state, starting from the stored diet and
    /// sort preferences.
    #[must_use]
    pub fn new(prefs: UserPreferences) -> Self {
        Self {
            catalog: Catalog::default(),
            criteria: FilterCriteria {
                diet: prefs.dietary_restriction,
                sort: prefs.sort_by,
                ..FilterCriteria::default()
            },
            state: FetchState::Loading,
        }
    }

    /// A ready session over an already loaded catalog.
    #[must_use]
    pub fn with_catalog(prefs: UserPreferences, catalog: Catalog) -> Self {
        let mut session = Self::new(prefs);
        session.replace_catalog(catalog);
        session
    }

    /// Fetch the catalog from `source`, replacing any previous snapshot.
    ///
    /// A failed fetch leaves an empty catalog and [`FetchState::Failed`].
    pub async fn load(&mut self, source: &CatalogSource) {
        self.state = FetchState::Loading;
        match Catalog::load(source).await {
            Ok(catalog) => self.replace_catalog(catalog),
            Err(e) => {
                tracing::error!(source = %source, error = %e, "Failed to load menu");
                self.catalog = Catalog::default();
                self.state = FetchState::Failed(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Swap in a new catalog snapshot wholesale.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.state = FetchState::Ready;
    }

    #[must_use]
    pub const fn state(&self) -> &FetchState {
        &self.state
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Pick a category. The diet filter resets to `all`, matching the
    /// category buttons.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.criteria.diet = DietFilter::All;
    }

    /// Pick a diet filter within the current category.
    pub const fn select_diet(&mut self, diet: DietFilter) {
        self.criteria.diet = diet;
    }

    pub fn set_search(&mut self, term: &str) {
        term.clone_into(&mut self.criteria.search);
    }

    pub const fn set_price_range(&mut self, min: Option<Decimal>, max: Option<Decimal>) {
        self.criteria.price = PriceRange::new(min, max);
    }

    pub const fn set_sort(&mut self, sort: SortOrder) {
        self.criteria.sort = sort;
    }

    /// The filtered and sorted items to render. Empty while loading or after
    /// a failed load.
    #[must_use]
    pub fn visible(&self) -> Vec<CatalogItem> {
        self.criteria.apply(self.catalog.items())
    }

    /// Look up an item for the details dialog.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&CatalogItem> {
        self.catalog.find(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use harvest_hearth_core::Price;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogItem::new(ItemId::new(1), "Soup", Price::from_cents(500), "starter")
                .vegetarian(true),
            CatalogItem::new(ItemId::new(2), "Trout", Price::from_cents(2450), "main"),
            CatalogItem::new(ItemId::new(3), "Risotto", Price::from_cents(1900), "main")
                .vegetarian(true),
        ])
    }

    fn ids(items: &[CatalogItem]) -> Vec<i32> {
        items.iter().map(|item| item.id.as_i32()).collect()
    }

    #[test]
    fn test_preferences_seed_criteria() {
        let prefs = UserPreferences {
            dietary_restriction: DietFilter::Vegetarian,
            sort_by: SortOrder::PriceDesc,
        };
        let session = MenuSession::with_catalog(prefs, catalog());
        assert_eq!(ids(&session.visible()), vec![3, 1]);
    }

    #[test]
    fn test_select_category_resets_diet() {
        let mut session = MenuSession::with_catalog(UserPreferences::default(), catalog());
        session.select_diet(DietFilter::Vegetarian);
        session.select_category(CategoryFilter::from("main"));
        assert_eq!(session.criteria().diet, DietFilter::All);
        assert_eq!(ids(&session.visible()), vec![2, 3]);

        session.select_diet(DietFilter::Vegetarian);
        assert_eq!(ids(&session.visible()), vec![3]);
    }

    #[test]
    fn test_search_and_price() {
        let mut session = MenuSession::with_catalog(UserPreferences::default(), catalog());
        session.set_search("o");
        session.set_price_range(Some(Decimal::new(10, 0)), None);
        session.set_sort(SortOrder::PriceAsc);
        assert_eq!(ids(&session.visible()), vec![3, 2]);
    }

    #[test]
    fn test_item_lookup() {
        let session = MenuSession::with_catalog(UserPreferences::default(), catalog());
        assert_eq!(session.item(ItemId::new(2)).unwrap().name, "Trout");
        assert!(session.item(ItemId::new(9)).is_none());
    }

    #[tokio::test]
    async fn test_failed_load_shows_message() {
        let mut session = MenuSession::with_catalog(UserPreferences::default(), catalog());
        session
            .load(&CatalogSource::Path(PathBuf::from("/nonexistent/menu.json")))
            .await;
        assert_eq!(
            session.state(),
            &FetchState::Failed(LOAD_FAILED_MESSAGE.to_owned())
        );
        assert!(session.visible().is_empty());
    }

    #[test]
    fn test_new_session_is_loading_and_empty() {
        let session = MenuSession::new(UserPreferences::default());
        assert_eq!(session.state(), &FetchState::Loading);
        assert!(session.visible().is_empty());
    }
}
