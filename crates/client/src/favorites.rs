//! Persisted favorites.
//!
//! Favorites are a set of catalog item copies keyed by item ID, stored as a
//! JSON array under [`keys::FAVORITES`](crate::store::keys::FAVORITES).

use harvest_hearth_core::{CatalogItem, FavoriteEntry, ItemId};

use crate::store::{self, DataStore, keys};

/// Outcome of [`FavoritesManager::save_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added,
    /// The item was already a favorite; nothing was written.
    AlreadyPresent,
}

/// Outcome of [`FavoritesManager::toggle_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

impl FavoriteToggle {
    /// Confirmation message shown after the toggle.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Added => "Added to favorites!",
            Self::Removed => "Removed from favorites!",
        }
    }
}

/// Favorites operations over a [`DataStore`].
#[derive(Debug, Clone)]
pub struct FavoritesManager {
    store: DataStore,
}

impl FavoritesManager {
    #[must_use]
    pub const fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// All favorites in the order they were saved.
    #[must_use]
    pub fn get_favorites(&self) -> Vec<FavoriteEntry> {
        self.store.get_or_default(keys::FAVORITES)
    }

    /// Whether `item_id` is a favorite.
    #[must_use]
    pub fn is_favorited(&self, item_id: ItemId) -> bool {
        self.get_favorites().iter().any(|fav| fav.id == item_id)
    }

    /// Save a copy of `item` unless its ID is already a favorite.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated favorites cannot be written.
    pub fn save_favorite(&self, item: &CatalogItem) -> store::Result<FavoriteOutcome> {
        let mut favorites = self.get_favorites();
        if favorites.iter().any(|fav| fav.id == item.id) {
            return Ok(FavoriteOutcome::AlreadyPresent);
        }
        favorites.push(item.clone());
        self.store.set(keys::FAVORITES, &favorites)?;
        Ok(FavoriteOutcome::Added)
    }

    /// Remove `item_id` from the favorites. Absent IDs are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated favorites cannot be written.
    pub fn remove_favorite(&self, item_id: ItemId) -> store::Result<()> {
        let favorites: Vec<FavoriteEntry> = self
            .get_favorites()
            .into_iter()
            .filter(|fav| fav.id != item_id)
            .collect();
        self.store.set(keys::FAVORITES, &favorites)
    }

    /// Add `item` if it is not a favorite, otherwise remove it.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated favorites cannot be written.
    pub fn toggle_favorite(&self, item: &CatalogItem) -> store::Result<FavoriteToggle> {
        match self.save_favorite(item)? {
            FavoriteOutcome::Added => Ok(FavoriteToggle::Added),
            FavoriteOutcome::AlreadyPresent => {
                self.remove_favorite(item.id)?;
                Ok(FavoriteToggle::Removed)
            }
        }
    }

    /// Replace the favorites with an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    pub fn clear_favorites(&self) -> store::Result<()> {
        self.store.set(keys::FAVORITES, &Vec::<FavoriteEntry>::new())
    }
}
