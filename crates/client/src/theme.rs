//! Persisted dark/light theme.
//!
//! The theme is stored raw (`dark` or `light`, not JSON) under
//! [`keys::THEME`](crate::store::keys::THEME). With nothing stored, the host's
//! colour-scheme preference decides.

use harvest_hearth_core::Theme;

use crate::store::{self, DataStore, keys};

/// Theme selection over a [`DataStore`].
#[derive(Debug, Clone)]
pub struct ThemeManager {
    store: DataStore,
    current: Theme,
}

impl ThemeManager {
    /// Resolve the starting theme: the stored value if any, otherwise dark
    /// when the host prefers dark. The result is written back so the choice
    /// sticks.
    #[must_use]
    pub fn initialize(store: DataStore, system_prefers_dark: bool) -> Self {
        let theme = store.get_raw(keys::THEME).map_or_else(
            || {
                if system_prefers_dark {
                    Theme::Dark
                } else {
                    Theme::Light
                }
            },
            |stored| Theme::from_stored(&stored),
        );

        let mut manager = Self {
            store,
            current: theme,
        };
        // A failed write leaves the theme applied for this session only;
        // the store has already logged it.
        manager.set_theme(theme).ok();
        manager
    }

    /// The active theme.
    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Apply and persist `theme`.
    ///
    /// The theme is applied even when persisting fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the theme cannot be stored.
    pub fn set_theme(&mut self, theme: Theme) -> store::Result<()> {
        self.current = theme;
        self.store.set_raw(keys::THEME, theme.as_str())
    }

    /// Switch to the other theme and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the new theme cannot be stored.
    pub fn toggle(&mut self) -> store::Result<Theme> {
        let next = self.current.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}
