//! User preferences, visit counter and last-visit tracking.

use core::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use harvest_hearth_core::UserPreferences;

use crate::store::{self, DataStore, keys};

/// Greeting chosen from the time since the previous visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitMessage {
    FirstVisit,
    /// Less than a day since the previous visit.
    SameDay,
    DaysAgo(i64),
}

impl fmt::Display for VisitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstVisit => f.write_str("Welcome! Let us know if you have any questions."),
            Self::SameDay => f.write_str("Back so soon! Awesome!"),
            Self::DaysAgo(1) => f.write_str("You last visited 1 day ago."),
            Self::DaysAgo(days) => write!(f, "You last visited {days} days ago."),
        }
    }
}

/// Preferences and visit bookkeeping over a [`DataStore`].
#[derive(Debug, Clone)]
pub struct PreferencesStore {
    store: DataStore,
}

impl PreferencesStore {
    #[must_use]
    pub const fn new(store: DataStore) -> Self {
        Self { store }
    }

    /// Stored preferences, or `{ all, name }` when unset or malformed.
    #[must_use]
    pub fn get_user_preferences(&self) -> UserPreferences {
        self.store.get_or_default(keys::USER_PREFERENCES)
    }

    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    pub fn save_user_preferences(&self, prefs: &UserPreferences) -> store::Result<()> {
        self.store.set(keys::USER_PREFERENCES, prefs)
    }

    /// Number of recorded visits; 0 when never written.
    #[must_use]
    pub fn get_visit_count(&self) -> u64 {
        self.store.get(keys::VISIT_COUNT, 0)
    }

    /// Count one more visit and return the new total.
    ///
    /// # Errors
    ///
    /// Returns an error if the new count cannot be written.
    pub fn increment_visit_count(&self) -> store::Result<u64> {
        let count = self.get_visit_count().saturating_add(1);
        self.store.set(keys::VISIT_COUNT, &count)?;
        Ok(count)
    }

    /// Compare `now` with the stored last visit, then store `now`.
    ///
    /// An unreadable stored timestamp counts as a first visit. A failure to
    /// store `now` is logged and does not change the returned message.
    pub fn record_visit(&self, now: DateTime<Utc>) -> VisitMessage {
        let previous = self
            .store
            .get_raw(keys::LAST_VISIT)
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .and_then(DateTime::<Utc>::from_timestamp_millis);

        let message = previous.map_or(VisitMessage::FirstVisit, |last| {
            // Clock skew can put the last visit in the future; treat it as today.
            let days = (now - last).max(TimeDelta::zero()).num_days();
            if days == 0 {
                VisitMessage::SameDay
            } else {
                VisitMessage::DaysAgo(days)
            }
        });

        // Losing the timestamp only affects the next message; the store logs it.
        self.store
            .set_raw(keys::LAST_VISIT, &now.timestamp_millis().to_string())
            .ok();
        message
    }
}
