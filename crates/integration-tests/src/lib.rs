//! Integration tests for Harvest & Hearth.
//!
//! Scenario tests live under `tests/` and drive the client crate end to end
//! against real files: a [`FileStore`] in a temp directory and the sample
//! data under the workspace `data/` directory.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p harvest-hearth-integration-tests
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use tempfile::TempDir;

use harvest_hearth_client::clock::{FixedClock, SequentialLineIds};
use harvest_hearth_client::orders::OrderManager;
use harvest_hearth_client::{DataStore, FileStore};

/// Path to a file in the workspace `data/` directory.
#[must_use]
pub fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data")
        .join(name)
}

/// A fixed instant used by tests that need a clock.
///
/// # Panics
///
/// Never; the timestamp is valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 18, 30, 0).unwrap()
}

/// A file-backed store in its own temp directory.
pub struct TestStore {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestStore {
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("storage.json");
        Self { dir, path }
    }

    /// Open (or reopen) the store file, as a fresh page load would.
    ///
    /// # Panics
    ///
    /// Panics if the store file cannot be opened.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn open(&self, quota: Option<usize>) -> DataStore {
        let file = FileStore::open(self.path.clone(), quota).expect("Failed to open store");
        DataStore::new(Arc::new(file))
    }

    /// An order manager with a fixed clock and sequential line IDs.
    #[must_use]
    pub fn orders(&self) -> OrderManager {
        OrderManager::with_sources(
            self.open(None),
            Arc::new(FixedClock(test_now())),
            Arc::new(SequentialLineIds::new()),
        )
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
