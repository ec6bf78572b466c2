//! Course records for the certificate progress page.

use serde::{Deserialize, Serialize};

/// A course in the certificate program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Subject prefix and number, e.g. `WDD 231`.
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub completed: bool,
}
