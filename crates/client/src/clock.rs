//! Injected time and identifier sources.
//!
//! Order lines are stamped with the current time and a fresh line ID. Both
//! come through these traits so tests can pin them.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use harvest_hearth_core::LineId;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of order line identifiers.
pub trait LineIdGenerator: Send + Sync {
    fn next_id(&self) -> LineId;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidLineIds;

impl LineIdGenerator for UuidLineIds {
    fn next_id(&self) -> LineId {
        LineId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Monotonic counter starting at 1: `line-1`, `line-2`, ...
#[derive(Debug, Default)]
pub struct SequentialLineIds {
    next: AtomicU64,
}

impl SequentialLineIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineIdGenerator for SequentialLineIds {
    fn next_id(&self) -> LineId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        LineId::new(format!("line-{n}"))
    }
}
