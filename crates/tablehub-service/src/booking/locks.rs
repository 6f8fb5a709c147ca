//! Per-date write serialization.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of one async mutex per calendar date.
///
/// Holding the guard for a date excludes every other holder for the same
/// date in this process. Different dates never contend.
#[derive(Debug, Default)]
pub struct DateLocks {
    /// Date → lock.
    locks: DashMap<NaiveDate, Arc<Mutex<()>>>,
}

impl DateLocks {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for and take the lock for `date`.
    pub async fn lock(&self, date: NaiveDate) -> OwnedMutexGuard<()> {
        let lock = self.locks.entry(date).or_default().clone();
        lock.lock_owned().await
    }

    /// Drop idle locks for dates before `date`.
    pub fn prune_before(&self, date: NaiveDate) {
        self.locks
            .retain(|d, lock| *d >= date || Arc::strong_count(lock) > 1);
    }

    /// Number of dates with a registered lock.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
