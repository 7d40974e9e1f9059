//! Per-date serialization of admission decisions.
//!
//! Capacity is checked by reading the day's occupancy and then writing the
//! booking. Two requests touching the same day must not interleave between
//! the read and the write, otherwise both can pass the check and overbook
//! the day. Holding the date's lock across read and write prevents that
//! within one process; separate server processes sharing a database are
//! not covered.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// One async mutex per booking date, created on first use.
#[derive(Debug, Clone, Default)]
pub struct AdmissionLocks {
    inner: Arc<DashMap<NaiveDate, Arc<Mutex<()>>>>,
}

impl AdmissionLocks {
    /// Creates an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive admission rights on `date`.
    pub async fn acquire(&self, date: NaiveDate) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the DashMap shard is not held across the await.
        let lock = self.inner.entry(date).or_default().clone();
        lock.lock_owned().await
    }

    /// Waits for exclusive rights on every date in `dates`.
    ///
    /// Locks are taken in ascending date order, duplicates once, so two
    /// callers asking for overlapping sets cannot deadlock.
    pub async fn acquire_all(
        &self,
        dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Vec<OwnedMutexGuard<()>> {
        let mut dates: Vec<NaiveDate> = dates.into_iter().collect();
        dates.sort_unstable();
        dates.dedup();

        let mut guards = Vec::with_capacity(dates.len());
        for date in dates {
            guards.push(self.acquire(date).await);
        }
        guards
    }

    /// Drops every lock entry nobody holds or waits on.
    ///
    /// An entry in use has its `Arc` cloned out by `acquire`, and the
    /// clone happens under the shard lock `retain` also takes, so a
    /// removed entry can never be one a caller is about to lock.
    pub fn prune_idle(&self) {
        self.inner.retain(|_, lock| Arc::strong_count(lock) > 1);
    }

    /// Number of dates with a lock entry.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether no date has a lock entry.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
