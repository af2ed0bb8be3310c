//! Per-owner mutual exclusion
//!
//! Mutations of one profile's sub-records (and the display-index counter
//! they draw from) run one at a time; different profiles never block each
//! other.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Async lock registry keyed by ORCID iD.
///
/// An entry lives only while some task holds or waits for it.
#[derive(Debug, Default)]
pub struct OwnerLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl OwnerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to one owner's records
    pub async fn lock(&self, orcid: &str) -> OwnerGuard<'_> {
        let mutex = self
            .locks
            .entry(orcid.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = mutex.lock_owned().await;

        OwnerGuard {
            locks: self,
            orcid: orcid.to_string(),
            guard: Some(guard),
        }
    }

    /// Number of owners currently locked or waited on
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one owner; drops the registry entry when released
/// by its last user
#[derive(Debug)]
pub struct OwnerGuard<'a> {
    locks: &'a OwnerLocks,
    orcid: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for OwnerGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        // Waiters hold their own clone, so a count of one is the map alone.
        self.locks
            .locks
            .remove_if(&self.orcid, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
