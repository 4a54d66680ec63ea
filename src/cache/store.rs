//! In-memory store for raw API response bodies
//!
//! Entries are keyed by the full request URL and hold the untouched wire bytes,
//! so a single entry can be decoded into whichever shape the caller asks for.
//! Reads never look at an entry's age; eviction is the reaper's job.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cached response body and the moment it was stored
#[derive(Debug, Clone)]
struct CacheEntry {
    /// When the entry was (last) written
    created_at: DateTime<Utc>,
    /// Raw response body
    value: Vec<u8>,
}

/// Concurrency-safe map of URL to response body
///
/// Cloning a `Cache` is cheap and yields a handle onto the same entries, which
/// is how the [`Reaper`](super::Reaper) and the client share it.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl Cache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous entry wholesale
    pub fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let entry = CacheEntry {
            created_at: Utc::now(),
            value: value.into(),
        };
        self.write().insert(key.into(), entry);
    }

    /// Returns a copy of the body stored under `key`, whatever its age
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.read().get(key).map(|entry| entry.value.clone())
    }

    /// Drops the entry for `key`, returning whether one was present
    pub fn remove(&self, key: &str) -> bool {
        self.write().remove(key).is_some()
    }

    /// Returns when the entry for `key` was stored
    pub fn created_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.read().get(key).map(|entry| entry.created_at)
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Deletes every entry older than `max_age` and returns how many were removed
    pub fn reap(&self, max_age: std::time::Duration) -> usize {
        let max_age = Duration::from_std(max_age).unwrap_or(Duration::MAX);
        let cutoff = Utc::now()
            .checked_sub_signed(max_age)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);
        self.reap_before(cutoff)
    }

    /// Deletes every entry created strictly before `cutoff`
    ///
    /// Holds the write lock for the whole scan.
    pub fn reap_before(&self, cutoff: DateTime<Utc>) -> usize {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|_, entry| entry.created_at >= cutoff);
        before - entries.len()
    }

    // A panic while holding the lock cannot leave a half-written entry behind
    // (inserts and removals are single map operations), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
