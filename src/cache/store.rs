//! Cache Store Module
//!
//! HashMap storage with time-based eviction. Reads never check age; entries
//! disappear only when `reap_expired` runs.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Unsynchronized cache storage. Wrap it in [`ExpiringCache`] to share it.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage, keyed by resource URL
    entries: HashMap<String, CacheEntry>,
    /// Usage counters
    stats: CacheStats,
    /// Maximum age before an entry is reaped
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or overwrites `key`, stamping the entry with the current time.
    pub fn add(&mut self, key: impl Into<String>, value: Vec<u8>) {
        let key = key.into();
        debug!(key = %key, bytes = value.len(), "adding cache entry");
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.record_insert();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the stored payload if the key has not been reaped.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                debug!(key, "cache hit");
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                debug!(key, "cache miss");
                None
            }
        }
    }

    // == Reap Expired ==
    /// Removes every entry older than the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();

        self.entries.retain(|key, entry| {
            let keep = !entry.is_expired(ttl);
            if !keep {
                debug!(key = %key, "reaping expired cache entry");
            }
            keep
        });

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Accessors ==
    /// Maximum age before an entry is reaped.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries currently stored, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Expiring Cache ==
/// Cloneable handle to a [`CacheStore`] behind one exclusive lock.
///
/// `add`, `get` and the reaper's sweep all take the same lock, so nobody
/// observes a half-updated map.
#[derive(Debug, Clone)]
pub struct ExpiringCache {
    inner: Arc<Mutex<CacheStore>>,
    ttl: Duration,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty shared cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheStore::new(ttl))),
            ttl,
        }
    }

    // == Add ==
    /// Inserts or overwrites `key` with a fresh timestamp.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        self.inner.lock().await.add(key, value);
    }

    // == Get ==
    /// Returns the payload for `key`, or `None` if absent or already reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.lock().await.get(key)
    }

    // == Reap Expired ==
    /// Runs one reap pass. Called by the background reaper.
    pub async fn reap_expired(&self) -> usize {
        self.inner.lock().await.reap_expired()
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    /// Number of entries currently stored.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// Entry lifetime, also used as the reap period.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
