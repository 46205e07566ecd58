//! Cache Entry Module
//!
//! Defines the structure for individual cache entries. An entry only knows
//! when it was created; the owning store decides when it is too old.

use std::time::Duration;

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A cached payload and the time it was inserted.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// Insertion timestamp, never mutated after construction
    pub(crate) created_at: DateTime<Utc>,
    /// The stored payload
    pub(crate) value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub(crate) fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Utc::now(),
            value,
        }
    }

    // == Age ==
    /// Time elapsed since insertion. Clock skew that would make the age
    /// negative yields zero.
    pub(crate) fn age(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.created_at)
            .to_std()
            .unwrap_or_default()
    }

    // == Is Expired ==
    /// Checks if the entry is strictly older than `ttl`.
    pub(crate) fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
