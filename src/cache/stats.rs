//! Cache Statistics Module
//!
//! Tracks lookups, inserts and reaped entries.

use std::fmt;

// == Cache Stats ==
/// Counters describing how the cache has been used this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Calls to `add`, including overwrites
    pub inserts: u64,
    /// Entries removed by the reaper
    pub reaped: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    pub fn record_reaped(&mut self, count: usize) {
        self.reaped += count as u64;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cache entries: {}", self.total_entries)?;
        writeln!(f, "  hits: {}", self.hits)?;
        writeln!(f, "  misses: {}", self.misses)?;
        writeln!(f, "  inserts: {}", self.inserts)?;
        writeln!(f, "  reaped: {}", self.reaped)?;
        write!(f, "  hit rate: {:.1}%", self.hit_rate() * 100.0)
    }
}
