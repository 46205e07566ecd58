//! Cache Module
//!
//! In-memory response cache keyed by resource URL, with time-based eviction
//! performed by a background reaper.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

pub(crate) use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::{CacheStore, ExpiringCache};
