//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the add/get/reap contract over arbitrary keys and payloads.

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const LONG_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates URL-shaped cache keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,24}".prop_map(|s| format!("https://pokeapi.co/api/v2/pokemon/{}", s))
}

/// Generates arbitrary byte payloads, including empty ones
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Storing a payload and reading it back before the TTL returns the same bytes.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(LONG_TTL);

        store.add(key.clone(), value.clone());

        prop_assert_eq!(store.get(&key), Some(value));
    }

    // A second add for the same key replaces the first.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(LONG_TTL);

        store.add(key.clone(), value1);
        store.add(key.clone(), value2.clone());

        prop_assert_eq!(store.get(&key), Some(value2));
        prop_assert_eq!(store.len(), 1);
    }

    // Any interleaving of adds and gets behaves like a plain map when nothing
    // has expired, and the counters match what happened.
    #[test]
    fn prop_matches_model_map(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(LONG_TTL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;
        let mut expected_inserts = 0u64;

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.add(key.clone(), value.clone());
                    model.insert(key, value);
                    expected_inserts += 1;
                }
                CacheOp::Get { key } => {
                    let got = store.get(&key);
                    match model.get(&key) {
                        Some(v) => {
                            expected_hits += 1;
                            prop_assert_eq!(got.as_ref(), Some(v));
                        }
                        None => {
                            expected_misses += 1;
                            prop_assert!(got.is_none());
                        }
                    }
                }
            }
        }

        prop_assert_eq!(store.reap_expired(), 0, "nothing is old enough to reap");

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.inserts, expected_inserts);
        prop_assert_eq!(stats.total_entries, model.len());
    }
}

// Separate proptest block with fewer cases for time-sensitive tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Once an entry is older than the TTL, a reap pass removes every one of them.
    #[test]
    fn prop_reap_removes_all_expired(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..20)
    ) {
        let ttl = Duration::from_millis(30);
        let mut store = CacheStore::new(ttl);

        for (key, value) in &entries {
            store.add(key.clone(), value.clone());
        }

        // Live entries survive a reap
        prop_assert_eq!(store.reap_expired(), 0);

        sleep(Duration::from_millis(60));

        prop_assert_eq!(store.reap_expired(), entries.len());
        for key in entries.keys() {
            prop_assert!(store.get(key).is_none(), "{} should have been reaped", key);
        }
        prop_assert!(store.is_empty());
    }
}
