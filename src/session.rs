//! Session state
//!
//! Everything a single shell session owns: the pagination cursor over the
//! location listing, the capture store, and the handles used to fetch data.
//! Only one command runs at a time, so none of this is locked; the cache
//! inside the fetcher is the only state shared with the background reaper.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fetch::Fetcher;
use crate::models::{Creature, LocationPage};

/// Extra range added on top of a creature's base experience when rolling a
/// catch. Keeps every creature catchable.
pub const CATCH_SLACK: u32 = 30;

// == Pagination Cursor ==
/// Position in the location-area listing.
///
/// Empty strings mean "start from the first page" (`next`) and "there is no
/// earlier page" (`previous`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationCursor {
    pub next: String,
    pub previous: String,
}

/// Which way a `map`/`mapb` command walks the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

impl PaginationCursor {
    // == Constructor ==
    /// Creates a cursor that points at the first page in both directions.
    pub fn new() -> Self {
        Self::default()
    }

    // == Target ==
    /// URL to fetch for a step in `direction`, falling back to the first page.
    pub fn target(&self, direction: PageDirection, first_page_url: &str) -> String {
        let link = match direction {
            PageDirection::Forward => &self.next,
            PageDirection::Backward => &self.previous,
        };
        if link.is_empty() {
            first_page_url.to_string()
        } else {
            link.clone()
        }
    }

    // == Advance ==
    /// Records the links of a freshly decoded page.
    ///
    /// A missing `next` loops back to the first page, so walking forward
    /// never terminates.
    pub fn advance(&mut self, page: &LocationPage, first_page_url: &str) {
        self.next = page
            .next
            .clone()
            .unwrap_or_else(|| first_page_url.to_string());
        self.previous = page.previous.clone().unwrap_or_default();
    }
}

// == Capture Store ==
/// Creatures caught this session, keyed by their catalog name.
#[derive(Debug, Clone, Default)]
pub struct CaptureStore {
    creatures: BTreeMap<String, Creature>,
}

impl CaptureStore {
    // == Constructor ==
    /// Creates an empty capture store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `creature` under its name, replacing an earlier catch.
    pub fn insert(&mut self, creature: Creature) {
        self.creatures.insert(creature.name.clone(), creature);
    }

    // == Lookup ==
    /// Returns the captured creature stored under its catalog `name`.
    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.creatures.get(name)
    }

    /// Returns true if `name` has been caught.
    pub fn contains(&self, name: &str) -> bool {
        self.creatures.contains_key(name)
    }

    /// Captured names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creatures.keys().map(String::as_str)
    }

    /// Number of distinct creatures caught.
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

// == Catch Roll ==
/// Rolls a uniform integer in `[0, base_experience + CATCH_SLACK)` and
/// reports a catch when the roll reaches `base_experience`.
pub fn attempt_catch<R: Rng + ?Sized>(rng: &mut R, base_experience: u32) -> bool {
    let upper = base_experience.saturating_add(CATCH_SLACK);
    rng.gen_range(0..upper) >= base_experience
}

// == Session ==
/// State threaded through every command.
#[derive(Debug)]
pub struct Session {
    pub cursor: PaginationCursor,
    pub pokedex: CaptureStore,
    pub fetcher: Fetcher,
    pub rng: StdRng,
}

impl Session {
    // == Constructor ==
    /// Fresh session with an entropy-seeded RNG.
    pub fn new(fetcher: Fetcher) -> Self {
        Self::with_rng(fetcher, StdRng::from_entropy())
    }

    /// Session with a caller-supplied RNG, for reproducible catch rolls.
    pub fn with_rng(fetcher: Fetcher, rng: StdRng) -> Self {
        Self {
            cursor: PaginationCursor::new(),
            pokedex: CaptureStore::new(),
            fetcher,
            rng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedResource;

    const FIRST: &str = "http://catalog/location-area";

    fn page(next: Option<&str>, previous: Option<&str>) -> LocationPage {
        LocationPage {
            count: 3,
            next: next.map(str::to_string),
            previous: previous.map(str::to_string),
            results: vec![NamedResource::new("area", "")],
        }
    }

    #[test]
    fn test_fresh_cursor_targets_first_page_both_ways() {
        let cursor = PaginationCursor::new();

        assert_eq!(cursor.target(PageDirection::Forward, FIRST), FIRST);
        assert_eq!(cursor.target(PageDirection::Backward, FIRST), FIRST);
    }

    #[test]
    fn test_advance_follows_links() {
        let mut cursor = PaginationCursor::new();
        cursor.advance(
            &page(Some("http://catalog/location-area?offset=40"), Some(FIRST)),
            FIRST,
        );

        assert_eq!(
            cursor.target(PageDirection::Forward, FIRST),
            "http://catalog/location-area?offset=40"
        );
        assert_eq!(cursor.target(PageDirection::Backward, FIRST), FIRST);
    }

    #[test]
    fn test_last_page_loops_forward_to_first() {
        let mut cursor = PaginationCursor::new();
        cursor.advance(&page(None, Some("http://catalog/location-area?offset=20")), FIRST);

        assert_eq!(cursor.next, FIRST);
        assert_eq!(cursor.previous, "http://catalog/location-area?offset=20");
    }

    #[test]
    fn test_first_page_clears_previous() {
        let mut cursor = PaginationCursor {
            next: "stale".into(),
            previous: "stale".into(),
        };
        cursor.advance(&page(Some("http://catalog/location-area?offset=20"), None), FIRST);

        assert_eq!(cursor.previous, "");
        assert_eq!(cursor.target(PageDirection::Backward, FIRST), FIRST);
    }

    #[test]
    fn test_capture_store_lists_sorted_names() {
        let mut store = CaptureStore::new();
        assert!(store.is_empty());

        for name in ["pidgey", "abra", "zubat"] {
            store.insert(Creature {
                name: name.to_string(),
                ..Creature::default()
            });
        }

        assert_eq!(store.len(), 3);
        assert!(store.contains("abra"));
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["abra", "pidgey", "zubat"]);
    }

    #[test]
    fn test_zero_experience_is_always_caught() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!((0..1_000).all(|_| attempt_catch(&mut rng, 0)));
    }

    #[test]
    fn test_catch_rate_tracks_slack_ratio() {
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 20_000;
        let base_experience = 270;

        let caught = (0..trials)
            .filter(|_| attempt_catch(&mut rng, base_experience))
            .count();

        // Expected 30 / 300 = 0.1
        let rate = caught as f64 / trials as f64;
        assert!((rate - 0.1).abs() < 0.015, "catch rate was {rate}");
    }

    #[test]
    fn test_huge_experience_does_not_overflow() {
        let mut rng = StdRng::seed_from_u64(1);
        let _ = attempt_catch(&mut rng, u32::MAX);
    }
}
