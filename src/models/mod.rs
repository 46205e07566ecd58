//! Catalog resource shapes
//!
//! Serde types for the three resources the shell reads. Each one
//! round-trips through JSON unchanged, which is what lets the cache store
//! the re-serialized decode instead of the raw response body.

mod creature;
mod encounter;
mod location;

use serde::{Deserialize, Serialize};

pub use creature::{Creature, CreatureStat, CreatureType};
pub use encounter::{
    EncounterDetail, EncounterMethodRate, EncounterMethodVersion, EncounterVersionDetail,
    LocalizedName, LocationArea, PokemonEncounter,
};
pub use location::LocationPage;

/// A `{name, url}` reference to another catalog resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
