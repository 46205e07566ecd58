//! Location-area detail with its creature encounters

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::NamedResource;

/// `/location-area/{name}`. Only the encounter creature names are shown;
/// the rest is kept so the cached copy matches what was decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub game_index: u32,
    #[serde(default)]
    pub location: NamedResource,
    #[serde(default)]
    pub encounter_method_rates: Vec<EncounterMethodRate>,
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Names of creatures that can be encountered here, in server order.
    pub fn creature_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|e| e.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterMethodRate {
    pub encounter_method: NamedResource,
    #[serde(default)]
    pub version_details: Vec<EncounterMethodVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterMethodVersion {
    pub rate: u32,
    pub version: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
    #[serde(default)]
    pub version_details: Vec<EncounterVersionDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterVersionDetail {
    #[serde(default)]
    pub max_chance: u32,
    pub version: NamedResource,
    #[serde(default)]
    pub encounter_details: Vec<EncounterDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterDetail {
    #[serde(default)]
    pub chance: u32,
    #[serde(default)]
    pub min_level: u32,
    #[serde(default)]
    pub max_level: u32,
    pub method: NamedResource,
    #[serde(default)]
    pub condition_values: Vec<Value>,
}
