//! Creature detail

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::NamedResource;

/// `/pokemon/{name-or-id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    /// The catalog sends `null` for some forms; treated as zero.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    #[serde(default)]
    pub stats: Vec<CreatureStat>,
    #[serde(default)]
    pub types: Vec<CreatureType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Height: {}", self.height)?;
        writeln!(f, "Weight: {}", self.weight)?;
        writeln!(f, "Stats:")?;
        for stat in &self.stats {
            writeln!(f, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        write!(f, "Types:")?;
        for kind in &self.types {
            write!(f, "\n  - {}", kind.kind.name)?;
        }
        Ok(())
    }
}
