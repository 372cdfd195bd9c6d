//! Character Record - The entity rendered by the card
//!
//! Field names follow the JSON shape produced by the embedding application
//! (`locationName`, `firstEpisodeName`, `type`). Display strings that are
//! absent from the input deserialize to empty strings so the card can still
//! render them as empty text.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CardResult;
use crate::types::CharacterStatus;

/// Numeric identifier of a character
pub type CharacterId = u64;

/// A character record, supplied wholesale by the caller on every render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Numeric identifier
    pub id: CharacterId,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Free-text status ("Alive", "Dead", "unknown", ...)
    #[serde(default)]
    pub status: String,

    /// Species, shown next to the status
    #[serde(default)]
    pub species: String,

    /// Sub-type or variant description
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Gender as reported upstream, free text and not shown on the card
    #[serde(default)]
    pub gender: String,

    /// Name of the origin location
    #[serde(default)]
    pub origin: String,

    /// Image URL, used verbatim as the image source
    #[serde(default)]
    pub image: String,

    /// Last known location name
    #[serde(default)]
    pub location_name: String,

    /// Name of the episode the character first appeared in
    #[serde(default)]
    pub first_episode_name: String,

    /// Canonical URL of the record
    #[serde(default)]
    pub url: String,

    /// When the record was created upstream
    pub created: DateTime<Utc>,
}

impl Character {
    /// Parse a record from a JSON document
    pub fn from_json_str(json: &str) -> CardResult<Self> {
        let character: Character = serde_json::from_str(json)?;
        tracing::debug!(id = character.id, name = %character.name, "Parsed character record");
        Ok(character)
    }

    /// Read and parse a record from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let character = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), id = character.id, "Loaded character record");
        Ok(character)
    }

    /// Status category used for the indicator color
    pub fn status_kind(&self) -> CharacterStatus {
        CharacterStatus::parse(&self.status)
    }

    /// The "{status} - {species}" line shown above the name
    pub fn status_species(&self) -> String {
        format!("{} - {}", self.status, self.species)
    }
}
