//! The community catalog: every storyline, character and location loaded
//! from one content source.

use serde::{Deserialize, Serialize};

use super::model::{Character, Location, Storyline};
use super::text::humanize_id;

/// Read-only bundle of community content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityCatalog {
    /// Community members.
    #[serde(default)]
    pub characters: Vec<Character>,
    /// Places on the town map.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Playable storylines.
    #[serde(default)]
    pub storylines: Vec<Storyline>,
    /// Hex SHA-256 of the source text, set at ingestion.
    #[serde(skip)]
    pub version_hash: Option<String>,
}

impl CommunityCatalog {
    /// Looks up a storyline by identifier.
    #[must_use]
    pub fn storyline(&self, storyline_id: &str) -> Option<&Storyline> {
        self.storylines.iter().find(|s| s.id == storyline_id)
    }

    /// Looks up a character by identifier.
    #[must_use]
    pub fn character(&self, character_id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == character_id)
    }

    /// Looks up a location by identifier.
    #[must_use]
    pub fn location(&self, location_id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == location_id)
    }

    /// Characters based at, or listed by, the given location, in catalog order.
    #[must_use]
    pub fn characters_at(&self, location_id: &str) -> Vec<&Character> {
        let listed = self
            .location(location_id)
            .map(|l| l.character_ids.as_slice())
            .unwrap_or_default();
        self.characters
            .iter()
            .filter(|c| c.location_id == location_id || listed.contains(&c.id))
            .collect()
    }

    /// Storylines a character appears in, whichever side records the link.
    #[must_use]
    pub fn storylines_featuring(&self, character_id: &str) -> Vec<&Storyline> {
        let claimed = self
            .character(character_id)
            .map(|c| c.storyline_ids.as_slice())
            .unwrap_or_default();
        self.storylines
            .iter()
            .filter(|s| {
                s.character_ids.iter().any(|id| id == character_id) || claimed.contains(&s.id)
            })
            .collect()
    }

    /// Resolves a character's connections. Unknown ids are skipped.
    #[must_use]
    pub fn connections_of(&self, character_id: &str) -> Vec<&Character> {
        self.character(character_id)
            .map(|c| {
                c.connections
                    .iter()
                    .filter_map(|id| self.character(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Display name for a dialogue speaker: the character's name when the
    /// catalog knows it, otherwise the humanized speaker id.
    #[must_use]
    pub fn speaker_name(&self, speaker_id: &str) -> String {
        self.character(speaker_id)
            .map_or_else(|| humanize_id(speaker_id), |c| c.name.clone())
    }
}
