//! Content entities: storylines and the community they take place in.
//!
//! Everything here is plain data loaded once from a content source. Nothing
//! in the engine mutates these values after ingestion.

use serde::{Deserialize, Serialize};

/// Background shown when a scene does not name one.
pub const DEFAULT_SCENE_BACKGROUND: &str = "/placeholder-scene.jpg";

/// A branching narrative: the unit of playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storyline {
    /// Storyline identifier, e.g. `healthcare_access`.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short description shown before playback.
    #[serde(default)]
    pub description: String,
    /// Characters involved in the storyline.
    #[serde(default)]
    pub character_ids: Vec<String>,
    /// Locations the storyline visits.
    #[serde(default)]
    pub location_ids: Vec<String>,
    /// Chapters in playback order.
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    /// What a reader should take away from the storyline.
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An ordered group of scenes within a storyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Chapter description.
    #[serde(default)]
    pub description: String,
    /// Scenes in playback order.
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

/// An ordered group of dialogue lines sharing one background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene identifier.
    pub id: String,
    /// Location the scene is set in.
    #[serde(default)]
    pub location_id: String,
    /// Characters present in the scene.
    #[serde(default)]
    pub character_ids: Vec<String>,
    /// Background image reference.
    #[serde(default)]
    pub background_image: String,
    /// Dialogue lines in playback order.
    #[serde(default)]
    pub dialogue: Vec<DialogueLine>,
}

impl Scene {
    /// Returns the background image, or [`DEFAULT_SCENE_BACKGROUND`] when the
    /// scene does not name one.
    #[must_use]
    pub fn background_or_default(&self) -> &str {
        if self.background_image.trim().is_empty() {
            DEFAULT_SCENE_BACKGROUND
        } else {
            &self.background_image
        }
    }
}

/// One unit of displayed speech, optionally ending in a set of choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueLine {
    /// Identifier of the speaking character.
    pub speaker_id: String,
    /// Line text. May carry inline Markdown.
    pub text: String,
    /// Choices offered at this line. Empty for a linear line.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl DialogueLine {
    /// Whether the line offers at least one choice.
    #[must_use]
    pub fn is_branch_point(&self) -> bool {
        !self.choices.is_empty()
    }

    /// Looks up one of this line's choices by identifier.
    #[must_use]
    pub fn choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == choice_id)
    }
}

/// A selectable option at a branch point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Choice identifier, unique within its line.
    pub id: String,
    /// Text shown on the option.
    pub text: String,
    /// What follows from picking this option.
    #[serde(default)]
    pub consequences: String,
    /// Scene the author intended to follow. Carried as data only; playback
    /// always proceeds to the structurally next scene.
    #[serde(default)]
    pub next_scene_id: String,
}

/// A community member who can appear in storylines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Character identifier, also used as a dialogue speaker id.
    pub id: String,
    /// Full display name.
    pub name: String,
    /// Role in the community.
    #[serde(default)]
    pub role: String,
    /// Biography.
    #[serde(default)]
    pub background: String,
    /// Age in years.
    #[serde(default)]
    pub age: u32,
    /// Identifiers of connected characters.
    #[serde(default)]
    pub connections: Vec<String>,
    /// Primary location.
    #[serde(default)]
    pub location_id: String,
    /// Storylines the character takes part in.
    #[serde(default)]
    pub storyline_ids: Vec<String>,
    /// Portrait reference.
    #[serde(default)]
    pub image_url: String,
}

/// Category of a place on the town map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Homes.
    Residential,
    /// Shops, farms and other businesses.
    Business,
    /// Halls, churches and shared spaces.
    Community,
    /// Clinics and health centres.
    Healthcare,
    /// Schools.
    Education,
    /// Parks and sports grounds.
    Recreation,
}

/// A place on the town map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Location identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Location category.
    #[serde(rename = "type")]
    pub kind: LocationKind,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Map position as `[x, z]`.
    #[serde(default)]
    pub coordinates: [f32; 2],
    /// Characters frequently found here.
    #[serde(default)]
    pub character_ids: Vec<String>,
    /// Services offered.
    #[serde(default)]
    pub services: Vec<String>,
    /// Picture reference.
    #[serde(default)]
    pub image_url: String,
    /// Scenes available at this location.
    #[serde(default)]
    pub scene_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(choices: Vec<Choice>) -> DialogueLine {
        DialogueLine {
            speaker_id: "sarah_nurse".to_owned(),
            text: "Morning.".to_owned(),
            choices,
        }
    }

    fn choice(id: &str) -> Choice {
        Choice {
            id: id.to_owned(),
            text: format!("pick {id}"),
            consequences: String::new(),
            next_scene_id: String::new(),
        }
    }

    #[test]
    fn test_line_without_choices_is_linear() {
        assert!(!line(Vec::new()).is_branch_point());
    }

    #[test]
    fn test_line_with_choices_is_branch_point_and_finds_choice() {
        let line = line(vec![choice("a"), choice("b")]);

        assert!(line.is_branch_point());
        assert_eq!(line.choice("b").map(|c| c.text.as_str()), Some("pick b"));
        assert!(line.choice("c").is_none());
    }

    #[test]
    fn test_scene_background_falls_back_when_blank() {
        let scene = Scene {
            id: "scene1".to_owned(),
            location_id: String::new(),
            character_ids: Vec::new(),
            background_image: "  ".to_owned(),
            dialogue: Vec::new(),
        };

        assert_eq!(scene.background_or_default(), DEFAULT_SCENE_BACKGROUND);
    }

    #[test]
    fn test_location_kind_deserializes_from_type_field() {
        let json = serde_json::json!({
            "id": "health_center",
            "name": "Sonivale Community Health Center",
            "type": "healthcare"
        });

        let location: Location = serde_json::from_value(json).unwrap();

        assert_eq!(location.kind, LocationKind::Healthcare);
        assert!(location.services.is_empty());
    }
}
