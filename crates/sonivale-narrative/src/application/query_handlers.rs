//! Query handlers for the Storyline Playback context.
//!
//! Turns a player's position into a read-only view DTO for presentation
//! layers.

use serde::Serialize;
use sonivale_content::domain::catalog::CommunityCatalog;
use sonivale_content::domain::text::{humanize_id, to_plain_text};
use uuid::Uuid;

use crate::domain::aggregates::{CurrentView, StorylinePlayer};

/// One-based progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressView {
    /// Current chapter number.
    pub chapter: usize,
    /// Number of chapters in the storyline.
    pub chapter_count: usize,
    /// Current scene number within the chapter.
    pub scene: usize,
    /// Number of scenes in the chapter.
    pub scene_count: usize,
    /// Current line number within the scene.
    pub dialogue: usize,
    /// Number of lines in the scene.
    pub dialogue_count: usize,
}

/// A choice as shown at a branch point.
#[derive(Debug, Serialize)]
pub struct ChoiceView {
    /// The choice identifier.
    pub choice_id: String,
    /// Option text.
    pub text: String,
    /// What follows from the choice.
    pub consequences: String,
    /// Whether this is the selected choice.
    pub selected: bool,
}

/// The current dialogue line, ready to display.
#[derive(Debug, Serialize)]
pub struct DialogueLineView {
    /// Title of the current chapter.
    pub chapter_title: String,
    /// Scene background, with the placeholder substituted when blank.
    pub background_image: String,
    /// Location of the current scene.
    pub location_id: String,
    /// Identifier of the speaker.
    pub speaker_id: String,
    /// Display name of the speaker.
    pub speaker_name: String,
    /// Line text with markup removed.
    pub text: String,
    /// Choices offered at this line.
    pub choices: Vec<ChoiceView>,
    /// Whether advancing is blocked until a choice is selected.
    pub awaiting_choice: bool,
    /// Position within the storyline.
    pub progress: ProgressView,
}

/// Read-only view of a playback session.
#[derive(Debug, Serialize)]
pub struct PlayerView {
    /// The session identifier.
    pub session_id: Uuid,
    /// The storyline identifier.
    pub storyline_id: String,
    /// The storyline title.
    pub storyline_title: String,
    /// Whether the storyline has finished.
    pub completed: bool,
    /// The current line, absent when nothing is left to show.
    pub current: Option<DialogueLineView>,
}

/// Builds the view of a playback session.
///
/// When a catalog is supplied, speakers are named after their character;
/// otherwise the humanized speaker id is shown.
#[must_use]
pub fn get_player_view(
    player: &StorylinePlayer<'_>,
    catalog: Option<&CommunityCatalog>,
) -> PlayerView {
    let storyline = player.storyline();
    let current = match player.current_view() {
        CurrentView::Dialogue {
            cursor,
            chapter,
            scene,
            line,
        } => {
            let selected = player.selected_choice_id();
            Some(DialogueLineView {
                chapter_title: chapter.title.clone(),
                background_image: scene.background_or_default().to_owned(),
                location_id: scene.location_id.clone(),
                speaker_id: line.speaker_id.clone(),
                speaker_name: catalog.map_or_else(
                    || humanize_id(&line.speaker_id),
                    |c| c.speaker_name(&line.speaker_id),
                ),
                text: to_plain_text(&line.text),
                choices: line
                    .choices
                    .iter()
                    .map(|choice| ChoiceView {
                        choice_id: choice.id.clone(),
                        text: choice.text.clone(),
                        consequences: choice.consequences.clone(),
                        selected: selected == Some(choice.id.as_str()),
                    })
                    .collect(),
                awaiting_choice: player.is_awaiting_choice(),
                progress: ProgressView {
                    chapter: cursor.chapter_index + 1,
                    chapter_count: storyline.chapters.len(),
                    scene: cursor.scene_index + 1,
                    scene_count: chapter.scenes.len(),
                    dialogue: cursor.dialogue_index + 1,
                    dialogue_count: scene.dialogue.len(),
                },
            })
        }
        CurrentView::Complete => None,
    };

    PlayerView {
        session_id: player.id,
        storyline_id: storyline.id.clone(),
        storyline_title: storyline.title.clone(),
        completed: player.is_completed(),
        current,
    }
}
