//! Domain events for the Storyline Playback context.

use serde::{Deserialize, Serialize};
use sonivale_core::event::{DomainEvent, EventMetadata};
use uuid::Uuid;

use super::aggregates::Cursor;

/// Event type of [`NarrativeEventKind::DialogueAdvanced`].
pub const DIALOGUE_ADVANCED_EVENT_TYPE: &str = "narrative.dialogue_advanced";
/// Event type of [`NarrativeEventKind::SceneEntered`].
pub const SCENE_ENTERED_EVENT_TYPE: &str = "narrative.scene_entered";
/// Event type of [`NarrativeEventKind::ChapterEntered`].
pub const CHAPTER_ENTERED_EVENT_TYPE: &str = "narrative.chapter_entered";
/// Event type of [`NarrativeEventKind::ChoiceSelected`].
pub const CHOICE_SELECTED_EVENT_TYPE: &str = "narrative.choice_selected";
/// Event type of [`NarrativeEventKind::StorylineCompleted`].
pub const STORYLINE_COMPLETED_EVENT_TYPE: &str = "narrative.storyline_completed";

/// Emitted when playback moves to the next line of the same scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueAdvanced {
    /// The playback session.
    pub session_id: Uuid,
    /// Position after the move.
    pub cursor: Cursor,
}

/// Emitted when playback moves to the next scene of the same chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneEntered {
    /// The playback session.
    pub session_id: Uuid,
    /// Position after the move.
    pub cursor: Cursor,
    /// The scene entered.
    pub scene_id: String,
}

/// Emitted when playback moves to the first scene of the next chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterEntered {
    /// The playback session.
    pub session_id: Uuid,
    /// Position after the move.
    pub cursor: Cursor,
    /// The chapter entered.
    pub chapter_id: String,
}

/// Emitted when a choice is selected at the current line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSelected {
    /// The playback session.
    pub session_id: Uuid,
    /// Position of the line the choice belongs to.
    pub cursor: Cursor,
    /// The selected choice.
    pub choice_id: String,
}

/// Emitted once, when advancing past the final line of the storyline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorylineCompleted {
    /// The playback session.
    pub session_id: Uuid,
    /// The storyline that finished.
    pub storyline_id: String,
}

/// Event payload variants for the Storyline Playback context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NarrativeEventKind {
    /// Moved to the next line.
    DialogueAdvanced(DialogueAdvanced),
    /// Moved to the next scene.
    SceneEntered(SceneEntered),
    /// Moved to the next chapter.
    ChapterEntered(ChapterEntered),
    /// A branch-point choice was selected.
    ChoiceSelected(ChoiceSelected),
    /// The storyline finished.
    StorylineCompleted(StorylineCompleted),
}

/// Domain event envelope for the Storyline Playback context.
#[derive(Debug, Clone)]
pub struct NarrativeEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: NarrativeEventKind,
}

impl NarrativeEventKind {
    /// The event type string for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DialogueAdvanced(_) => DIALOGUE_ADVANCED_EVENT_TYPE,
            Self::SceneEntered(_) => SCENE_ENTERED_EVENT_TYPE,
            Self::ChapterEntered(_) => CHAPTER_ENTERED_EVENT_TYPE,
            Self::ChoiceSelected(_) => CHOICE_SELECTED_EVENT_TYPE,
            Self::StorylineCompleted(_) => STORYLINE_COMPLETED_EVENT_TYPE,
        }
    }
}

impl DomainEvent for NarrativeEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        serde_json::to_value(&self.kind).unwrap_or_default()
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use sonivale_core::clock::Clock;
    use sonivale_test_support::FixedClock;

    use super::*;

    fn event(kind: NarrativeEventKind) -> NarrativeEvent {
        let session_id = Uuid::new_v4();
        NarrativeEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: session_id,
                sequence_number: 1,
                correlation_id: Uuid::new_v4(),
                causation_id: Uuid::new_v4(),
                occurred_at: FixedClock::default().now(),
            },
            kind,
        }
    }

    #[test]
    fn test_choice_selected_payload_carries_choice_id() {
        // Arrange
        let session_id = Uuid::new_v4();
        let event = event(NarrativeEventKind::ChoiceSelected(ChoiceSelected {
            session_id,
            cursor: Cursor {
                chapter_index: 0,
                scene_index: 0,
                dialogue_index: 1,
            },
            choice_id: "suggest_outreach".to_owned(),
        }));

        // Act
        let payload = event.to_payload();

        // Assert
        let body = &payload["ChoiceSelected"];
        assert_eq!(body["choice_id"], "suggest_outreach");
        assert_eq!(body["session_id"], session_id.to_string());
        assert_eq!(body["cursor"]["dialogue_index"], 1);
        assert_eq!(event.event_type(), CHOICE_SELECTED_EVENT_TYPE);
    }

    #[test]
    fn test_storyline_completed_payload_names_storyline() {
        let event = event(NarrativeEventKind::StorylineCompleted(StorylineCompleted {
            session_id: Uuid::new_v4(),
            storyline_id: "healthcare_access".to_owned(),
        }));

        let payload = event.to_payload();

        assert_eq!(
            payload["StorylineCompleted"]["storyline_id"],
            "healthcare_access"
        );
        assert_eq!(event.metadata().event_type, STORYLINE_COMPLETED_EVENT_TYPE);
    }
}
