//! Aggregate roots for the Storyline Playback context.

use serde::{Deserialize, Serialize};
use sonivale_content::domain::model::{Chapter, DialogueLine, Scene, Storyline};
use sonivale_core::aggregate::AggregateRoot;
use sonivale_core::clock::Clock;
use sonivale_core::error::DomainError;
use sonivale_core::event::EventMetadata;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::events::{
    ChapterEntered, ChoiceSelected, DialogueAdvanced, NarrativeEvent, NarrativeEventKind,
    SceneEntered, StorylineCompleted,
};

/// Zero-based playback position: chapter, scene within the chapter, and
/// dialogue line within the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor {
    /// Index into the storyline's chapters.
    pub chapter_index: usize,
    /// Index into the current chapter's scenes.
    pub scene_index: usize,
    /// Index into the current scene's dialogue.
    pub dialogue_index: usize,
}

/// What a call to [`StorylinePlayer::advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next line of the same scene.
    NextLine,
    /// Blocked at a branch point until a choice is selected.
    AwaitingChoice,
    /// Moved to the first line of the next scene.
    NextScene,
    /// Moved to the first line of the next chapter.
    NextChapter,
    /// Finished the storyline. Returned once per session.
    Completed,
    /// There is no current line; nothing happened.
    Exhausted,
}

impl AdvanceOutcome {
    /// Whether the call changed the player's position.
    #[must_use]
    pub fn moved(self) -> bool {
        matches!(
            self,
            Self::NextLine | Self::NextScene | Self::NextChapter | Self::Completed
        )
    }
}

/// The content at the player's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurrentView<'a> {
    /// A dialogue line is current.
    Dialogue {
        /// Position of the line.
        cursor: Cursor,
        /// The chapter containing the line.
        chapter: &'a Chapter,
        /// The scene containing the line.
        scene: &'a Scene,
        /// The line itself.
        line: &'a DialogueLine,
    },
    /// No line is addressed: the storyline finished, or playback reached an
    /// empty chapter or scene.
    Complete,
}

/// The aggregate root for one playback session of a storyline.
///
/// The player borrows the storyline and owns only its position.
#[derive(Debug)]
pub struct StorylinePlayer<'a> {
    /// Aggregate identifier (the session id).
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    /// The storyline being played.
    storyline: &'a Storyline,
    /// Current position.
    pub(crate) cursor: Cursor,
    /// Choice selected at the current line, cleared whenever the cursor moves.
    pub(crate) selected_choice_id: Option<String>,
    /// Set once the completion event has been recorded.
    pub(crate) completed: bool,
    /// Events recorded but not yet taken by the caller.
    uncommitted_events: Vec<NarrativeEvent>,
}

impl<'a> StorylinePlayer<'a> {
    /// Starts a session at the first line of `storyline`.
    #[must_use]
    pub fn new(id: Uuid, storyline: &'a Storyline) -> Self {
        Self {
            id,
            version: 0,
            storyline,
            cursor: Cursor::default(),
            selected_choice_id: None,
            completed: false,
            uncommitted_events: Vec::new(),
        }
    }

    /// The storyline being played.
    #[must_use]
    pub fn storyline(&self) -> &'a Storyline {
        self.storyline
    }

    /// Current position.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Choice selected at the current line, if any.
    #[must_use]
    pub fn selected_choice_id(&self) -> Option<&str> {
        self.selected_choice_id.as_deref()
    }

    /// Whether the storyline has finished.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    fn locate(&self, cursor: Cursor) -> Option<(&'a Chapter, &'a Scene, &'a DialogueLine)> {
        let chapter = self.storyline.chapters.get(cursor.chapter_index)?;
        let scene = chapter.scenes.get(cursor.scene_index)?;
        let line = scene.dialogue.get(cursor.dialogue_index)?;
        Some((chapter, scene, line))
    }

    /// Returns the chapter, scene and line at the current position, or
    /// [`CurrentView::Complete`] when no line is addressed.
    #[must_use]
    pub fn current_view(&self) -> CurrentView<'a> {
        match self.locate(self.cursor) {
            Some((chapter, scene, line)) => CurrentView::Dialogue {
                cursor: self.cursor,
                chapter,
                scene,
                line,
            },
            None => CurrentView::Complete,
        }
    }

    /// The current dialogue line, if any.
    #[must_use]
    pub fn current_line(&self) -> Option<&'a DialogueLine> {
        self.locate(self.cursor).map(|(_, _, line)| line)
    }

    /// Whether `advance` is blocked until a choice is selected.
    #[must_use]
    pub fn is_awaiting_choice(&self) -> bool {
        self.locate(self.cursor).is_some_and(|(_, scene, line)| {
            self.cursor.dialogue_index + 1 >= scene.dialogue.len()
                && line.is_branch_point()
                && self.selected_choice_id.is_none()
        })
    }

    /// Moves playback forward by one step.
    ///
    /// Rules apply in order: no current line does nothing; a following line
    /// in the scene is taken next; an unresolved branch point blocks; then
    /// the next scene, then the next chapter; otherwise the storyline
    /// completes. The selected choice never changes the successor.
    pub fn advance(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> AdvanceOutcome {
        let Some((chapter, scene, line)) = self.locate(self.cursor) else {
            debug!(session_id = %self.id, "no current dialogue line, advance ignored");
            return AdvanceOutcome::Exhausted;
        };
        let Cursor {
            chapter_index,
            scene_index,
            dialogue_index,
        } = self.cursor;

        if scene.dialogue.get(dialogue_index + 1).is_some() {
            let cursor = Cursor {
                dialogue_index: dialogue_index + 1,
                ..self.cursor
            };
            self.record(
                correlation_id,
                clock,
                NarrativeEventKind::DialogueAdvanced(DialogueAdvanced {
                    session_id: self.id,
                    cursor,
                }),
            );
            return AdvanceOutcome::NextLine;
        }

        if line.is_branch_point() && self.selected_choice_id.is_none() {
            debug!(session_id = %self.id, "branch point unresolved, awaiting choice");
            return AdvanceOutcome::AwaitingChoice;
        }

        if let Some(next_scene) = chapter.scenes.get(scene_index + 1) {
            let cursor = Cursor {
                chapter_index,
                scene_index: scene_index + 1,
                dialogue_index: 0,
            };
            self.record(
                correlation_id,
                clock,
                NarrativeEventKind::SceneEntered(SceneEntered {
                    session_id: self.id,
                    cursor,
                    scene_id: next_scene.id.clone(),
                }),
            );
            return AdvanceOutcome::NextScene;
        }

        if let Some(next_chapter) = self.storyline.chapters.get(chapter_index + 1) {
            let cursor = Cursor {
                chapter_index: chapter_index + 1,
                scene_index: 0,
                dialogue_index: 0,
            };
            self.record(
                correlation_id,
                clock,
                NarrativeEventKind::ChapterEntered(ChapterEntered {
                    session_id: self.id,
                    cursor,
                    chapter_id: next_chapter.id.clone(),
                }),
            );
            return AdvanceOutcome::NextChapter;
        }

        info!(session_id = %self.id, storyline_id = %self.storyline.id, "storyline completed");
        self.record(
            correlation_id,
            clock,
            NarrativeEventKind::StorylineCompleted(StorylineCompleted {
                session_id: self.id,
                storyline_id: self.storyline.id.clone(),
            }),
        );
        AdvanceOutcome::Completed
    }

    /// Selects one of the current line's choices. Does not advance.
    ///
    /// Selecting again replaces the earlier selection.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidChoice` if the current line does not offer
    /// `choice_id`; the player's state is left unchanged.
    pub fn choose_option(
        &mut self,
        choice_id: &str,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let Some(choice) = self.current_line().and_then(|line| line.choice(choice_id)) else {
            warn!(session_id = %self.id, choice_id, "choice not offered at current line");
            return Err(DomainError::InvalidChoice {
                choice_id: choice_id.to_owned(),
            });
        };

        self.record(
            correlation_id,
            clock,
            NarrativeEventKind::ChoiceSelected(ChoiceSelected {
                session_id: self.id,
                cursor: self.cursor,
                choice_id: choice.id.clone(),
            }),
        );
        Ok(())
    }

    /// Wraps `kind` in metadata, applies it, and buffers it as uncommitted.
    fn record(&mut self, correlation_id: Uuid, clock: &dyn Clock, kind: NarrativeEventKind) {
        let event = NarrativeEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.version + 1,
                correlation_id,
                causation_id: correlation_id,
                occurred_at: clock.now(),
            },
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }
}

impl AggregateRoot for StorylinePlayer<'_> {
    type Event = NarrativeEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match &event.kind {
            NarrativeEventKind::DialogueAdvanced(DialogueAdvanced { cursor, .. })
            | NarrativeEventKind::SceneEntered(SceneEntered { cursor, .. })
            | NarrativeEventKind::ChapterEntered(ChapterEntered { cursor, .. }) => {
                self.cursor = *cursor;
                self.selected_choice_id = None;
            }
            NarrativeEventKind::ChoiceSelected(payload) => {
                self.selected_choice_id = Some(payload.choice_id.clone());
            }
            NarrativeEventKind::StorylineCompleted(_) => {
                self.cursor = Cursor {
                    chapter_index: self.storyline.chapters.len(),
                    scene_index: 0,
                    dialogue_index: 0,
                };
                self.selected_choice_id = None;
                self.completed = true;
            }
        }
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
