//! Commands for the Storyline Playback context.

use sonivale_core::command::Command;
use uuid::Uuid;

/// Command to move playback forward by one step.
#[derive(Debug, Clone)]
pub struct AdvanceDialogue {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The playback session to advance.
    pub session_id: Uuid,
}

impl Command for AdvanceDialogue {
    fn command_type(&self) -> &'static str {
        "narrative.advance_dialogue"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to select a choice at the current dialogue line.
#[derive(Debug, Clone)]
pub struct ChooseOption {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The playback session the choice belongs to.
    pub session_id: Uuid,
    /// The choice to select.
    pub choice_id: String,
}

impl Command for ChooseOption {
    fn command_type(&self) -> &'static str {
        "narrative.choose_option"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
