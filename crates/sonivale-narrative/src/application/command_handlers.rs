//! Command handlers for the Storyline Playback context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: check the session, execute the command on the
//! player, and hand the produced events back to the caller.

use sonivale_core::aggregate::AggregateRoot;
use sonivale_core::clock::Clock;
use sonivale_core::command::Command;
use sonivale_core::error::DomainError;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::aggregates::{AdvanceOutcome, StorylinePlayer};
use crate::domain::commands::{AdvanceDialogue, ChooseOption};
use crate::domain::events::NarrativeEvent;

/// Result of a handled `AdvanceDialogue` command.
#[derive(Debug)]
pub struct AdvanceResult {
    /// What the advance did.
    pub outcome: AdvanceOutcome,
    /// Events produced, empty when playback did not move.
    pub events: Vec<NarrativeEvent>,
}

fn ensure_session(player: &StorylinePlayer<'_>, session_id: Uuid) -> Result<(), DomainError> {
    if player.aggregate_id() == session_id {
        Ok(())
    } else {
        Err(DomainError::SessionNotFound(session_id))
    }
}

fn take_uncommitted(player: &mut StorylinePlayer<'_>) -> Vec<NarrativeEvent> {
    let events = player.uncommitted_events().to_vec();
    player.clear_uncommitted_events();
    events
}

/// Handles the `AdvanceDialogue` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the command addresses another
/// session.
#[instrument(
    skip_all,
    fields(session_id = %command.session_id, correlation_id = %command.correlation_id)
)]
pub fn handle_advance_dialogue(
    command: &AdvanceDialogue,
    player: &mut StorylinePlayer<'_>,
    clock: &dyn Clock,
) -> Result<AdvanceResult, DomainError> {
    ensure_session(player, command.session_id)?;

    let outcome = player.advance(command.correlation_id(), clock);
    let events = take_uncommitted(player);

    info!(
        command_type = command.command_type(),
        ?outcome,
        events = events.len(),
        "handled command"
    );

    Ok(AdvanceResult { outcome, events })
}

/// Handles the `ChooseOption` command.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the command addresses another
/// session, or `DomainError::InvalidChoice` if the current line does not
/// offer the choice.
#[instrument(
    skip_all,
    fields(
        session_id = %command.session_id,
        correlation_id = %command.correlation_id,
        choice_id = %command.choice_id
    )
)]
pub fn handle_choose_option(
    command: &ChooseOption,
    player: &mut StorylinePlayer<'_>,
    clock: &dyn Clock,
) -> Result<Vec<NarrativeEvent>, DomainError> {
    ensure_session(player, command.session_id)?;

    player.choose_option(&command.choice_id, command.correlation_id(), clock)?;
    let events = take_uncommitted(player);

    info!(
        command_type = command.command_type(),
        events = events.len(),
        "handled command"
    );

    Ok(events)
}
