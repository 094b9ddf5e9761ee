//! The interactive playback loop.

use std::io::{BufRead, Write};

use sonivale_content::application::query_handlers::{character_profile, location_directory};
use sonivale_content::domain::catalog::CommunityCatalog;
use sonivale_content::domain::model::Storyline;
use sonivale_core::clock::Clock;
use sonivale_core::error::DomainError;
use sonivale_core::event::DomainEvent;
use sonivale_narrative::application::command_handlers::{
    handle_advance_dialogue, handle_choose_option,
};
use sonivale_narrative::application::query_handlers::get_player_view;
use sonivale_narrative::domain::aggregates::{AdvanceOutcome, StorylinePlayer};
use sonivale_narrative::domain::commands::{AdvanceDialogue, ChooseOption};
use sonivale_narrative::domain::events::NarrativeEvent;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::AppError;
use crate::render::{render_directory, render_profile, render_view};

/// How a playback loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    /// Whether the storyline reached its end.
    pub completed: bool,
    /// Number of domain events produced.
    pub events: usize,
}

#[derive(Debug, PartialEq, Eq)]
enum Input<'l> {
    Advance,
    Quit,
    Who,
    Where,
    Choose(&'l str),
}

fn parse_input(raw: &str) -> Input<'_> {
    match raw.trim() {
        "" | "n" | "next" => Input::Advance,
        "q" | "quit" => Input::Quit,
        "who" => Input::Who,
        "where" => Input::Where,
        other => Input::Choose(other),
    }
}

/// Logs each produced event with its payload and returns how many there were.
fn log_events(events: &[NarrativeEvent]) -> usize {
    for event in events {
        debug!(
            event_type = event.event_type(),
            sequence_number = event.metadata().sequence_number,
            payload = %event.to_payload(),
            "event recorded"
        );
    }
    events.len()
}

/// Picks the storyline to play: `storyline_id` if given, else the first.
///
/// # Errors
///
/// Returns `DomainError::StorylineNotFound` for an unknown id, or
/// `AppError::Config` if the catalog has no storylines at all.
pub fn select_storyline<'c>(
    catalog: &'c CommunityCatalog,
    storyline_id: Option<&str>,
) -> Result<&'c Storyline, AppError> {
    match storyline_id {
        Some(id) => catalog
            .storyline(id)
            .ok_or_else(|| DomainError::StorylineNotFound(id.to_owned()).into()),
        None => catalog
            .storylines
            .first()
            .ok_or_else(|| AppError::Config("catalog contains no storylines".to_owned())),
    }
}

/// Plays `player` against line-based `input` until the story ends, the
/// reader quits, or input runs out.
///
/// Blank input or `n` advances, `q` quits, `who` shows the speaker's profile,
/// `where` shows the scene's location, and anything else selects a choice by
/// its number or its id.
///
/// # Errors
///
/// Returns `AppError::Io` on terminal failures. Rejected choices and unknown
/// characters or locations are reported to the reader and do not end the
/// loop.
pub fn play(
    player: &mut StorylinePlayer<'_>,
    catalog: &CommunityCatalog,
    clock: &dyn Clock,
    mut input: impl BufRead,
    output: &mut impl Write,
) -> Result<PlaySummary, AppError> {
    let mut events = 0;
    let mut buffer = String::new();

    loop {
        let view = get_player_view(player, Some(catalog));
        render_view(&view, output)?;
        let Some(current) = view.current else {
            break;
        };

        write!(output, "> ")?;
        output.flush()?;
        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            debug!("input closed");
            break;
        }

        let correlation_id = Uuid::new_v4();
        match parse_input(&buffer) {
            Input::Quit => break,
            Input::Who => match character_profile(catalog, &current.speaker_id) {
                Ok(profile) => render_profile(&profile, output)?,
                Err(err) => writeln!(output, "{err}")?,
            },
            Input::Where => match location_directory(catalog, &current.location_id) {
                Ok(directory) => render_directory(&directory, output)?,
                Err(err) => writeln!(output, "{err}")?,
            },
            Input::Advance => {
                let command = AdvanceDialogue {
                    correlation_id,
                    session_id: player.id,
                };
                let result = handle_advance_dialogue(&command, player, clock)?;
                events += log_events(&result.events);
                if result.outcome == AdvanceOutcome::AwaitingChoice {
                    writeln!(output, "Choose a response first.")?;
                }
            }
            Input::Choose(raw) => {
                let choice_id = raw
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|index| current.choices.get(index))
                    .map_or_else(|| raw.to_owned(), |choice| choice.choice_id.clone());
                let command = ChooseOption {
                    correlation_id,
                    session_id: player.id,
                    choice_id,
                };
                match handle_choose_option(&command, player, clock) {
                    Ok(produced) => events += log_events(&produced),
                    Err(err @ DomainError::InvalidChoice { .. }) => {
                        warn!(error = %err, "reader picked an unavailable choice");
                        writeln!(output, "{err}")?;
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
        writeln!(output)?;
    }

    Ok(PlaySummary {
        completed: player.is_completed(),
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input("\n"), Input::Advance);
        assert_eq!(parse_input(" next \n"), Input::Advance);
        assert_eq!(parse_input("q\n"), Input::Quit);
        assert_eq!(parse_input("who\n"), Input::Who);
        assert_eq!(parse_input(" where "), Input::Where);
        assert_eq!(parse_input("2\n"), Input::Choose("2"));
        assert_eq!(parse_input("suggest_outreach"), Input::Choose("suggest_outreach"));
    }
}
