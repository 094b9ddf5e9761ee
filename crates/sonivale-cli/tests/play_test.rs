//! Integration tests driving the terminal player with scripted input.

use std::io::Cursor;

use sonivale_cli::error::AppError;
use sonivale_cli::play::{play, select_storyline};
use sonivale_cli::render::COMPLETE_MESSAGE;
use sonivale_content::application::ingest::{ContentFormat, ingest_catalog};
use sonivale_content::domain::catalog::CommunityCatalog;
use sonivale_core::error::DomainError;
use sonivale_narrative::domain::aggregates::StorylinePlayer;
use sonivale_test_support::{FixedClock, sample_catalog, storyline_with_shape};
use uuid::Uuid;

const SAMPLE: &str = include_str!("../../../content/sonivale.yaml");

fn sample() -> CommunityCatalog {
    ingest_catalog(SAMPLE, ContentFormat::Yaml).unwrap()
}

fn run(catalog: &CommunityCatalog, script: &str) -> (bool, usize, String) {
    let storyline = select_storyline(catalog, Some("healthcare_access")).unwrap();
    let mut player = StorylinePlayer::new(Uuid::new_v4(), storyline);
    let mut output = Vec::new();

    let summary = play(
        &mut player,
        catalog,
        &FixedClock::default(),
        Cursor::new(script.as_bytes()),
        &mut output,
    )
    .unwrap();

    (
        summary.completed,
        summary.events,
        String::from_utf8(output).unwrap(),
    )
}

#[test]
fn test_sample_storyline_plays_to_completion() {
    // Arrange
    let catalog = sample();
    // Line 2 gates; "7" is not offered; "2" picks outreach; then four steps.
    let script = "\n\n7\n2\n\n\nn\n\n";

    // Act
    let (completed, events, text) = run(&catalog, script);

    // Assert
    assert!(completed);
    assert_eq!(events, 6);
    assert!(text.contains("Sarah Thompson: Rural healthcare presents unique challenges, but it's incredibly rewarding."));
    assert!(text.contains("Choose your response:"));
    assert!(text.contains("Choose a response first."));
    assert!(text.contains("invalid choice: 7"));
    assert!(text.contains(" *2) What about a mobile outreach clinic?"));
    assert!(text.contains("Sarah starts planning a weekly outreach route."));
    assert!(text.contains("Tom Anderson: First time a nurse has come out this far."));
    assert!(text.contains("[chapter 2/2 | scene 1/1 | line 2/2]"));
    assert!(text.trim_end().ends_with(COMPLETE_MESSAGE));
}

#[test]
fn test_choice_can_be_picked_by_id() {
    let catalog = sample();

    let (completed, _, text) = run(&catalog, "\nsuggest_telehealth\n\n\n\n\n");

    assert!(completed);
    assert!(text.contains(" *1) Could telehealth save them the drive?"));
}

#[test]
fn test_quit_stops_before_completion() {
    let catalog = sample();

    let (completed, events, text) = run(&catalog, "\nq\n");

    assert!(!completed);
    assert_eq!(events, 1);
    assert!(!text.contains(COMPLETE_MESSAGE));
}

#[test]
fn test_closed_input_stops_playback() {
    let catalog = sample();

    let (completed, events, _) = run(&catalog, "");

    assert!(!completed);
    assert_eq!(events, 0);
}

#[test]
fn test_select_storyline_defaults_to_first_and_rejects_unknown() {
    let catalog = sample();

    assert_eq!(
        select_storyline(&catalog, None).unwrap().id,
        "healthcare_access"
    );
    assert!(matches!(
        select_storyline(&catalog, Some("missing")),
        Err(AppError::Domain(DomainError::StorylineNotFound(_)))
    ));
    assert!(matches!(
        select_storyline(&CommunityCatalog::default(), None),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_who_and_where_describe_the_current_scene() {
    // Arrange
    let catalog = sample();

    // Act
    let (completed, events, text) = run(&catalog, "who\nwhere\nq\n");

    // Assert
    assert!(!completed);
    assert_eq!(events, 0);
    assert!(text.contains("Sarah Thompson, Community Nurse (32)"));
    assert!(text.contains("  Knows: Dr. James Miller, Jenny Williams"));
    assert!(text.contains("Sonivale Community Health Center\n"));
    assert!(text.contains("  - Dr. James Miller (General Practitioner)"));
}

#[test]
fn test_who_reports_unknown_speaker_and_keeps_playing() {
    // Arrange
    let catalog = sample_catalog();
    let story = storyline_with_shape("s", &[&[1]]);
    let mut player = StorylinePlayer::new(Uuid::new_v4(), &story);
    let mut output = Vec::new();

    // Act
    let summary = play(
        &mut player,
        &catalog,
        &FixedClock::default(),
        Cursor::new("who\n\n".as_bytes()),
        &mut output,
    )
    .unwrap();

    // Assert
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("character not found: narrator"));
    assert!(summary.completed);
    assert_eq!(summary.events, 1);
}
