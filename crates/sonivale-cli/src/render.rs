//! Plain-text rendering of storylines and player views.

use std::io::{self, Write};

use sonivale_content::application::query_handlers::{
    CharacterProfileView, LocationDirectoryView, StorylineSummaryView, storyline_preview,
    storyline_summaries,
};
use sonivale_content::domain::catalog::CommunityCatalog;
use sonivale_content::domain::text::to_plain_text;
use sonivale_narrative::application::query_handlers::PlayerView;

/// Shown once no dialogue line is left to display.
pub const COMPLETE_MESSAGE: &str = "Story complete";

/// Writes the storyline's title card.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn render_intro(summary: &StorylineSummaryView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", summary.title)?;
    if !summary.description.is_empty() {
        writeln!(out, "{}", to_plain_text(&summary.description))?;
    }
    write!(out, "Chapters: {}", summary.chapter_count)?;
    if !summary.tags.is_empty() {
        write!(out, " | Tags: {}", summary.tags.join(", "))?;
    }
    writeln!(out)?;
    if !summary.learning_outcomes.is_empty() {
        writeln!(out, "You will:")?;
        for outcome in &summary.learning_outcomes {
            writeln!(out, "  - {outcome}")?;
        }
    }
    writeln!(out)
}

/// Lists the catalog's storylines, each with its opening line.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn render_storylines(catalog: &CommunityCatalog, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Available storylines:")?;
    for summary in storyline_summaries(catalog) {
        writeln!(out, "  {}: {}", summary.storyline_id, summary.title)?;
        let opening = storyline_preview(catalog, &summary.storyline_id)
            .ok()
            .and_then(|preview| preview.lines.into_iter().next());
        if let Some(line) = opening {
            writeln!(out, "      {}: \"{}\"", line.speaker_name, line.text)?;
        }
    }
    Ok(())
}

/// Writes a character profile.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn render_profile(profile: &CharacterProfileView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}, {} ({})", profile.name, profile.role, profile.age)?;
    writeln!(out, "  {}", profile.background)?;
    writeln!(out, "  Based at: {}", profile.location_name)?;
    if !profile.connection_names.is_empty() {
        writeln!(out, "  Knows: {}", profile.connection_names.join(", "))?;
    }
    if !profile.storyline_titles.is_empty() {
        writeln!(out, "  Appears in: {}", profile.storyline_titles.join(", "))?;
    }
    Ok(())
}

/// Writes a location and the people found there.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn render_directory(
    directory: &LocationDirectoryView,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "{}", directory.name)?;
    writeln!(out, "  {}", directory.description)?;
    if !directory.services.is_empty() {
        writeln!(out, "  Services: {}", directory.services.join(", "))?;
    }
    for resident in &directory.residents {
        writeln!(out, "  - {} ({})", resident.name, resident.role)?;
    }
    Ok(())
}

/// Writes the current line, its choices and the progress indicator, or the
/// completion message when nothing is left.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn render_view(view: &PlayerView, out: &mut impl Write) -> io::Result<()> {
    let Some(line) = &view.current else {
        return writeln!(out, "{COMPLETE_MESSAGE}");
    };

    let progress = line.progress;
    writeln!(
        out,
        "== Chapter {}: {} ==",
        progress.chapter, line.chapter_title
    )?;
    writeln!(out, "{}: {}", line.speaker_name, line.text)?;

    if !line.choices.is_empty() {
        if line.awaiting_choice {
            writeln!(out, "Choose your response:")?;
        }
        for (number, choice) in line.choices.iter().enumerate() {
            let marker = if choice.selected { '*' } else { ' ' };
            writeln!(out, " {marker}{}) {}", number + 1, choice.text)?;
        }
        if let Some(choice) = line.choices.iter().find(|c| c.selected) {
            if !choice.consequences.is_empty() {
                writeln!(out, "   {}", choice.consequences)?;
            }
        }
    }

    writeln!(
        out,
        "[chapter {}/{} | scene {}/{} | line {}/{}]",
        progress.chapter,
        progress.chapter_count,
        progress.scene,
        progress.scene_count,
        progress.dialogue,
        progress.dialogue_count
    )
}

#[cfg(test)]
mod tests {
    use sonivale_content::application::query_handlers::{
        character_profile, location_directory, storyline_summary,
    };
    use sonivale_narrative::application::query_handlers::get_player_view;
    use sonivale_narrative::domain::aggregates::StorylinePlayer;
    use sonivale_test_support::{FixedClock, sample_catalog, storyline_with_shape};
    use uuid::Uuid;

    use super::*;

    fn rendered(view: &PlayerView) -> String {
        let mut out = Vec::new();
        render_view(view, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_view_shows_speaker_and_progress() {
        let catalog = sample_catalog();
        let story = catalog.storyline("healthcare_access").unwrap();
        let player = StorylinePlayer::new(Uuid::new_v4(), story);

        let text = rendered(&get_player_view(&player, Some(&catalog)));

        assert!(text.contains("== Chapter 1: Chapter chapter1 =="));
        assert!(text.contains("Sarah Thompson: Rural healthcare is incredibly rewarding."));
        assert!(text.contains("[chapter 1/2 | scene 1/1 | line 1/2]"));
    }

    #[test]
    fn test_render_view_marks_selected_choice() {
        let catalog = sample_catalog();
        let story = catalog.storyline("healthcare_access").unwrap();
        let clock = FixedClock::default();
        let mut player = StorylinePlayer::new(Uuid::new_v4(), story);
        player.advance(Uuid::new_v4(), &clock);
        player.choose_option("yes", Uuid::new_v4(), &clock).unwrap();

        let text = rendered(&get_player_view(&player, Some(&catalog)));

        assert!(text.contains(" *1) Choose yes"));
        assert!(text.contains("  2) Choose no"));
        assert!(text.contains("You chose yes"));
        assert!(!text.contains("Choose your response:"));
    }

    #[test]
    fn test_render_view_of_finished_story() {
        let story = storyline_with_shape("s", &[&[1]]);
        let clock = FixedClock::default();
        let mut player = StorylinePlayer::new(Uuid::new_v4(), &story);
        player.advance(Uuid::new_v4(), &clock);

        let text = rendered(&get_player_view(&player, None));

        assert_eq!(text.trim(), COMPLETE_MESSAGE);
    }

    fn written(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_intro_shows_chapters_and_tags() {
        let catalog = sample_catalog();
        let summary = storyline_summary(catalog.storyline("healthcare_access").unwrap());

        let text = written(|out| render_intro(&summary, out));

        assert!(text.starts_with("Rural Healthcare Access\n"));
        assert!(text.contains("Chapters: 2 | Tags: healthcare, rural"));
    }

    #[test]
    fn test_render_storylines_includes_opening_line() {
        let catalog = sample_catalog();

        let text = written(|out| render_storylines(&catalog, out));

        assert!(text.contains("  healthcare_access: Rural Healthcare Access"));
        assert!(text.contains("Sarah Thompson: \"Rural healthcare is incredibly rewarding.\""));
    }

    #[test]
    fn test_render_profile_and_directory() {
        let catalog = sample_catalog();
        let profile = character_profile(&catalog, "sarah_nurse").unwrap();
        let directory = location_directory(&catalog, "health_center").unwrap();

        let profile_text = written(|out| render_profile(&profile, out));
        let directory_text = written(|out| render_directory(&directory, out));

        assert!(profile_text.starts_with("Sarah Thompson, Community Nurse (32)"));
        assert!(profile_text.contains("  Knows: Dr. James Miller"));
        assert!(directory_text.contains("  Services: GP Services, Community Nursing"));
        assert!(directory_text.contains("  - Dr. James Miller (General Practitioner)"));
    }
}
