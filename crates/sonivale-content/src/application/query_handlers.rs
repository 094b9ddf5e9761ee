//! Query handlers for the Community Content context.
//!
//! This module contains query handlers that load the catalog from a
//! `ContentRepository` and return read-only view DTOs. Callers already
//! holding a catalog use the synchronous builders directly.

use serde::Serialize;
use sonivale_core::error::DomainError;
use tracing::{debug, instrument};

use crate::domain::catalog::CommunityCatalog;
use crate::domain::model::{LocationKind, Storyline};
use crate::domain::repository::ContentRepository;
use crate::domain::text::{humanize_id, to_plain_text};

/// Summary of a storyline for listings.
#[derive(Debug, Serialize)]
pub struct StorylineSummaryView {
    /// The storyline identifier.
    pub storyline_id: String,
    /// Display title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Number of chapters.
    pub chapter_count: usize,
    /// Tags.
    pub tags: Vec<String>,
    /// Learning outcomes.
    pub learning_outcomes: Vec<String>,
}

/// One line of a storyline preview.
#[derive(Debug, Serialize)]
pub struct PreviewLineView {
    /// Speaker display name.
    pub speaker_name: String,
    /// Plain-text line.
    pub text: String,
}

/// The opening scene of a storyline, shown before playback starts.
#[derive(Debug, Serialize)]
pub struct StorylinePreviewView {
    /// The storyline identifier.
    pub storyline_id: String,
    /// Display title.
    pub title: String,
    /// Background of the first scene, if the storyline has one.
    pub background_image: Option<String>,
    /// Lines of the first scene.
    pub lines: Vec<PreviewLineView>,
}

/// Read-only character profile.
#[derive(Debug, Serialize)]
pub struct CharacterProfileView {
    /// The character identifier.
    pub character_id: String,
    /// Full name.
    pub name: String,
    /// Role in the community.
    pub role: String,
    /// Biography.
    pub background: String,
    /// Age in years.
    pub age: u32,
    /// Display name of the character's primary location.
    pub location_name: String,
    /// Titles of the storylines the character appears in.
    pub storyline_titles: Vec<String>,
    /// Names of connected characters.
    pub connection_names: Vec<String>,
    /// Portrait reference.
    pub image_url: String,
}

/// A character listed in a location directory.
#[derive(Debug, Serialize)]
pub struct ResidentView {
    /// The character identifier.
    pub character_id: String,
    /// Full name.
    pub name: String,
    /// Role in the community.
    pub role: String,
}

/// A location and the people found there.
#[derive(Debug, Serialize)]
pub struct LocationDirectoryView {
    /// The location identifier.
    pub location_id: String,
    /// Display name.
    pub name: String,
    /// Location category.
    pub kind: LocationKind,
    /// Description.
    pub description: String,
    /// Services offered.
    pub services: Vec<String>,
    /// Characters based at or frequenting the location.
    pub residents: Vec<ResidentView>,
}

/// Summary of one storyline.
#[must_use]
pub fn storyline_summary(storyline: &Storyline) -> StorylineSummaryView {
    StorylineSummaryView {
        storyline_id: storyline.id.clone(),
        title: storyline.title.clone(),
        description: storyline.description.clone(),
        chapter_count: storyline.chapters.len(),
        tags: storyline.tags.clone(),
        learning_outcomes: storyline.learning_outcomes.clone(),
    }
}

fn storyline_title(catalog: &CommunityCatalog, storyline_id: &str) -> String {
    catalog
        .storyline(storyline_id)
        .map_or_else(|| humanize_id(storyline_id), |s| s.title.clone())
}

/// Summaries of every storyline in catalog order.
#[must_use]
pub fn storyline_summaries(catalog: &CommunityCatalog) -> Vec<StorylineSummaryView> {
    catalog.storylines.iter().map(storyline_summary).collect()
}

/// Builds the preview of a storyline's first scene.
///
/// A storyline without chapters or scenes yields an empty preview.
///
/// # Errors
///
/// Returns `DomainError::StorylineNotFound` if the storyline does not exist.
pub fn storyline_preview(
    catalog: &CommunityCatalog,
    storyline_id: &str,
) -> Result<StorylinePreviewView, DomainError> {
    let storyline = catalog
        .storyline(storyline_id)
        .ok_or_else(|| DomainError::StorylineNotFound(storyline_id.to_owned()))?;

    let first_scene = storyline
        .chapters
        .first()
        .and_then(|chapter| chapter.scenes.first());
    if first_scene.is_none() {
        debug!(storyline_id, "storyline has no opening scene");
    }

    Ok(StorylinePreviewView {
        storyline_id: storyline.id.clone(),
        title: storyline.title.clone(),
        background_image: first_scene.map(|scene| scene.background_or_default().to_owned()),
        lines: first_scene
            .map(|scene| {
                scene
                    .dialogue
                    .iter()
                    .map(|line| PreviewLineView {
                        speaker_name: catalog.speaker_name(&line.speaker_id),
                        text: to_plain_text(&line.text),
                    })
                    .collect()
            })
            .unwrap_or_default(),
    })
}

/// Builds a character's profile.
///
/// # Errors
///
/// Returns `DomainError::CharacterNotFound` if the character does not exist.
pub fn character_profile(
    catalog: &CommunityCatalog,
    character_id: &str,
) -> Result<CharacterProfileView, DomainError> {
    let character = catalog
        .character(character_id)
        .ok_or_else(|| DomainError::CharacterNotFound(character_id.to_owned()))?;

    let location_name = catalog
        .location(&character.location_id)
        .map_or_else(|| humanize_id(&character.location_id), |l| l.name.clone());

    Ok(CharacterProfileView {
        character_id: character.id.clone(),
        name: character.name.clone(),
        role: character.role.clone(),
        background: character.background.clone(),
        age: character.age,
        location_name,
        storyline_titles: character
            .storyline_ids
            .iter()
            .map(|id| storyline_title(catalog, id))
            .collect(),
        connection_names: catalog
            .connections_of(character_id)
            .iter()
            .map(|c| c.name.clone())
            .collect(),
        image_url: character.image_url.clone(),
    })
}

/// Builds the directory entry of a location.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the location does not exist.
pub fn location_directory(
    catalog: &CommunityCatalog,
    location_id: &str,
) -> Result<LocationDirectoryView, DomainError> {
    let location = catalog
        .location(location_id)
        .ok_or_else(|| DomainError::LocationNotFound(location_id.to_owned()))?;

    Ok(LocationDirectoryView {
        location_id: location.id.clone(),
        name: location.name.clone(),
        kind: location.kind,
        description: location.description.clone(),
        services: location.services.clone(),
        residents: catalog
            .characters_at(location_id)
            .iter()
            .map(|c| ResidentView {
                character_id: c.id.clone(),
                name: c.name.clone(),
                role: c.role.clone(),
            })
            .collect(),
    })
}

/// Lists every storyline in catalog order.
///
/// # Errors
///
/// Returns any error from `ContentRepository::load_catalog`.
#[instrument(skip(repo))]
pub async fn list_storylines(
    repo: &dyn ContentRepository,
) -> Result<Vec<StorylineSummaryView>, DomainError> {
    let catalog = repo.load_catalog().await?;
    Ok(storyline_summaries(&catalog))
}

/// Returns the first scene of a storyline as a preview.
///
/// # Errors
///
/// Returns `DomainError::StorylineNotFound` if the storyline does not exist.
/// Returns any error from `ContentRepository::load_catalog`.
#[instrument(skip(repo))]
pub async fn get_storyline_preview(
    storyline_id: &str,
    repo: &dyn ContentRepository,
) -> Result<StorylinePreviewView, DomainError> {
    let catalog = repo.load_catalog().await?;
    storyline_preview(&catalog, storyline_id)
}

/// Retrieves a character profile.
///
/// # Errors
///
/// Returns `DomainError::CharacterNotFound` if the character does not exist.
/// Returns any error from `ContentRepository::load_catalog`.
#[instrument(skip(repo))]
pub async fn get_character_profile(
    character_id: &str,
    repo: &dyn ContentRepository,
) -> Result<CharacterProfileView, DomainError> {
    let catalog = repo.load_catalog().await?;
    character_profile(&catalog, character_id)
}

/// Retrieves a location with the characters found there.
///
/// # Errors
///
/// Returns `DomainError::LocationNotFound` if the location does not exist.
/// Returns any error from `ContentRepository::load_catalog`.
#[instrument(skip(repo))]
pub async fn get_location_directory(
    location_id: &str,
    repo: &dyn ContentRepository,
) -> Result<LocationDirectoryView, DomainError> {
    let catalog = repo.load_catalog().await?;
    location_directory(&catalog, location_id)
}
