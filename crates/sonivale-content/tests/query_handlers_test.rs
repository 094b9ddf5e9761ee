//! Integration tests for the Community Content query handlers.

use sonivale_content::application::query_handlers::{
    character_profile, get_character_profile, get_location_directory, get_storyline_preview,
    list_storylines, location_directory, storyline_preview, storyline_summaries,
};
use sonivale_content::domain::model::LocationKind;
use sonivale_core::error::DomainError;
use sonivale_test_support::{
    EmptyContentRepository, FailingContentRepository, InMemoryContentRepository, chapter,
    sample_catalog, storyline,
};

#[tokio::test]
async fn test_list_storylines_summarizes_catalog() {
    // Arrange
    let repo = InMemoryContentRepository::new(sample_catalog());

    // Act
    let summaries = list_storylines(&repo).await.unwrap();

    // Assert
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].storyline_id, "healthcare_access");
    assert_eq!(summaries[0].title, "Rural Healthcare Access");
    assert_eq!(summaries[0].chapter_count, 2);
    assert_eq!(summaries[0].tags, vec!["healthcare", "rural"]);
    assert_eq!(repo.load_count(), 1);
}

#[tokio::test]
async fn test_get_storyline_preview_returns_first_scene_in_plain_text() {
    // Arrange
    let repo = InMemoryContentRepository::new(sample_catalog());

    // Act
    let preview = get_storyline_preview("healthcare_access", &repo)
        .await
        .unwrap();

    // Assert
    assert_eq!(preview.background_image.as_deref(), Some("/scenes/scene1.jpg"));
    assert_eq!(preview.lines.len(), 2);
    assert_eq!(preview.lines[0].speaker_name, "Sarah Thompson");
    assert_eq!(preview.lines[0].text, "Rural healthcare is incredibly rewarding.");
    assert_eq!(preview.lines[1].speaker_name, "Dr. James Miller");
}

#[tokio::test]
async fn test_get_storyline_preview_of_empty_storyline_has_no_lines() {
    // Arrange
    let mut catalog = sample_catalog();
    catalog
        .storylines
        .push(storyline("draft", vec![chapter("empty", Vec::new())]));
    let repo = InMemoryContentRepository::new(catalog);

    // Act
    let preview = get_storyline_preview("draft", &repo).await.unwrap();

    // Assert
    assert!(preview.background_image.is_none());
    assert!(preview.lines.is_empty());
}

#[tokio::test]
async fn test_get_storyline_preview_returns_not_found() {
    let result = get_storyline_preview("missing", &EmptyContentRepository).await;

    match result {
        Err(DomainError::StorylineNotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected StorylineNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_character_profile_resolves_names() {
    // Arrange
    let repo = InMemoryContentRepository::new(sample_catalog());

    // Act
    let profile = get_character_profile("sarah_nurse", &repo).await.unwrap();

    // Assert
    assert_eq!(profile.name, "Sarah Thompson");
    assert_eq!(profile.age, 32);
    assert_eq!(profile.location_name, "Sonivale Community Health Center");
    assert_eq!(
        profile.storyline_titles,
        vec!["Rural Healthcare Access", "Mental Health"]
    );
    assert_eq!(profile.connection_names, vec!["Dr. James Miller"]);
}

#[tokio::test]
async fn test_get_character_profile_returns_not_found() {
    let repo = InMemoryContentRepository::new(sample_catalog());

    let result = get_character_profile("tom_farmer", &repo).await;

    match result {
        Err(DomainError::CharacterNotFound(id)) => assert_eq!(id, "tom_farmer"),
        other => panic!("expected CharacterNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_location_directory_lists_residents() {
    // Arrange
    let repo = InMemoryContentRepository::new(sample_catalog());

    // Act
    let directory = get_location_directory("health_center", &repo)
        .await
        .unwrap();

    // Assert
    assert_eq!(directory.kind, LocationKind::Healthcare);
    let names: Vec<&str> = directory.residents.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Sarah Thompson", "Dr. James Miller"]);
}

#[tokio::test]
async fn test_queries_propagate_repository_failure() {
    let result = list_storylines(&FailingContentRepository).await;

    match result {
        Err(DomainError::Infrastructure(_)) => {}
        other => panic!("expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_catalog_builders_work_without_a_repository() {
    // Arrange
    let catalog = sample_catalog();

    // Act
    let summaries = storyline_summaries(&catalog);
    let preview = storyline_preview(&catalog, "healthcare_access").unwrap();
    let profile = character_profile(&catalog, "dr_miller").unwrap();

    // Assert
    assert_eq!(summaries[0].storyline_id, preview.storyline_id);
    assert_eq!(preview.lines[1].text, "Should we try telehealth?");
    assert_eq!(profile.connection_names, vec!["Sarah Thompson"]);
}

#[test]
fn test_location_directory_returns_not_found() {
    let catalog = sample_catalog();

    match location_directory(&catalog, "anderson_farm") {
        Err(DomainError::LocationNotFound(id)) => assert_eq!(id, "anderson_farm"),
        other => panic!("expected LocationNotFound, got {other:?}"),
    }
}
