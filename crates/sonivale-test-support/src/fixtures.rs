//! Story graph fixtures.
//!
//! Builders for small storylines with predictable ids: chapters are
//! `chapter-{c}`, scenes `scene-{c}-{s}`, and shaped lines read
//! `line {c}.{s}.{d}`.

use sonivale_content::domain::catalog::CommunityCatalog;
use sonivale_content::domain::model::{
    Chapter, Character, Choice, DialogueLine, Location, LocationKind, Scene, Storyline,
};

/// A choice whose text and consequence are derived from its id.
#[must_use]
pub fn choice(id: &str) -> Choice {
    Choice {
        id: id.to_owned(),
        text: format!("Choose {id}"),
        consequences: format!("You chose {id}"),
        next_scene_id: String::new(),
    }
}

/// A linear dialogue line.
#[must_use]
pub fn line(speaker_id: &str, text: &str) -> DialogueLine {
    DialogueLine {
        speaker_id: speaker_id.to_owned(),
        text: text.to_owned(),
        choices: Vec::new(),
    }
}

/// A dialogue line offering one choice per id.
#[must_use]
pub fn branch_line(speaker_id: &str, text: &str, choice_ids: &[&str]) -> DialogueLine {
    DialogueLine {
        choices: choice_ids.iter().map(|id| choice(id)).collect(),
        ..line(speaker_id, text)
    }
}

/// A scene with the given lines.
#[must_use]
pub fn scene(id: &str, dialogue: Vec<DialogueLine>) -> Scene {
    Scene {
        id: id.to_owned(),
        location_id: "health_center".to_owned(),
        character_ids: Vec::new(),
        background_image: format!("/scenes/{id}.jpg"),
        dialogue,
    }
}

/// A chapter with the given scenes.
#[must_use]
pub fn chapter(id: &str, scenes: Vec<Scene>) -> Chapter {
    Chapter {
        id: id.to_owned(),
        title: format!("Chapter {id}"),
        description: String::new(),
        scenes,
    }
}

/// A storyline with the given chapters.
#[must_use]
pub fn storyline(id: &str, chapters: Vec<Chapter>) -> Storyline {
    Storyline {
        id: id.to_owned(),
        title: format!("Storyline {id}"),
        description: String::new(),
        character_ids: Vec::new(),
        location_ids: Vec::new(),
        chapters,
        learning_outcomes: Vec::new(),
        tags: Vec::new(),
    }
}

/// A linear storyline shaped by line counts: `shape[c][s]` is the number of
/// lines in scene `s` of chapter `c`.
#[must_use]
pub fn storyline_with_shape(id: &str, shape: &[&[usize]]) -> Storyline {
    let chapters = shape
        .iter()
        .enumerate()
        .map(|(c, scenes)| {
            let scenes = scenes
                .iter()
                .enumerate()
                .map(|(s, &lines)| {
                    let dialogue = (0..lines)
                        .map(|d| line("narrator", &format!("line {c}.{s}.{d}")))
                        .collect();
                    scene(&format!("scene-{c}-{s}"), dialogue)
                })
                .collect();
            chapter(&format!("chapter-{c}"), scenes)
        })
        .collect();
    storyline(id, chapters)
}

/// A small Sonivale catalog: two characters, one location, and a storyline
/// whose opening scene ends in a branch.
#[must_use]
pub fn sample_catalog() -> CommunityCatalog {
    let sarah = Character {
        id: "sarah_nurse".to_owned(),
        name: "Sarah Thompson".to_owned(),
        role: "Community Nurse".to_owned(),
        background: "Moved from Melbourne to serve the rural community".to_owned(),
        age: 32,
        connections: vec!["dr_miller".to_owned()],
        location_id: "health_center".to_owned(),
        storyline_ids: vec!["healthcare_access".to_owned(), "mental_health".to_owned()],
        image_url: "/characters/sarah.jpg".to_owned(),
    };
    let miller = Character {
        id: "dr_miller".to_owned(),
        name: "Dr. James Miller".to_owned(),
        role: "General Practitioner".to_owned(),
        background: "Local GP for 15 years".to_owned(),
        age: 45,
        connections: vec!["sarah_nurse".to_owned()],
        location_id: "health_center".to_owned(),
        storyline_ids: vec!["healthcare_access".to_owned()],
        image_url: "/characters/dr_miller.jpg".to_owned(),
    };
    let health_center = Location {
        id: "health_center".to_owned(),
        name: "Sonivale Community Health Center".to_owned(),
        kind: LocationKind::Healthcare,
        description: "The main healthcare facility".to_owned(),
        coordinates: [10.0, 15.0],
        character_ids: vec!["sarah_nurse".to_owned(), "dr_miller".to_owned()],
        services: vec!["GP Services".to_owned(), "Community Nursing".to_owned()],
        image_url: "/locations/health_center.jpg".to_owned(),
        scene_ids: vec!["scene1".to_owned()],
    };

    let mut healthcare = storyline(
        "healthcare_access",
        vec![
            chapter(
                "chapter1",
                vec![scene(
                    "scene1",
                    vec![
                        line(
                            "sarah_nurse",
                            "Rural healthcare is *incredibly* rewarding.",
                        ),
                        branch_line(
                            "dr_miller",
                            "Should we try telehealth?",
                            &["yes", "no"],
                        ),
                    ],
                )],
            ),
            chapter(
                "chapter2",
                vec![scene(
                    "scene2",
                    vec![line("sarah_nurse", "The clinic is quiet tonight.")],
                )],
            ),
        ],
    );
    healthcare.title = "Rural Healthcare Access".to_owned();
    healthcare.character_ids = vec!["sarah_nurse".to_owned(), "dr_miller".to_owned()];
    healthcare.tags = vec!["healthcare".to_owned(), "rural".to_owned()];

    CommunityCatalog {
        characters: vec![sarah, miller],
        locations: vec![health_center],
        storylines: vec![healthcare],
        version_hash: None,
    }
}
