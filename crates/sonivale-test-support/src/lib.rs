//! Shared test mocks, fixtures and utilities for the Sonivale storyline engine.

mod clock;
mod fixtures;
mod repository;

pub use clock::FixedClock;
pub use fixtures::{
    branch_line, chapter, choice, line, sample_catalog, scene, storyline, storyline_with_shape,
};
pub use repository::{
    EmptyContentRepository, FailingContentRepository, InMemoryContentRepository,
};
