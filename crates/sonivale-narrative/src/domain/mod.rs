//! Domain layer for the Storyline Playback context.

pub mod aggregates;
pub mod commands;
pub mod events;
