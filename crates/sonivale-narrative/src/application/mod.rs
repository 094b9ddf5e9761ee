//! Application layer for the Storyline Playback context.

pub mod command_handlers;
pub mod query_handlers;
