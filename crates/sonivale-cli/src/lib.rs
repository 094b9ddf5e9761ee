//! Sonivale terminal player.
//!
//! Loads the community catalog and plays one storyline over a line-based
//! text interface.

pub mod config;
pub mod error;
pub mod play;
pub mod render;
