//! Sonivale — Storyline Playback context.
//!
//! Responsible for walking a storyline's chapters, scenes and dialogue
//! lines, gating progress at branch points until a choice is made, and
//! reporting completion exactly once.

pub mod application;
pub mod domain;
