//! Domain layer for the Community Content context.

pub mod catalog;
pub mod model;
pub mod repository;
pub mod text;
