//! Sonivale — Community Content context.
//!
//! Responsible for the storyline, character and location model, ingestion
//! of YAML/JSON content into a versioned catalog, and read-only catalog
//! queries used by the tour front-ends.

pub mod application;
pub mod domain;
