//! Sonivale content store — loads the community catalog from disk.

pub mod fs_content_repository;
