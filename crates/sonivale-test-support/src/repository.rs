//! Test repositories — mock `ContentRepository` implementations for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sonivale_content::domain::catalog::CommunityCatalog;
use sonivale_content::domain::repository::ContentRepository;
use sonivale_core::error::DomainError;

/// A content repository that serves a clone of a fixed catalog and counts
/// how many times it was asked.
#[derive(Debug)]
pub struct InMemoryContentRepository {
    catalog: CommunityCatalog,
    loads: AtomicUsize,
}

impl InMemoryContentRepository {
    /// Create a repository that returns `catalog` from every load.
    #[must_use]
    pub fn new(catalog: CommunityCatalog) -> Self {
        Self {
            catalog,
            loads: AtomicUsize::new(0),
        }
    }

    /// Number of `load_catalog` calls so far.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn load_catalog(&self) -> Result<CommunityCatalog, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.catalog.clone())
    }
}

/// A content repository whose catalog has no characters, locations or
/// storylines. Useful for "not found" scenarios.
#[derive(Debug)]
pub struct EmptyContentRepository;

#[async_trait]
impl ContentRepository for EmptyContentRepository {
    async fn load_catalog(&self) -> Result<CommunityCatalog, DomainError> {
        Ok(CommunityCatalog::default())
    }
}

/// A content repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingContentRepository;

#[async_trait]
impl ContentRepository for FailingContentRepository {
    async fn load_catalog(&self) -> Result<CommunityCatalog, DomainError> {
        Err(DomainError::Infrastructure("content source unavailable".into()))
    }
}
