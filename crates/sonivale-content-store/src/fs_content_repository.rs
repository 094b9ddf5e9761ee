//! Filesystem implementation of the `ContentRepository` trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use sonivale_content::application::ingest::{ContentFormat, ingest_catalog};
use sonivale_content::domain::catalog::CommunityCatalog;
use sonivale_content::domain::repository::ContentRepository;
use sonivale_core::error::DomainError;

/// Content repository reading a single YAML or JSON catalog file.
///
/// The file is re-read on every load, so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct FsContentRepository {
    path: PathBuf,
}

impl FsContentRepository {
    /// Creates a new `FsContentRepository` for the catalog at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The catalog file this repository reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentRepository for FsContentRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_catalog(&self) -> Result<CommunityCatalog, DomainError> {
        let format = ContentFormat::from_path(&self.path)?;
        let source = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::Infrastructure(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))
        })?;
        debug!(bytes = source.len(), ?format, "catalog source read");
        ingest_catalog(&source, format)
    }
}
