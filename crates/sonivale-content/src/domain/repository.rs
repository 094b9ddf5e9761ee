//! Content source abstraction.

use async_trait::async_trait;
use sonivale_core::error::DomainError;

use super::catalog::CommunityCatalog;

/// Repository trait for loading the community catalog.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Load the full catalog from the underlying source.
    async fn load_catalog(&self) -> Result<CommunityCatalog, DomainError>;
}
