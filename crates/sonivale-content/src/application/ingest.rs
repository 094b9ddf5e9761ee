//! Catalog ingestion: parse a YAML or JSON source into a versioned catalog.
//!
//! Ingestion only parses. It does not check that storylines are well formed;
//! the narrative player copes with empty chapters and scenes on its own.

use std::path::Path;

use sha2::{Digest, Sha256};
use sonivale_core::error::DomainError;
use tracing::{info, instrument};

use crate::domain::catalog::CommunityCatalog;

/// Serialization format of a content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl ContentFormat {
    /// Picks the format from a file extension (`yaml`, `yml` or `json`).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the extension is missing or not
    /// recognised.
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(DomainError::Validation(format!(
                "unsupported content file: {}",
                path.display()
            ))),
        }
    }
}

/// Parses `source` into a catalog and stamps it with the source's version hash.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the source does not parse.
#[instrument(skip(source), fields(bytes = source.len()))]
pub fn ingest_catalog(source: &str, format: ContentFormat) -> Result<CommunityCatalog, DomainError> {
    let mut catalog: CommunityCatalog = match format {
        ContentFormat::Yaml => serde_yaml::from_str(source).map_err(|e| {
            DomainError::Validation(format!("catalog YAML parsing failed: {e}"))
        })?,
        ContentFormat::Json => serde_json::from_str(source).map_err(|e| {
            DomainError::Validation(format!("catalog JSON parsing failed: {e}"))
        })?,
    };

    let hash = version_hash(source);
    info!(
        version_hash = %hash,
        storylines = catalog.storylines.len(),
        characters = catalog.characters.len(),
        locations = catalog.locations.len(),
        "catalog ingested"
    );
    catalog.version_hash = Some(hash);

    Ok(catalog)
}

/// Hex-encoded SHA-256 of a content source.
#[must_use]
pub fn version_hash(source: &str) -> String {
    format!("{:x}", Sha256::digest(source.as_bytes()))
}
