//! Sonivale CLI — error types.

use sonivale_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the terminal player.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Content loading or playback failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Terminal I/O error.
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}
