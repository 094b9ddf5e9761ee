//! Configuration read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

/// Catalog used when `SONIVALE_CONTENT_PATH` is not set.
pub const DEFAULT_CONTENT_PATH: &str = "content/sonivale.yaml";

/// Terminal player configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file to load (`SONIVALE_CONTENT_PATH`).
    pub content_path: PathBuf,
    /// Storyline to play (`SONIVALE_STORYLINE`); the first one when unset.
    pub storyline_id: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but blank.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps variable names to
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set but blank.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let content_path = match lookup("SONIVALE_CONTENT_PATH") {
            Some(path) if path.trim().is_empty() => {
                return Err(AppError::Config(
                    "SONIVALE_CONTENT_PATH must not be blank".to_owned(),
                ));
            }
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_CONTENT_PATH),
        };

        let storyline_id = match lookup("SONIVALE_STORYLINE") {
            Some(id) if id.trim().is_empty() => {
                return Err(AppError::Config(
                    "SONIVALE_STORYLINE must not be blank".to_owned(),
                ));
            }
            other => other,
        };

        Ok(Self {
            content_path,
            storyline_id,
        })
    }
}
