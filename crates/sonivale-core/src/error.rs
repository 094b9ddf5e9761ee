//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A command addressed a playback session that is not the one supplied.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// No storyline with this identifier exists in the catalog.
    #[error("storyline not found: {0}")]
    StorylineNotFound(String),

    /// No character with this identifier exists in the catalog.
    #[error("character not found: {0}")]
    CharacterNotFound(String),

    /// No location with this identifier exists in the catalog.
    #[error("location not found: {0}")]
    LocationNotFound(String),

    /// The choice is not among the current dialogue line's choices.
    #[error("invalid choice: {choice_id}")]
    InvalidChoice {
        /// The rejected choice identifier.
        choice_id: String,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// A content source or parsing error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_choice_message_names_the_choice() {
        let err = DomainError::InvalidChoice {
            choice_id: "bad-id".to_owned(),
        };

        assert_eq!(err.to_string(), "invalid choice: bad-id");
    }

    #[test]
    fn test_storyline_not_found_message_names_the_storyline() {
        let err = DomainError::StorylineNotFound("healthcare_access".to_owned());

        assert_eq!(err.to_string(), "storyline not found: healthcare_access");
    }
}
