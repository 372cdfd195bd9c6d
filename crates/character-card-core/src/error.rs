//! Error types for the character card

use thiserror::Error;

/// Errors raised while loading a record or preparing a card for display
#[derive(Error, Debug)]
pub enum CardError {
    /// No character record was supplied to the card
    #[error("Character record is missing")]
    MissingCharacter,

    /// Record JSON could not be parsed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
