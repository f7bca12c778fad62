//! Spellbound Error Types
//!
//! Centralized error handling for the game core.

use thiserror::Error;

/// Central error type for Spellbound
#[derive(Error, Debug)]
pub enum SpellError {
    #[error("TTS engine error: {0}")]
    Tts(String),

    #[error("Dictionary lookup error: {0}")]
    Dictionary(String),

    #[error("Word list error: {0}")]
    WordList(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Spellbound operations
pub type SpellResult<T> = Result<T, SpellError>;
