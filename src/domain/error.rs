use std::io;

use thiserror::Error;

/// Library-wide error type for chuzapath operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON (de)serialization failure outside the completion path.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Completion API request failed at the transport or HTTP level.
    #[error("{message}")]
    CompletionApi { message: String, status: Option<u16> },

    /// Completion content could not be turned into a story segment.
    #[error("Failed to parse story data from API response")]
    StoryParse(String),

    /// Completion content parsed but breaks the story segment invariants.
    #[error("Invalid story segment: {0}")]
    InvalidStory(String),

    /// Interactive prompt failure.
    #[error("Prompt failed: {0}")]
    Interaction(String),
}

impl AppError {
    /// HTTP status attached to the failure, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::CompletionApi { status, .. } => *status,
            _ => None,
        }
    }
}
