/// Core error types for the Motif engine.
use std::path::PathBuf;

/// A specialized Result type for Motif operations.
pub type MotifResult<T> = Result<T, MotifError>;

/// Top-level error type encompassing all Motif subsystems.
#[derive(Debug, thiserror::Error)]
pub enum MotifError {
    #[error("object not found: {0}")]
    NotFound(String),

    #[error("dangling reference: {context} refers to missing object '{id}'")]
    DanglingReference { id: String, context: String },

    #[error("missing asset: {message} ({path:?})")]
    MissingAsset { message: String, path: PathBuf },

    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    #[error("scene validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl MotifError {
    /// Create a dangling-reference error with context.
    pub fn dangling(id: impl Into<String>, context: impl Into<String>) -> Self {
        MotifError::DanglingReference {
            id: id.into(),
            context: context.into(),
        }
    }

    /// Create a missing-asset error.
    pub fn missing_asset(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        MotifError::MissingAsset {
            message: message.into(),
            path: path.into(),
        }
    }
}
