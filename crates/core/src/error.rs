//! Error types for the subword library.

use thiserror::Error;

/// Main error type for the subword library.
#[derive(Error, Debug)]
pub enum SubwordError {
    /// Error saving a learned encoder
    #[error("Save error: {0}")]
    Save(String),

    /// Error loading a learned encoder
    #[error("Load error: {0}")]
    Load(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for subword operations.
pub type Result<T> = std::result::Result<T, SubwordError>;
