//! Error types for the plex sanitizer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the plex sanitizer.
#[derive(Error, Debug)]
pub enum Error {
    // Path errors
    #[error("Mapped drives are not supported. Use the full network path (e.g., \\\\server\\share) instead of '{0}'")]
    MappedDriveUnsupported(String),

    #[error("Path not found: {0}")]
    PathNotFound(String),

    // Rule catalog errors
    #[error("Invalid sanitization rule '{name}': {source}")]
    InvalidRule {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // Apply errors
    #[error("Target already exists: {0}")]
    TargetExists(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
