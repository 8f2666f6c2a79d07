//! Gallery error types.

use thiserror::Error;

/// Errors that can occur in gallery operations.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Filesystem error while writing a collection.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Collection could not be serialized.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record already exists
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },
}

/// Result type for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
