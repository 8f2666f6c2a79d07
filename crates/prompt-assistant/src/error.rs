//! Error types for prompt assistant operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in prompt assistant operations.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Prompt was empty after trimming.
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    /// No template with the requested id.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The style template file does not exist.
    #[error("style template file not found: {}", .0.display())]
    StylesMissing(PathBuf),

    /// A dataset file could not be read or parsed.
    #[error("failed to load {}: {reason}", .path.display())]
    Dataset { path: PathBuf, reason: String },
}

/// Result type for prompt assistant operations.
pub type Result<T> = std::result::Result<T, AssistantError>;
