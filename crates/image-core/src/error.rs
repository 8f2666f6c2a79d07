//! Error types for pipeline operations.

use thiserror::Error;

/// Errors that can occur while synthesizing an image.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The pipeline is not loaded or temporarily unavailable.
    #[error("pipeline unavailable: {0}")]
    Unavailable(String),

    /// The model ran but could not produce an image.
    #[error("synthesis failed: {0}")]
    SynthesisFailed(String),

    /// The request parameters were rejected by the backend.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Transport failure talking to a remote backend.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with something that is not an image.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Backend configuration is missing or wrong.
    #[error("configuration error: {0}")]
    Configuration(String),
}
