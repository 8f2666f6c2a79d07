//! Error types for orchestrator operations.

use image_core::PipelineError;
use thiserror::Error;

/// Errors that can occur during orchestration.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Prompt missing or blank.
    #[error("prompt cannot be empty")]
    EmptyPrompt,

    /// Batch request without prompts.
    #[error("at least one prompt is required")]
    EmptyBatch,

    /// Batch request over the size limit.
    #[error("batch generation supports at most {max} prompts, got {actual}")]
    BatchTooLarge { max: usize, actual: usize },

    /// Delete request without file names.
    #[error("no images selected")]
    EmptySelection,

    /// The pipeline failed to synthesize.
    #[error("pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Reading or writing an image file failed.
    #[error("image file error: {0}")]
    Io(#[from] std::io::Error),

    /// Packing images into a ZIP failed.
    #[error("failed to build archive: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl OrchestratorError {
    /// Whether the caller sent something invalid, as opposed to a server-side failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyPrompt | Self::EmptyBatch | Self::BatchTooLarge { .. } | Self::EmptySelection
        )
    }
}
