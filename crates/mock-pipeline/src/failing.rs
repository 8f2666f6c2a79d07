//! Failing pipeline - every call errors.

use async_trait::async_trait;
use image_core::{ImagePipeline, PipelineError, SynthesisRequest, SynthesizedImage};

/// A pipeline that always fails with the configured message.
///
/// Stands in for out-of-memory or model errors in tests.
#[derive(Debug, Clone)]
pub struct FailingPipeline {
    message: String,
}

impl FailingPipeline {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Simulate the GPU running out of memory.
    pub fn out_of_memory() -> Self {
        Self::new("CUDA out of memory")
    }
}

impl Default for FailingPipeline {
    fn default() -> Self {
        Self::new("synthesis failed")
    }
}

#[async_trait]
impl ImagePipeline for FailingPipeline {
    async fn synthesize(&self, _request: SynthesisRequest) -> Result<SynthesizedImage, PipelineError> {
        Err(PipelineError::SynthesisFailed(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingPipeline"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}
