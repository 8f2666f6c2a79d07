//! The ImagePipeline trait definition.

use async_trait::async_trait;

use crate::error::PipelineError;
use crate::request::{SynthesisRequest, SynthesizedImage};

/// A backend that turns a text prompt into an image.
///
/// Implementations range from a deterministic gradient renderer used in
/// tests to a client for a real diffusion server. The trait is object-safe
/// and can be used with `Box<dyn ImagePipeline>`.
///
/// Backends are assumed to be single-owner resources: callers must not
/// issue overlapping `synthesize` calls unless the backend says otherwise.
#[async_trait]
pub trait ImagePipeline: Send + Sync {
    /// Run one synthesis and return the encoded image.
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedImage, PipelineError>;

    /// Get a human-readable name for this backend.
    fn name(&self) -> &str;

    /// Check if the backend can accept work.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }

    /// Load weights or open connections ahead of the first request.
    ///
    /// Default implementation does nothing.
    async fn warm_up(&self) -> Result<(), PipelineError> {
        Ok(())
    }
}

#[async_trait]
impl<P: ImagePipeline + ?Sized> ImagePipeline for Box<P> {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedImage, PipelineError> {
        (**self).synthesize(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn is_ready(&self) -> bool {
        (**self).is_ready().await
    }

    async fn warm_up(&self) -> Result<(), PipelineError> {
        (**self).warm_up().await
    }
}
