//! Delayed pipeline implementation - wraps another pipeline with artificial delay.

use std::time::Duration;

use async_trait::async_trait;
use image_core::{ImagePipeline, PipelineError, SynthesisRequest, SynthesizedImage};
use tokio::time::sleep;

/// A pipeline that wraps another pipeline and adds artificial delay.
///
/// Useful for testing that synthesis calls are serialized and for
/// simulating model latency.
pub struct DelayedPipeline<P: ImagePipeline> {
    inner: P,
    delay: Duration,
}

impl<P: ImagePipeline> DelayedPipeline<P> {
    /// Create a new DelayedPipeline wrapping the given pipeline with the specified delay.
    pub fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a pipeline with a delay in milliseconds.
    pub fn with_millis(inner: P, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<P: ImagePipeline> ImagePipeline for DelayedPipeline<P> {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedImage, PipelineError> {
        sleep(self.delay).await;
        self.inner.synthesize(request).await
    }

    fn name(&self) -> &str {
        "DelayedPipeline"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }

    async fn warm_up(&self) -> Result<(), PipelineError> {
        self.inner.warm_up().await
    }
}
