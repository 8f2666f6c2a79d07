//! Mock image pipelines for exercising the generation flow offline.
//!
//! This crate provides mock implementations of the `ImagePipeline` trait:
//! - `GradientPipeline` - Renders a deterministic, seed-dependent gradient
//! - `FailingPipeline` - Always fails, for error-path tests
//! - `DelayedPipeline` - Wraps another pipeline with artificial delay
//!
//! For real synthesis, use the `remote-pipeline` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_pipeline::{GradientPipeline, ImagePipeline, SynthesisRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_pipeline::PipelineError> {
//!     let pipeline = GradientPipeline::new();
//!     let image = pipeline.synthesize(SynthesisRequest::new("a red cat", 64, 64, 42)).await?;
//!     println!("{} bytes of PNG", image.png.len());
//!     Ok(())
//! }
//! ```

mod delayed;
mod failing;
mod gradient;

// Re-export image-core types for convenience
pub use image_core::{async_trait, ImagePipeline, PipelineError, SynthesisRequest, SynthesizedImage};

pub use delayed::DelayedPipeline;
pub use failing::FailingPipeline;
pub use gradient::GradientPipeline;
