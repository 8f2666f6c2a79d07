//! Core trait and types for text-to-image pipelines.
//!
//! This crate provides the shared interface between the generation
//! orchestrator and whatever actually produces pixels. It defines:
//!
//! - [`ImagePipeline`] - The trait that all pipeline backends must implement
//! - [`SynthesisRequest`] / [`SynthesizedImage`] - Input and output of one synthesis call
//! - [`PipelineError`] - Error types for pipeline operations
//!
//! # Example
//!
//! ```rust
//! use image_core::{async_trait, ImagePipeline, PipelineError, SynthesisRequest, SynthesizedImage};
//!
//! struct BlankPipeline;
//!
//! #[async_trait]
//! impl ImagePipeline for BlankPipeline {
//!     async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedImage, PipelineError> {
//!         Ok(SynthesizedImage::new(Vec::new(), request.width, request.height, request.seed))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "BlankPipeline"
//!     }
//! }
//! ```

mod error;
mod request;
mod trait_def;

pub use error::PipelineError;
pub use request::{SynthesisRequest, SynthesizedImage};
pub use trait_def::ImagePipeline;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
