//! Remote diffusion pipeline.
//!
//! The diffusion model itself lives in a separate process (for example a
//! Python server wrapping a pretrained pipeline with its GPU memory
//! optimizations). This crate speaks to that server over HTTP and exposes it
//! as an [`ImagePipeline`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use remote_pipeline::{ImagePipeline, RemotePipeline, SynthesisRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = RemotePipeline::from_env()?;
//!     pipeline.warm_up().await?;
//!     let image = pipeline.synthesize(SynthesisRequest::new("a lighthouse", 768, 768, 7)).await?;
//!     println!("{} bytes", image.png.len());
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod pipeline;

pub use config::RemotePipelineConfig;
pub use pipeline::RemotePipeline;

// Re-export image-core types for convenience
pub use image_core::{async_trait, ImagePipeline, PipelineError, SynthesisRequest, SynthesizedImage};
