//! Generation orchestrator for coordinating synthesis and persistence.
//!
//! This crate provides the [`Orchestrator`] type which turns a generation
//! request into a pipeline call and records the result.
//!
//! # Architecture
//!
//! ```text
//! GenerateRequest (from studio-web)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Validate prompt                                         │
//! │         ↓                                                   │
//! │  2. Resolve size, seed, steps, guidance; append style       │
//! │         ↓                                                   │
//! │  3. Synthesize (one call at a time, pipeline is exclusive)  │
//! │         ↓                                                   │
//! │  4. Write PNG to the output directory                       │
//! │         ↓                                                   │
//! │  5. Append history record with the caller's prompt          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is rolled back: if step 5 is never reached the PNG from step 4
//! stays on disk.
//!
//! # Example
//!
//! ```rust,ignore
//! use gallery::HistoryStore;
//! use mock_pipeline::GradientPipeline;
//! use orchestrator::{GenerateRequest, GenerationDefaults, Orchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = Orchestrator::new(
//!         GradientPipeline::new(),
//!         HistoryStore::new("generated_images"),
//!         "generated_images",
//!         GenerationDefaults::default(),
//!     );
//!
//!     let outcome = orchestrator.generate(GenerateRequest::new("a red cat")).await?;
//!     println!("Saved {}", outcome.filename);
//!     Ok(())
//! }
//! ```

mod error;
mod naming;
mod orchestrator;
mod outcome;
mod request;

pub use error::OrchestratorError;
pub use naming::{archive_name, is_safe_filename, Naming};
pub use orchestrator::{Orchestrator, MAX_BATCH_SIZE};
pub use outcome::{BatchItemResult, BatchOutcome, DeleteOutcome, GenerationOutcome, ImageArchive};
pub use request::{GenerateRequest, GenerationDefaults};
