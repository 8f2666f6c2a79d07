//! Main orchestrator that coordinates generation.

use std::collections::HashSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use base64::Engine;
use chrono::Local;
use gallery::HistoryStore;
use image_core::{ImagePipeline, PipelineError, SynthesisRequest};
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::OrchestratorError;
use crate::naming::{archive_name, is_safe_filename, Naming};
use crate::outcome::{BatchItemResult, BatchOutcome, DeleteOutcome, GenerationOutcome, ImageArchive};
use crate::request::{GenerateRequest, GenerationDefaults};

/// Largest accepted batch; bigger ones risk exhausting GPU memory.
pub const MAX_BATCH_SIZE: usize = 20;

/// Coordinates synthesis, image files and history.
///
/// The pipeline is a single-owner resource: the orchestrator keeps it behind
/// an async mutex so concurrent requests queue instead of running the model
/// twice at once.
pub struct Orchestrator<P: ImagePipeline> {
    /// Pipeline, one synthesis at a time.
    pipeline: Mutex<P>,
    /// Cached so status checks never wait on a running synthesis.
    pipeline_name: String,
    /// Where successful generations are recorded.
    history: HistoryStore,
    /// Directory for PNG files.
    output_dir: PathBuf,
    defaults: GenerationDefaults,
}

impl<P: ImagePipeline> Orchestrator<P> {
    /// Create a new orchestrator with the given components.
    pub fn new(
        pipeline: P,
        history: HistoryStore,
        output_dir: impl Into<PathBuf>,
        defaults: GenerationDefaults,
    ) -> Self {
        let pipeline_name = pipeline.name().to_string();
        Self {
            pipeline: Mutex::new(pipeline),
            pipeline_name,
            history,
            output_dir: output_dir.into(),
            defaults,
        }
    }

    pub fn pipeline_name(&self) -> &str {
        &self.pipeline_name
    }

    pub fn defaults(&self) -> GenerationDefaults {
        self.defaults
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether the pipeline can take work. A pipeline that is busy synthesizing counts as ready.
    pub async fn is_ready(&self) -> bool {
        match self.pipeline.try_lock() {
            Ok(pipeline) => pipeline.is_ready().await,
            Err(_) => true,
        }
    }

    /// Preload the model so the first request does not pay for it.
    pub async fn warm_up(&self) -> Result<(), OrchestratorError> {
        let pipeline = self.pipeline.lock().await;
        info!(pipeline = %self.pipeline_name, "Warming up pipeline");
        pipeline.warm_up().await?;
        Ok(())
    }

    /// Generate one image, named `generated_<stamp>.png`.
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerationOutcome, OrchestratorError> {
        self.run(request, Naming::Generated).await
    }

    /// Generate one image with a reproducible seed, named `seed_<seed>_<stamp>.png`.
    ///
    /// A seed is drawn when the request has none, and reported back.
    pub async fn generate_with_seed(&self, request: GenerateRequest) -> Result<GenerationOutcome, OrchestratorError> {
        self.run(request, Naming::Seeded).await
    }

    /// Generate each prompt in turn, continuing past failures.
    ///
    /// Blank prompts are skipped. Every item uses the default size.
    pub async fn generate_batch(
        &self,
        prompts: Vec<String>,
        negative_prompt: Option<String>,
    ) -> Result<BatchOutcome, OrchestratorError> {
        if prompts.is_empty() {
            return Err(OrchestratorError::EmptyBatch);
        }
        if prompts.len() > MAX_BATCH_SIZE {
            return Err(OrchestratorError::BatchTooLarge {
                max: MAX_BATCH_SIZE,
                actual: prompts.len(),
            });
        }

        let total = prompts.len();
        info!(total, "Starting batch generation");

        let mut results = Vec::with_capacity(total);
        let mut failed = 0;

        for (offset, prompt) in prompts.into_iter().enumerate() {
            let index = offset + 1;
            let prompt = prompt.trim().to_string();
            if prompt.is_empty() {
                continue;
            }

            let request = GenerateRequest {
                prompt: prompt.clone(),
                negative_prompt: negative_prompt.clone(),
                ..Default::default()
            };

            match self.run(request, Naming::BatchItem(index)).await {
                Ok(outcome) => {
                    info!(index, total, filename = %outcome.filename, "Batch item generated");
                    results.push(BatchItemResult {
                        index,
                        prompt,
                        success: true,
                        filename: Some(outcome.filename),
                        image: Some(outcome.image),
                        error: None,
                    });
                }
                Err(err) => {
                    warn!(index, total, error = %err, "Batch item failed");
                    failed += 1;
                    results.push(BatchItemResult {
                        index,
                        prompt,
                        success: false,
                        filename: None,
                        image: None,
                        error: Some(err.to_string()),
                    });
                }
            }
        }

        let succeeded = results.len() - failed;
        info!(succeeded, failed, total, "Batch generation complete");

        Ok(BatchOutcome {
            total,
            succeeded,
            failed,
            results,
        })
    }

    /// Delete image files and their history records.
    ///
    /// History records go even if their file was already missing. Names that
    /// could escape the output directory are refused and reported as failed.
    pub async fn delete_images(&self, filenames: &[String]) -> Result<DeleteOutcome, OrchestratorError> {
        if filenames.is_empty() {
            return Err(OrchestratorError::EmptySelection);
        }

        let mut outcome = DeleteOutcome::default();
        let mut removable = Vec::with_capacity(filenames.len());

        for filename in filenames {
            if !is_safe_filename(filename) {
                warn!(filename = %filename, "Refusing to delete unsafe file name");
                outcome.failed_files.push(filename.clone());
                continue;
            }

            let path = self.output_dir.join(filename);
            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    info!(filename = %filename, "Deleted image");
                    outcome.deleted += 1;
                    removable.push(filename.clone());
                }
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    removable.push(filename.clone());
                }
                Err(err) => {
                    warn!(filename = %filename, error = %err, "Failed to delete image");
                    outcome.failed_files.push(filename.clone());
                }
            }
        }

        self.history.remove_by_filenames(&removable).await;
        Ok(outcome)
    }

    /// Pack the selected images into a ZIP, each stored under its own name.
    ///
    /// Names that are missing on disk, repeated, or could escape the output
    /// directory are skipped rather than failing the archive.
    pub async fn archive_images(&self, filenames: &[String]) -> Result<ImageArchive, OrchestratorError> {
        if filenames.is_empty() {
            return Err(OrchestratorError::EmptySelection);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        for filename in filenames {
            if !is_safe_filename(filename) {
                warn!(filename = %filename, "Refusing to archive unsafe file name");
                skipped.push(filename.clone());
                continue;
            }
            if !seen.insert(filename.as_str()) {
                skipped.push(filename.clone());
                continue;
            }

            match tokio::fs::read(self.output_dir.join(filename)).await {
                Ok(bytes) => entries.push((filename.clone(), bytes)),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    debug!(filename = %filename, "Skipping missing image");
                    skipped.push(filename.clone());
                }
                Err(err) => return Err(err.into()),
            }
        }

        let bytes = pack_zip(&entries)?;
        let included: Vec<String> = entries.into_iter().map(|(name, _)| name).collect();
        let file_name = archive_name(Local::now());
        info!(
            archive = %file_name,
            included = included.len(),
            skipped = skipped.len(),
            "Built image archive"
        );

        Ok(ImageArchive {
            file_name,
            bytes,
            included,
            skipped,
        })
    }

    /// Shared path for single, seeded and batch generation.
    async fn run(&self, request: GenerateRequest, naming: Naming) -> Result<GenerationOutcome, OrchestratorError> {
        if request.prompt.trim().is_empty() {
            return Err(OrchestratorError::EmptyPrompt);
        }

        let width = request.width.filter(|w| *w > 0).unwrap_or(self.defaults.width);
        let height = request.height.filter(|h| *h > 0).unwrap_or(self.defaults.height);
        let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());

        let synthesis = SynthesisRequest::new(request.synthesis_prompt(), width, height, seed)
            .with_negative_prompt(request.negative_prompt.clone())
            .with_sampling(self.defaults.steps, self.defaults.guidance_scale);

        info!(
            prompt = %synthesis.prompt,
            seed,
            width,
            height,
            pipeline = %self.pipeline_name,
            "Generating image"
        );

        let image = {
            let pipeline = self.pipeline.lock().await;
            pipeline.synthesize(synthesis).await?
        };

        if image.png.is_empty() {
            return Err(PipelineError::InvalidResponse("pipeline returned an empty image".to_string()).into());
        }

        let filename = naming.file_name(image.seed, Local::now());
        tokio::fs::create_dir_all(&self.output_dir).await?;
        tokio::fs::write(self.output_dir.join(&filename), &image.png).await?;
        debug!(filename = %filename, bytes = image.png.len(), "Image saved");

        let record = self
            .history
            .add(request.prompt.clone(), filename.clone(), Vec::new())
            .await;

        let encoded = base64::engine::general_purpose::STANDARD.encode(&image.png);

        Ok(GenerationOutcome {
            image: format!("data:image/png;base64,{}", encoded),
            filename,
            prompt: request.prompt,
            seed: image.seed,
            width: image.width,
            height: image.height,
            record,
        })
    }
}

/// Deflate `entries` into an in-memory ZIP.
fn pack_zip(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, OrchestratorError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in entries {
        writer.start_file(name.as_str(), options)?;
        writer.write_all(bytes)?;
    }

    Ok(writer.finish()?.into_inner())
}
