//! Generation routes.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use orchestrator::{BatchOutcome, GenerateRequest, GenerationOutcome};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

/// A generated image as returned to the browser.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub image: String,
    pub filename: String,
    pub prompt: String,
    pub seed: u32,
    pub message: String,
}

impl GenerateResponse {
    fn new(outcome: GenerationOutcome, message: String) -> Self {
        Self {
            success: true,
            image: outcome.image,
            filename: outcome.filename,
            prompt: outcome.prompt,
            seed: outcome.seed,
            message,
        }
    }
}

/// Request to generate several prompts in one go.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub prompts: Vec<String>,
    /// Shared by every prompt in the batch.
    #[serde(default)]
    pub negative_prompt: Option<String>,
}

/// Batch result.
#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
    pub message: String,
}

/// Request to delete generated images.
#[derive(Debug, Deserialize)]
pub struct DeleteImagesRequest {
    #[serde(default)]
    pub filenames: Vec<String>,
}

/// Images to pack into a download.
#[derive(Debug, Deserialize)]
pub struct BatchDownloadRequest {
    #[serde(default)]
    pub filenames: Vec<String>,
}

/// Deletion result; failure fields appear only when something failed.
#[derive(Debug, Serialize)]
pub struct DeleteImagesResponse {
    pub success: bool,
    pub deleted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_files: Option<Vec<String>>,
    pub message: String,
}

/// Generate one image.
pub async fn generate(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let outcome = state.orchestrator.generate(req).await?;
    let message = format!("Image generated and saved as {}", outcome.filename);
    Ok(Json(GenerateResponse::new(outcome, message)))
}

/// Generate one image with a fixed (or reported) seed.
pub async fn seed_control(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<GenerateRequest>,
) -> Result<Json<GenerateResponse>> {
    let outcome = state.orchestrator.generate_with_seed(req).await?;
    let message = format!("Image generated (seed: {})", outcome.seed);
    Ok(Json(GenerateResponse::new(outcome, message)))
}

/// Generate a list of prompts, continuing past failures.
pub async fn batch_generate(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<BatchRequest>,
) -> Result<Json<BatchResponse>> {
    let outcome = state
        .orchestrator
        .generate_batch(req.prompts, req.negative_prompt)
        .await?;

    let message = format!(
        "Batch complete: {} succeeded, {} failed",
        outcome.succeeded, outcome.failed
    );

    Ok(Json(BatchResponse {
        success: true,
        outcome,
        message,
    }))
}

/// Delete images and their history records.
pub async fn delete_images(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<DeleteImagesRequest>,
) -> Result<Json<DeleteImagesResponse>> {
    let outcome = state.orchestrator.delete_images(&req.filenames).await?;
    info!(
        deleted = outcome.deleted,
        failed = outcome.failed_files.len(),
        "Deleted images"
    );

    let response = if outcome.failed_files.is_empty() {
        DeleteImagesResponse {
            success: true,
            deleted: outcome.deleted,
            failed: None,
            failed_files: None,
            message: format!("Deleted {} images", outcome.deleted),
        }
    } else {
        let failed = outcome.failed_files.len();
        DeleteImagesResponse {
            success: true,
            deleted: outcome.deleted,
            failed: Some(failed),
            failed_files: Some(outcome.failed_files),
            message: format!("Deleted {} images, {} failed", outcome.deleted, failed),
        }
    };

    Ok(Json(response))
}

/// Download the selected images as one ZIP attachment.
pub async fn batch_download(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<BatchDownloadRequest>,
) -> Result<Response> {
    let archive = state.orchestrator.archive_images(&req.filenames).await?;
    let disposition = format!("attachment; filename=\"{}\"", archive.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/zip".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive.bytes,
    )
        .into_response())
}
