//! Wire types for the diffusion server.

use serde::{Deserialize, Serialize};

/// Body of `POST /synthesize`.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesizeBody<'a> {
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<&'a str>,
    pub width: u32,
    pub height: u32,
    pub seed: u32,
    pub num_inference_steps: u32,
    pub guidance_scale: f32,
}

/// Successful synthesis response.
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizeResponse {
    /// Base64 PNG, optionally as a `data:` URI.
    pub image: String,
    /// Seed actually used, when the server reports it.
    #[serde(default)]
    pub seed: Option<u32>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub model_loaded: bool,
}
