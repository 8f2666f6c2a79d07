//! RemotePipeline implementation using a diffusion server's HTTP API.

use async_trait::async_trait;
use base64::Engine;
use image_core::{ImagePipeline, PipelineError, SynthesisRequest, SynthesizedImage};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{ApiError, HealthResponse, SynthesizeBody, SynthesizeResponse};
use crate::config::RemotePipelineConfig;

/// A pipeline that forwards every synthesis to an external diffusion server.
pub struct RemotePipeline {
    client: Client,
    config: RemotePipelineConfig,
}

impl RemotePipeline {
    /// Create a new RemotePipeline with the given configuration.
    pub fn new(config: RemotePipelineConfig) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PipelineError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(url = %config.base_url, "RemotePipeline initialized");

        Ok(Self { client, config })
    }

    /// Create a RemotePipeline from environment variables.
    ///
    /// See [`RemotePipelineConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, PipelineError> {
        Self::new(RemotePipelineConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &RemotePipelineConfig {
        &self.config
    }
}

/// Decode the server's base64 payload, accepting a `data:` URI prefix.
fn decode_image(encoded: &str) -> Result<Vec<u8>, PipelineError> {
    let payload = match encoded.split_once(";base64,") {
        Some((_, data)) => data,
        None => encoded,
    };

    base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| PipelineError::InvalidResponse(format!("image is not valid base64: {}", e)))
}

/// Turn a non-2xx body into the most useful message available.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => format!("server error ({}): {}", status, api_error.error),
        Err(_) => format!("server error ({}): {}", status, body),
    }
}

#[async_trait]
impl ImagePipeline for RemotePipeline {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedImage, PipelineError> {
        let body = SynthesizeBody {
            prompt: &request.prompt,
            negative_prompt: request.negative_prompt.as_deref(),
            width: request.width,
            height: request.height,
            seed: request.seed,
            num_inference_steps: request.steps,
            guidance_scale: request.guidance_scale,
        };

        debug!(prompt = %request.prompt, seed = request.seed, "Sending synthesis request");

        let response = self
            .client
            .post(self.config.endpoint("synthesize"))
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::SynthesisFailed(error_message(
                status.as_u16(),
                &error_text,
            )));
        }

        let parsed: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let png = decode_image(&parsed.image)?;
        let seed = parsed.seed.unwrap_or(request.seed);

        Ok(SynthesizedImage::new(png, request.width, request.height, seed))
    }

    fn name(&self) -> &str {
        "RemotePipeline"
    }

    async fn is_ready(&self) -> bool {
        let response = match self.client.get(self.config.endpoint("health")).send().await {
            Ok(response) if response.status().is_success() => response,
            _ => return false,
        };

        response
            .json::<HealthResponse>()
            .await
            .map(|health| health.model_loaded)
            .unwrap_or(false)
    }

    async fn warm_up(&self) -> Result<(), PipelineError> {
        let response = self
            .client
            .post(self.config.endpoint("load"))
            .send()
            .await
            .map_err(|e| PipelineError::Unavailable(format!("diffusion server unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::Unavailable(error_message(status.as_u16(), &error_text)));
        }

        info!("Remote model loaded");
        Ok(())
    }
}
