//! Configuration for RemotePipeline.

use std::env;
use std::time::Duration;

use image_core::PipelineError;

/// Configuration for RemotePipeline.
#[derive(Debug, Clone)]
pub struct RemotePipelineConfig {
    /// Base URL of the diffusion server.
    pub base_url: String,

    /// Per-request timeout. Synthesis on consumer GPUs can take minutes.
    pub timeout: Duration,
}

impl Default for RemotePipelineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:7860".to_string(),
            timeout: Duration::from_secs(600),
        }
    }
}

impl RemotePipelineConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PIPELINE_URL` - Server URL (default: http://127.0.0.1:7860)
    /// - `PIPELINE_TIMEOUT_SECS` - Request timeout (default: 600)
    pub fn from_env() -> Result<Self, PipelineError> {
        let base_url =
            env::var("PIPELINE_URL").unwrap_or_else(|_| "http://127.0.0.1:7860".to_string());

        let timeout = match env::var("PIPELINE_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map(Duration::from_secs).map_err(|_| {
                PipelineError::Configuration(format!("invalid PIPELINE_TIMEOUT_SECS: {}", raw))
            })?,
            Err(_) => Duration::from_secs(600),
        };

        Ok(Self::builder().base_url(base_url).timeout(timeout).build())
    }

    /// Create a new config builder.
    pub fn builder() -> RemotePipelineConfigBuilder {
        RemotePipelineConfigBuilder::default()
    }

    /// URL for an endpoint on the server, tolerating a trailing slash in the base.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Builder for RemotePipelineConfig.
#[derive(Debug, Default)]
pub struct RemotePipelineConfigBuilder {
    config: RemotePipelineConfig,
}

impl RemotePipelineConfigBuilder {
    /// Set the server URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RemotePipelineConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = RemotePipelineConfig::builder()
            .base_url("http://gpu-box:9000/")
            .timeout(Duration::from_secs(30))
            .build();

        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.endpoint("synthesize"), "http://gpu-box:9000/synthesize");
    }

    #[test]
    fn test_defaults() {
        let config = RemotePipelineConfig::default();
        assert_eq!(config.endpoint("health"), "http://127.0.0.1:7860/health");
        assert_eq!(config.timeout, Duration::from_secs(600));
    }
}
