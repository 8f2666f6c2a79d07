//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use orchestrator::GenerationDefaults;

/// Which pipeline implementation serves synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineBackend {
    /// In-process gradient renderer, no model needed.
    Mock,
    /// HTTP inference server at `PIPELINE_URL`.
    Remote,
}

impl FromStr for PipelineBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "remote" => Ok(Self::Remote),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Studio web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory for generated images, history and favorites.
    pub output_dir: PathBuf,
    /// Prompt keyword dataset.
    pub keywords_path: PathBuf,
    /// Style template catalog.
    pub styles_path: PathBuf,
    /// Size and sampling used when a request leaves them out.
    pub defaults: GenerationDefaults,
    pub backend: PipelineBackend,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `STUDIO_ADDR` | Server bind address | `127.0.0.1:5000` |
    /// | `STUDIO_OUTPUT_DIR` | Images, history and favorites | `generated_images` |
    /// | `STUDIO_KEYWORDS_PATH` | Prompt keyword dataset | `data/prompt_keywords.json` |
    /// | `STUDIO_STYLES_PATH` | Style templates | `data/templates.json` |
    /// | `IMAGE_WIDTH` | Default width | `768` |
    /// | `IMAGE_HEIGHT` | Default height | `768` |
    /// | `NUM_INFERENCE_STEPS` | Denoising steps | `9` |
    /// | `GUIDANCE_SCALE` | Guidance scale | `0.0` |
    /// | `PIPELINE_BACKEND` | `mock` or `remote` | `mock` |
    ///
    /// The remote backend reads `PIPELINE_URL` and `PIPELINE_TIMEOUT_SECS` itself.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("STUDIO_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let output_dir = env::var("STUDIO_OUTPUT_DIR")
            .unwrap_or_else(|_| "generated_images".to_string())
            .into();

        let keywords_path = env::var("STUDIO_KEYWORDS_PATH")
            .unwrap_or_else(|_| "data/prompt_keywords.json".to_string())
            .into();

        let styles_path = env::var("STUDIO_STYLES_PATH")
            .unwrap_or_else(|_| "data/templates.json".to_string())
            .into();

        let fallback = GenerationDefaults::default();
        let defaults = GenerationDefaults {
            width: parse_var("IMAGE_WIDTH", fallback.width)?,
            height: parse_var("IMAGE_HEIGHT", fallback.height)?,
            steps: parse_var("NUM_INFERENCE_STEPS", fallback.steps)?,
            guidance_scale: parse_var("GUIDANCE_SCALE", fallback.guidance_scale)?,
        };

        let backend = match env::var("PIPELINE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => PipelineBackend::Mock,
        };

        Ok(Self {
            addr,
            output_dir,
            keywords_path,
            styles_path,
            defaults,
            backend,
        })
    }
}

/// Read `name` as a `T`, or `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid STUDIO_ADDR format")]
    InvalidAddr,

    #[error("{0} must be a number")]
    InvalidNumber(&'static str),

    #[error("Unknown PIPELINE_BACKEND '{0}', expected 'mock' or 'remote'")]
    UnknownBackend(String),
}
