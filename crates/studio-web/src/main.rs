//! Image studio web server.
//!
//! Serves the generation endpoints, history, favorites, prompt tools and the
//! generated images themselves.

mod config;
mod error;
mod extract;
mod routes;
mod state;

use mock_pipeline::GradientPipeline;
use remote_pipeline::RemotePipeline;
use tower_http::services::ServeDir;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, PipelineBackend};
use crate::state::{AppState, DynPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        addr = %config.addr,
        output_dir = %config.output_dir.display(),
        backend = ?config.backend,
        "Starting image studio"
    );

    tokio::fs::create_dir_all(&config.output_dir).await?;

    let pipeline = build_pipeline(config.backend)?;

    // Build application state
    let state = AppState::new(
        pipeline,
        config.output_dir.clone(),
        config.keywords_path.clone(),
        config.styles_path.clone(),
        config.defaults,
    );

    // Preload the model so the first request does not pay for it
    match state.orchestrator.warm_up().await {
        Ok(()) => info!(pipeline = %state.orchestrator.pipeline_name(), "Pipeline ready"),
        Err(err) => warn!(error = %err, "Pipeline warm-up failed, generation may fail until it recovers"),
    }

    // Build router
    let app = routes::router()
        .nest_service("/images", ServeDir::new(&config.output_dir))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Image studio listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_pipeline(backend: PipelineBackend) -> Result<DynPipeline, Box<dyn std::error::Error>> {
    let pipeline: DynPipeline = match backend {
        PipelineBackend::Mock => Box::new(GradientPipeline::new()),
        PipelineBackend::Remote => {
            let remote = RemotePipeline::from_env()?;
            info!(url = %remote.config().base_url, "Using remote pipeline");
            Box::new(remote)
        }
    };
    Ok(pipeline)
}
