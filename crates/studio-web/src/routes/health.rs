//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
    pub pipeline: String,
    pub ready: bool,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        pipeline: state.orchestrator.pipeline_name().to_string(),
        ready: state.orchestrator.is_ready().await,
    })
}
