//! History and tag routes.

use axum::extract::{Path, State};
use axum::Json;
use gallery::{HistoryRecord, TagCount};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, WebError};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub history: Vec<HistoryRecord>,
}

#[derive(Debug, Serialize)]
pub struct FilteredHistoryResponse {
    pub success: bool,
    pub history: Vec<HistoryRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub success: bool,
    pub tags: Vec<TagCount>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Tags to set on a record, or to filter by.
#[derive(Debug, Default, Deserialize)]
pub struct TagsRequest {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// All history, newest first.
pub async fn list(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        success: true,
        history: state.history.list().await,
    })
}

/// Forget all history. Image files stay on disk.
///
/// A failed write is logged by the store and still reported as success.
pub async fn clear(State(state): State<AppState>) -> Json<MessageResponse> {
    if state.history.clear().await {
        info!("History cleared");
    }
    Json(MessageResponse::ok("History cleared"))
}

/// Replace the tags on one record.
pub async fn set_tags(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<TagsRequest>,
) -> Result<Json<MessageResponse>> {
    if !state.history.set_tags(&id, req.tags).await {
        return Err(WebError::NotFound(format!("history record not found: {}", id)));
    }
    Ok(Json(MessageResponse::ok("Tags updated")))
}

/// Records carrying any of the requested tags.
pub async fn filter(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<TagsRequest>,
) -> Json<FilteredHistoryResponse> {
    let history = state.history.filter_by_tags(&req.tags).await;
    Json(FilteredHistoryResponse {
        success: true,
        count: history.len(),
        history,
    })
}

/// Tag usage, most used first.
pub async fn tags(State(state): State<AppState>) -> Json<TagsResponse> {
    Json(TagsResponse {
        success: true,
        tags: state.history.tag_frequencies().await,
    })
}
