//! Prompt assistant routes.

use axum::extract::State;
use axum::Json;
use indexmap::IndexMap;
use prompt_assistant::{AppliedTemplate, Enhancement, KeywordDataset, PromptTemplate, Suggestion};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WebError};
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct TemplatesResponse {
    pub templates: Vec<PromptTemplate>,
    pub categories: IndexMap<String, Vec<PromptTemplate>>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct ApplyTemplateRequest {
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub subject: String,
}

async fn dataset(state: &AppState) -> Result<KeywordDataset> {
    Ok(KeywordDataset::load(state.keywords_path.as_path()).await?)
}

/// Keyword completions for partial input.
pub async fn suggestions(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SuggestRequest>,
) -> Result<Json<SuggestResponse>> {
    let dataset = dataset(&state).await?;
    let suggestions = prompt_assistant::suggest(&dataset, &req.input);
    debug!(input = %req.input, count = suggestions.len(), "Prompt suggestions");
    Ok(Json(SuggestResponse { suggestions }))
}

/// Append quality and rule-driven keywords.
pub async fn enhance(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<EnhanceRequest>,
) -> Result<Json<Enhancement>> {
    if req.prompt.trim().is_empty() {
        return Err(WebError::BadRequest("prompt cannot be empty".to_string()));
    }
    let dataset = dataset(&state).await?;
    Ok(Json(prompt_assistant::enhance(&dataset, &req.prompt)?))
}

/// All prompt templates, flat and grouped by category.
pub async fn templates(State(state): State<AppState>) -> Result<Json<TemplatesResponse>> {
    let dataset = dataset(&state).await?;
    let categories = prompt_assistant::templates_by_category(&dataset);
    Ok(Json(TemplatesResponse {
        total: dataset.templates.len(),
        templates: dataset.templates,
        categories,
    }))
}

/// Fill a template with the caller's subject.
pub async fn apply_template(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ApplyTemplateRequest>,
) -> Result<Json<AppliedTemplate>> {
    let template_id = match req.template_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => return Err(WebError::BadRequest("template_id is required".to_string())),
    };

    let dataset = dataset(&state).await?;
    Ok(Json(prompt_assistant::apply_template(&dataset, &template_id, &req.subject)?))
}
