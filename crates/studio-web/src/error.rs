//! Error types for the studio web interface.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gallery::GalleryError;
use orchestrator::OrchestratorError;
use prompt_assistant::AssistantError;
use thiserror::Error;

/// Errors that can occur in the studio web interface.
#[derive(Debug, Error)]
pub enum WebError {
    /// Request was missing something it needs.
    #[error("{0}")]
    BadRequest(String),

    /// Requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Generation error.
    #[error("{0}")]
    Orchestrator(#[from] OrchestratorError),

    /// Prompt assistant error.
    #[error("{0}")]
    Assistant(#[from] AssistantError),

    /// History or favorites error.
    #[error("{0}")]
    Gallery(#[from] GalleryError),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Orchestrator(err) if err.is_validation() => StatusCode::BAD_REQUEST,
            WebError::Orchestrator(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Assistant(AssistantError::EmptyPrompt) => StatusCode::BAD_REQUEST,
            WebError::Assistant(AssistantError::TemplateNotFound(_))
            | WebError::Assistant(AssistantError::StylesMissing(_)) => StatusCode::NOT_FOUND,
            WebError::Assistant(AssistantError::Dataset { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Gallery(GalleryError::AlreadyExists { .. }) => StatusCode::BAD_REQUEST,
            WebError::Gallery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        WebError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        } else {
            tracing::debug!(status = %status, "Request rejected: {}", message);
        }

        let body = serde_json::json!({
            "success": false,
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for studio handlers.
pub type Result<T> = std::result::Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use image_core::PipelineError;
    use std::path::PathBuf;

    #[test]
    fn test_status_mapping() {
        assert_eq!(WebError::from(OrchestratorError::EmptyPrompt).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            WebError::from(OrchestratorError::BatchTooLarge { max: 20, actual: 21 }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::from(OrchestratorError::from(PipelineError::SynthesisFailed("oom".into()))).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebError::from(AssistantError::TemplateNotFound("x".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(AssistantError::StylesMissing(PathBuf::from("t.json"))).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(GalleryError::AlreadyExists { entity: "favorite", id: "p".into() }).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_response_status() {
        let response = WebError::NotFound("record not found".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
