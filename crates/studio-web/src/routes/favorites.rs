//! Favorite prompt routes.

use axum::extract::{Path, State};
use axum::Json;
use gallery::{FavoriteRecord, GalleryError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, WebError};
use crate::routes::history::MessageResponse;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub success: bool,
    pub favorites: Vec<FavoriteRecord>,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    #[serde(default)]
    pub prompt: String,
    /// Display name; derived from the prompt when blank.
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddFavoriteResponse {
    pub success: bool,
    pub favorite: FavoriteRecord,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UseResponse {
    pub success: bool,
}

/// All favorites, newest first.
pub async fn list(State(state): State<AppState>) -> Json<FavoritesResponse> {
    let favorites = state.favorites.list().await;
    Json(FavoritesResponse {
        success: true,
        count: favorites.len(),
        favorites,
    })
}

/// Save a prompt as a favorite.
pub async fn add(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AddFavoriteRequest>,
) -> Result<Json<AddFavoriteResponse>> {
    let prompt = req.prompt.trim();
    if prompt.is_empty() {
        return Err(WebError::BadRequest("prompt is required".to_string()));
    }

    let name = req.name.as_deref().map(str::trim).filter(|n| !n.is_empty());
    let favorite = match state.favorites.add(prompt, name).await {
        Ok(favorite) => favorite,
        Err(GalleryError::AlreadyExists { .. }) => {
            return Err(WebError::BadRequest("This prompt is already a favorite".to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    info!(id = %favorite.id, "Favorite added");
    Ok(Json(AddFavoriteResponse {
        success: true,
        favorite,
        message: "Added to favorites".to_string(),
    }))
}

/// Remove a favorite. Unknown ids succeed.
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Json<MessageResponse> {
    let removed = state.favorites.remove(&id).await;
    debug!(id = %id, removed, "Favorite removed");
    Json(MessageResponse::ok("Removed from favorites"))
}

/// Count one use of a favorite.
pub async fn record_use(State(state): State<AppState>, Path(id): Path<String>) -> Json<UseResponse> {
    if !state.favorites.record_use(&id).await {
        debug!(id = %id, "Use recorded for unknown favorite");
    }
    Json(UseResponse { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::test_state;
    use axum::http::StatusCode;
    use tempfile::TempDir;

    fn add_request(prompt: &str, name: Option<&str>) -> JsonBody<AddFavoriteRequest> {
        JsonBody(AddFavoriteRequest {
            prompt: prompt.to_string(),
            name: name.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_add_list_use_remove() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let Json(added) = add(State(state.clone()), add_request("  a misty forest  ", Some("  ")))
            .await
            .unwrap();
        assert_eq!(added.favorite.prompt, "a misty forest");
        assert_eq!(added.favorite.name, "a misty forest");

        let id = added.favorite.id.clone();
        let Json(first_use) = record_use(State(state.clone()), Path(id.clone())).await;
        assert!(first_use.success);
        let _ = record_use(State(state.clone()), Path(id.clone())).await;

        let Json(listed) = list(State(state.clone())).await;
        assert_eq!(listed.count, 1);
        assert_eq!(listed.favorites[0].use_count, 2);

        let Json(removed) = remove(State(state.clone()), Path(id)).await;
        assert!(removed.success);
        let Json(listed) = list(State(state)).await;
        assert_eq!(listed.count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_and_empty_prompts_are_rejected() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);
        let _ = add(State(state.clone()), add_request("a cat", None)).await.unwrap();

        let duplicate = add(State(state.clone()), add_request("a cat", Some("again")))
            .await
            .unwrap_err();
        assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);

        let empty = add(State(state.clone()), add_request("   ", None)).await.unwrap_err();
        assert_eq!(empty.status(), StatusCode::BAD_REQUEST);

        assert_eq!(state.favorites.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_ids_still_succeed() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let Json(removed) = remove(State(state.clone()), Path("fav_0".to_string())).await;
        assert!(removed.success);
        let Json(used) = record_use(State(state), Path("fav_0".to_string())).await;
        assert!(used.success);
    }
}
