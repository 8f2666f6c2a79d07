//! Prompt favorites.

use std::path::Path;

use crate::models::FavoriteRecord;
use crate::store::JsonStore;
use crate::{GalleryError, Result};

/// File name of the favorites document inside the output directory.
pub const FAVORITES_FILE: &str = "favorites.json";

/// Saved prompts, newest first, unique by prompt text. Unbounded.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    store: JsonStore<FavoriteRecord>,
}

impl FavoritesStore {
    /// Favorites stored as `favorites.json` in `output_dir`.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self::with_store(JsonStore::new(output_dir.as_ref().join(FAVORITES_FILE), None))
    }

    pub fn with_store(store: JsonStore<FavoriteRecord>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Vec<FavoriteRecord> {
        self.store.load().await
    }

    /// Save a prompt. Fails with [`GalleryError::AlreadyExists`] if the exact
    /// prompt is already a favorite; the collection is left unchanged.
    pub async fn add(&self, prompt: &str, name: Option<&str>) -> Result<FavoriteRecord> {
        let favorite = FavoriteRecord::new(prompt, name);

        self.store
            .try_modify(move |favorites| {
                if favorites.iter().any(|existing| existing.prompt == favorite.prompt) {
                    return Err(GalleryError::AlreadyExists {
                        entity: "favorite",
                        id: favorite.prompt,
                    });
                }
                favorites.insert(0, favorite.clone());
                Ok(favorite)
            })
            .await
    }

    /// Delete favorite `id`. Unknown ids remove nothing.
    pub async fn remove(&self, id: &str) -> usize {
        self.store.remove_where(|favorite| favorite.id == id).await
    }

    /// Count one use of favorite `id`. Returns `false` for unknown ids.
    pub async fn record_use(&self, id: &str) -> bool {
        self.store
            .update_where(
                |favorite| favorite.id == id,
                |favorite| favorite.use_count = favorite.use_count.saturating_add(1),
            )
            .await
    }
}
