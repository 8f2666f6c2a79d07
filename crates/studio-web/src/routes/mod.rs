//! Route handlers for the studio web interface.

pub mod favorites;
pub mod generate;
pub mod health;
pub mod history;
pub mod index;
pub mod prompt;
pub mod templates;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML page
        .route("/", get(index::index_page))
        // Health check
        .route("/health", get(health::health))
        // Generation
        .route("/generate", post(generate::generate))
        .route("/seed-control", post(generate::seed_control))
        .route("/batch-generate", post(generate::batch_generate))
        .route("/delete-images", post(generate::delete_images))
        .route("/batch-download", post(generate::batch_download))
        // History and tags
        .route("/history", get(history::list).delete(history::clear))
        .route("/history/filter", post(history::filter))
        .route("/history/:id/tags", post(history::set_tags))
        .route("/tags", get(history::tags))
        // Favorites
        .route("/favorites", get(favorites::list).post(favorites::add))
        .route("/favorites/:id", delete(favorites::remove))
        .route("/favorites/:id/use", post(favorites::record_use))
        // Prompt assistant
        .route("/prompt/suggestions", post(prompt::suggestions))
        .route("/prompt/enhance", post(prompt::enhance))
        .route("/prompt/templates", get(prompt::templates))
        .route("/prompt/apply-template", post(prompt::apply_template))
        // Presets
        .route("/templates", get(templates::styles))
        .route("/size-presets", get(templates::size_presets))
}
