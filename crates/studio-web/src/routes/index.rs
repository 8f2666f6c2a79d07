//! Index page.

use askama::Template;
use axum::extract::State;
use gallery::HistoryRecord;

use crate::state::AppState;

/// Recent images shown on the index page.
const RECENT_LIMIT: usize = 12;

/// Index page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub pipeline: String,
    pub width: u32,
    pub height: u32,
    pub recent: Vec<HistoryRecord>,
}

/// Render the index page.
pub async fn index_page(State(state): State<AppState>) -> IndexTemplate {
    let defaults = state.defaults();
    let mut recent = state.history.list().await;
    recent.truncate(RECENT_LIMIT);

    IndexTemplate {
        pipeline: state.orchestrator.pipeline_name().to_string(),
        width: defaults.width,
        height: defaults.height,
        recent,
    }
}
