//! Application state shared across handlers.

use std::path::PathBuf;
use std::sync::Arc;

use gallery::{FavoritesStore, HistoryStore};
use image_core::ImagePipeline;
use orchestrator::{GenerationDefaults, Orchestrator};

/// Pipeline type chosen at startup.
pub type DynPipeline = Box<dyn ImagePipeline>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Generation, image files and the history they feed.
    pub orchestrator: Arc<Orchestrator<DynPipeline>>,
    /// Same collection the orchestrator appends to.
    pub history: HistoryStore,
    pub favorites: FavoritesStore,
    /// Prompt keyword dataset, read per request.
    pub keywords_path: Arc<PathBuf>,
    /// Style template catalog, read per request.
    pub styles_path: Arc<PathBuf>,
}

impl AppState {
    /// Build the state around `pipeline`, keeping all records in `output_dir`.
    pub fn new(
        pipeline: DynPipeline,
        output_dir: impl Into<PathBuf>,
        keywords_path: impl Into<PathBuf>,
        styles_path: impl Into<PathBuf>,
        defaults: GenerationDefaults,
    ) -> Self {
        let output_dir = output_dir.into();
        let history = HistoryStore::new(&output_dir);
        let favorites = FavoritesStore::new(&output_dir);
        let orchestrator = Orchestrator::new(pipeline, history.clone(), output_dir, defaults);

        Self {
            orchestrator: Arc::new(orchestrator),
            history,
            favorites,
            keywords_path: Arc::new(keywords_path.into()),
            styles_path: Arc::new(styles_path.into()),
        }
    }

    pub fn defaults(&self) -> GenerationDefaults {
        self.orchestrator.defaults()
    }
}
