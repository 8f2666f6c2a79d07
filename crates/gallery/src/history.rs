//! Generation history.

use std::path::Path;

use crate::models::HistoryRecord;
use crate::store::JsonStore;
use crate::tags::{self, TagCount};

/// History keeps at most this many records; older ones fall off the tail.
pub const HISTORY_LIMIT: usize = 50;

/// File name of the history document inside the output directory.
pub const HISTORY_FILE: &str = "history.json";

/// Newest-first record of generated images, capped at [`HISTORY_LIMIT`].
#[derive(Debug, Clone)]
pub struct HistoryStore {
    store: JsonStore<HistoryRecord>,
}

impl HistoryStore {
    /// History stored as `history.json` in `output_dir`.
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self::with_store(JsonStore::new(
            output_dir.as_ref().join(HISTORY_FILE),
            Some(HISTORY_LIMIT),
        ))
    }

    /// Wrap an existing store (custom path or cap).
    pub fn with_store(store: JsonStore<HistoryRecord>) -> Self {
        Self { store }
    }

    /// All records, newest first.
    pub async fn list(&self) -> Vec<HistoryRecord> {
        self.store.load().await
    }

    /// Record a newly generated image.
    pub async fn add(
        &self,
        prompt: impl Into<String>,
        filename: impl Into<String>,
        tags: Vec<String>,
    ) -> HistoryRecord {
        let record = HistoryRecord::new(prompt, filename, tags);
        tracing::debug!(id = %record.id, filename = %record.filename, "Adding history record");
        self.store.append(record).await
    }

    /// Replace the tags of record `id`. Returns `false` if no such record exists.
    pub async fn set_tags(&self, id: &str, tags: Vec<String>) -> bool {
        self.store
            .update_where(|record| record.id == id, move |record| record.tags = tags)
            .await
    }

    /// Drop the records for the given image files.
    pub async fn remove_by_filenames(&self, filenames: &[String]) -> usize {
        self.store
            .remove_where(|record| filenames.contains(&record.filename))
            .await
    }

    /// Remove every record. Image files are left in place.
    pub async fn clear(&self) -> bool {
        self.store.clear().await
    }

    /// Tag usage across the whole history, most used first.
    pub async fn tag_frequencies(&self) -> Vec<TagCount> {
        tags::tag_frequencies(&self.list().await)
    }

    /// Records carrying any of `filter`; everything when `filter` is empty.
    pub async fn filter_by_tags(&self, filter: &[String]) -> Vec<HistoryRecord> {
        tags::filter_by_tags(self.list().await, filter)
    }
}
