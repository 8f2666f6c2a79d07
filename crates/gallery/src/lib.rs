//! JSON persistence layer for generated-image bookkeeping.
//!
//! This crate provides the record collections kept next to the generated
//! images: the bounded generation history (with its derived tag index) and
//! the prompt favorites. Each collection is a single JSON array on disk,
//! rewritten in full on every change.
//!
//! # Example
//!
//! ```no_run
//! use gallery::{FavoritesStore, HistoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let history = HistoryStore::new("generated_images");
//!     let record = history.add("a red cat", "generated_20250101_120000.png", Vec::new()).await;
//!     history.set_tags(&record.id, vec!["cats".to_string()]).await;
//!
//!     let favorites = FavoritesStore::new("generated_images");
//!     favorites.add("a red cat", None).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Failure policy
//!
//! Reads never fail: a missing, unreadable or corrupt document is served as
//! an empty collection. Write failures are logged and swallowed. Treat the
//! stores as a best-effort record of what was generated, not as a database.

pub mod error;
pub mod favorites;
pub mod history;
pub mod models;
pub mod store;
pub mod tags;

pub use error::{GalleryError, Result};
pub use favorites::FavoritesStore;
pub use history::{HistoryStore, HISTORY_LIMIT};
pub use models::{FavoriteRecord, HistoryRecord};
pub use store::JsonStore;
pub use tags::{filter_by_tags, tag_frequencies, TagCount};
