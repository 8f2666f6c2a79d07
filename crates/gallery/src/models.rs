//! Record types.

use chrono::{Local, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// URL prefix under which generated images are served.
pub const IMAGE_URL_PREFIX: &str = "/images/";

/// Favorite names derived from the prompt keep this many characters.
pub const FAVORITE_NAME_CHARS: usize = 30;

/// One generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// `"{unix_millis}_{4 random digits}"`
    pub id: String,
    /// Prompt as the caller typed it, without style keywords.
    pub prompt: String,
    /// Image file name inside the output directory.
    pub filename: String,
    /// ISO-8601 creation time.
    pub timestamp: String,
    pub image_url: String,
    /// User tags in insertion order. Duplicates are allowed.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl HistoryRecord {
    /// Create a record stamped with the current time.
    pub fn new(prompt: impl Into<String>, filename: impl Into<String>, tags: Vec<String>) -> Self {
        let filename = filename.into();
        let suffix: u16 = rand::thread_rng().gen_range(1000..=9999);

        Self {
            id: format!("{}_{}", Utc::now().timestamp_millis(), suffix),
            prompt: prompt.into(),
            image_url: format!("{}{}", IMAGE_URL_PREFIX, filename),
            filename,
            timestamp: Local::now().to_rfc3339(),
            tags,
        }
    }
}

/// A saved prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteRecord {
    /// `"fav_{unix_millis}"`
    pub id: String,
    /// Unique within the favorites collection.
    pub prompt: String,
    pub name: String,
    /// ISO-8601 creation time.
    pub created_at: String,
    #[serde(default)]
    pub use_count: u64,
}

impl FavoriteRecord {
    /// Create a favorite. A blank `name` is replaced by a truncated prompt.
    pub fn new(prompt: impl Into<String>, name: Option<&str>) -> Self {
        let prompt = prompt.into();
        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => default_favorite_name(&prompt),
        };

        Self {
            id: format!("fav_{}", Utc::now().timestamp_millis()),
            prompt,
            name,
            created_at: Local::now().to_rfc3339(),
            use_count: 0,
        }
    }
}

/// First 30 characters of the prompt, with `...` when anything was cut.
pub fn default_favorite_name(prompt: &str) -> String {
    let mut chars = prompt.chars();
    let head: String = chars.by_ref().take(FAVORITE_NAME_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
