//! Results returned to the HTTP layer.

use gallery::HistoryRecord;
use serde::Serialize;

/// One successful generation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    /// `data:image/png;base64,...`
    pub image: String,
    pub filename: String,
    /// The caller's prompt, without style keywords.
    pub prompt: String,
    pub seed: u32,
    pub width: u32,
    pub height: u32,
    #[serde(skip)]
    pub record: HistoryRecord,
}

/// Per-prompt result inside a batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItemResult {
    /// 1-based position in the submitted list.
    pub index: usize,
    pub prompt: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate of a best-effort batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    /// Number of submitted prompts, blanks included.
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<BatchItemResult>,
}

/// Result of deleting images.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteOutcome {
    /// Files actually removed from disk.
    pub deleted: usize,
    pub failed_files: Vec<String>,
}

/// Selected images packed into an in-memory ZIP.
#[derive(Debug, Clone)]
pub struct ImageArchive {
    /// `batch_images_<stamp>.zip`
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// Entries written, in request order.
    pub included: Vec<String>,
    /// Missing, repeated or unsafe names left out.
    pub skipped: Vec<String>,
}
