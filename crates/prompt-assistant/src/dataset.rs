//! Keyword dataset model and loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

/// Keyword categories in suggestion order.
pub const CATEGORIES: [&str; 7] = [
    "subjects",
    "styles",
    "quality",
    "lighting",
    "camera",
    "mood",
    "composition",
];

/// A regex that, when it matches a prompt, proposes keywords to add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementRule {
    pub pattern: String,
    #[serde(default)]
    pub add: Vec<String>,
}

/// A prompt with a `{subject}` slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub prompt: String,
    /// Subject used when the caller leaves it blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// The static prompt-keyword dataset (`prompt_keywords.json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordDataset {
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub quality: Vec<String>,
    #[serde(default)]
    pub lighting: Vec<String>,
    #[serde(default)]
    pub camera: Vec<String>,
    #[serde(default)]
    pub mood: Vec<String>,
    #[serde(default)]
    pub composition: Vec<String>,
    #[serde(default)]
    pub enhancement_rules: Vec<EnhancementRule>,
    #[serde(default)]
    pub templates: Vec<PromptTemplate>,
}

impl KeywordDataset {
    /// Read and parse the dataset file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AssistantError::Dataset {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Self::from_json(&raw).map_err(|e| AssistantError::Dataset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Keywords of one category; unknown names yield nothing.
    pub fn category(&self, name: &str) -> &[String] {
        match name {
            "subjects" => &self.subjects,
            "styles" => &self.styles,
            "quality" => &self.quality,
            "lighting" => &self.lighting,
            "camera" => &self.camera,
            "mood" => &self.mood,
            "composition" => &self.composition,
            _ => &[],
        }
    }

    /// `(category, keywords)` pairs in [`CATEGORIES`] order.
    pub fn categories(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        CATEGORIES.iter().map(move |name| (*name, self.category(name)))
    }

    pub fn template(&self, id: &str) -> Option<&PromptTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }
}
