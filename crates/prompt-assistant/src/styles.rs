//! Style presets (`templates.json`).

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, Result};

/// A named bundle of style keywords appended to the prompt at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTemplate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub keywords: String,
}

/// Style presets grouped by category, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleCatalog {
    pub categories: IndexMap<String, Vec<StyleTemplate>>,
}

impl StyleCatalog {
    /// Read the catalog. A missing file is [`AssistantError::StylesMissing`].
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssistantError::StylesMissing(path.to_path_buf()));
            }
            Err(err) => {
                return Err(AssistantError::Dataset {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                });
            }
        };

        serde_json::from_str(&raw).map_err(|e| AssistantError::Dataset {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Look up a style by name across all categories.
    pub fn find(&self, name: &str) -> Option<&StyleTemplate> {
        self.categories.values().flatten().find(|style| style.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_keeps_category_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(
            &path,
            r#"{
                "Photography": [{"name": "Film", "description": "35mm look", "keywords": "film grain, kodak portra"}],
                "Art": [{"name": "Watercolor", "keywords": "watercolor, paper texture"}]
            }"#,
        )
        .unwrap();

        let catalog = StyleCatalog::load(&path).await.unwrap();
        let keys: Vec<&str> = catalog.categories.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Photography", "Art"]);
        assert_eq!(catalog.find("Watercolor").unwrap().keywords, "watercolor, paper texture");
        assert!(catalog.find("Missing").is_none());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = StyleCatalog::load(dir.path().join("templates.json")).await;
        assert!(matches!(result, Err(AssistantError::StylesMissing(_))));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let result = StyleCatalog::load(&path).await;
        assert!(matches!(result, Err(AssistantError::Dataset { .. })));
    }

    #[tokio::test]
    async fn test_bundled_catalog_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/templates.json");
        let catalog = StyleCatalog::load(path).await.unwrap();
        assert!(!catalog.categories.is_empty());
    }
}
