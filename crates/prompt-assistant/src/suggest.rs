//! Keyword suggestions for partially typed input.

use serde::{Deserialize, Serialize};

use crate::dataset::KeywordDataset;

/// Inputs shorter than this (after trimming) get no suggestions.
pub const MIN_INPUT_CHARS: usize = 2;

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 15;

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Keyword as written in the dataset.
    pub text: String,
    pub category: String,
    /// `"{text} ({category})"`
    pub display: String,
}

/// Keywords containing `input` (case-insensitive), in category order then
/// dataset order, at most [`MAX_SUGGESTIONS`].
pub fn suggest(dataset: &KeywordDataset, input: &str) -> Vec<Suggestion> {
    let needle = input.trim().to_lowercase();
    if needle.chars().count() < MIN_INPUT_CHARS {
        return Vec::new();
    }

    dataset
        .categories()
        .flat_map(|(category, keywords)| keywords.iter().map(move |keyword| (category, keyword)))
        .filter(|(_, keyword)| keyword.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .map(|(category, keyword)| Suggestion {
            text: keyword.clone(),
            category: category.to_string(),
            display: format!("{} ({})", keyword, category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> KeywordDataset {
        KeywordDataset {
            subjects: vec!["cat".to_string(), "castle".to_string()],
            camera: vec!["camera angle".to_string(), "close-up".to_string()],
            lighting: vec!["Candle light".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_display_string() {
        let suggestions = suggest(&dataset(), "camera");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].display, "camera angle (camera)");
        assert_eq!(suggestions[0].category, "camera");
    }

    #[test]
    fn test_category_order_then_dataset_order() {
        let texts: Vec<String> = suggest(&dataset(), "ca").into_iter().map(|s| s.text).collect();
        assert_eq!(texts, vec!["cat", "castle", "Candle light", "camera angle"]);
    }

    #[test]
    fn test_input_is_normalized() {
        let suggestions = suggest(&dataset(), "  CANDLE ");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].text, "Candle light");
    }

    #[test]
    fn test_short_input_is_empty() {
        assert!(suggest(&dataset(), "c").is_empty());
        assert!(suggest(&dataset(), "   c  ").is_empty());
        assert!(suggest(&dataset(), "").is_empty());
    }

    #[test]
    fn test_truncated_to_fifteen() {
        let dataset = KeywordDataset {
            styles: (0..40).map(|i| format!("style {}", i)).collect(),
            ..Default::default()
        };
        let suggestions = suggest(&dataset, "style");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[14].text, "style 14");
    }
}
