//! Rule-based prompt enhancement.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dataset::KeywordDataset;
use crate::error::{AssistantError, Result};

/// Added when the prompt mentions none of the leading quality keywords.
pub const DEFAULT_QUALITY_KEYWORD: &str = "high quality";

/// How many leading `quality` keywords count as "already has quality".
const QUALITY_PROBE: usize = 5;

/// Outcome of [`enhance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enhancement {
    pub original: String,
    pub enhanced: String,
    pub added_keywords: Vec<String>,
    pub improvements: usize,
}

/// Append quality and rule-derived keywords to `prompt`.
///
/// Rules are tried in dataset order against the original prompt. A rule's
/// keyword is added unless it already appears (case-insensitively) in the
/// prompt or among earlier additions. Rules with invalid patterns are skipped.
pub fn enhance(dataset: &KeywordDataset, prompt: &str) -> Result<Enhancement> {
    let original = prompt.trim();
    if original.is_empty() {
        return Err(AssistantError::EmptyPrompt);
    }

    let original_lower = original.to_lowercase();
    let mut accumulated = original_lower.clone();
    let mut added_keywords: Vec<String> = Vec::new();

    for rule in &dataset.enhancement_rules {
        let pattern = match RegexBuilder::new(&rule.pattern).case_insensitive(true).build() {
            Ok(pattern) => pattern,
            Err(err) => {
                warn!(pattern = %rule.pattern, error = %err, "Skipping invalid enhancement rule");
                continue;
            }
        };

        if !pattern.is_match(original) {
            continue;
        }

        for keyword in &rule.add {
            let keyword_lower = keyword.to_lowercase();
            if !accumulated.contains(&keyword_lower) {
                accumulated.push_str(", ");
                accumulated.push_str(&keyword_lower);
                added_keywords.push(keyword.clone());
            }
        }
    }

    let has_quality = dataset
        .quality
        .iter()
        .take(QUALITY_PROBE)
        .any(|quality| original_lower.contains(&quality.to_lowercase()));
    if !has_quality {
        added_keywords.insert(0, DEFAULT_QUALITY_KEYWORD.to_string());
    }

    let enhanced = if added_keywords.is_empty() {
        original.to_string()
    } else {
        format!("{}, {}", original, added_keywords.join(", "))
    };

    Ok(Enhancement {
        original: original.to_string(),
        enhanced,
        improvements: added_keywords.len(),
        added_keywords,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::EnhancementRule;

    fn rule(pattern: &str, add: &[&str]) -> EnhancementRule {
        EnhancementRule {
            pattern: pattern.to_string(),
            add: add.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn dataset() -> KeywordDataset {
        KeywordDataset {
            quality: vec![
                "masterpiece".to_string(),
                "best quality".to_string(),
                "8k".to_string(),
                "highly detailed".to_string(),
                "sharp focus".to_string(),
                "award winning".to_string(),
            ],
            enhancement_rules: vec![
                rule(r"\b(portrait|face)\b", &["detailed face", "soft lighting"]),
                rule(r"\blandscape\b", &["wide angle", "dramatic sky"]),
                rule(r"\bnight\b", &["soft lighting", "neon lights"]),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_only_quality_added() {
        let result = enhance(&dataset(), "a red cat").unwrap();
        assert_eq!(result.added_keywords, vec!["high quality"]);
        assert_eq!(result.enhanced, "a red cat, high quality");
        assert_eq!(result.improvements, 1);
    }

    #[test]
    fn test_quality_present_and_no_rule_leaves_prompt() {
        let result = enhance(&dataset(), "  a red cat, Masterpiece ").unwrap();
        assert!(result.added_keywords.is_empty());
        assert_eq!(result.original, "a red cat, Masterpiece");
        assert_eq!(result.enhanced, result.original);
    }

    #[test]
    fn test_only_first_five_quality_keywords_count() {
        let result = enhance(&dataset(), "an award winning cat").unwrap();
        assert_eq!(result.added_keywords, vec!["high quality"]);
    }

    #[test]
    fn test_rules_are_case_insensitive_and_quality_goes_first() {
        let result = enhance(&dataset(), "PORTRAIT of a knight").unwrap();
        assert_eq!(
            result.added_keywords,
            vec!["high quality", "detailed face", "soft lighting"]
        );
        assert_eq!(
            result.enhanced,
            "PORTRAIT of a knight, high quality, detailed face, soft lighting"
        );
    }

    #[test]
    fn test_keywords_not_repeated_across_rules() {
        let result = enhance(&dataset(), "8k portrait at night").unwrap();
        assert_eq!(
            result.added_keywords,
            vec!["detailed face", "soft lighting", "neon lights"]
        );
    }

    #[test]
    fn test_keyword_already_in_prompt_is_skipped() {
        let result = enhance(&dataset(), "masterpiece landscape, Wide Angle").unwrap();
        assert_eq!(result.added_keywords, vec!["dramatic sky"]);
    }

    #[test]
    fn test_invalid_rule_is_skipped() {
        let mut dataset = dataset();
        dataset.enhancement_rules.insert(0, rule("(unclosed", &["never"]));

        let result = enhance(&dataset, "masterpiece landscape").unwrap();
        assert_eq!(result.added_keywords, vec!["wide angle", "dramatic sky"]);
    }

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(matches!(enhance(&dataset(), "   "), Err(AssistantError::EmptyPrompt)));
    }
}
