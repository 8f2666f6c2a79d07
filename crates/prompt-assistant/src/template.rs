//! Prompt templates.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dataset::{KeywordDataset, PromptTemplate};
use crate::error::{AssistantError, Result};

/// Token replaced by the subject inside a template prompt.
const SUBJECT_TOKEN: &str = "{subject}";

/// Placeholder used when a template does not declare one.
const DEFAULT_PLACEHOLDER: &str = "subject";

/// Category for templates that do not declare one.
const UNCATEGORIZED: &str = "Other";

/// A template filled in with a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedTemplate {
    pub template_name: String,
    pub template_category: Option<String>,
    pub generated_prompt: String,
    /// Subject actually substituted (caller's, or the template placeholder).
    pub subject: String,
}

/// Fill template `template_id` with `subject`, or with the template's
/// placeholder when `subject` is blank.
pub fn apply_template(dataset: &KeywordDataset, template_id: &str, subject: &str) -> Result<AppliedTemplate> {
    let template = dataset
        .template(template_id)
        .ok_or_else(|| AssistantError::TemplateNotFound(template_id.to_string()))?;

    let subject = match subject.trim() {
        "" => template
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
        given => given.to_string(),
    };

    Ok(AppliedTemplate {
        template_name: template.name.clone(),
        template_category: template.category.clone(),
        generated_prompt: template.prompt.replace(SUBJECT_TOKEN, &subject),
        subject,
    })
}

/// Templates grouped by category, categories in first-seen order.
pub fn templates_by_category(dataset: &KeywordDataset) -> IndexMap<String, Vec<PromptTemplate>> {
    let mut categories: IndexMap<String, Vec<PromptTemplate>> = IndexMap::new();
    for template in &dataset.templates {
        let category = template
            .category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        categories.entry(category).or_default().push(template.clone());
    }
    categories
}
