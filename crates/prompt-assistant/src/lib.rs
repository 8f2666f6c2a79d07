//! Prompt-writing helpers over a static keyword dataset.
//!
//! - [`suggest`] - keyword completions for partial input
//! - [`enhance`] - append quality and rule-driven keywords to a prompt
//! - [`apply_template`] - fill a prompt template with a subject
//! - [`StyleCatalog`] - the style presets offered next to the prompt box
//!
//! The datasets are plain JSON files edited by hand; they are read on each
//! request so edits show up without a restart.

mod dataset;
mod enhance;
mod error;
mod styles;
mod suggest;
mod template;

pub use dataset::{EnhancementRule, KeywordDataset, PromptTemplate, CATEGORIES};
pub use enhance::{enhance, Enhancement, DEFAULT_QUALITY_KEYWORD};
pub use error::{AssistantError, Result};
pub use styles::{StyleCatalog, StyleTemplate};
pub use suggest::{suggest, Suggestion, MAX_SUGGESTIONS, MIN_INPUT_CHARS};
pub use template::{apply_template, templates_by_category, AppliedTemplate};
