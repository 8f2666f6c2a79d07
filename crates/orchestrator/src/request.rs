//! Generation request and configured defaults.

use serde::{Deserialize, Serialize};

/// Values used when a request leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationDefaults {
    pub width: u32,
    pub height: u32,
    /// Denoising steps; turbo checkpoints want very few.
    pub steps: u32,
    /// Classifier-free guidance; turbo checkpoints are distilled for 0.0.
    pub guidance_scale: f32,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            width: 768,
            height: 768,
            steps: 9,
            guidance_scale: 0.0,
        }
    }
}

/// What the caller asked for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: Option<String>,
    /// Appended to the prompt for synthesis only; never stored in history.
    #[serde(default)]
    pub style_keywords: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub seed: Option<u32>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Text sent to the pipeline: the prompt, plus style keywords when given.
    pub fn synthesis_prompt(&self) -> String {
        match self.style_keywords.as_deref().map(str::trim) {
            Some(style) if !style.is_empty() => format!("{}, {}", self.prompt, style),
            _ => self.prompt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesis_prompt_appends_style() {
        let mut request = GenerateRequest::new("a red cat");
        assert_eq!(request.synthesis_prompt(), "a red cat");

        request.style_keywords = Some("watercolor, soft washes".to_string());
        assert_eq!(request.synthesis_prompt(), "a red cat, watercolor, soft washes");

        request.style_keywords = Some("  ".to_string());
        assert_eq!(request.synthesis_prompt(), "a red cat");
    }

    #[test]
    fn test_request_deserializes_sparse_json() {
        let request: GenerateRequest = serde_json::from_str(r#"{"prompt": "x", "seed": 7}"#).unwrap();
        assert_eq!(request.prompt, "x");
        assert_eq!(request.seed, Some(7));
        assert!(request.width.is_none());
    }
}
