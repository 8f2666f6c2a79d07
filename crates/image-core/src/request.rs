//! Synthesis request and result types.

use serde::{Deserialize, Serialize};

/// Parameters for a single synthesis call.
///
/// The orchestrator has already resolved every default by the time a
/// request is built, so backends never need to consult configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Full text sent to the model (style keywords already appended).
    pub prompt: String,
    /// Things the model should steer away from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Generator seed.
    pub seed: u32,
    /// Number of denoising steps.
    pub steps: u32,
    /// Classifier-free guidance scale.
    pub guidance_scale: f32,
}

impl SynthesisRequest {
    /// Create a request with the given prompt, size and seed.
    ///
    /// Steps and guidance default to the turbo-model settings (9 steps, no guidance).
    pub fn new(prompt: impl Into<String>, width: u32, height: u32, seed: u32) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: None,
            width,
            height,
            seed,
            steps: 9,
            guidance_scale: 0.0,
        }
    }

    /// Set the negative prompt. Empty strings are treated as absent.
    pub fn with_negative_prompt(mut self, negative_prompt: Option<String>) -> Self {
        self.negative_prompt = negative_prompt.filter(|n| !n.trim().is_empty());
        self
    }

    /// Set step count and guidance scale.
    pub fn with_sampling(mut self, steps: u32, guidance_scale: f32) -> Self {
        self.steps = steps;
        self.guidance_scale = guidance_scale;
        self
    }
}

/// A PNG-encoded image produced by a pipeline.
#[derive(Debug, Clone)]
pub struct SynthesizedImage {
    /// PNG bytes.
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Seed that produced this image.
    pub seed: u32,
}

impl SynthesizedImage {
    pub fn new(png: Vec<u8>, width: u32, height: u32, seed: u32) -> Self {
        Self {
            png,
            width,
            height,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_negative_prompt_is_dropped() {
        let request = SynthesisRequest::new("a cat", 512, 512, 7)
            .with_negative_prompt(Some("   ".to_string()));
        assert!(request.negative_prompt.is_none());

        let request = SynthesisRequest::new("a cat", 512, 512, 7)
            .with_negative_prompt(Some("blurry".to_string()));
        assert_eq!(request.negative_prompt.as_deref(), Some("blurry"));
    }

    #[test]
    fn test_request_serializes_without_missing_negative_prompt() {
        let request = SynthesisRequest::new("a cat", 768, 512, 42).with_sampling(20, 7.5);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["prompt"], "a cat");
        assert_eq!(value["width"], 768);
        assert_eq!(value["steps"], 20);
        assert!(value.get("negative_prompt").is_none());
    }
}
