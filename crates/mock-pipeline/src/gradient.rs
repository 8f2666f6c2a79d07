//! Gradient pipeline - paints a seed-dependent gradient instead of running a model.

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, Rgb, RgbImage};
use image_core::{ImagePipeline, PipelineError, SynthesisRequest, SynthesizedImage};

/// Largest edge the mock will render.
const MAX_EDGE: u32 = 4096;

/// A pipeline that renders a two-color diagonal gradient.
///
/// The colors are derived from the seed, so equal seed and size always give
/// byte-identical PNGs. Useful for testing the generation flow without a GPU.
#[derive(Debug, Clone, Default)]
pub struct GradientPipeline;

impl GradientPipeline {
    pub fn new() -> Self {
        Self
    }
}

fn seed_colors(seed: u32) -> (Rgb<u8>, Rgb<u8>) {
    let [a, b, c, d] = seed.to_le_bytes();
    (Rgb([a, b, c]), Rgb([d, a ^ 0xff, b ^ c]))
}

fn render(width: u32, height: u32, seed: u32) -> RgbImage {
    let (Rgb(from), Rgb(to)) = seed_colors(seed);
    let span = (width + height).saturating_sub(2).max(1);

    RgbImage::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / span as f32;
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb([mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])])
    })
}

#[async_trait]
impl ImagePipeline for GradientPipeline {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesizedImage, PipelineError> {
        if request.width == 0 || request.height == 0 {
            return Err(PipelineError::InvalidRequest(format!(
                "resolution must be non-zero, got {}x{}",
                request.width, request.height
            )));
        }
        if request.width > MAX_EDGE || request.height > MAX_EDGE {
            return Err(PipelineError::InvalidRequest(format!(
                "resolution {}x{} exceeds {}px",
                request.width, request.height, MAX_EDGE
            )));
        }

        let canvas = render(request.width, request.height, request.seed);
        let mut png = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| PipelineError::SynthesisFailed(format!("PNG encoding failed: {}", e)))?;

        Ok(SynthesizedImage::new(png, request.width, request.height, request.seed))
    }

    fn name(&self) -> &str {
        "GradientPipeline"
    }
}
