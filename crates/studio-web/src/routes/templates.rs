//! Style template and size preset routes.

use axum::extract::State;
use axum::Json;
use indexmap::IndexMap;
use prompt_assistant::StyleCatalog;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StylesResponse {
    pub success: bool,
    pub templates: StyleCatalog,
}

/// A named output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizePreset {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub ratio: &'static str,
    /// Rough GPU memory demand, only given for the generic sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vram: Option<&'static str>,
}

const fn preset(name: &'static str, width: u32, height: u32, ratio: &'static str) -> SizePreset {
    SizePreset {
        name,
        width,
        height,
        ratio,
        vram: None,
    }
}

const fn sized(name: &'static str, width: u32, height: u32, ratio: &'static str, vram: &'static str) -> SizePreset {
    SizePreset {
        name,
        width,
        height,
        ratio,
        vram: Some(vram),
    }
}

/// Preset groups in display order.
pub const SIZE_PRESETS: [(&str, &[SizePreset]); 3] = [
    (
        "Social media",
        &[
            preset("Instagram square", 1080, 1080, "1:1"),
            preset("Instagram portrait", 1080, 1350, "4:5"),
            preset("Facebook cover", 1200, 630, "1.91:1"),
            preset("Twitter card", 1200, 675, "16:9"),
            preset("YouTube thumbnail", 1280, 720, "16:9"),
        ],
    ),
    (
        "Print",
        &[
            preset("A4 portrait", 2480, 3508, "A4"),
            preset("A4 landscape", 3508, 2480, "A4"),
            preset("A5 portrait", 1748, 2480, "A5"),
            preset("Postcard", 1600, 1200, "4:3"),
        ],
    ),
    (
        "Standard",
        &[
            sized("Square 512", 512, 512, "1:1", "low"),
            sized("Square 768", 768, 768, "1:1", "medium"),
            sized("Square 1024", 1024, 1024, "1:1", "high"),
            sized("Widescreen 16:9", 1024, 576, "16:9", "medium"),
            sized("Portrait 9:16", 576, 1024, "9:16", "medium"),
        ],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Serialize)]
pub struct SizePresetsResponse {
    pub success: bool,
    pub presets: IndexMap<&'static str, &'static [SizePreset]>,
    pub current: CurrentSize,
}

/// Style templates from the catalog file.
pub async fn styles(State(state): State<AppState>) -> Result<Json<StylesResponse>> {
    let templates = StyleCatalog::load(state.styles_path.as_path()).await?;
    Ok(Json(StylesResponse {
        success: true,
        templates,
    }))
}

/// Size presets and the configured default size.
pub async fn size_presets(State(state): State<AppState>) -> Json<SizePresetsResponse> {
    let presets = SIZE_PRESETS.into_iter().collect();

    let defaults = state.defaults();
    Json(SizePresetsResponse {
        success: true,
        presets,
        current: CurrentSize {
            width: defaults.width,
            height: defaults.height,
        },
    })
}
