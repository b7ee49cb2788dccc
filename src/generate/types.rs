use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    #[default]
    Standard,
    Premium,
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub enhanced_prompt: String,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    /// Missing or zero means the configured default.
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub quality: Quality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    pub url: String,
    pub prompt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub images: Vec<GeneratedImage>,
}

/// Pixel dimensions for an aspect ratio name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

pub const DEFAULT_ASPECT_RATIO: &str = "3:4";

const DEFAULT_DIMENSIONS: Dimensions = Dimensions {
    width: 768,
    height: 1024,
};

const ASPECT_RATIOS: &[(&str, Dimensions)] = &[
    (DEFAULT_ASPECT_RATIO, DEFAULT_DIMENSIONS),
    ("1:1", Dimensions { width: 1024, height: 1024 }),
    ("4:3", Dimensions { width: 1024, height: 768 }),
    ("16:9", Dimensions { width: 1024, height: 576 }),
];

pub fn is_known_aspect_ratio(ratio: &str) -> bool {
    ASPECT_RATIOS.iter().any(|(name, _)| *name == ratio)
}

/// Dimensions for `ratio`, falling back to portrait 3:4.
pub fn dimensions_for(ratio: &str) -> Dimensions {
    ASPECT_RATIOS
        .iter()
        .find(|(name, _)| *name == ratio)
        .map(|(_, dims)| *dims)
        .unwrap_or(DEFAULT_DIMENSIONS)
}
