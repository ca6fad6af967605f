use serde::{Deserialize, Serialize};

use crate::types::{OutputFormat, TargetSize};

/// Default corner radius in pixels.
pub const DEFAULT_CORNER_RADIUS: u32 = 50;

/// Processing parameters suitable for presets and embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Bounding box for the proportional resize; the image never upscales.
    pub size: TargetSize,
    /// Corner radius in pixels; values beyond half the smaller resized
    /// dimension are clamped to it.
    pub radius: u32,
    /// Explicit output format; `None` infers from the output path extension.
    pub format: Option<OutputFormat>,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            size: TargetSize::default(),
            radius: DEFAULT_CORNER_RADIUS,
            format: None,
        }
    }
}
