use image::{DynamicImage, RgbaImage};
use tracing::debug;

use crate::core::params::ProcessingParams;
use crate::core::processing::compose::apply_alpha_mask;
use crate::core::processing::mask::rounded_rect_mask;
use crate::core::processing::resize::resize_to_fit;
use crate::error::{Error, Result};

/// Run the full in-memory pipeline: convert to RGBA, scale down to fit the
/// target bounds, then cut rounded corners into the alpha channel.
pub fn process_image(image: DynamicImage, params: &ProcessingParams) -> Result<RgbaImage> {
    if params.size.width == 0 || params.size.height == 0 {
        return Err(Error::ZeroSize {
            width: params.size.width,
            height: params.size.height,
        });
    }

    let rgba = image.into_rgba8();
    let mut resized = resize_to_fit(rgba, params.size)?;

    let (width, height) = resized.dimensions();
    let mask = rounded_rect_mask(width, height, params.radius);
    apply_alpha_mask(&mut resized, &mask);

    debug!(width, height, "Pipeline complete");
    Ok(resized)
}
