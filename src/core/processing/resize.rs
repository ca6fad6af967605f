use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::TargetSize;

/// Compute the dimensions that fit `original_width` x `original_height`
/// inside `target` while preserving aspect ratio. Never upscales; both axes
/// stay at least 1 px.
pub fn fit_within_dimensions(
    original_width: u32,
    original_height: u32,
    target: TargetSize,
) -> (u32, u32) {
    let scale_w = f64::from(target.width) / f64::from(original_width);
    let scale_h = f64::from(target.height) / f64::from(original_height);
    let scale = scale_w.min(scale_h);

    if scale >= 1.0 {
        return (original_width, original_height);
    }

    let new_width = ((f64::from(original_width) * scale).round() as u32).max(1);
    let new_height = ((f64::from(original_height) * scale).round() as u32).max(1);
    (new_width, new_height)
}

/// Resample an RGBA8 image to the exact target dimensions with a Lanczos3
/// convolution.
pub fn resize_rgba_image(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();

    let src_image = Image::from_vec_u8(width, height, image.as_raw().clone(), PixelType::U8x4)
        .map_err(|e| Error::Processing(format!("resize source buffer: {e}")))?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::Processing(format!("resize failed: {e}")))?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resized buffer has unexpected length".to_string()))
}

/// Scale `image` down so both dimensions fit inside `target`, preserving
/// aspect ratio. Images that already fit pass through with their pixel data
/// untouched.
pub fn resize_to_fit(image: RgbaImage, target: TargetSize) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = fit_within_dimensions(width, height, target);

    if (new_width, new_height) == (width, height) {
        debug!(width, height, "Image already fits target size, skipping resize");
        return Ok(image);
    }

    info!(
        "Resizing image to fit {}: {}x{} -> {}x{}",
        target, width, height, new_width, new_height
    );

    resize_rgba_image(&image, new_width, new_height)
}
