use image::{GrayImage, RgbaImage};

/// Replace the alpha channel of `image` with the values from `mask`,
/// pixel for pixel. Existing alpha is discarded, not multiplied. Both
/// buffers must have the same dimensions.
pub fn apply_alpha_mask(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());

    for (pixel, mask_pixel) in image.pixels_mut().zip(mask.pixels()) {
        pixel.0[3] = mask_pixel.0[0];
    }
}
