use std::path::Path;

use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{Error, Result};
use crate::io::writers::write_atomically;

/// Encode `image` as lossless RGBA8 WebP at `output`.
pub fn write_rgba_webp(output: &Path, image: &RgbaImage) -> Result<()> {
    write_atomically(output, |writer| {
        WebPEncoder::new_lossless(writer)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| Error::Encode {
                path: output.to_path_buf(),
                source,
            })
    })
}
