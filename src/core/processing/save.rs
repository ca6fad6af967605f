use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::{png, webp};
use crate::types::OutputFormat;

/// Pick the output format: an explicit choice wins, otherwise the output
/// path's extension decides. Extensions that cannot carry an alpha channel
/// are rejected.
pub fn resolve_output_format(
    output: &Path,
    explicit: Option<OutputFormat>,
) -> Result<OutputFormat> {
    explicit
        .or_else(|| OutputFormat::from_path(output))
        .ok_or_else(|| Error::UnsupportedFormat {
            path: output.to_path_buf(),
        })
}

/// Encode `image` to `output` in the resolved format.
pub fn save_processed_image(
    image: &RgbaImage,
    output: &Path,
    format: Option<OutputFormat>,
) -> Result<()> {
    let format = resolve_output_format(output, format)?;
    match format {
        OutputFormat::Png => png::write_rgba_png(output, image)?,
        OutputFormat::Webp => webp::write_rgba_webp(output, image)?,
    }

    info!("Processed image saved to {:?}", output);
    info!("New size: {}x{}", image.width(), image.height());
    Ok(())
}
