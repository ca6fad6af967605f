//! High-level entry points tying the I/O layer to the processing pipeline.
//!
//! These are the functions library consumers and the CLI call. Each one
//! performs the full read, resize, round-corners, write sequence; the
//! in-memory variant stops before encoding.

use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::process_image;
use crate::core::processing::save::save_processed_image;
use crate::error::Result;
use crate::io::read_image;
use crate::types::OutputFormat;

/// A processed image held in memory, along with the format it would be
/// encoded to.
#[derive(Debug, Clone)]
pub struct ProcessedImage {
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub image: RgbaImage,
}

/// Process the image at `input` and write the result to `output`.
///
/// The input file is checked for existence before decoding; nothing is
/// written unless the whole pipeline succeeds.
pub fn process_file_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<()> {
    debug!(input = ?input, output = ?output, "Processing file");

    let source = read_image(input)?;
    let processed = process_image(source, params)?;
    save_processed_image(&processed, output, params.format)
}

/// Process the image at `path` and overwrite it with the result.
pub fn process_file_in_place(path: &Path, params: &ProcessingParams) -> Result<()> {
    process_file_to_path(path, path, params)
}

/// Process the image at `input` and return the result without writing it
/// anywhere.
pub fn process_file_to_buffer(input: &Path, params: &ProcessingParams) -> Result<ProcessedImage> {
    let source = read_image(input)?;
    let processed = process_image(source, params)?;
    let (width, height) = processed.dimensions();

    Ok(ProcessedImage {
        width,
        height,
        format: params.format.unwrap_or(OutputFormat::Png),
        image: processed,
    })
}
