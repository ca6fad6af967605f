//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Distinguishes missing-input, decode, and encode failures so callers can react
//! programmatically, and provides semantic variants for argument validation.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "No alpha-capable output format for {path:?}: use a .png or .webp extension, or set the format explicitly"
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Target size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("Processing error: {0}")]
    Processing(String),
}
