//! Shared types used across LOGOPREP.
//! Includes the alpha-capable `OutputFormat` and the `TargetSize` bounding box.
use std::path::Path;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Output formats this tool writes. Every variant can store an alpha
/// channel; formats that cannot (JPEG, BMP) are deliberately absent.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    Png,
    Webp,
}

impl OutputFormat {
    /// Canonical file extension for the format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Webp => "webp",
        }
    }

    /// Map a file extension (case-insensitive, without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(OutputFormat::Png),
            "webp" => Some(OutputFormat::Webp),
            _ => None,
        }
    }

    /// Infer the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Bounding box for the proportional resize: the image is scaled to fit
/// within `width` x `height` without changing aspect ratio and without
/// upscaling.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// True when an image of the given dimensions already fits inside the box.
    pub fn contains(&self, width: u32, height: u32) -> bool {
        width <= self.width && height <= self.height
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::square(250)
    }
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for TargetSize {
    type Err = Error;

    /// Parse `"250"` (square) or `"250x100"`; `x` is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Error> {
        let invalid = || Error::InvalidArgument {
            arg: "size",
            value: s.to_string(),
        };

        let (width, height) = match s.split_once(['x', 'X']) {
            Some((w, h)) => (
                w.trim().parse::<u32>().map_err(|_| invalid())?,
                h.trim().parse::<u32>().map_err(|_| invalid())?,
            ),
            None => {
                let side = s.trim().parse::<u32>().map_err(|_| invalid())?;
                (side, side)
            }
        };

        if width == 0 || height == 0 {
            return Err(Error::ZeroSize { width, height });
        }

        Ok(TargetSize { width, height })
    }
}
