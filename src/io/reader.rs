use std::path::Path;

use image::DynamicImage;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Open and decode the image at `path`. A missing file is reported as
/// [`Error::NotFound`] before any decoding is attempted; anything the decoder
/// rejects becomes [`Error::Decode`] with the offending path attached.
pub fn read_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Original size: {}x{}", image.width(), image.height());
    debug!(color = ?image.color(), "Image decoded");
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb([10, 200, 30]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn reads_a_valid_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_png(dir.path(), "in.png", 32, 16);

        let image = read_image(&path).unwrap();
        assert_eq!((image.width(), image.height()), (32, 16));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_image(&dir.path().join("absent.png")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn undecodable_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = read_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
