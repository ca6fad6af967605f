use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::{Error, Result};
use crate::io::writers::write_atomically;

/// Encode `image` as RGBA8 PNG at `output`.
pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    write_atomically(output, |writer| {
        PngEncoder::new(writer)
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

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn writes_a_png_with_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("logo.png");
        let image = RgbaImage::from_pixel(6, 4, Rgba([255, 0, 0, 128]));

        write_rgba_png(&output, &image).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);

        let reopened = image::open(&output).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (6, 4));
        assert!(reopened.color().has_alpha());
        assert_eq!(reopened.into_rgba8().get_pixel(0, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("logo.png");
        std::fs::write(&output, b"stale contents").unwrap();

        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 255]));
        write_rgba_png(&output, &image).unwrap();

        let reopened = image::open(&output).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (2, 2));
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("logo.png");
        let image = RgbaImage::from_pixel(3, 3, Rgba([9, 9, 9, 9]));

        write_rgba_png(&output, &image).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["logo.png"]);
    }
}
