//! Image loading utilities.

use std::path::Path;

use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::error::{Error, Result};

/// Load an image from disk as an RGBA pixel grid.
///
/// The format is picked from the file extension. Sources without an alpha
/// channel are widened so every pixel reads as fully opaque.
///
/// # Errors
///
/// Returns [`Error::ImageLoad`] if the file does not exist or cannot be
/// decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    tracing::debug!(
        "Loaded {}: {width}x{height}, {:?}",
        path.display(),
        img.color()
    );

    Ok(to_rgba(img))
}

/// Convert any decoded image to RGBA8, reusing the buffer when it already is.
fn to_rgba(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => other.to_rgba8(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().join("nope.png")).unwrap_err();

        assert!(matches!(err, Error::ImageLoad { .. }));
    }

    #[test]
    fn test_unreadable_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, Error::ImageLoad { .. }));
        assert!(err.to_string().contains("garbage.png"));
    }

    #[test]
    fn test_rgba_roundtrip_keeps_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let src = RgbaImage::from_pixel(3, 2, Rgba([12, 34, 56, 78]));
        src.save(&path).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, src);
    }

    #[test]
    fn test_rgb_source_becomes_opaque() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let rgba = to_rgba(img);

        assert_eq!(rgba.dimensions(), (2, 2));
        assert!(rgba.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }
}
