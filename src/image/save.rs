//! Image saving utilities.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageFormat, ImageResult, RgbImage};

use crate::error::{Error, Result};

/// Save a flattened canvas to disk as an RGB PNG.
///
/// The output is always PNG regardless of the path's extension, and any
/// existing file at `path` is overwritten.
///
/// # Errors
///
/// Returns [`Error::ImageSave`] if encoding fails or the file cannot be
/// written (missing directory, permissions).
pub fn save_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();

    let bytes = encode_png(img).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, &bytes).map_err(|err| Error::ImageSave {
        path: path.to_path_buf(),
        source: ImageError::IoError(err),
    })?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Encode a canvas as PNG into memory.
///
/// # Errors
///
/// Returns an error if the PNG encoder rejects the image.
pub fn encode_png(img: &RgbImage) -> ImageResult<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}
