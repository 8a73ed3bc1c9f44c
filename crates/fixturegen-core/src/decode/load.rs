//! Source image loading.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::{LoadError, SourceImage};
use crate::metadata::read_primary_fields;

/// Load the source image from disk.
///
/// The pixels are returned exactly as stored; any orientation tag on the
/// source is ignored and dropped from the carried EXIF fields.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Decode` if its contents are not a supported image.
pub fn load_source(path: &Path) -> Result<SourceImage, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_source(path, &bytes)
}

/// Decode already-read source bytes. `path` is only used for error messages.
pub fn decode_source(path: &Path, bytes: &[u8]) -> Result<SourceImage, LoadError> {
    let decode_err = |message: String| LoadError::Decode {
        path: path.to_path_buf(),
        message,
    };

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?;

    let img = reader.decode().map_err(|e| decode_err(e.to_string()))?;

    Ok(SourceImage {
        pixels: img.into_rgb8(),
        exif_fields: read_primary_fields(bytes),
    })
}
