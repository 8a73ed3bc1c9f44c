//! Core types for source image loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for source image loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be read from disk.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not a decodable image.
    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Map a raw tag value to an orientation. Returns `None` for 0 and
    /// anything above 8.
    pub fn from_code(value: u32) -> Option<Self> {
        match value {
            1 => Some(Orientation::Normal),
            2 => Some(Orientation::FlipHorizontal),
            3 => Some(Orientation::Rotate180),
            4 => Some(Orientation::FlipVertical),
            5 => Some(Orientation::Transpose),
            6 => Some(Orientation::Rotate90CW),
            7 => Some(Orientation::Transverse),
            8 => Some(Orientation::Rotate270CW),
            _ => None,
        }
    }

    /// Returns true if this orientation swaps width and height dimensions.
    ///
    /// Rotations of 90° and 270° (and their flip variants Transpose/Transverse)
    /// swap the image dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

/// A freshly loaded source image.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// RGB pixel data as stored in the file (no orientation applied).
    pub pixels: image::RgbImage,
    /// Primary-IFD EXIF fields found in the source, minus Orientation.
    pub exif_fields: Vec<exif::Field>,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_code() {
        assert_eq!(Orientation::from_code(1), Some(Orientation::Normal));
        assert_eq!(Orientation::from_code(6), Some(Orientation::Rotate90CW));
        assert_eq!(Orientation::from_code(0), None); // Unset sentinel
        assert_eq!(Orientation::from_code(9), None);
    }

    #[test]
    fn test_orientation_code_roundtrip() {
        for code in 1..=8u32 {
            let orientation = Orientation::from_code(code).unwrap();
            assert_eq!(orientation as u32, code);
        }
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        // Non-swapping orientations
        assert!(!Orientation::Normal.swaps_dimensions());
        assert!(!Orientation::FlipHorizontal.swaps_dimensions());
        assert!(!Orientation::Rotate180.swaps_dimensions());
        assert!(!Orientation::FlipVertical.swaps_dimensions());

        // Swapping orientations (90° and 270° rotations and their flip variants)
        assert!(Orientation::Transpose.swaps_dimensions());
        assert!(Orientation::Rotate90CW.swaps_dimensions());
        assert!(Orientation::Transverse.swaps_dimensions());
        assert!(Orientation::Rotate270CW.swaps_dimensions());
    }

    #[test]
    fn test_source_image_size() {
        let img = SourceImage {
            pixels: image::RgbImage::new(80, 60),
            exif_fields: Vec::new(),
        };
        assert_eq!(img.width(), 80);
        assert_eq!(img.height(), 60);
    }

    #[test]
    fn test_load_error_display() {
        let err = LoadError::Decode {
            path: PathBuf::from("photo.png"),
            message: "bad header".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to decode photo.png: bad header");
    }
}
