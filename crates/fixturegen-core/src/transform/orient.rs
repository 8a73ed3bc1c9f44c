//! Flop and right-angle rotation, plus the inverse display correction.

use image::imageops;
use image::RgbImage;

use super::{Rotation, TransformSpec};
use crate::decode::Orientation;

/// Lay out `image` for a table entry: mirror if `flop`, then rotate.
pub fn apply_transform(image: RgbImage, spec: &TransformSpec) -> RgbImage {
    let image = if spec.flop {
        imageops::flip_horizontal(&image)
    } else {
        image
    };

    match spec.rotation {
        Rotation::None => image,
        Rotation::Cw90 => imageops::rotate90(&image),
        Rotation::Cw180 => imageops::rotate180(&image),
        Rotation::Ccw90 => imageops::rotate270(&image),
    }
}

/// Apply the transformation a viewer performs when displaying an image
/// tagged with `orientation`.
pub fn correct_orientation(image: RgbImage, orientation: Orientation) -> RgbImage {
    match orientation {
        Orientation::Normal => image,
        Orientation::FlipHorizontal => imageops::flip_horizontal(&image),
        Orientation::Rotate180 => imageops::rotate180(&image),
        Orientation::FlipVertical => imageops::flip_vertical(&image),
        Orientation::Transpose => imageops::flip_horizontal(&imageops::rotate90(&image)),
        Orientation::Rotate90CW => imageops::rotate90(&image),
        Orientation::Transverse => imageops::flip_horizontal(&imageops::rotate270(&image)),
        Orientation::Rotate270CW => imageops::rotate270(&image),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
