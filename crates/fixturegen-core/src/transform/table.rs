//! The fixed orientation table.
//!
//! Each entry describes how to lay out pixel data so that a viewer honouring
//! the entry's EXIF orientation tag displays the image upright. Code 0 is not
//! a valid EXIF value; it is kept as an "unset" fixture with untouched pixels.

use serde::{Deserialize, Serialize};

use crate::decode::Orientation;

/// Rotation applied after the optional flop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    None,
    /// 90 degrees clockwise.
    Cw90,
    Cw180,
    /// 90 degrees counter-clockwise (270 clockwise).
    Ccw90,
}

impl Rotation {
    /// Signed angle in degrees, clockwise positive.
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Cw90 => 90,
            Rotation::Cw180 => 180,
            Rotation::Ccw90 => -90,
        }
    }

    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Cw90 | Rotation::Ccw90)
    }
}

/// One row of the orientation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformSpec {
    /// EXIF orientation value stamped into the output (0-8).
    pub orientation_code: u16,
    pub rotation: Rotation,
    /// Mirror horizontally before rotating.
    pub flop: bool,
}

impl TransformSpec {
    const fn new(orientation_code: u16, rotation: Rotation, flop: bool) -> Self {
        Self {
            orientation_code,
            rotation,
            flop,
        }
    }

    /// The EXIF orientation this entry targets, `None` for the unset entry.
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_code(self.orientation_code as u32)
    }

    /// Pixel dimensions of the output for a `width` x `height` source.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.rotation.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// All nine fixtures, in generation order.
pub const TRANSFORMATIONS: [TransformSpec; 9] = [
    TransformSpec::new(0, Rotation::None, false),
    TransformSpec::new(1, Rotation::None, false),
    TransformSpec::new(2, Rotation::None, true),
    TransformSpec::new(3, Rotation::Cw180, false),
    TransformSpec::new(4, Rotation::Cw180, true),
    TransformSpec::new(5, Rotation::Ccw90, true),
    TransformSpec::new(6, Rotation::Ccw90, false),
    TransformSpec::new(7, Rotation::Cw90, true),
    TransformSpec::new(8, Rotation::Cw90, false),
];

/// Look up the table entry for an orientation code.
pub fn spec_for(code: u16) -> Option<&'static TransformSpec> {
    TRANSFORMATIONS.iter().find(|s| s.orientation_code == code)
}
