//! Geometric transforms for the nine orientation fixtures.
//!
//! # Transform Order
//!
//! For every table entry the pixels are:
//! 1. Annotated (see [`crate::annotate`])
//! 2. Mirrored horizontally, if the entry asks for a flop
//! 3. Rotated by a right angle
//!
//! The combination is the inverse of what a viewer does for the entry's EXIF
//! orientation, so a correct viewer shows every fixture upright.

mod orient;
mod table;

pub use orient::{apply_transform, correct_orientation};
pub use table::{spec_for, Rotation, TransformSpec, TRANSFORMATIONS};
