//! Source image loading for the fixture generator.
//!
//! The source is read from disk and decoded with the `image` crate. Pixels
//! are kept exactly as stored; no EXIF orientation is applied on load since
//! the generator bakes its own transforms into the pixel data.
//!
//! Any primary-IFD EXIF fields in the source (except Orientation) are
//! collected alongside the pixels so they can be carried into every output.

mod load;
mod types;

pub use load::{decode_source, load_source};
pub use types::{LoadError, Orientation, SourceImage};
