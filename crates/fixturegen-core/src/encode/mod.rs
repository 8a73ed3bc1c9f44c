//! Output encoding for generated fixtures.
//!
//! This module provides functionality for:
//! - Encoding RGB images to JPEG with configurable quality
//! - Writing the encoded bytes to their destination path

mod jpeg;
mod save;

pub use jpeg::{encode_jpeg, EncodeError, DEFAULT_QUALITY};
pub use save::{save_jpeg, SaveError};
