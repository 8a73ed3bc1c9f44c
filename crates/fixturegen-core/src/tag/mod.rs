//! Stamping the EXIF orientation tag into saved fixtures.
//!
//! Two backends are available:
//! - [`EmbeddedTagger`] rewrites the APP1 segment in-process with
//!   `kamadak-exif`
//! - [`ExiftoolTagger`] shells out to `exiftool`, as the fixtures were
//!   historically produced
//!
//! Both overwrite the file in place and keep no backup. What happens when a
//! backend fails is decided by the caller through [`TagFailurePolicy`].

mod embedded;
mod exiftool;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::metadata::ExifError;

pub use embedded::EmbeddedTagger;
pub use exiftool::ExiftoolTagger;

/// A successful tag write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    /// Human-readable form of what was run.
    pub command: String,
    /// Captured output, trimmed.
    pub output: String,
}

/// Errors raised by a tagging backend.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {output}")]
    Exit {
        command: String,
        status: String,
        output: String,
    },

    #[error("Failed to rewrite {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to update EXIF in {}: {source}", path.display())]
    Exif {
        path: PathBuf,
        #[source]
        source: ExifError,
    },
}

/// What to do when writing the orientation tag fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagFailurePolicy {
    /// Abort generation with the tagging error.
    #[default]
    Strict,
    /// Log a warning, record the failure in the report and carry on.
    Permissive,
}

/// Writes an orientation value into an existing JPEG file.
pub trait OrientationTagger: Send + Sync {
    /// The command line (or equivalent) that `tag` runs for these arguments.
    fn describe(&self, path: &Path, code: u16) -> String;

    /// Overwrite the orientation tag of `path` with `code`.
    fn tag(&self, path: &Path, code: u16) -> Result<TagOutcome, TagError>;
}
