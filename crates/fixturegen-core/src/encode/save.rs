//! Writing encoded fixtures to disk.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::EncodeError;

/// Errors raised while producing an output file.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `bytes` to `path`, replacing any existing file.
pub fn save_jpeg(path: &Path, bytes: &[u8]) -> Result<(), SaveError> {
    std::fs::write(path, bytes).map_err(|source| SaveError::Io {
        path: path.to_path_buf(),
        source,
    })
}
