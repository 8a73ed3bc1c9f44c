//! Read-back checks for a finished generation run.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::decode::{load_source, LoadError, Orientation};
use crate::generate::GenerationReport;
use crate::metadata::read_orientation_file;
use crate::transform::{correct_orientation, spec_for};

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to read back {}: {message}", path.display())]
    Read { path: PathBuf, message: String },

    #[error("{} has orientation {found:?}, expected {expected}", path.display())]
    Orientation {
        path: PathBuf,
        expected: u16,
        found: Option<u32>,
    },

    #[error("{} is {found:?}, expected {expected:?}", path.display())]
    Dimensions {
        path: PathBuf,
        expected: (u32, u32),
        found: (u32, u32),
    },

    #[error("No table entry for orientation code {0}")]
    UnknownCode(u16),
}

/// Check every produced file against `source`.
///
/// The orientation tag must equal the file's code. The stored pixels must
/// have the dimensions that orientation implies, and once a viewer applies
/// the orientation the picture must be the source's size again. The unset
/// entry (code 0) must carry a raw `0` and untouched dimensions.
pub fn verify_report(source: &Path, report: &GenerationReport) -> Result<(), VerifyError> {
    let src = load_source(source)?;
    let source_dims = (src.width(), src.height());

    for entry in &report.log {
        let spec = spec_for(entry.code).ok_or(VerifyError::UnknownCode(entry.code))?;
        let read_err = |message: String| VerifyError::Read {
            path: entry.path.clone(),
            message,
        };
        let dims_err = |expected, found| VerifyError::Dimensions {
            path: entry.path.clone(),
            expected,
            found,
        };

        let found = read_orientation_file(&entry.path).map_err(|e| read_err(e.to_string()))?;
        let tagged = found.and_then(Orientation::from_code);
        let tag_ok = match spec.orientation() {
            Some(expected) => tagged == Some(expected),
            None => found == Some(0),
        };
        if !tag_ok {
            return Err(VerifyError::Orientation {
                path: entry.path.clone(),
                expected: entry.code,
                found,
            });
        }

        let stored = image::open(&entry.path)
            .map_err(|e| read_err(e.to_string()))?
            .into_rgb8();
        let Some(orientation) = tagged else {
            if stored.dimensions() != source_dims {
                return Err(dims_err(source_dims, stored.dimensions()));
            }
            continue;
        };

        let (w, h) = source_dims;
        let expected = if orientation.swaps_dimensions() {
            (h, w)
        } else {
            (w, h)
        };
        if stored.dimensions() != expected {
            return Err(dims_err(expected, stored.dimensions()));
        }

        let shown = correct_orientation(stored, orientation);
        if shown.dimensions() != source_dims {
            return Err(dims_err(source_dims, shown.dimensions()));
        }
    }
    Ok(())
}
