//! In-process orientation tagging.

use std::path::Path;

use super::{OrientationTagger, TagError, TagOutcome};
use crate::metadata::{embed_exif, read_primary_fields};

/// Rewrites the file's EXIF block with `kamadak-exif`, keeping the other
/// primary-IFD fields already present.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTagger;

impl OrientationTagger for EmbeddedTagger {
    fn describe(&self, path: &Path, code: u16) -> String {
        format!("embedded -orientation={} {}", code, path.display())
    }

    fn tag(&self, path: &Path, code: u16) -> Result<TagOutcome, TagError> {
        let io_err = |source| TagError::Io {
            path: path.to_path_buf(),
            source,
        };

        let bytes = std::fs::read(path).map_err(io_err)?;
        let fields = read_primary_fields(&bytes);
        let tagged =
            embed_exif(&bytes, &fields, Some(code)).map_err(|source| TagError::Exif {
                path: path.to_path_buf(),
                source,
            })?;
        std::fs::write(path, &tagged).map_err(io_err)?;

        Ok(TagOutcome {
            command: self.describe(path, code),
            output: format!("1 image files updated ({} fields kept)", fields.len()),
        })
    }
}
