//! The fixture generation loop.
//!
//! For each row of [`TRANSFORMATIONS`] the source is reloaded, annotated,
//! transformed, encoded, saved and tagged. Rows are independent, so they can
//! optionally run on the rayon pool; the report keeps table order either way.

use std::fmt;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::annotate::annotate_fixture;
use crate::decode::{load_source, LoadError};
use crate::encode::{encode_jpeg, save_jpeg, SaveError, DEFAULT_QUALITY};
use crate::metadata::embed_exif;
use crate::tag::{EmbeddedTagger, OrientationTagger, TagError, TagFailurePolicy};
use crate::transform::{apply_transform, TransformSpec, TRANSFORMATIONS};

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Save(#[from] SaveError),

    #[error(transparent)]
    Tag(#[from] TagError),
}

/// Settings for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory the fixtures are written to. Created if missing.
    pub output_dir: PathBuf,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
    /// Draw the orientation code and edge labels.
    pub annotate: bool,
    /// Copy the source's primary EXIF fields into every output.
    pub carry_source_exif: bool,
    pub tag_policy: TagFailurePolicy,
    /// Process table rows on the rayon pool.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            jpeg_quality: DEFAULT_QUALITY,
            annotate: true,
            carry_source_exif: true,
            tag_policy: TagFailurePolicy::Strict,
            parallel: false,
        }
    }
}

/// Whether the orientation tag made it into the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagStatus {
    Ok,
    Failed,
}

/// One line of the generation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub code: u16,
    pub path: PathBuf,
    pub command: String,
    pub output: String,
    pub status: TagStatus,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "executing command: {}\n    {}", self.command, self.output)
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub source: PathBuf,
    /// Output files in table order.
    pub produced: Vec<PathBuf>,
    pub log: Vec<LogEntry>,
}

impl GenerationReport {
    fn from_entries(source: &Path, log: Vec<LogEntry>) -> Self {
        Self {
            source: source.to_path_buf(),
            produced: log.iter().map(|e| e.path.clone()).collect(),
            log,
        }
    }

    /// Number of files whose orientation tag could not be written.
    pub fn failed_tags(&self) -> usize {
        self.log
            .iter()
            .filter(|e| e.status == TagStatus::Failed)
            .count()
    }
}

/// File name for the fixture of `code`: `<stem>_<code>.jpg`.
pub fn output_file_name(source: &Path, code: u16) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_{}.jpg", stem, code)
}

/// Produces the nine orientation fixtures for a source image.
pub struct Generator {
    config: GeneratorConfig,
    tagger: Box<dyn OrientationTagger>,
}

impl Generator {
    pub fn new(config: GeneratorConfig, tagger: Box<dyn OrientationTagger>) -> Self {
        Self { config, tagger }
    }

    /// Generator that writes the orientation tag in-process.
    pub fn with_embedded_tagger(config: GeneratorConfig) -> Self {
        Self::new(config, Box::new(EmbeddedTagger))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every table row against `source`.
    ///
    /// Stops at the first load or save error; files written by earlier rows
    /// are left in place. Tagging failures follow the configured policy.
    pub fn generate(&self, source: &Path) -> Result<GenerationReport, GenerateError> {
        std::fs::create_dir_all(&self.config.output_dir).map_err(|source| SaveError::Io {
            path: self.config.output_dir.clone(),
            source,
        })?;

        let log = if self.config.parallel {
            TRANSFORMATIONS
                .par_iter()
                .map(|spec| self.produce(source, spec))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            TRANSFORMATIONS
                .iter()
                .map(|spec| self.produce(source, spec))
                .collect::<Result<Vec<_>, _>>()?
        };

        let report = GenerationReport::from_entries(source, log);
        info!(
            source = %source.display(),
            produced = report.produced.len(),
            failed_tags = report.failed_tags(),
            "generation finished"
        );
        Ok(report)
    }

    /// Load, annotate, transform, save and tag a single fixture.
    pub fn produce(
        &self,
        source: &Path,
        spec: &TransformSpec,
    ) -> Result<LogEntry, GenerateError> {
        let code = spec.orientation_code;
        let mut src = load_source(source)?;
        debug!(code, width = src.width(), height = src.height(), "source loaded");

        if self.config.annotate {
            annotate_fixture(&mut src.pixels, code);
        }
        let pixels = apply_transform(src.pixels, spec);
        debug!(code, flop = spec.flop, rotation = spec.rotation.degrees(), "transformed");

        let mut jpeg =
            encode_jpeg(&pixels, self.config.jpeg_quality).map_err(SaveError::from)?;
        if self.config.carry_source_exif && !src.exif_fields.is_empty() {
            match embed_exif(&jpeg, &src.exif_fields, None) {
                Ok(with_exif) => jpeg = with_exif,
                Err(e) => warn!(code, error = %e, "dropping source EXIF"),
            }
        }

        let path = self.config.output_dir.join(output_file_name(source, code));
        save_jpeg(&path, &jpeg)?;

        let command = self.tagger.describe(&path, code);
        let (output, status) = match self.tagger.tag(&path, code) {
            Ok(outcome) => (outcome.output, TagStatus::Ok),
            Err(e) => match self.config.tag_policy {
                TagFailurePolicy::Strict => return Err(e.into()),
                TagFailurePolicy::Permissive => {
                    warn!(
                        code,
                        path = %path.display(),
                        error = %e,
                        "orientation tag not written"
                    );
                    (e.to_string(), TagStatus::Failed)
                }
            },
        };

        info!(code, path = %path.display(), "fixture written");
        Ok(LogEntry {
            code,
            path,
            command,
            output,
            status,
        })
    }
}
