//! Orientation tagging through the external `exiftool` program.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{OrientationTagger, TagError, TagOutcome};

/// Runs `exiftool -overwrite_original -orientation=<N> -n <path>`.
#[derive(Debug, Clone)]
pub struct ExiftoolTagger {
    program: PathBuf,
}

impl Default for ExiftoolTagger {
    fn default() -> Self {
        Self::new("exiftool")
    }
}

impl ExiftoolTagger {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn args(path: &Path, code: u16) -> [String; 4] {
        [
            "-overwrite_original".to_string(),
            format!("-orientation={}", code),
            "-n".to_string(),
            path.display().to_string(),
        ]
    }
}

impl OrientationTagger for ExiftoolTagger {
    fn describe(&self, path: &Path, code: u16) -> String {
        format!("{} {}", self.program.display(), Self::args(path, code).join(" "))
    }

    fn tag(&self, path: &Path, code: u16) -> Result<TagOutcome, TagError> {
        let command = self.describe(path, code);
        let result = Command::new(&self.program)
            .args(Self::args(path, code))
            .output();

        let out = match result {
            Ok(out) => out,
            Err(source) => return Err(TagError::Spawn { command, source }),
        };

        let mut output = String::from_utf8_lossy(&out.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&out.stderr);
        if !stderr.trim().is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(stderr.trim());
        }

        if !out.status.success() {
            return Err(TagError::Exit {
                command,
                status: out.status.to_string(),
                output,
            });
        }

        Ok(TagOutcome { command, output })
    }
}
