//! Fixturegen Core - EXIF orientation fixture generation
//!
//! This crate turns one source image into nine JPEG fixtures, one per EXIF
//! orientation value 0-8. Each fixture has its pixels laid out so that a
//! viewer honouring the stamped orientation tag shows the picture upright,
//! with text markers showing where each original edge went.

pub mod annotate;
pub mod decode;
pub mod encode;
pub mod generate;
pub mod metadata;
pub mod tag;
pub mod transform;
pub mod verify;

pub use decode::{load_source, LoadError, Orientation, SourceImage};
pub use encode::{EncodeError, SaveError};
pub use generate::{
    output_file_name, GenerateError, GenerationReport, Generator, GeneratorConfig, LogEntry,
    TagStatus,
};
pub use metadata::{read_orientation, read_orientation_file, ExifError};
pub use tag::{EmbeddedTagger, ExiftoolTagger, OrientationTagger, TagError, TagFailurePolicy};
pub use transform::{Rotation, TransformSpec, TRANSFORMATIONS};
pub use verify::{verify_report, VerifyError};
