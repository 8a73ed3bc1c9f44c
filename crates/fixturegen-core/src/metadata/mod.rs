//! EXIF metadata for generated fixtures.
//!
//! Field serialization is delegated to `kamadak-exif`'s writer; this module
//! only decides which fields go in and where the resulting APP1 segment is
//! placed in the JPEG stream.

mod payload;
mod segment;

pub use payload::{
    build_exif_payload, embed_exif, read_orientation, read_orientation_file, read_primary_fields,
};
pub use segment::{count_exif_segments, insert_exif_segment, ExifError, MAX_PAYLOAD};
