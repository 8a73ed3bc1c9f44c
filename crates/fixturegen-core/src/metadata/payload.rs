//! EXIF field extraction and serialization via `kamadak-exif`.

use std::io::Cursor;
use std::path::Path;

use exif::experimental::Writer;
use exif::{Field, In, Reader, Tag, Value};

use super::segment::{insert_exif_segment, ExifError};

/// Read the primary-IFD fields of an image that can be carried into a new
/// file. Orientation and fields of unknown type are left out.
///
/// Returns an empty list when the data has no readable EXIF.
pub fn read_primary_fields(bytes: &[u8]) -> Vec<Field> {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif.fields().filter(|f| is_carried(f)).cloned().collect(),
        Err(_) => Vec::new(),
    }
}

/// Extract the raw EXIF orientation value, including the out-of-range `0`
/// sentinel. Returns `None` if there is no EXIF or no orientation field.
pub fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(bytes);
    let exif = Reader::new().read_from_container(&mut cursor).ok()?;
    exif.get_field(Tag::Orientation, In::PRIMARY)?.value.get_uint(0)
}

/// [`read_orientation`] on a file.
pub fn read_orientation_file(path: &Path) -> std::io::Result<Option<u32>> {
    Ok(read_orientation(&std::fs::read(path)?))
}

/// Serialize `fields` plus an optional orientation into a big-endian TIFF
/// block suitable for an APP1 segment.
pub fn build_exif_payload(
    fields: &[Field],
    orientation: Option<u16>,
) -> Result<Vec<u8>, ExifError> {
    let orientation_field = orientation.map(|code| Field {
        tag: Tag::Orientation,
        ifd_num: In::PRIMARY,
        value: Value::Short(vec![code]),
    });

    let mut writer = Writer::new();
    for field in fields.iter().filter(|f| is_carried(f)) {
        writer.push_field(field);
    }
    if let Some(field) = &orientation_field {
        writer.push_field(field);
    }

    let mut buf = Cursor::new(Vec::new());
    writer
        .write(&mut buf, false)
        .map_err(|e| ExifError::Write(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Build the EXIF block and splice it into `jpeg` in one step.
pub fn embed_exif(
    jpeg: &[u8],
    fields: &[Field],
    orientation: Option<u16>,
) -> Result<Vec<u8>, ExifError> {
    let tiff = build_exif_payload(fields, orientation)?;
    insert_exif_segment(jpeg, &tiff)
}

fn is_carried(field: &Field) -> bool {
    field.ifd_num == In::PRIMARY
        && field.tag != Tag::Orientation
        && !matches!(field.value, Value::Unknown(..))
}
