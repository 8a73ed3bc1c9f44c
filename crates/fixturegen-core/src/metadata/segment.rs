//! APP1 `Exif` segment splicing for JPEG streams.
//!
//! The JPEG encoder emits `SOI`, a JFIF `APP0`, then the frame. The EXIF
//! block goes into an `APP1` segment placed directly after `SOI` and any
//! leading `APP0` segments, which is where exiftool and cameras put it.

use thiserror::Error;

const SOI: [u8; 2] = [0xFF, 0xD8];
const APP0: u8 = 0xE0;
const APP1: u8 = 0xE1;
const COM: u8 = 0xFE;
const EXIF_HEADER: &[u8; 6] = b"Exif\0\0";

/// Largest TIFF payload that fits in one segment (length field is u16 and
/// counts itself plus the `Exif\0\0` header).
pub const MAX_PAYLOAD: usize = u16::MAX as usize - 2 - EXIF_HEADER.len();

/// Errors from building or splicing EXIF metadata.
#[derive(Debug, Error)]
pub enum ExifError {
    #[error("Not a JPEG stream (missing SOI marker)")]
    NotJpeg,

    #[error("Malformed JPEG segment at offset {offset}")]
    MalformedSegment { offset: usize },

    #[error("EXIF payload of {size} bytes exceeds the {} byte segment limit", MAX_PAYLOAD)]
    PayloadTooLarge { size: usize },

    #[error("Failed to serialize EXIF: {0}")]
    Write(String),
}

/// Insert `tiff` (a TIFF-structured EXIF block) into `jpeg` as an APP1
/// segment, dropping any `Exif` APP1 segments already present.
pub fn insert_exif_segment(jpeg: &[u8], tiff: &[u8]) -> Result<Vec<u8>, ExifError> {
    if jpeg.len() < 2 || jpeg[0..2] != SOI {
        return Err(ExifError::NotJpeg);
    }
    if tiff.len() > MAX_PAYLOAD {
        return Err(ExifError::PayloadTooLarge { size: tiff.len() });
    }

    let mut insert_at = 2;
    let mut stale = Vec::new();
    let mut pos = 2;

    // Walk the APPn/COM header segments; stop at the first frame marker.
    while pos + 4 <= jpeg.len() && jpeg[pos] == 0xFF {
        let marker = jpeg[pos + 1];
        if !(APP0..=0xEF).contains(&marker) && marker != COM {
            break;
        }

        let len = u16::from_be_bytes([jpeg[pos + 2], jpeg[pos + 3]]) as usize;
        let end = pos + 2 + len;
        if len < 2 || end > jpeg.len() {
            return Err(ExifError::MalformedSegment { offset: pos });
        }

        if marker == APP1 && jpeg[pos + 4..end].starts_with(EXIF_HEADER) {
            stale.push(pos..end);
        } else if marker == APP0 && insert_at == pos {
            insert_at = end;
        }
        pos = end;
    }

    let segment_len = (2 + EXIF_HEADER.len() + tiff.len()) as u16;
    let mut out = Vec::with_capacity(jpeg.len() + tiff.len() + 10);
    out.extend_from_slice(&jpeg[..insert_at]);
    out.extend_from_slice(&[0xFF, APP1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(EXIF_HEADER);
    out.extend_from_slice(tiff);

    let mut cursor = insert_at;
    for range in stale {
        out.extend_from_slice(&jpeg[cursor..range.start]);
        cursor = range.end;
    }
    out.extend_from_slice(&jpeg[cursor..]);

    Ok(out)
}

/// Count `Exif` APP1 segments in the header of a JPEG stream.
pub fn count_exif_segments(jpeg: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 2;
    while pos + 4 <= jpeg.len() && jpeg[pos] == 0xFF {
        let marker = jpeg[pos + 1];
        if !(APP0..=0xEF).contains(&marker) && marker != COM {
            break;
        }
        let len = u16::from_be_bytes([jpeg[pos + 2], jpeg[pos + 3]]) as usize;
        let end = (pos + 2 + len).min(jpeg.len());
        if marker == APP1 && jpeg[(pos + 4).min(end)..end].starts_with(EXIF_HEADER) {
            count += 1;
        }
        pos = end.max(pos + 4);
    }
    count
}
