//! EXIF capture date extraction for images

use super::CaptureDate;
use crate::error::{Error, Result};
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::trace;

/// Read the raw `DateTimeOriginal` string from a file's EXIF block
///
/// The file handle lives only for the duration of this call.
pub fn read_datetime_original(path: &Path) -> Result<String> {
    let exif_err = |message: String| Error::ExifRead {
        path: path.to_path_buf(),
        message,
    };

    let file = File::open(path).map_err(|e| exif_err(e.to_string()))?;
    let mut reader = BufReader::new(file);

    let exif = Reader::new()
        .read_from_container(&mut reader)
        .map_err(|e| exif_err(e.to_string()))?;

    let field = exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .ok_or_else(|| exif_err("No DateTimeOriginal tag in EXIF data".to_string()))?;

    match &field.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|raw| String::from_utf8_lossy(raw).trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| exif_err("Empty DateTimeOriginal tag".to_string())),
        other => Err(exif_err(format!(
            "Unexpected DateTimeOriginal value type: {other:?}"
        ))),
    }
}

/// Extract the capture year and month from EXIF metadata
pub fn extract_exif_date(path: &Path) -> Result<CaptureDate> {
    let raw = read_datetime_original(path)?;
    trace!(?path, raw = %raw, "Found EXIF DateTimeOriginal");
    Ok(CaptureDate::from_datetime_str(&raw))
}
