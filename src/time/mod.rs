//! Capture date resolution
//!
//! A file's capture year and month come from one of two places:
//! - the conventional `PREFIX_YYYYMMDD_...` camera export filename
//! - the EXIF `DateTimeOriginal` tag embedded in the image

pub mod exif;
pub mod filename;

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extensions accepted for import (exact, case-sensitive suffix match)
pub const MEDIA_EXTENSIONS: &[&str] = &[".jpg", ".mp4"];

/// Year and month a file was captured
///
/// Both parts are kept as the raw characters they were extracted from;
/// they are not checked against the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDate {
    pub year: String,
    pub month: String,
}

impl CaptureDate {
    pub fn new(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
        }
    }

    /// Build from a colon-delimited `YYYY:MM:DD HH:MM:SS` string
    pub fn from_datetime_str(s: &str) -> Self {
        Self::new(slice_chars(s, 0, 4), slice_chars(s, 5, 7))
    }

    /// Relative `year/month` directory under the output root
    pub fn relative_dir(&self) -> PathBuf {
        Path::new(&self.year).join(&self.month)
    }
}

impl fmt::Display for CaptureDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.month)
    }
}

/// Source of the resolved capture date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// Parsed from a camera export filename
    Filename,
    /// Read from EXIF metadata
    Exif,
}

/// Result of capture date resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: CaptureDate,
    pub source: DateSource,
}

/// Check whether a filename carries one of the accepted media extensions
pub fn is_media_file(filename: &str) -> bool {
    MEDIA_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
}

/// Resolve the capture date of the file at `path`
///
/// Prefixed camera names are trusted without opening the file; anything
/// else must carry a decodable EXIF capture date.
pub fn resolve_capture_date(path: &Path) -> Result<ResolvedDate> {
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    if !is_media_file(&filename) {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    if let Some(date) = filename::parse_filename_date(&filename) {
        debug!(?path, %date, "Resolved capture date from filename");
        return Ok(ResolvedDate {
            date,
            source: DateSource::Filename,
        });
    }

    let date = exif::extract_exif_date(path)?;
    debug!(?path, %date, "Resolved capture date from EXIF");
    Ok(ResolvedDate {
        date,
        source: DateSource::Exif,
    })
}

/// Character-based slice that clamps to the string's length instead of panicking
pub(crate) fn slice_chars(s: &str, start: usize, end: usize) -> String {
    s.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_is_media_file() {
        assert!(is_media_file("holiday.jpg"));
        assert!(is_media_file("VID_20220301_101010.mp4"));
        assert!(!is_media_file("scan.png"));
        assert!(!is_media_file("UPPER.JPG"));
        assert!(!is_media_file("clip.mp4.part"));
    }

    #[test]
    fn test_slice_chars_clamps() {
        assert_eq!(slice_chars("2023:01:15", 0, 4), "2023");
        assert_eq!(slice_chars("2023:01:15", 5, 7), "01");
        assert_eq!(slice_chars("IMG_20", 4, 8), "20");
        assert_eq!(slice_chars("IMG", 8, 10), "");
    }

    #[test]
    fn test_from_datetime_str() {
        let date = CaptureDate::from_datetime_str("2019:11:30 08:15:00");
        assert_eq!(date, CaptureDate::new("2019", "11"));
        assert_eq!(date.to_string(), "2019/11");
        assert_eq!(date.relative_dir(), Path::new("2019").join("11"));
    }

    #[test]
    fn test_resolve_rejects_unsupported_extension() {
        let dir = tempdir().unwrap();
        let err = resolve_capture_date(&dir.path().join("IMG_20230101_000000.png")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
        assert!(err.to_string().starts_with("INCORRECT FORMAT"));
    }

    #[test]
    fn test_resolve_prefixed_name_ignores_content() {
        // The file does not even exist; prefixed names never open the file.
        let dir = tempdir().unwrap();
        let resolved = resolve_capture_date(&dir.path().join("PXL_20210704_093000123.jpg")).unwrap();
        assert_eq!(resolved.date, CaptureDate::new("2021", "07"));
        assert_eq!(resolved.source, DateSource::Filename);
    }

    #[test]
    fn test_resolve_unprefixed_without_exif_fails() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("notes.jpg"), b"plain text, not a jpeg").unwrap();
        let err = resolve_capture_date(&dir.path().join("notes.jpg")).unwrap_err();
        assert!(matches!(err, Error::ExifRead { .. }));
    }

    #[test]
    fn test_resolve_unprefixed_video_fails() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("clip.mp4"), b"\0\0\0\x18ftypmp42").unwrap();
        assert!(matches!(
            resolve_capture_date(&dir.path().join("clip.mp4")),
            Err(Error::ExifRead { .. })
        ));
    }
}
