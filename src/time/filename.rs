//! Filename capture date parsing

use super::{CaptureDate, slice_chars};
use tracing::trace;

/// Camera export prefixes whose names follow `PREFIX_YYYYMMDD_...`
pub const CAMERA_PREFIXES: &[&str] = &["VID_", "IMG_", "PXL_"];

/// Check whether a filename starts with a camera export prefix
pub fn has_camera_prefix(filename: &str) -> bool {
    CAMERA_PREFIXES.iter().any(|p| filename.starts_with(p))
}

/// Parse the capture year and month from a camera export filename
///
/// Year is taken from characters 4..8 and month from 8..10. No calendar
/// validation is done, so `IMG_20231301_...` yields month `13`.
pub fn parse_filename_date(filename: &str) -> Option<CaptureDate> {
    if !has_camera_prefix(filename) {
        return None;
    }

    let date = CaptureDate::new(slice_chars(filename, 4, 8), slice_chars(filename, 8, 10));
    trace!(filename, %date, "Matched camera prefix");
    Some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_img_prefix() {
        let date = parse_filename_date("IMG_20230101_120000.jpg").unwrap();
        assert_eq!(date.year, "2023");
        assert_eq!(date.month, "01");
    }

    #[test]
    fn test_vid_and_pxl_prefix() {
        assert_eq!(
            parse_filename_date("VID_20191225_183000.mp4"),
            Some(CaptureDate::new("2019", "12"))
        );
        assert_eq!(
            parse_filename_date("PXL_20240615_070809123.MP.jpg"),
            Some(CaptureDate::new("2024", "06"))
        );
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(
            parse_filename_date("IMG_20231399_000000.jpg"),
            Some(CaptureDate::new("2023", "13"))
        );
        assert_eq!(
            parse_filename_date("IMG_abcdefgh.jpg"),
            Some(CaptureDate::new("abcd", "ef"))
        );
    }

    #[test]
    fn test_short_name_is_lenient() {
        assert_eq!(
            parse_filename_date("IMG_1.jpg"),
            Some(CaptureDate::new("1.jp", "g"))
        );
    }

    #[test]
    fn test_unprefixed_names() {
        assert!(parse_filename_date("DSC_0001.jpg").is_none());
        assert!(parse_filename_date("img_20230101_120000.jpg").is_none());
        assert!(parse_filename_date("20230101_120000.jpg").is_none());
        assert!(!has_camera_prefix("IMG20230101.jpg"));
    }
}
