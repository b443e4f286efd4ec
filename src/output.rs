//! Output-path derivation and directory handling

use crate::error::Result;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

/// Create `path` and any missing parents.
///
/// An already-existing directory is success, not an error; the call is
/// idempotent. Any other failure is returned to the caller, which decides
/// whether it is fatal.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Derive the output file path for a QR code stamped at instant `at`:
/// `<dir>/QRCode_<YYYYMMDDHHMMSS>.png`.
///
/// Granularity is one second, so two calls within the same calendar second
/// yield the same path and the later write overwrites the earlier file.
pub fn timestamped_path_at(dir: &Path, at: DateTime<Local>) -> PathBuf {
    dir.join(format!("QRCode_{}.png", at.format("%Y%m%d%H%M%S")))
}

/// [`timestamped_path_at`] stamped with the current local time.
pub fn timestamped_path(dir: &Path) -> PathBuf {
    timestamped_path_at(dir, Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_dir_fails_under_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();
        assert!(ensure_dir(&file.join("child")).is_err());
    }

    #[test]
    fn filename_uses_second_granular_timestamp() {
        let at = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let path = timestamped_path_at(Path::new("out"), at);
        assert_eq!(path, Path::new("out").join("QRCode_20240102030405.png"));
    }

    #[test]
    fn same_second_collides_on_the_same_path() {
        let at = Local.with_ymd_and_hms(2025, 6, 7, 8, 9, 10).unwrap();
        let first = timestamped_path_at(Path::new("out"), at);
        let second = timestamped_path_at(Path::new("out"), at);
        assert_eq!(first, second);
    }

    #[test]
    fn current_time_path_matches_expected_shape() {
        let path = timestamped_path(Path::new("out"));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("QRCode_"));
        assert!(name.ends_with(".png"));
        let stamp = &name["QRCode_".len()..name.len() - ".png".len()];
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
