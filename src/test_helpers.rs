//! Shared test utilities for the dirdex test suite.
//!
//! Listings render modification times as calendar dates, so tests need
//! files with *known* mtimes — a plain `fs::write` would stamp "today"
//! and make date assertions flaky. [`touch_dated`] pins the mtime to a
//! fixed UTC instant instead.

use chrono::NaiveDate;
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty temp directory to use as a content root.
pub fn content_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Create `name` under `dir` and pin its modification time to noon UTC
/// on `date` (`YYYY-MM-DD`), so the listing renders exactly `date`.
pub fn touch_dated(dir: &Path, name: &str, date: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"fixture").unwrap();

    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    let instant = day.and_hms_opt(12, 0, 0).unwrap().and_utc();
    filetime::set_file_mtime(&path, FileTime::from_unix_time(instant.timestamp(), 0)).unwrap();

    path
}
