//! Directory enumeration.
//!
//! Produces the listing the index page is built from: one [`Entry`] per
//! regular file directly inside the content directory, with the
//! modification time rendered as a `YYYY-MM-DD` date. Two exclusion
//! rules keep the listing honest:
//!
//! - Subdirectories are skipped. There is no recursion and no
//!   representation of nested content.
//! - The reserved output name `index.html` is skipped (exact,
//!   case-sensitive), so a prior run's output never shows up in the
//!   next run's listing.
//!
//! Entries are sorted by name. `fs::read_dir` order is unspecified, and
//! a stable order is what makes regeneration reproducible.

use crate::write::INDEX_FILE;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("content directory not found: {0}")]
    NotFound(PathBuf),
    #[error("content path is a file, not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("failed to read directory {path}: {source}")]
    Enumeration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    fn enumeration(path: &Path, source: io::Error) -> Self {
        ListError::Enumeration {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// One row of the listing: a file name and its modification date.
///
/// Names are base names only, unique within a listing (the filesystem
/// guarantees this). The date is pre-rendered — consumers display it,
/// they don't compute with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Base name of the file, no path components.
    pub name: String,
    /// Last-modified date, `YYYY-MM-DD` in UTC. Sub-day precision is
    /// intentionally discarded.
    pub modified: String,
}

/// List the regular files directly inside `path`, sorted by name.
///
/// Validation is sequential and short-circuiting: a missing path is
/// [`ListError::NotFound`]; an existing path that is not a directory is
/// [`ListError::NotADirectory`]. Only then is the directory read.
///
/// An empty result is valid — an empty directory, or one containing
/// only subdirectories or only a stale `index.html`, lists nothing.
pub fn list_files(path: &Path) -> Result<Vec<Entry>, ListError> {
    let meta = fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ListError::NotFound(path.to_path_buf())
        } else {
            ListError::enumeration(path, e)
        }
    })?;
    if !meta.is_dir() {
        return Err(ListError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = fs::read_dir(path).map_err(|e| ListError::enumeration(path, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| ListError::enumeration(path, e))?;
        let file_type = dir_entry
            .file_type()
            .map_err(|e| ListError::enumeration(path, e))?;
        if file_type.is_dir() {
            continue;
        }

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if name == INDEX_FILE {
            continue;
        }

        let modified = dir_entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| ListError::enumeration(path, e))?;
        entries.push(Entry {
            name,
            modified: format_date(modified),
        });
    }

    entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Render a filesystem timestamp as a calendar date in UTC.
fn format_date(mtime: SystemTime) -> String {
    DateTime::<Utc>::from(mtime).format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{content_dir, touch_dated};
    use std::fs;

    #[test]
    fn missing_path_is_not_found() {
        let tmp = content_dir();
        let missing = tmp.path().join("does-not-exist");

        let result = list_files(&missing);
        assert!(matches!(result, Err(ListError::NotFound(_))));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let tmp = content_dir();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        let result = list_files(&file);
        assert!(matches!(result, Err(ListError::NotADirectory(_))));
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let tmp = content_dir();
        assert_eq!(list_files(tmp.path()).unwrap(), vec![]);
    }

    #[test]
    fn subdirectories_are_skipped() {
        let tmp = content_dir();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::create_dir(tmp.path().join("another")).unwrap();

        assert_eq!(list_files(tmp.path()).unwrap(), vec![]);
    }

    #[test]
    fn reserved_index_html_is_skipped() {
        let tmp = content_dir();
        touch_dated(tmp.path(), "index.html", "2024-02-01");
        touch_dated(tmp.path(), "a.txt", "2024-01-05");

        let names: Vec<String> = list_files(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a.txt"]);
    }

    #[test]
    fn reserved_name_match_is_case_sensitive() {
        let tmp = content_dir();
        touch_dated(tmp.path(), "Index.html", "2024-02-01");

        let names: Vec<String> = list_files(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Index.html"]);
    }

    #[test]
    fn entries_sorted_by_name() {
        let tmp = content_dir();
        touch_dated(tmp.path(), "c.txt", "2024-01-01");
        touch_dated(tmp.path(), "a.txt", "2024-01-01");
        touch_dated(tmp.path(), "b.txt", "2024-01-01");

        let names: Vec<String> = list_files(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn modification_date_rendered_as_calendar_day() {
        let tmp = content_dir();
        touch_dated(tmp.path(), "a.txt", "2024-01-05");

        let entries = list_files(tmp.path()).unwrap();
        assert_eq!(entries[0].modified, "2024-01-05");
    }

    #[test]
    fn dotfiles_are_listed() {
        let tmp = content_dir();
        touch_dated(tmp.path(), ".hidden", "2024-01-05");

        let names: Vec<String> = list_files(tmp.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec![".hidden"]);
    }

    #[test]
    fn mixed_directory_lists_only_files() {
        let tmp = content_dir();
        touch_dated(tmp.path(), "a.txt", "2024-01-05");
        touch_dated(tmp.path(), "b.txt", "2024-03-10");
        fs::create_dir(tmp.path().join("sub")).unwrap();
        touch_dated(tmp.path(), "index.html", "2024-04-01");

        let entries = list_files(tmp.path()).unwrap();
        assert_eq!(
            entries,
            vec![
                Entry {
                    name: "a.txt".to_string(),
                    modified: "2024-01-05".to_string(),
                },
                Entry {
                    name: "b.txt".to_string(),
                    modified: "2024-03-10".to_string(),
                },
            ]
        );
    }
}
