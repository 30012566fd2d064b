//! Index persistence.
//!
//! The writer takes opaque rendered bytes and puts them at the reserved
//! output name. It performs no validation of its own — by the time it
//! runs, the caller has already enumerated the parent directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reserved output file name. The lister excludes this name from every
/// listing, which is what makes regeneration idempotent instead of
/// self-referential.
pub const INDEX_FILE: &str = "index.html";

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("failed to write index {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `contents` to `path`, creating the file if absent and
/// truncating any previous contents if present.
///
/// Empty `contents` succeeds and leaves a zero-length file. On creation
/// the file mode is the platform default (0666 before umask on Unix).
/// Truncate-then-write is not crash-safe: any error means "output not
/// updated" and the caller may retry or abort, but a crash mid-write
/// can leave a truncated file.
pub fn write_index(path: &Path, contents: &[u8]) -> Result<(), WriteError> {
    fs::write(path, contents).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })
}
