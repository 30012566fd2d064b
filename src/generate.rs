//! Index generation pipeline.
//!
//! Single entry point wiring the stages together: list the content
//! directory, render the listing, write `index.html` back into the same
//! directory. Any stage failure aborts the run with the previous output
//! left untouched — there is no partial-success state.

use crate::config::SiteConfig;
use crate::list::{self, Entry, ListError};
use crate::render;
use crate::write::{self, INDEX_FILE, WriteError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Write(#[from] WriteError),
}

/// Result of one successful generation run, for CLI display.
#[derive(Debug)]
pub struct Summary {
    /// The listing that was rendered, in page order.
    pub entries: Vec<Entry>,
    /// Path of the written index file.
    pub output_path: PathBuf,
}

/// Run the full pipeline against `source`.
///
/// Re-running against an unchanged directory rewrites `index.html` with
/// byte-identical contents: the previous output is excluded from the
/// listing and then overwritten, never appended to.
pub fn generate(source: &Path, config: &SiteConfig) -> Result<Summary, GenerateError> {
    let entries = list::list_files(source)?;
    let markup = render::render_index(&entries, config);
    let output_path = source.join(INDEX_FILE);
    write::write_index(&output_path, markup.into_string().as_bytes())?;
    Ok(Summary {
        entries,
        output_path,
    })
}
