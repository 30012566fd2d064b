//! Tool configuration.
//!
//! dirdex reads an optional `dirdex.toml` from the working directory
//! (or wherever `--config` points). The file lives *outside* the
//! content directory on purpose: everything inside the content
//! directory is listed on the index page, and the config is not
//! content.
//!
//! ```toml
//! # All options are optional — defaults shown below
//!
//! # Page heading and <title> of the generated index
//! title = "Index"
//!
//! # Content directory to index (overridden by --source)
//! source = "contents"
//!
//! # Paragraph shown under the heading
//! # intro = "Downloads and papers."
//! ```
//!
//! A missing config file means stock defaults. Unknown keys are
//! rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Site configuration loaded from `dirdex.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page heading and `<title>` of the generated index.
    pub title: String,
    /// Optional paragraph shown under the heading.
    pub intro: Option<String>,
    /// Content directory to index. The CLI `--source` flag wins over
    /// this when both are given.
    pub source: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: "Index".to_string(),
            intro: None,
            source: PathBuf::from("contents"),
        }
    }
}

/// Load configuration from `path`, falling back to stock defaults when
/// the file does not exist.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: SiteConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Stock `dirdex.toml` with every option documented.
///
/// Printed by the `gen-config` subcommand; must stay parseable to the
/// default [`SiteConfig`].
pub fn stock_config_toml() -> &'static str {
    r##"# dirdex configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys are an error.
#
# This file belongs next to where you run dirdex, not inside the
# content directory — files inside the content directory get listed.

# Page heading and <title> of the generated index.
title = "Index"

# Content directory to index. index.html is written into this
# directory. The --source flag overrides this value.
source = "contents"

# Paragraph shown under the heading. Omit for no intro text.
# intro = "Downloads and papers."
"##
}
