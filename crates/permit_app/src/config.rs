//! Run configuration for the CLI harness.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// One run's raw inputs, as read from a RON file.
///
/// Every field has a default so a partial file still yields a runnable
/// configuration; the filter values stay raw here and are normalized by
/// the core once per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Raw lower date bound; any digit-bearing format is accepted.
    #[serde(default)]
    pub start_date: String,
    /// Raw upper date bound.
    #[serde(default)]
    pub end_date: String,
    /// Comma-separated business-type selector; empty keeps every category.
    #[serde(default)]
    pub categories: String,
    #[serde(default = "default_start_index")]
    pub start_index: u32,
    #[serde(default = "default_end_index")]
    pub end_index: u32,
    /// Directory the CSV export is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Export filename; empty prints the table to stdout instead.
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
    /// Path of a key file; empty reads the FOOD_SAFETY_API_KEY variable.
    #[serde(default)]
    pub credential_file: String,
}

fn default_start_index() -> u32 {
    permit_engine::DEFAULT_START_INDEX
}

fn default_end_index() -> u32 {
    permit_engine::DEFAULT_END_INDEX
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_output_filename() -> String {
    "permits.csv".to_string()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            start_date: String::new(),
            end_date: String::new(),
            categories: String::new(),
            start_index: default_start_index(),
            end_index: default_end_index(),
            output_dir: default_output_dir(),
            output_filename: default_output_filename(),
            credential_file: String::new(),
        }
    }
}

impl RunConfig {
    /// Load from `path`. A missing file yields the defaults; a malformed
    /// file is an error rather than a silent fetch with wrong filters.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading config {:?}", path));
            }
        };

        ron::from_str(&content).with_context(|| format!("parsing config {:?}", path))
    }
}
