use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use permit_core::Table;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Options for writing a table to disk.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_filename: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_filename: "permits.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub row_count: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
}

/// Render a table as CSV text, header row first.
///
/// A header-only table is valid output for an empty result set.
pub fn render_table(table: &Table) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Atomically write a table to `{output_dir}/{filename}`: render to a temp
/// file in the target directory, then rename into place.
pub fn write_table(
    output_dir: &Path,
    table: &Table,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    ensure_output_dir(output_dir)?;

    let content = render_table(table)?;
    let target = output_dir.join(&options.output_filename);

    let mut tmp = NamedTempFile::new_in(output_dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace an existing export to keep reruns deterministic.
    if target.exists() {
        fs::remove_file(&target)?;
    }
    tmp.persist(&target).map_err(|err| ExportError::Io(err.error))?;

    Ok(ExportSummary {
        row_count: table.row_count(),
        output_path: target,
    })
}

/// Ensure the output directory exists; create it if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}
