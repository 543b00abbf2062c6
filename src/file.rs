// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::{to_export_string, to_json, to_xlsx, Layout};
use crate::error::{Result, ScrapeError};
use crate::extract::VersionRecord;

/// Write one vendor's records to `<out_dir>/<stem>.<ext>`.
/// Nothing is written for an empty record set; returns the path otherwise.
pub fn write_export(
    export: &ExportOptions,
    stem: &str,
    layout: Layout,
    records: &[VersionRecord],
) -> Result<Option<PathBuf>> {
    if records.is_empty() {
        logf!("No {stem} data found to save");
        return Ok(None);
    }

    ensure_directory(&export.out_dir)?;
    let path = export.out_path(stem);

    match export.format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            fs::write(&path, to_export_string(layout, records, sep))?;
        }
        ExportFormat::Json => fs::write(&path, to_json(layout, records)?)?,
        ExportFormat::Xlsx => to_xlsx(layout, records)?.save(&path)?,
    }

    logf!("Wrote {} records to {}", records.len(), path.display());
    Ok(Some(path))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::InvalidPath(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

/// Output directory from user input, separators normalized.
pub fn normalize_dir_path(p: &str) -> PathBuf {
    PathBuf::from(normalize_separators(p.trim()))
}
