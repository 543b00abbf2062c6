// src/config/options.rs
use std::path::PathBuf;
use std::str::FromStr;

use super::consts::*;
use crate::error::ScrapeError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VendorSelector {
    All,
    Ids(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub vendors: VendorSelector,
    /// Read the page from disk instead of the network (single vendor only).
    pub input: Option<PathBuf>,
    /// Overrides every vendor's fallback threshold: fall back when fewer
    /// than this many live records were found.
    pub threshold: Option<usize>,
    /// Allow fallback tables at all.
    pub fallback: bool,
    pub workers: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            vendors: VendorSelector::All,
            input: None,
            threshold: None,
            fallback: true,
            workers: WORKERS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
    /// Field separator; `None` for non-delimited formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json | ExportFormat::Xlsx => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            other => Err(ScrapeError::Config(format!("unknown format: {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<stem>.<ext>`; the extension follows the format.
    pub fn out_path(&self, stem: &str) -> PathBuf {
        self.out_dir.join(join!(stem, ".", self.format.ext()))
    }
}
