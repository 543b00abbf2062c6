// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that abort a vendor run or an export.
/// A fragment that yields no version is never one of these.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },
    #[error(transparent)]
    Network(#[from] reqwest::Error),
    #[error("HTTP session unavailable: {0}")]
    Session(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("unknown vendor '{0}' (see --list)")]
    UnknownVendor(String),
    #[error("path exists but is not a directory: {}", .0.display())]
    InvalidPath(PathBuf),
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
