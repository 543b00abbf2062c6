// src/config/file.rs
// Optional `key=value` settings file. CLI flags are applied on top.
//
//   # verscrape.conf
//   vendors=java,dbf2002
//   out_dir=exports
//   format=tsv
//   threshold=10

use std::{fs, path::Path};

use super::options::{AppOptions, ExportFormat, VendorSelector};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub vendors: Option<Vec<String>>,
    pub out_dir: Option<String>,
    pub format: Option<ExportFormat>,
    pub threshold: Option<usize>,
}

/// Missing file → defaults. Unknown keys are ignored; bad values are errors.
pub fn load(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let text = fs::read_to_string(path)?;
    let cfg = parse(&text)?;
    logd!("Loaded config from {}", path.display());
    Ok(cfg)
}

pub fn parse(text: &str) -> Result<FileConfig> {
    let mut cfg = FileConfig::default();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else {
            return Err(ScrapeError::Config(format!("line {}: expected key=value", idx + 1)));
        };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "vendors" => {
                let ids: Vec<String> = val
                    .split(',')
                    .map(|s| s.trim().to_ascii_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect();
                cfg.vendors = if ids.is_empty() || ids.iter().any(|s| s == "all") {
                    None
                } else {
                    Some(ids)
                };
            }
            "out_dir" => cfg.out_dir = Some(s!(val)),
            "format" => cfg.format = Some(val.parse()?),
            "threshold" => {
                let n = val.parse::<usize>().map_err(|e| {
                    ScrapeError::Config(format!("line {}: threshold: {e}", idx + 1))
                })?;
                cfg.threshold = Some(n);
            }
            other => logw!("Ignoring unknown config key {other:?}"),
        }
    }
    Ok(cfg)
}

impl FileConfig {
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(ids) = &self.vendors {
            opts.scrape.vendors = VendorSelector::Ids(ids.clone());
        }
        if let Some(dir) = &self.out_dir {
            opts.export.out_dir = dir.into();
        }
        if let Some(fmt) = self.format {
            opts.export.format = fmt;
        }
        if let Some(n) = self.threshold {
            opts.scrape.threshold = Some(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parses_known_keys() {
        let cfg = parse("# comment\nvendors = Java, dbf2002\nout_dir=exports\nformat=TSV\nthreshold=7\ncolour=blue\n").unwrap();
        assert_eq!(cfg.vendors, Some(vec![s!("java"), s!("dbf2002")]));
        assert_eq!(cfg.out_dir.as_deref(), Some("exports"));
        assert_eq!(cfg.format, Some(ExportFormat::Tsv));
        assert_eq!(cfg.threshold, Some(7));
    }

    #[test]
    fn all_means_no_selection() {
        assert_eq!(parse("vendors=all").unwrap().vendors, None);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(parse("threshold=lots").is_err());
        assert!(parse("format=ods").is_err());
        assert!(parse("just words").is_err());
    }

    #[test]
    fn apply_overrides_defaults() {
        let mut opts = AppOptions::default();
        parse("vendors=java\nout_dir=x\nformat=json").unwrap().apply(&mut opts);
        assert_eq!(opts.scrape.vendors, VendorSelector::Ids(vec![s!("java")]));
        assert_eq!(opts.export.out_dir, PathBuf::from("x"));
        assert_eq!(opts.export.format, ExportFormat::Json);
        assert_eq!(opts.scrape.threshold, None);
    }

    #[test]
    fn missing_file_is_default() {
        let cfg = load(Path::new("definitely/not/here.conf")).unwrap();
        assert_eq!(cfg, FileConfig::default());
    }
}
