// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result, WrapErr};

use crate::config::consts::DEFAULT_CONFIG_FILE;
use crate::config::file as config_file;
use crate::config::options::{AppOptions, ExportFormat, VendorSelector};
use crate::file::normalize_dir_path;
use crate::progress::Progress;
use crate::{scrape, specs};

#[derive(Parser, Debug)]
#[command(name = "verscrape", about = "Scrape vendor version-history pages into CSV/TSV/JSON", version)]
pub struct Args {
    /// Vendor id to scrape (repeatable; see --list).
    #[arg(long = "vendor", value_name = "ID")]
    pub vendors: Vec<String>,

    /// Scrape every known vendor.
    #[arg(short, long, conflicts_with = "vendors")]
    pub all: bool,

    /// Print `id,title,url` for every vendor and exit.
    #[arg(long)]
    pub list: bool,

    /// Read the page from this file instead of fetching it (one vendor).
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output directory.
    #[arg(short, long = "out", value_name = "DIR")]
    pub out: Option<String>,

    /// csv, tsv, json or xlsx.
    #[arg(long)]
    pub format: Option<ExportFormat>,

    /// Fall back when fewer than N live records were found.
    #[arg(long, value_name = "N")]
    pub threshold: Option<usize>,

    /// Settings file (key=value).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Never substitute the built-in fallback tables.
    #[arg(long)]
    pub no_fallback: bool,

    /// More log detail in .store/debug.log (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Defaults, then the settings file, then flags.
    pub fn into_options(self) -> Result<AppOptions> {
        let mut opts = AppOptions::default();

        let explicit = self.config.is_some();
        let cfg_path = self.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        if explicit && !cfg_path.exists() {
            bail!("config file not found: {}", cfg_path.display());
        }
        config_file::load(&cfg_path)
            .wrap_err_with(|| format!("reading {}", cfg_path.display()))?
            .apply(&mut opts);

        if self.all {
            opts.scrape.vendors = VendorSelector::All;
        } else if !self.vendors.is_empty() {
            opts.scrape.vendors = VendorSelector::Ids(self.vendors);
        }
        if let Some(out) = self.out {
            opts.export.out_dir = normalize_dir_path(&out);
        }
        if let Some(fmt) = self.format {
            opts.export.format = fmt;
        }
        if self.threshold.is_some() {
            opts.scrape.threshold = self.threshold;
        }
        if self.no_fallback {
            opts.scrape.fallback = false;
        }
        opts.scrape.input = self.input;
        Ok(opts)
    }
}

/// Prints progress to stderr.
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scraping {total} vendor(s)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, id: &str, records: usize) {
        self.done += 1;
        eprintln!("[{}/{}] {id}: {records} records", self.done, self.total);
    }
    fn item_failed(&mut self, id: &str, msg: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {id}: FAILED ({msg})", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    crate::log::init(args.verbose).wrap_err("initialising log file")?;
    logf!("verscrape {} starting", env!("CARGO_PKG_VERSION"));

    if args.list {
        for spec in specs::ALL {
            println!("{},{},{}", spec.id, spec.title, spec.url);
        }
        return Ok(());
    }

    let opts = args.into_options()?;
    logd!("Options: {opts:?}");

    let mut progress = CliProgress { total: 0, done: 0 };
    let summary = scrape::run(&opts, Some(&mut progress)).wrap_err("scrape failed")?;

    for report in &summary.reports {
        println!("{report}");
    }
    if summary.failed() == summary.reports.len() && !summary.reports.is_empty() {
        bail!("every selected vendor failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("verscrape").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn flags_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("test.conf");
        std::fs::write(&cfg, "format=tsv\nout_dir=from_file\n").unwrap();
        let cfg = cfg.to_string_lossy().into_owned();

        let opts = parse(&["--vendor", "java", "--vendor", "dbf2002", "--config", &cfg, "-o", "exports", "--no-fallback"])
            .into_options()
            .unwrap();
        assert_eq!(opts.scrape.vendors, VendorSelector::Ids(vec![s!("java"), s!("dbf2002")]));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
        assert_eq!(opts.export.out_dir, PathBuf::from("exports"));
        assert!(!opts.scrape.fallback);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let args = parse(&["--all", "--config", "/definitely/not/here.conf"]);
        assert!(args.into_options().is_err());
    }

    #[test]
    fn all_conflicts_with_vendor() {
        let res = Args::try_parse_from(["verscrape", "--all", "--vendor", "java"]);
        assert!(res.is_err());
    }

    #[test]
    fn format_value_parsed() {
        assert_eq!(parse(&["--format", "json"]).format, Some(ExportFormat::Json));
        assert!(Args::try_parse_from(["verscrape", "--format", "xml"]).is_err());
    }
}
