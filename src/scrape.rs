// src/scrape.rs
use std::{
    fmt,
    path::PathBuf,
    sync::{ mpsc, atomic::{ AtomicUsize, Ordering }},
    thread,
    time::Duration,
};

use chrono::{Local, NaiveDateTime};
use reqwest::Url;

use crate::{
    config::consts::{ JITTER_MS, REQUEST_PAUSE_MS },
    config::options::{ AppOptions, ScrapeOptions, VendorSelector },
    core::{ html, net::{ DocSource, Session } },
    error::{ Result, ScrapeError },
    extract::{ extract_all, ExtractionResult, VersionRecord },
    file,
    progress::Progress,
    specs::{ self, Extraction, Threshold, VendorSpec },
};

/// Where a vendor's exported records came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Live,
    Fallback,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Origin::Live => "live",
            Origin::Fallback => "fallback",
        })
    }
}

#[derive(Debug)]
pub struct VendorRun {
    pub spec: &'static VendorSpec,
    pub records: ExtractionResult,
    pub origin: Origin,
    /// Fragments (or table rows) harvested from the live page.
    pub fragments: usize,
}

/// Fragments/rows and the records extracted from one document.
pub fn extract_document(
    spec: &VendorSpec,
    doc: &str,
    scraped_at: NaiveDateTime,
) -> (ExtractionResult, usize) {
    let doc = html::parse(doc);
    match spec.extraction {
        Extraction::Fragments { sources, profile } => {
            let fragments = html::harvest(&doc, sources);
            (extract_all(&fragments, spec.url, scraped_at, &profile), fragments.len())
        }
        Extraction::Columns { min_cells, name, version, link } => {
            let rows = html::table_rows(&doc, min_cells, false, None);
            let n = rows.len();
            let base = Url::parse(spec.url).ok();
            let records = rows
                .into_iter()
                .filter_map(|row| {
                    let name = row.cells.get(name)?.trim();
                    let version = row.cells.get(version)?.trim();
                    if name.is_empty() || version.is_empty() { return None; }
                    let url = row
                        .links
                        .get(link)
                        .and_then(|href| href.as_deref())
                        .map(|href| absolute_url(base.as_ref(), href))
                        .unwrap_or_default();
                    Some(VersionRecord::new(name, version, url, scraped_at, None))
                })
                .collect();
            (records, n)
        }
    }
}

/// `href` resolved against the page it was found on; left as-is if that fails.
fn absolute_url(base: Option<&Url>, href: &str) -> String {
    base.and_then(|b| b.join(href).ok())
        .map(String::from)
        .unwrap_or_else(|| s!(href))
}

/// The threshold in effect for `spec` under `opts`.
pub fn effective_threshold(spec: &VendorSpec, opts: &ScrapeOptions) -> Threshold {
    if !opts.fallback || !spec.has_fallback() {
        return Threshold::Never;
    }
    match opts.threshold {
        Some(n) => Threshold::Below(n),
        None => spec.threshold,
    }
}

/// Fetch, harvest and extract one vendor, then apply the fallback policy.
pub fn run_vendor(
    spec: &'static VendorSpec,
    src: DocSource<'_>,
    opts: &ScrapeOptions,
) -> Result<VendorRun> {
    let doc = src.load(spec.url)?;
    let scraped_at = Local::now().naive_local();

    let (live, fragments) = extract_document(spec, &doc, scraped_at);
    logd!("{}: {} fragments, {} live records", spec.id, fragments, live.len());

    if effective_threshold(spec, opts).triggers(live.len()) {
        logf!("{}: {} live records, using fallback data", spec.id, live.len());
        return Ok(VendorRun {
            spec,
            records: spec.fallback_records(scraped_at),
            origin: Origin::Fallback,
            fragments,
        });
    }
    Ok(VendorRun { spec, records: live, origin: Origin::Live, fragments })
}

/// After a failed fetch: the fallback table, if the vendor has one and
/// fallback is allowed.
fn recover(spec: &'static VendorSpec, opts: &ScrapeOptions) -> Option<VendorRun> {
    if !opts.fallback || !spec.has_fallback() {
        return None;
    }
    Some(VendorRun {
        spec,
        records: spec.fallback_records(Local::now().naive_local()),
        origin: Origin::Fallback,
        fragments: 0,
    })
}

/// Selected vendors in selection order, duplicates removed.
pub fn resolve_vendors(sel: &VendorSelector) -> Result<Vec<&'static VendorSpec>> {
    match sel {
        VendorSelector::All => Ok(specs::ALL.to_vec()),
        VendorSelector::Ids(ids) => {
            let mut out: Vec<&'static VendorSpec> = Vec::with_capacity(ids.len());
            for id in ids {
                let spec = specs::find(id)?;
                if !out.iter().any(|s| s.id == spec.id) {
                    out.push(spec);
                }
            }
            Ok(out)
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Exported { records: usize, origin: Origin, path: Option<PathBuf> },
    Failed(String),
}

#[derive(Debug)]
pub struct VendorReport {
    pub id: &'static str,
    pub outcome: Outcome,
}

impl fmt::Display for VendorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Exported { records, origin, path: Some(p) } => {
                write!(f, "{}: {} records ({}) -> {}", self.id, records, origin, p.display())
            }
            Outcome::Exported { records, origin, path: None } => {
                write!(f, "{}: {} records ({}) -> no file", self.id, records, origin)
            }
            Outcome::Failed(msg) => write!(f, "{}: failed: {}", self.id, msg),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<VendorReport>,
}

impl RunSummary {
    pub fn failed(&self) -> usize {
        self.reports.iter().filter(|r| matches!(r.outcome, Outcome::Failed(_))).count()
    }
}

/// Scrape every selected vendor and export each result.
/// A vendor that fails without a fallback is reported and skipped.
pub fn run(
    options: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let scrape = &options.scrape;
    let vendors = resolve_vendors(&scrape.vendors)?;

    if scrape.input.is_some() && vendors.len() != 1 {
        return Err(ScrapeError::Config(s!("--input needs exactly one vendor")));
    }
    if vendors.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No vendors selected.");
        }
        return Ok(RunSummary::default());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(vendors.len());
    }

    // Only needed when something is fetched; dropped when the run ends.
    let session = match &scrape.input {
        Some(_) => None,
        None => match Session::open() {
            Ok(session) => Some(session),
            Err(e) => {
                // Every vendor fails the same way; fallbacks still apply.
                loge!("HTTP session: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("HTTP session: {e}"));
                }
                let msg = e.to_string();
                let slots = vendors
                    .iter()
                    .map(|_| Some(Err(ScrapeError::Session(msg.clone()))))
                    .collect();
                return export_runs(options, &vendors, slots, progress);
            }
        },
    };
    let src = match (&scrape.input, &session) {
        (Some(path), _) => DocSource::File(path),
        (None, Some(s)) => DocSource::Live(s),
        (None, None) => return Err(ScrapeError::Config(s!("no document source"))),
    };
    let polite = matches!(src, DocSource::Live(_));

    type Fetched = (usize, Result<VendorRun>);
    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<Fetched>();
    let workers = scrape.workers.min(vendors.len()).max(1);

    let mut slots: Vec<Option<Result<VendorRun>>> = Vec::new();
    slots.resize_with(vendors.len(), || None);

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let (vendors, counter) = (&vendors, &counter);
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= vendors.len() {
                        break;
                    }
                    let result = run_vendor(vendors[i], src, scrape);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    if polite {
                        let jitter = (i as u64 * 37) % JITTER_MS;
                        thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter)); // be polite
                    }
                }
            });
        }
        drop(res_tx); // main thread is sole receiver now

        for (i, result) in res_rx.iter() {
            let id = vendors[i].id;
            match &result {
                Ok(run) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(id, run.records.len());
                    }
                }
                Err(e) => {
                    loge!("{id}: {e}");
                    if let Some(p) = progress.as_deref_mut() {
                        p.log(&format!("{id}: {e}"));
                    }
                }
            }
            slots[i] = Some(result);
        }
    });

    export_runs(options, &vendors, slots, progress)
}

/// Export in selection order. Errors turn into the fallback table where
/// allowed, otherwise into a failed report.
fn export_runs(
    options: &AppOptions,
    vendors: &[&'static VendorSpec],
    slots: Vec<Option<Result<VendorRun>>>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let scrape = &options.scrape;
    let mut summary = RunSummary::default();
    for (spec, slot) in vendors.iter().copied().zip(slots) {
        let result = slot.unwrap_or_else(|| Err(ScrapeError::Config(s!("worker exited early"))));
        let run = match result {
            Ok(run) => run,
            Err(e) => match recover(spec, scrape) {
                Some(run) => {
                    logw!("{}: using fallback data after error: {e}", spec.id);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(spec.id, run.records.len());
                    }
                    run
                }
                None => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(spec.id, &e.to_string());
                    }
                    summary.reports.push(VendorReport { id: spec.id, outcome: Outcome::Failed(e.to_string()) });
                    continue;
                }
            },
        };

        let path = file::write_export(&options.export, spec.file_stem, spec.layout, run.records.records())?;
        summary.reports.push(VendorReport {
            id: spec.id,
            outcome: Outcome::Exported { records: run.records.len(), origin: run.origin, path },
        });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}
