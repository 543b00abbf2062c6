// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// The CLI implements this to print status lines; tests use `NullProgress`.
pub trait Progress {
    /// Called at the start with the number of vendors selected.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One vendor produced `records` records (live or fallback).
    fn item_done(&mut self, _id: &str, _records: usize) {}

    /// One vendor failed and had nothing to fall back on.
    fn item_failed(&mut self, _id: &str, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
