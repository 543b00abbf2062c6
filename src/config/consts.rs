// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = concat!("verscrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_CONFIG_FILE: &str = "verscrape.conf";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Concurrency
pub const WORKERS: usize = 3;
pub const REQUEST_PAUSE_MS: u64 = 250; // be polite
pub const JITTER_MS: u64 = 100; // extra 0..100 ms
