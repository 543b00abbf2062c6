// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod extract;
pub mod specs;

pub mod file;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;
