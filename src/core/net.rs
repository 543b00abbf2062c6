// src/core/net.rs
// Document acquisition. One `Session` per run; the caller opens it before
// the first vendor and drops it after the last.

use std::{fs, path::Path, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::{CONNECT_TIMEOUT_SECS, HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Result, ScrapeError};

pub struct Session {
    client: Client,
}

impl Session {
    pub fn open() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        logd!("HTTP session opened");
        Ok(Self { client })
    }

    /// GET `url` and return the body. Anything but 2xx is an error.
    pub fn get(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Http { status: status.as_u16(), url: url.to_string() });
        }
        Ok(resp.text()?)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        logd!("HTTP session closed");
    }
}

/// Where a vendor's document comes from.
#[derive(Clone, Copy)]
pub enum DocSource<'a> {
    Live(&'a Session),
    /// Saved page on disk (offline runs, fixtures).
    File(&'a Path),
}

impl DocSource<'_> {
    pub fn load(&self, url: &str) -> Result<String> {
        match self {
            DocSource::Live(session) => session.get(url),
            DocSource::File(path) => Ok(fs::read_to_string(path)?),
        }
    }
}
