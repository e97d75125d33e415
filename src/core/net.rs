// src/core/net.rs
//
// Feed sources. The loader only sees `FeedSource`; tests and the CLI's
// `--file` flag swap in something other than HTTP.

use std::path::PathBuf;

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::errors::{FeedError, FeedResult};

pub trait FeedSource: Send + Sync {
    /// Raw feed text for `location`, or why it could not be had.
    fn fetch(&self, location: &str) -> FeedResult<String>;
}

/// Blocking HTTP GET. No timeout of our own; the client's default applies.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> FeedResult<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl FeedSource for HttpSource {
    fn fetch(&self, url: &str) -> FeedResult<String> {
        logd!("Net: GET {}", url);
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status { status: status.as_u16(), url: s!(url) });
        }
        let body = resp.text()?;
        logd!("Net: {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Reads a local export. `location` is ignored when a fixed path is set.
#[derive(Default)]
pub struct FileSource {
    path: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self { path: None }
    }

    pub fn fixed(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }
}

impl FeedSource for FileSource {
    fn fetch(&self, location: &str) -> FeedResult<String> {
        let path = self.path.clone().unwrap_or_else(|| PathBuf::from(location));
        logd!("File: read {}", path.display());
        Ok(std::fs::read_to_string(&path)?)
    }
}

/// Canned text or failure; handy for tests and demos.
pub struct StaticSource {
    body: Result<String, u16>,
}

impl StaticSource {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { body: Ok(body.into()) }
    }

    pub fn status(code: u16) -> Self {
        Self { body: Err(code) }
    }
}

impl FeedSource for StaticSource {
    fn fetch(&self, location: &str) -> FeedResult<String> {
        match &self.body {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(FeedError::Status { status: *status, url: s!(location) }),
        }
    }
}
