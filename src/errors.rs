// src/errors.rs
use thiserror::Error;

use crate::config::options::ContentKind;

/// Every way a feed load can fail. All of them end the same way for the
/// viewer: an empty record set plus `to_string()` of this value.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("No feed URL configured for {0}")]
    MissingUrl(ContentKind),
    #[error("HTTP error: status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Read error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse feed: {0}")]
    Parse(String),
}

impl FeedError {
    /// Transport status code, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FeedError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(code) => FeedError::Status {
                status: code.as_u16(),
                url: value.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => FeedError::Transport(value.to_string()),
        }
    }
}

impl From<::csv::Error> for FeedError {
    fn from(value: ::csv::Error) -> Self {
        FeedError::Parse(value.to_string())
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
