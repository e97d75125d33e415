// src/feed.rs
//! Feed loading and the per-page load state.
//!
//! `load` runs one fetch → parse → normalize pass and either returns the
//! whole record set or fails as a whole. `FeedState` holds what a page shows
//! and decides which of several overlapping loads gets to land.

use std::fmt;

use crate::config::options::FeedConfig;
use crate::core::delimiter::Delimiter;
use crate::core::net::FeedSource;
use crate::csv::{self, ParsedFeed};
use crate::errors::FeedError;
use crate::progress::{NullProgress, Progress};
use crate::specs::{self, Schema};

/// Whatever was learned about the feed on the way, success or not.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagnostics {
    pub status: Option<u16>,
    pub delimiter: Option<Delimiter>,
    /// First line exactly as received.
    pub header_line: String,
    /// Normalized header tokens.
    pub fields: Vec<String>,
    pub rows: usize,
    pub dropped: usize,
}

impl Diagnostics {
    fn from_feed(feed: &ParsedFeed) -> Self {
        Self {
            status: None,
            delimiter: feed.delimiter,
            header_line: feed.header_line.clone(),
            fields: Vec::new(),
            rows: feed.row_count(),
            dropped: 0,
        }
    }

    /// Human-readable lines for status panels and `--diagnostics`.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(code) = self.status {
            out.push(format!("Status: {code}"));
        }
        if let Some(d) = self.delimiter {
            out.push(format!("Delimiter: {d}"));
        }
        if !self.header_line.is_empty() {
            out.push(format!("Header line: {}", self.header_line));
        }
        if !self.fields.is_empty() {
            out.push(format!("Fields: {}", self.fields.join(", ")));
        }
        if self.rows > 0 {
            out.push(format!("Rows: {} ({} dropped)", self.rows, self.dropped));
        }
        out
    }
}

/// A complete, normalized record set.
#[derive(Clone, Debug)]
pub struct Loaded<R> {
    pub records: Vec<R>,
    pub diagnostics: Diagnostics,
}

/// A failed load. There is never a partial record set alongside it.
#[derive(Debug)]
pub struct LoadFailure {
    pub error: FeedError,
    pub diagnostics: Diagnostics,
}

impl LoadFailure {
    fn bare(error: FeedError) -> Self {
        let diagnostics = Diagnostics { status: error.status(), ..Diagnostics::default() };
        Self { error, diagnostics }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for LoadFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

pub type LoadOutcome<R> = Result<Loaded<R>, LoadFailure>;

/// Parse and normalize text already in hand.
pub fn load_text<S: Schema>(text: &str) -> LoadOutcome<S::Record> {
    let feed = csv::parse_feed(text).map_err(|error| {
        let mut failure = LoadFailure::bare(error);
        failure.diagnostics.header_line = s!(crate::core::delimiter::first_line(text));
        failure
    })?;

    let mut diagnostics = Diagnostics::from_feed(&feed);
    let normalized = specs::normalize::<S>(&feed);
    diagnostics.fields = normalized.fields;
    diagnostics.dropped = normalized.dropped;

    Ok(Loaded { records: normalized.records, diagnostics })
}

/// One full load for schema `S`. A missing URL fails before the source is
/// touched; any fetch or parse failure discards everything.
pub fn load<S: Schema>(
    config: &FeedConfig,
    source: &dyn FeedSource,
    progress: Option<&mut dyn Progress>,
) -> LoadOutcome<S::Record> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    progress.begin(S::KIND.label());
    let outcome = fetch_and_normalize::<S>(config, source, progress);

    match &outcome {
        Ok(loaded) => {
            logf!("Feed: {} loaded {} records", S::KIND, loaded.records.len());
            progress.records_done(loaded.records.len());
        }
        Err(failure) => loge!("Feed: {} failed: {}", S::KIND, failure),
    }

    progress.finish();
    outcome
}

fn fetch_and_normalize<S: Schema>(
    config: &FeedConfig,
    source: &dyn FeedSource,
    progress: &mut dyn Progress,
) -> LoadOutcome<S::Record> {
    let url = config
        .url(S::KIND)
        .ok_or_else(|| LoadFailure::bare(FeedError::MissingUrl(S::KIND)))?;

    progress.log(&format!("Fetching {url}"));
    let text = source.fetch(url).map_err(LoadFailure::bare)?;

    progress.log(&format!("Parsing {} bytes", text.len()));
    let loaded = load_text::<S>(&text)?;

    progress.log(&format!(
        "Normalized {} of {} rows",
        loaded.records.len(),
        loaded.diagnostics.rows
    ));
    Ok(loaded)
}

/* ---------------- Page state ---------------- */

/// Identifies one load request. Only the newest outstanding ticket may land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What one page currently shows.
#[derive(Clone, Debug)]
pub struct FeedState<R> {
    records: Vec<R>,
    error: Option<String>,
    diagnostics: Option<Diagnostics>,
    loading: bool,
    generation: u64,
}

impl<R> Default for FeedState<R> {
    fn default() -> Self {
        Self { records: Vec::new(), error: None, diagnostics: None, loading: false, generation: 0 }
    }
}

impl<R> FeedState<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[R] { &self.records }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }
    pub fn diagnostics(&self) -> Option<&Diagnostics> { self.diagnostics.as_ref() }
    pub fn is_loading(&self) -> bool { self.loading }

    /// Start a load. Any ticket issued before this one is now stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Teardown: nothing outstanding may land any more.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a finished load. Returns false (and changes nothing) when the
    /// ticket is stale.
    pub fn finish(&mut self, ticket: LoadTicket, outcome: LoadOutcome<R>) -> bool {
        if !self.is_current(ticket) {
            logd!("Feed: discarding stale load #{} (current #{})", ticket.0, self.generation);
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(loaded) => {
                self.records = loaded.records;
                self.error = None;
                self.diagnostics = Some(loaded.diagnostics);
            }
            Err(failure) => {
                self.records.clear();
                self.error = Some(failure.to_string());
                self.diagnostics = Some(failure.diagnostics);
            }
        }
        true
    }
}
