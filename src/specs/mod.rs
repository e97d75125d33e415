// src/specs/mod.rs
//! # Feed “specs” module
//!
//! One schema per content page. Each spec encodes *which sheet columns carry
//! the ground truth* and *how to turn one row into a typed record*.
//!
//! ## What lives here
//! - **Header alias tables** (English spellings and Korean labels) mapping sheet
//!   headers onto canonical field keys.
//! - **Row → record normalization** using the shared `core::fields` parsers
//!   (lists, categories, files, dates, URLs, ordering numbers).
//! - **Base ordering** per type: explicit `order` ascending, then a type-specific
//!   secondary key.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net` sources, driven by `feed`).
//! - **Delimiter sniffing / CSV reading** (`core::delimiter`, `csv`).
//! - **Filtering and search** (`view`), or anything GUI.
//!
//! ## Conventions & invariants
//! - A row becomes a record **iff** its trimmed id and trimmed primary label
//!   (title or name) are both non-empty. Every other gap degrades to an empty
//!   value; rows are never rejected for it.
//! - No cross-row checks: repeated ids are kept side by side, in feed order.
//! - Normalization is pure; the same `ParsedFeed` always yields the same records.
//!
//! ## Typical call chain
//! ```text
//! feed::load → FeedSource::fetch → csv::parse_feed → specs::normalize::<S>
//!                                                   ↘ S::from_row per row
//! ```

use std::cmp::Ordering;

use crate::config::options::ContentKind;
use crate::core::fields::CategorySpec;
use crate::core::headers::{AliasTable, HeaderMap, Row};
use crate::csv::ParsedFeed;

pub mod news;
pub mod people;
pub mod projects;
pub mod publications;
pub mod resources;

pub use news::{NewsItem, NewsSchema};
pub use people::{PeopleSchema, Person};
pub use projects::{Project, ProjectsSchema};
pub use publications::{Publication, PublicationsSchema};
pub use resources::{Resource, ResourcesSchema};

/// A normalized display record.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    /// Primary label (title or name).
    fn title(&self) -> &str;
    /// Explicit ordering key; the sentinel when the sheet had none.
    fn order(&self) -> f64;
    /// Closed-vocabulary keys used by category tabs.
    fn categories(&self) -> &[String] {
        &[]
    }
    /// Text the free-text query is matched against (not yet case-folded).
    fn search_text(&self) -> String;
    /// One display cell per `Schema::COLUMNS` entry.
    fn cells(&self) -> Vec<String>;
}

/// Per-content-type description of the sheet and its records.
pub trait Schema: Send + Sync + 'static {
    type Record: Record;

    const KIND: ContentKind;
    const ALIASES: AliasTable;
    const CATEGORIES: CategorySpec = CategorySpec::NONE;
    const COLUMNS: &'static [&'static str];

    /// `None` when the row lacks an id or primary label.
    fn from_row(row: &Row<'_>) -> Option<Self::Record>;

    /// Secondary ordering applied after `order`.
    fn tie_break(a: &Self::Record, b: &Self::Record) -> Ordering;

    fn compare(a: &Self::Record, b: &Self::Record) -> Ordering {
        a.order().total_cmp(&b.order()).then_with(|| Self::tie_break(a, b))
    }
}

/// Result of normalizing one parsed feed.
#[derive(Clone, Debug)]
pub struct Normalized<R> {
    pub records: Vec<R>,
    /// Rows skipped for a missing id or label.
    pub dropped: usize,
    /// Normalized header tokens, in sheet order.
    pub fields: Vec<String>,
}

/// Rows → records for schema `S`, in base order. Sorting is stable, so
/// records that compare equal keep their feed order.
pub fn normalize<S: Schema>(feed: &ParsedFeed) -> Normalized<S::Record> {
    let headers = HeaderMap::build(&feed.headers, S::ALIASES);
    logd!(
        "Normalize: {} recognized {} of {} columns",
        S::KIND,
        headers.recognized(),
        headers.fields().len()
    );
    let mut records: Vec<S::Record> = feed
        .rows
        .iter()
        .filter_map(|cells| S::from_row(&headers.row(cells)))
        .collect();
    let dropped = feed.rows.len() - records.len();

    records.sort_by(S::compare);

    if dropped > 0 {
        logd!("Normalize: {} dropped {} of {} rows", S::KIND, dropped, feed.rows.len());
    }

    Normalized { records, dropped, fields: headers.fields().to_vec() }
}

/* ---------- shared helpers for schema modules ---------- */

/// Both required values, trimmed and non-empty.
pub(crate) fn required<'a>(row: &Row<'a>, id_key: &str, label_key: &str) -> Option<(&'a str, &'a str)> {
    Some((row.opt(id_key)?, row.opt(label_key)?))
}

/// Case-insensitive label comparison.
pub(crate) fn cmp_label(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Newest first; missing values last.
pub(crate) fn cmp_desc_opt<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub(crate) fn join_list(items: &[String]) -> String {
    items.join(", ")
}
