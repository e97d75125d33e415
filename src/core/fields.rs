// src/core/fields.rs
//! Per-field tolerant parsers shared by every content schema.
//!
//! Nothing here rejects a row. Each parser degrades to an empty/absent value
//! (or keeps the raw text, for dates) when the cell does not match its shape.
//! Row validity (id + primary label) is decided by the schemas, not here.

use chrono::{DateTime, NaiveDate};

use crate::config::consts::{DEFAULT_FILE_LABEL, FILE_PAIR_SEP, ORDER_SENTINEL};

/* ---------------- Lists ---------------- */

const LIST_SEPS: [char; 3] = [',', ';', '|'];

fn tokens_by(raw: &str, sep: char) -> Vec<String> {
    raw.split(sep)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Split a free-text list cell.
///
/// Priority: comma > semicolon > pipe > whitespace; the first separator that
/// yields at least two tokens wins. With fewer than two tokens everywhere the
/// cell is a single value (stray separators dropped, so `"a,"` → `["a"]`).
pub fn split_list(raw: &str) -> Vec<String> {
    for sep in LIST_SEPS {
        let tokens = tokens_by(raw, sep);
        if tokens.len() >= 2 {
            return tokens;
        }
    }

    let words: Vec<String> = raw
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| LIST_SEPS.contains(&c)))
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();
    if words.len() >= 2 {
        return words;
    }

    raw.split(|c: char| LIST_SEPS.contains(&c) || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/* ---------------- Categories ---------------- */

/// Closed category vocabulary for one content type.
#[derive(Clone, Copy, Debug)]
pub struct CategorySpec {
    /// Allowed keys, in tab order.
    pub allowed: &'static [&'static str],
    /// Legacy/synonym token → allowed key.
    pub aliases: &'static [(&'static str, &'static str)],
}

impl CategorySpec {
    pub const NONE: CategorySpec = CategorySpec { allowed: &[], aliases: &[] };

    /// Lower-case, remap, and keep only allowed keys.
    pub fn canonical(&self, token: &str) -> Option<&'static str> {
        let t = token.trim().to_lowercase();
        let mapped = self
            .aliases
            .iter()
            .find(|(from, _)| *from == t)
            .map(|(_, to)| *to)
            .unwrap_or(t.as_str());
        self.allowed.iter().copied().find(|a| *a == mapped)
    }

    /// Normalize a raw category cell. Unknown tokens are dropped silently;
    /// duplicates keep their first position.
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for token in split_list(raw) {
            if let Some(key) = self.canonical(&token) {
                if !out.iter().any(|k| k == key) {
                    out.push(s!(key));
                }
            }
        }
        out
    }
}

/* ---------------- Files ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileLink {
    pub name: String,
    pub url: String,
}

/// Parse `name::url|name::url|url`. Bare URLs get the default label;
/// entries without an http(s) URL are skipped.
pub fn parse_files(raw: &str) -> Vec<FileLink> {
    raw.split(['|', '\n'])
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .filter_map(|entry| {
            let (name, url) = match entry.split_once(FILE_PAIR_SEP) {
                Some((name, url)) => (name.trim(), url.trim()),
                None => ("", entry),
            };
            let url = http_url(url)?;
            let name = if name.is_empty() { s!(DEFAULT_FILE_LABEL) } else { s!(name) };
            Some(FileLink { name, url })
        })
        .collect()
}

/* ---------------- URLs ---------------- */

fn has_http_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Absolute http(s) URL or nothing.
pub fn http_url(raw: &str) -> Option<String> {
    let s = raw.trim();
    has_http_scheme(s).then(|| s!(s))
}

/// Image sources additionally accept a root-relative path (`/img/a.png`),
/// but not a protocol-relative one (`//host/a.png`).
pub fn image_url(raw: &str) -> Option<String> {
    let s = raw.trim();
    let root_relative = s.starts_with('/') && !s.starts_with("//");
    (has_http_scheme(s) || root_relative).then(|| s!(s))
}

/* ---------------- Numbers ---------------- */

/// Explicit ordering key; sentinel when absent or not a finite number.
pub fn parse_order(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(ORDER_SENTINEL)
}

/// First run of exactly four digits (`"2021"`, `"2021-05-01"`, `"Spring 2021"`).
pub fn parse_year(raw: &str) -> Option<i32> {
    raw.split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
        .and_then(|run| run.parse().ok())
}

/* ---------------- Dates ---------------- */

const TEXT_FORMATS: [&str; 6] = [
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%Y %B %d",
    "%B %Y %d",
];

/// Best-effort calendar date from free-form text.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    if s.starts_with(|c: char| c.is_ascii_digit()) {
        if let Some(d) = parse_numeric_date(s) {
            return Some(d);
        }
    }

    // Month names: "March 5, 2024", "5 Mar. 2024"
    let cleaned = s.replace('.', " ");
    let cleaned = crate::core::sanitize::normalize_ws(&cleaned);
    TEXT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
}

/// Numeric dates with any separators: `2024-03-05`, `2024/3/5`,
/// `2024. 3. 5.`, `2024년 3월 5일`, `2024-03-05 10:00`, `3/5/2024`.
/// Year-first is read y-m-d; year-last is read m/d/y unless the first part
/// can only be a day.
fn parse_numeric_date(s: &str) -> Option<NaiveDate> {
    let groups: Vec<&str> = s
        .split(|c: char| !c.is_ascii_digit())
        .filter(|g| !g.is_empty())
        .take(3)
        .collect();
    if groups.len() < 3 {
        return None;
    }

    let nums: Vec<u32> = groups.iter().map(|g| g.parse().ok()).collect::<Option<_>>()?;

    if groups[0].len() == 4 {
        if groups[1].len() > 2 || groups[2].len() > 2 {
            return None;
        }
        return NaiveDate::from_ymd_opt(nums[0] as i32, nums[1], nums[2]);
    }

    if groups[2].len() == 4 && groups[0].len() <= 2 && groups[1].len() <= 2 {
        let year = nums[2] as i32;
        let (month, day) = if nums[0] > 12 { (nums[1], nums[0]) } else { (nums[0], nums[1]) };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Canonical `YYYY-MM-DD` when parseable, otherwise the trimmed input verbatim.
pub fn normalize_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => s!(raw.trim()),
    }
}
