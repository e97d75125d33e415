// src/core/headers.rs
//
// Header aliasing: every schema owns one static table mapping a canonical
// field key to the header spellings seen in real sheets (English variants
// and Korean labels). Lookup is exact after `normalize_header`.

use std::collections::HashMap;

/// `(canonical key, aliases)`. The canonical key itself always matches.
pub type AliasTable = &'static [(&'static str, &'static [&'static str])];

/// Lower-case + trim; drops a UTF-8 BOM left on the first cell by some exports.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Canonical key for one normalized header, if the table knows it.
pub fn canonical_for(aliases: AliasTable, normalized: &str) -> Option<&'static str> {
    aliases.iter().find_map(|(key, alts)| {
        let hit = key.to_lowercase() == normalized || alts.iter().any(|a| *a == normalized);
        hit.then_some(*key)
    })
}

/// Resolved header row: canonical key → column index.
#[derive(Clone, Debug, Default)]
pub struct HeaderMap {
    columns: HashMap<&'static str, usize>,
    fields: Vec<String>,
}

impl HeaderMap {
    pub fn build(header_row: &[String], aliases: AliasTable) -> Self {
        let mut columns = HashMap::new();
        let mut fields = Vec::with_capacity(header_row.len());

        for (ix, raw) in header_row.iter().enumerate() {
            let norm = normalize_header(raw);
            if let Some(key) = canonical_for(aliases, &norm) {
                // first column wins on duplicates
                columns.entry(key).or_insert(ix);
            }
            fields.push(norm);
        }

        Self { columns, fields }
    }

    pub fn column(&self, key: &str) -> Option<usize> {
        self.columns.get(key).copied()
    }

    /// Normalized header tokens, in sheet order (diagnostics).
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn recognized(&self) -> usize {
        self.columns.len()
    }

    pub fn row<'a>(&'a self, cells: &'a [String]) -> Row<'a> {
        Row { headers: self, cells }
    }
}

/// One data row viewed through a `HeaderMap`.
#[derive(Clone, Copy)]
pub struct Row<'a> {
    headers: &'a HeaderMap,
    cells: &'a [String],
}

impl<'a> Row<'a> {
    /// Trimmed cell for a canonical key; "" if the column or cell is missing.
    pub fn get(&self, key: &str) -> &'a str {
        self.headers
            .column(key)
            .and_then(|ix| self.cells.get(ix))
            .map(|c| c.trim())
            .unwrap_or("")
    }

    /// Like `get`, but `None` for blank cells.
    pub fn opt(&self, key: &str) -> Option<&'a str> {
        Some(self.get(key)).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALIASES: AliasTable = &[
        ("id", &["identifier", "아이디"]),
        ("title", &["name", "제목"]),
        ("createdAt", &["created_at", "created at", "date", "작성일"]),
    ];

    #[test]
    fn aliases_resolve_across_languages_and_case() {
        let header = strings!["\u{feff} ID ", "제목", "Created At", "Unused"];
        let map = HeaderMap::build(&header, ALIASES);
        assert_eq!(map.column("id"), Some(0));
        assert_eq!(map.column("title"), Some(1));
        assert_eq!(map.column("createdAt"), Some(2));
        assert_eq!(map.recognized(), 3);
        assert_eq!(map.fields().to_vec(), strings!["id", "제목", "created at", "unused"]);
    }

    #[test]
    fn canonical_key_matches_its_lowercase_form() {
        assert_eq!(canonical_for(ALIASES, "createdat"), Some("createdAt"));
        assert_eq!(canonical_for(ALIASES, "workshop"), None);
    }

    #[test]
    fn first_duplicate_column_wins() {
        let header = strings!["title", "name"];
        let map = HeaderMap::build(&header, ALIASES);
        assert_eq!(map.column("title"), Some(0));
    }

    #[test]
    fn row_get_trims_and_tolerates_short_rows() {
        let header = strings!["id", "title"];
        let map = HeaderMap::build(&header, ALIASES);
        let cells = strings!["  7 "];
        let row = map.row(&cells);
        assert_eq!(row.get("id"), "7");
        assert_eq!(row.get("title"), "");
        assert_eq!(row.opt("title"), None);
        assert_eq!(row.get("createdAt"), "");
    }
}
