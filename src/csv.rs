// src/csv.rs
use std::io::Write;

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::core::delimiter::{self, Delimiter};
use crate::errors::FeedResult;

/* ---------------- Parsing ---------------- */

/// Structured rows from one feed, plus what was sniffed on the way.
#[derive(Clone, Debug, Default)]
pub struct ParsedFeed {
    pub delimiter: Option<Delimiter>,
    /// First line exactly as received (diagnostics).
    pub header_line: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ParsedFeed {
    pub fn row_count(&self) -> usize { self.rows.len() }
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.trim().is_empty())
}

/// Sniff the delimiter from the first line, then read every record.
/// Rows may be ragged; fully blank rows are skipped. The first non-blank
/// row is the header row.
pub fn parse_feed(text: &str) -> FeedResult<ParsedFeed> {
    let header_line = delimiter::first_line(text);
    let delim = delimiter::detect(text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delim.resolve(header_line))
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(String::from).collect();
        if !is_blank(&row) {
            rows.push(row);
        }
    }

    let headers = if rows.is_empty() { Vec::new() } else { rows.remove(0) };

    Ok(ParsedFeed {
        delimiter: Some(delim),
        header_line: s!(header_line),
        headers,
        rows,
    })
}

/* ---------------- Writing ---------------- */

/// Write headers + rows as CSV/TSV to any writer.
pub fn write_rows<W: Write>(
    w: W,
    headers: &[String],
    rows: &[Vec<String>],
    sep: u8,
) -> FeedResult<()> {
    let mut out = WriterBuilder::new().delimiter(sep).flexible(true).from_writer(w);
    out.write_record(headers)?;
    for r in rows {
        out.write_record(r)?;
    }
    out.flush()?;
    Ok(())
}

/// Convenience: headers + rows as one string.
pub fn rows_to_string(headers: &[String], rows: &[Vec<String>], sep: u8) -> FeedResult<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_rows(&mut buf, headers, rows, sep)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_cells_and_crlf() {
        let text = "id,title,tags\r\n1,\"Hello, world\",\"a, b\"\r\n\r\n2,\"Say \"\"hi\"\"\",\r\n";
        let feed = parse_feed(text).unwrap();
        assert_eq!(feed.delimiter, Some(Delimiter::Comma));
        assert_eq!(feed.header_line, "id,title,tags");
        assert_eq!(feed.headers, strings!["id", "title", "tags"]);
        assert_eq!(feed.rows.len(), 2);
        assert_eq!(feed.rows[0][1], "Hello, world");
        assert_eq!(feed.rows[1][1], "Say \"hi\"");
    }

    #[test]
    fn semicolon_and_ragged_rows() {
        let feed = parse_feed("id;title;extra\n1;A\n2;B;x;y\n").unwrap();
        assert_eq!(feed.delimiter, Some(Delimiter::Semicolon));
        assert_eq!(feed.rows, vec![strings!["1", "A"], strings!["2", "B", "x", "y"]]);
    }

    #[test]
    fn pipe_falls_to_parser_default() {
        let feed = parse_feed("id|title\n1|A\n").unwrap();
        assert_eq!(feed.delimiter, Some(Delimiter::ParserDefault));
        assert_eq!(feed.rows, vec![strings!["1", "A"]]);
    }

    #[test]
    fn empty_text_is_an_empty_feed() {
        let feed = parse_feed("").unwrap();
        assert!(feed.headers.is_empty());
        assert_eq!(feed.row_count(), 0);
    }

    #[test]
    fn write_quotes_when_needed() {
        let s = rows_to_string(&strings!["id", "title"], &[strings!["1", "a,b"]], b',').unwrap();
        assert_eq!(s, "id,title\n1,\"a,b\"\n");
    }
}
