// src/core/delimiter.rs
//
// Delimiter sniffing from the header line only. Advisory: a wrong guess
// degrades parsing quality, it never changes program flow.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Semicolon,
    /// Nothing recognizable on the first line; the parser picks.
    ParserDefault,
}

impl Delimiter {
    /// Byte handed to the CSV reader.
    /// `ParserDefault` resolves the way common CSV auto-detection does:
    /// pipe if the header line has one, comma otherwise.
    pub fn resolve(&self, header_line: &str) -> u8 {
        match self {
            Delimiter::Tab => b'\t',
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
            Delimiter::ParserDefault => {
                if header_line.contains('|') { b'|' } else { b',' }
            }
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
            Delimiter::Semicolon => "semicolon",
            Delimiter::ParserDefault => "parser default",
        };
        f.write_str(name)
    }
}

/// First line of the feed, without the line terminator.
pub fn first_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or("");
    line.strip_suffix('\r').unwrap_or(line)
}

/// Fixed priority: tab, comma, semicolon.
pub fn detect(text: &str) -> Delimiter {
    let line = first_line(text);
    if line.contains('\t') {
        Delimiter::Tab
    } else if line.contains(',') {
        Delimiter::Comma
    } else if line.contains(';') {
        Delimiter::Semicolon
    } else {
        Delimiter::ParserDefault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_tab_comma_semicolon() {
        assert_eq!(detect("id\ttitle,extra;x\n1\tA"), Delimiter::Tab);
        assert_eq!(detect("id,title;x\n"), Delimiter::Comma);
        assert_eq!(detect("id;title\r\n1;A"), Delimiter::Semicolon);
        assert_eq!(detect("id|title\n1|A"), Delimiter::ParserDefault);
        assert_eq!(detect(""), Delimiter::ParserDefault);
    }

    #[test]
    fn only_first_line_is_inspected() {
        assert_eq!(detect("id\n1,2,3\n4,5,6"), Delimiter::ParserDefault);
    }

    #[test]
    fn parser_default_prefers_pipe_when_present() {
        assert_eq!(Delimiter::ParserDefault.resolve("id|title"), b'|');
        assert_eq!(Delimiter::ParserDefault.resolve("title"), b',');
        assert_eq!(Delimiter::Semicolon.resolve("id|title"), b';');
    }
}
