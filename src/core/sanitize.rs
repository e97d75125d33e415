// src/core/sanitize.rs

/// Collapse runs of whitespace (including line breaks inside quoted cells)
/// to a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Case-folded form used on both sides of a substring search.
pub fn fold(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

/// Join non-blank parts with a single space (search haystacks).
pub fn join_nonblank<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for p in parts {
        let p = p.trim();
        if p.is_empty() { continue; }
        if !out.is_empty() { out.push(' '); }
        out.push_str(p);
    }
    out
}

/// Shorten a cell for table display; counts chars, not bytes.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s!(s);
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
