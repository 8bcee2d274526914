//! Markup escaping
//!
//! Every literal run of source text passes through here exactly once
//! before it reaches the output. Escaping already-escaped text turns
//! `&lt;` into `&amp;lt;`, so callers must only hand in raw source.

/// Escape the markup-reserved characters `&`, `<` and `>`
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Append `text` to `out` with reserved characters replaced by entities
pub fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}
