use std::borrow::Cow;

const HTML_SPECIAL: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape text for an HTML element body or a quoted attribute value.
/// Borrows `s` back when it has nothing to escape.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    if !s.contains(HTML_SPECIAL) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
