//! Plain-text summaries of articles for `<meta name="description">` and
//! social previews.
//!
//! Lengths are counted in `char`s, so a multi-byte character is one unit and
//! truncation never splits one.
use std::sync::LazyLock;

use regex::Regex;

use crate::rewrite::{apply_all, markdown_rewrites};

/// Search engines cut descriptions at roughly this many characters.
pub const DEFAULT_MAX_LENGTH: usize = 160;

/// Appended whenever text is shortened.
pub const ELLIPSIS: &str = "...";

static MARKUP_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static tag pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern is valid"));

/// Strip markup tags, collapse whitespace and bound the result to
/// `max_length` characters (plus [`ELLIPSIS`] when shortened).
pub fn clean_description(description: &str, max_length: usize) -> String {
    let untagged = MARKUP_TAG.replace_all(description, "");
    let collapsed = WHITESPACE.replace_all(&untagged, " ");
    truncate(collapsed.trim(), max_length)
}

/// Turn a markdown document, frontmatter included, into a short excerpt.
pub fn extract_excerpt(content: &str, max_length: usize) -> String {
    let plain = apply_all(markdown_rewrites(), content);
    clean_description(plain.trim(), max_length)
}

fn truncate(text: &str, max_length: usize) -> String {
    let Some((cut, _)) = text.char_indices().nth(max_length) else {
        return text.to_owned();
    };
    let head = &text[..cut];

    // Prefer a word boundary, unless it sits in the first 80% of the text.
    if let Some(space) = head.rfind(' ') {
        let space_index = head[..space].chars().count();
        if space_index * 5 > max_length * 4 {
            return format!("{}{ELLIPSIS}", &head[..space]);
        }
    }

    format!("{head}{ELLIPSIS}")
}
