//! A rewrite is a single regex substitution over plain text. The excerpt
//! pipeline is an ordered slice of rewrites, each of which only needs the
//! steps before it to have run. For example, fenced code blocks are dropped
//! before the inline code rule so that the fence backticks are never read as
//! inline code spans.
use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use tracing::trace;

/// One named substitution. `replacement` uses the `regex` crate's `${n}`
/// capture syntax.
#[derive(Debug)]
pub struct Rewrite {
    name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    /// Build a rewrite from a pattern known at compile time.
    pub fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("static rewrite pattern is valid"),
            replacement,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replace every match. Borrows the input back when nothing matched.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(text, self.replacement)
    }
}

/// Markdown-to-prose steps, in the order they must run.
static MARKDOWN_REWRITES: LazyLock<[Rewrite; 9]> = LazyLock::new(|| {
    [
        // Only a block at the very start of the document counts, and both
        // delimiters must be whole `---` lines.
        Rewrite::new(
            "front_matter",
            r"\A---[ \t]*\r?\n(?:[\s\S]*?\r?\n)?---[ \t]*(?:\r?\n|\z)",
            "",
        ),
        Rewrite::new("code_fence", r"```[\s\S]*?```", ""),
        Rewrite::new("heading", r"#{1,6}\s+", ""),
        Rewrite::new("bold", r"\*\*(.*?)\*\*", "${1}"),
        Rewrite::new("italic", r"\*(.*?)\*", "${1}"),
        Rewrite::new("inline_code", r"`(.*?)`", "${1}"),
        // Images are links prefixed with `!`; drop them before links unwrap.
        Rewrite::new("image", r"!\[[^\]]*\]\([^)]+\)", ""),
        Rewrite::new("link", r"\[([^\]]+)\]\([^)]+\)", "${1}"),
        Rewrite::new("newline", r"\n+", " "),
    ]
});

pub fn markdown_rewrites() -> &'static [Rewrite] {
    MARKDOWN_REWRITES.as_slice()
}

/// Run `rewrites` over `text` in order.
pub fn apply_all(rewrites: &[Rewrite], text: &str) -> String {
    let mut out = text.to_owned();
    for rewrite in rewrites {
        let next = match rewrite.apply(&out) {
            Cow::Borrowed(_) => None,
            Cow::Owned(rewritten) => Some(rewritten),
        };
        if let Some(rewritten) = next {
            trace!(step = rewrite.name(), "rewrite matched");
            out = rewritten;
        }
    }
    out
}
