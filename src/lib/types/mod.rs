//! Shared data types for the SEO helpers.
//! Implemented as newtypes to enforce invariants.

use itertools::Itertools;
use serde::Serialize;

/// A normalized tag: trimmed, lowercase and never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered, duplicate-free tags in order of first appearance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Self {
        Self(
            raw.iter()
                .filter_map(|t| Tag::parse(t.as_ref()))
                .unique()
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|t| t.0.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Trim, lowercase and deduplicate `tags`, dropping blanks.
pub fn format_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    Tags::from_raw(tags).to_strings()
}
