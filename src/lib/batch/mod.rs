use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::eyre;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    config::SiteConfig,
    header::Header,
    meta::generate_page_title,
    summary::extract_excerpt,
    types::Tags,
};

/// SEO summary of one markdown document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub path: PathBuf,
    pub title: String,
    pub description: String,
    pub excerpt: String,
    pub tags: Tags,
}

/// Summarize a single document. `max_length` bounds both the description and
/// the excerpt; `path` is carried through for reporting only.
pub fn summarize_document(
    path: &Path,
    content: &str,
    site: &SiteConfig,
    max_length: usize,
) -> PageSummary {
    let header = Header::try_from(content).unwrap_or_else(|e| {
        warn!(path = %path.display(), "ignoring unreadable frontmatter: {e}");
        Header::default()
    });

    PageSummary {
        path: path.to_path_buf(),
        title: generate_page_title(header.title(), site),
        description: header.page_description(content, site, max_length),
        excerpt: extract_excerpt(content, max_length),
        tags: header.tags(),
    }
}

/// Summarize every `.md` file below `dir`, in parallel. Results are sorted by
/// path; paths are relative to `dir`.
pub fn summarize_dir(
    dir: &Path,
    site: &SiteConfig,
    max_length: usize,
) -> color_eyre::Result<Vec<PageSummary>> {
    let sources = discover_sources(dir)?;
    info!(count = sources.len(), dir = %dir.display(), "summarizing documents");

    let summaries = sources
        .par_iter()
        .map(|(path, content)| {
            let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
            debug!(path = %rel.display(), "summarizing");
            summarize_document(rel, content, site, max_length)
        })
        .collect();

    Ok(summaries)
}

fn discover_sources(dir: &Path) -> color_eyre::Result<Vec<(PathBuf, String)>> {
    let mut md_paths: Vec<PathBuf> = Vec::new();
    let mut walk_errors: Vec<walkdir::Error> = Vec::new();

    for item in WalkDir::new(dir) {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|ext| ext == "md")
                {
                    md_paths.push(entry.path().to_path_buf());
                }
            }
            Err(e) => walk_errors.push(e),
        }
    }

    if !walk_errors.is_empty() {
        return Err(eyre!(
            "Failed to open some directory entries: {walk_errors:?}"
        ));
    }

    md_paths.sort();

    let mut docs: Vec<(PathBuf, String)> = Vec::with_capacity(md_paths.len());
    let mut file_errors: Vec<(PathBuf, std::io::Error)> = Vec::new();
    for path in md_paths {
        match fs::read_to_string(&path) {
            Ok(content) => docs.push((path, content)),
            Err(e) => file_errors.push((path, e)),
        }
    }

    if !file_errors.is_empty() {
        return Err(eyre!("Failed to open some files: {file_errors:?}"));
    }

    Ok(docs)
}

#[cfg(test)]
mod tests;
