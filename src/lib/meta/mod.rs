use color_eyre::{Section, eyre::eyre};
use url::Url;

use crate::config::SiteConfig;

/// `"{title} | {site}"` for a titled page, the site tagline otherwise.
pub fn generate_page_title(title: Option<&str>, site: &SiteConfig) -> String {
    match title.filter(|t| !t.is_empty()) {
        Some(title) => format!("{title} | {}", site.title),
        None => site.tagline(),
    }
}

/// The page's own description, falling back to the site description and then
/// the site tagline.
pub fn generate_page_description(description: Option<&str>, site: &SiteConfig) -> String {
    description
        .filter(|d| !d.is_empty())
        .or(Some(site.description.as_str()).filter(|d| !d.is_empty()))
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| site.tagline())
}

/// Absolute URL for an image path, relative or not.
pub fn generate_image_url(image_path: &str, site_url: &str) -> color_eyre::Result<String> {
    resolve_url(image_path, site_url)
}

/// Resolve `path` against `base` the way a browser resolves an `href`.
pub fn resolve_url(path: &str, base: &str) -> color_eyre::Result<String> {
    let base = Url::parse(base)
        .map_err(|e| eyre!("invalid base URL {base:?}: {e}"))
        .with_note(|| "Base URLs must be absolute, e.g. https://example.com/")?;
    base.join(path)
        .map(String::from)
        .map_err(|e| eyre!("cannot resolve {path:?} against {base}: {e}"))
}
