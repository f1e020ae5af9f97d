use std::{fs, path::Path};

use color_eyre::Section;
use serde::Deserialize;

// Site-wide metadata used for titles, descriptions and absolute links.
pub const SITE_TITLE: &str = "Qiuarctica";
pub const SITE_SUBTITLE: &str = "Personal blog";
pub const SITE_LANG: &str = "zh_CN";
pub const SITE_DESCRIPTION: &str = "Qiuarctica的个人博客 - 在认清生活的真相之后依然热爱生活";
pub const SITE_KEYWORDS: &[&str] = &["博客", "技术", "生活", "思考", "编程"];
pub const SITE_AUTHOR: &str = "Qiuarctica";
pub const SITE_BASE_URL: &str = "https://qiuarctica.github.io/";
// Fallback image for OpenGraph/Twitter cards.
pub const SITE_DEFAULT_OG_IMAGE: Option<&str> = Some("/assets/meihong.jpg");

/// Read-only site configuration handed to every SEO helper.
///
/// Any subset of fields may be overridden from a `site.toml`; missing fields
/// keep the compiled-in defaults above.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub subtitle: String,
    pub lang: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub base_url: String,
    pub default_image: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        site_config()
    }
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        title: SITE_TITLE.to_string(),
        subtitle: SITE_SUBTITLE.to_string(),
        lang: SITE_LANG.to_string(),
        description: SITE_DESCRIPTION.to_string(),
        keywords: SITE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        author: SITE_AUTHOR.to_string(),
        base_url: SITE_BASE_URL.to_string(),
        default_image: SITE_DEFAULT_OG_IMAGE.map(|s| s.to_string()),
    }
}

impl SiteConfig {
    pub fn from_toml_str(raw: &str) -> color_eyre::Result<Self> {
        toml::from_str(raw).with_note(|| "While parsing site configuration.")
    }

    /// Load overrides from `path`.
    pub fn load(path: &Path) -> color_eyre::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_note(|| format!("While reading {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    /// `"{title} - {subtitle}"`, used wherever a page has nothing better.
    pub fn tagline(&self) -> String {
        format!("{} - {}", self.title, self.subtitle)
    }
}
