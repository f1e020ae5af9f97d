use color_eyre::Section;
use gray_matter::{Matter, engine::YAML};
use itertools::Itertools;
use serde::Deserialize;

use crate::{
    config::SiteConfig,
    meta::{generate_image_url, generate_page_description, generate_page_title},
    structured_data::{Crumb, Faq, generate_breadcrumb_ld, generate_faq_ld, to_script_tag},
    summary::{DEFAULT_MAX_LENGTH, clean_description, extract_excerpt},
    types::{Tag, Tags},
    utils::escape_html,
};

/// SEO-relevant fields of a document's frontmatter.
#[derive(Deserialize, Default, Debug)]
pub struct Header {
    title: Option<String>,
    description: Option<String>,
    canonical: Option<String>,
    #[serde(alias = "og_image", alias = "cover")]
    image: Option<String>,
    tags: Option<Vec<String>>,
    faq: Option<Vec<Faq>>,
}

impl TryFrom<&str> for Header {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let matter = Matter::<YAML>::new();
        matter
            .parse::<Header>(value)
            .with_note(|| "While parsing frontmatter.")
            .map(|res| res.data.unwrap_or_default())
    }
}

impl Header {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn tags(&self) -> Tags {
        Tags::from_raw(self.tags.as_deref().unwrap_or(&[]))
    }

    /// The frontmatter description if it has any text, else an excerpt of
    /// `content`, else the site-wide fallback. Both of the first two are
    /// bounded by `max_length`.
    pub fn page_description(
        &self,
        content: &str,
        site: &SiteConfig,
        max_length: usize,
    ) -> String {
        let own = self
            .description
            .as_deref()
            .map(|d| clean_description(d, max_length))
            .filter(|d| !d.is_empty())
            .or_else(|| Some(extract_excerpt(content, max_length)).filter(|e| !e.is_empty()));
        generate_page_description(own.as_deref(), site)
    }

    /// Render the `<head>` fragment for a page: title, description, keywords,
    /// OpenGraph/Twitter cards and JSON-LD.
    pub fn seo_head(
        &self,
        content: &str,
        page_url: &str,
        site: &SiteConfig,
    ) -> color_eyre::Result<String> {
        let mut result = String::new();

        let title = generate_page_title(self.title(), site);
        let description = self.page_description(content, site, DEFAULT_MAX_LENGTH);

        result.push_str(&format!(
            r#"
<title>{}</title>
<meta name="description" content="{}">"#,
            escape_html(&title),
            escape_html(&description)
        ));

        let tags = self.tags();
        let keywords = if tags.is_empty() {
            site.keywords.join(", ")
        } else {
            tags.into_iter().map(Tag::as_str).join(", ")
        };
        if !keywords.is_empty() {
            result.push_str(&format!(
                r#"
<meta name="keywords" content="{}">"#,
                escape_html(&keywords)
            ));
        }

        let image_url = self
            .image
            .as_deref()
            .or(site.default_image.as_deref())
            .map(|img| generate_image_url(img, &site.base_url))
            .transpose()
            .with_note(|| "While resolving the social preview image.")?;

        result.push_str(&render_social_meta(&SocialMeta {
            title: self.title().unwrap_or(site.title.as_str()),
            description: &description,
            url: self.canonical.as_deref().unwrap_or(page_url),
            locale: &site.lang,
            author: &site.author,
            image_url: image_url.as_deref(),
        }));

        let crumbs = [
            Crumb::new(site.title.as_str(), Some("/")),
            Crumb::new(self.title().unwrap_or(site.title.as_str()), None),
        ];
        let breadcrumbs = generate_breadcrumb_ld(&crumbs, &site.base_url)?;
        result.push('\n');
        result.push_str(&to_script_tag(&breadcrumbs)?);

        if let Some(faq) = self.faq.as_deref().filter(|f| !f.is_empty()) {
            result.push('\n');
            result.push_str(&to_script_tag(&generate_faq_ld(faq))?);
        }

        Ok(result)
    }
}

struct SocialMeta<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
    locale: &'a str,
    author: &'a str,
    image_url: Option<&'a str>,
}

fn render_social_meta(meta: &SocialMeta<'_>) -> String {
    let mut out = String::new();
    let mut property = |attr: &str, name: &str, value: &str| {
        out.push_str(&format!(
            r#"
<meta {attr}="{name}" content="{}">"#,
            escape_html(value)
        ));
    };

    property("property", "og:title", meta.title);
    property("property", "og:description", meta.description);
    property("property", "og:type", "article");
    property("property", "og:url", meta.url);
    property("property", "og:locale", meta.locale);
    if let Some(img) = meta.image_url {
        property("property", "og:image", img);
        property("name", "twitter:image", img);
    }
    property("name", "twitter:card", "summary_large_image");
    property("name", "twitter:title", meta.title);
    property("name", "twitter:description", meta.description);
    property("name", "twitter:creator", meta.author);

    out.push_str(&format!(
        r#"
<link rel="canonical" href="{}">"#,
        escape_html(meta.url)
    ));
    out
}
