//! schema.org structured data (JSON-LD) for search engines.
//!
//! Field names are serialized verbatim (`@context`, `itemListElement`, ...)
//! since crawlers match on them exactly.
use serde::{Deserialize, Serialize};

use crate::meta::resolve_url;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// One step of a breadcrumb trail. The last crumb usually has no URL.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Crumb {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Crumb {
    pub fn new(name: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            name: name.into(),
            url: url.map(ToOwned::to_owned),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "mainEntity")]
    pub main_entity: Vec<Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

/// Build a `BreadcrumbList`; crumb URLs are resolved against `base_url`.
pub fn generate_breadcrumb_ld(
    items: &[Crumb],
    base_url: &str,
) -> color_eyre::Result<BreadcrumbList> {
    let item_list_element = items
        .iter()
        .enumerate()
        .map(|(index, crumb)| -> color_eyre::Result<ListItem> {
            let item = crumb
                .url
                .as_deref()
                .filter(|u| !u.is_empty())
                .map(|u| resolve_url(u, base_url))
                .transpose()?;
            Ok(ListItem {
                kind: "ListItem",
                position: index + 1,
                name: crumb.name.clone(),
                item,
            })
        })
        .collect::<color_eyre::Result<Vec<_>>>()?;

    Ok(BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element,
    })
}

pub fn generate_faq_ld(faqs: &[Faq]) -> FaqPage {
    FaqPage {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question.clone(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer.clone(),
                },
            })
            .collect(),
    }
}

/// Embed structured data in a `<script type="application/ld+json">` element.
pub fn to_script_tag<T: Serialize>(data: &T) -> color_eyre::Result<String> {
    let json = serde_json::to_string(data)?;
    // A literal `</script>` inside a string would end the element early.
    let json = json.replace("</", r"<\/");
    Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
}
