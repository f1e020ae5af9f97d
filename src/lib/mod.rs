//! SEO helpers for a static blog: excerpts and descriptions from markdown,
//! page titles, tag normalization and schema.org structured data.
//!
//! Every helper is a pure function of its inputs. Site-wide defaults travel
//! in an explicit [`config::SiteConfig`].

pub mod batch;
pub mod config;
pub mod header;
pub mod meta;
pub mod rewrite;
pub mod structured_data;
pub mod summary;
pub mod types;
pub mod utils;

pub use config::SiteConfig;
pub use meta::{generate_image_url, generate_page_description, generate_page_title};
pub use structured_data::{generate_breadcrumb_ld, generate_faq_ld};
pub use summary::{DEFAULT_MAX_LENGTH, clean_description, extract_excerpt};
pub use types::format_tags;
