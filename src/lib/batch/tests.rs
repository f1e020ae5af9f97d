use std::{
    fs,
    path::{Path, PathBuf},
};

use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};
use tempfile::TempDir;

use super::{summarize_dir, summarize_document};
use crate::{
    config::{SiteConfig, site_config},
    summary::DEFAULT_MAX_LENGTH,
};

fn site() -> SiteConfig {
    SiteConfig {
        title: "Blog".into(),
        subtitle: "Notes".into(),
        ..site_config()
    }
}

fn write_md(root: &Path, rel_path: &Path, body: &str) -> std::io::Result<()> {
    let full = root.join(rel_path);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(full, body)
}

#[test]
fn summarizes_single_document() {
    let doc = "---\ntitle: Post\ntags: [A, a, B]\n---\n# Head\nBody `code`.";
    let summary = summarize_document(Path::new("post.md"), doc, &site(), DEFAULT_MAX_LENGTH);

    assert_eq!(summary.title, "Post | Blog");
    assert_eq!(summary.excerpt, "Head Body code.");
    assert_eq!(summary.description, "Head Body code.");
    assert_eq!(summary.tags.to_strings(), vec!["a", "b"]);
}

#[test]
fn max_length_bounds_description_and_excerpt() {
    let doc = "---\ndescription: A longer written description\n---\nBody text that runs on.";
    let summary = summarize_document(Path::new("post.md"), doc, &site(), 8);

    assert_eq!(summary.description, "A longer...");
    assert_eq!(summary.excerpt, "Body tex...");
}

#[test]
fn dir_scan_only_reads_markdown() {
    let tmp = TempDir::new().unwrap();
    write_md(tmp.path(), Path::new("b.md"), "Second.").unwrap();
    write_md(tmp.path(), Path::new("nested/a.md"), "First.").unwrap();
    write_md(tmp.path(), Path::new("notes.txt"), "Ignored.").unwrap();

    let summaries = summarize_dir(tmp.path(), &site(), DEFAULT_MAX_LENGTH).unwrap();
    let paths: Vec<_> = summaries.iter().map(|s| s.path.clone()).collect();
    assert_eq!(
        paths,
        vec![PathBuf::from("b.md"), PathBuf::from("nested/a.md")]
    );
    assert_eq!(summaries[1].excerpt, "First.");
}

#[test]
fn missing_dir_is_an_error() {
    let tmp = TempDir::new().unwrap();
    assert!(summarize_dir(&tmp.path().join("absent"), &site(), DEFAULT_MAX_LENGTH).is_err());
}

#[test]
fn every_markdown_file_is_summarized_once() {
    let mut runner = TestRunner::new(Config {
        cases: 16,
        failure_persistence: None,
        ..Config::default()
    });

    runner
        .run(
            &proptest::collection::btree_set("[a-z]{1,8}", 0..6),
            |names| {
                let tmp = TempDir::new().unwrap();
                for name in &names {
                    write_md(tmp.path(), Path::new(&format!("{name}.md")), name).unwrap();
                }

                let summaries = summarize_dir(tmp.path(), &site(), DEFAULT_MAX_LENGTH).unwrap();
                prop_assert_eq!(summaries.len(), names.len());
                for (summary, name) in summaries.iter().zip(&names) {
                    prop_assert_eq!(&summary.excerpt, name);
                }
                Ok(())
            },
        )
        .unwrap();
}
