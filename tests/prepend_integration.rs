//! Tests for the href rewrite pass, including running it after a split.

use std::fs;

use csv_html_split::config::{Settings, parse_settings};
use csv_html_split::engine::rewriter::{self, DEFAULT_REPO_PREFIX, RewriteOptions};
use csv_html_split::engine::splitter::{self, SplitOptions};
use csv_html_split::{SplitError, prepend_cmd};
use tempfile::tempdir;

#[test]
fn test_rewrites_relative_hrefs_only() {
    let dir = tempdir().unwrap();
    let input = "\
id,href
1,src/A1-0.html
2,
3,https://elsewhere/x.html
4,\"src/a,b-3.html\"
";
    fs::write(dir.path().join("data_clear.csv"), input).unwrap();

    let opts = RewriteOptions::in_root(dir.path(), "https://host/");
    let summary = rewriter::run(&opts).unwrap();
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.rewritten, 2);

    let out = fs::read_to_string(dir.path().join("done.csv")).unwrap();
    let expected = "\
id,href
1,https://host/src/A1-0.html
2,
3,https://elsewhere/x.html
4,\"https://host/src/a,b-3.html\"
";
    assert_eq!(out, expected);
}

#[test]
fn test_rows_without_href_column_unchanged() {
    let dir = tempdir().unwrap();
    let input = "id,name\n1,a\n2,b\n";
    fs::write(dir.path().join("data_clear.csv"), input).unwrap();

    let summary = prepend_cmd::run(Some(dir.path().to_path_buf()), None, &Settings::default()).unwrap();
    assert_eq!(summary.rewritten, 0);
    assert_eq!(fs::read_to_string(dir.path().join("done.csv")).unwrap(), input);
}

#[test]
fn test_default_prefix_and_config_prefix() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data_clear.csv"), "href\nsrc/x-0.html\n").unwrap();

    prepend_cmd::run(Some(dir.path().to_path_buf()), None, &Settings::default()).unwrap();
    let out = fs::read_to_string(dir.path().join("done.csv")).unwrap();
    assert_eq!(out, format!("href\n{DEFAULT_REPO_PREFIX}src/x-0.html\n"));

    let settings = parse_settings(&format!(
        "[prepend]\nroot = {:?}\nprefix = \"https://mirror/\"\n",
        dir.path().display().to_string()
    ))
    .unwrap();
    prepend_cmd::run(None, None, &settings).unwrap();
    let out = fs::read_to_string(dir.path().join("done.csv")).unwrap();
    assert_eq!(out, "href\nhttps://mirror/src/x-0.html\n");
}

#[test]
fn test_missing_light_csv_is_fatal() {
    let dir = tempdir().unwrap();
    let err = prepend_cmd::run(Some(dir.path().to_path_buf()), None, &Settings::default()).unwrap_err();
    assert!(matches!(err, SplitError::Io { .. }));
    assert!(!dir.path().join("done.csv").exists());
}

#[test]
fn test_split_then_rewrite() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.csv"), "tohop_id,HTML\nA1,<p>hi</p>\nB2,\n").unwrap();

    let split = SplitOptions {
        input: dir.path().join("data.csv"),
        out_csv: dir.path().join("data_clear.csv"),
        html_dir: dir.path().join("src"),
        href_prefix: None,
    }
    .with_href_prefix("src");
    splitter::run(&split).unwrap();

    let summary = rewriter::run(&RewriteOptions::in_root(dir.path(), "https://host/")).unwrap();
    assert_eq!(summary.rewritten, 1);
    let out = fs::read_to_string(dir.path().join("done.csv")).unwrap();
    assert_eq!(out, "tohop_id,href\nA1,https://host/src/A1-0.html\nB2,\n");
}
