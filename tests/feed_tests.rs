//! Integration tests for feed generation

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{folio_cmd, write_post};

fn init_site(site_url: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    let mut cmd = folio_cmd();
    cmd.arg("init").arg(temp.path());
    if let Some(url) = site_url {
        cmd.arg("--site-url").arg(url);
    }
    cmd.assert().success();
    temp
}

#[test]
fn test_feed_item_fields() {
    let temp = init_site(Some("https://example.com"));
    write_post(
        temp.path(),
        "writing",
        "hello",
        "title = \"Hello\"\nexcerpt = \"World\"\npublish_date = 2024-01-15T13:45:00Z",
        "Body.\n",
    );

    let output = folio_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .output()
        .unwrap();
    assert!(output.status.success());

    let xml = String::from_utf8(output.stdout).unwrap();
    let channel = xml.trim().parse::<rss::Channel>().unwrap();
    assert_eq!(channel.title(), "Phi Bya");
    assert_eq!(channel.description(), "My blog");

    let item = &channel.items()[0];
    assert_eq!(item.title(), Some("Hello"));
    assert_eq!(item.description(), Some("World"));
    assert_eq!(item.link(), Some("https://example.com/writing/hello/"));
    assert_eq!(item.pub_date(), Some("Mon, 15 Jan 2024 00:00:00 +0000"));
}

#[test]
fn test_feed_newest_first_and_skips_projects() {
    let temp = init_site(Some("https://example.com"));
    write_post(
        temp.path(),
        "writing",
        "old",
        "title = \"Old\"\npublish_date = 2022-03-01",
        "Old post.\n",
    );
    write_post(
        temp.path(),
        "writing",
        "new",
        "title = \"New\"\npublish_date = 2024-03-01",
        "New post.\n",
    );
    write_post(
        temp.path(),
        "projects",
        "side-project",
        "title = \"Side Project\"\npublish_date = 2025-01-01",
        "",
    );

    let output = folio_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .output()
        .unwrap();
    let xml = String::from_utf8(output.stdout).unwrap();
    let channel = xml.trim().parse::<rss::Channel>().unwrap();

    let titles: Vec<_> = channel.items().iter().filter_map(|i| i.title()).collect();
    assert_eq!(titles, vec!["New", "Old"]);
    assert_eq!(channel.items()[1].description(), Some("Old post."));
}

#[test]
fn test_feed_empty_collection() {
    let temp = init_site(Some("https://example.com"));

    let output = folio_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .output()
        .unwrap();
    assert!(output.status.success());

    let xml = String::from_utf8(output.stdout).unwrap();
    let channel = xml.trim().parse::<rss::Channel>().unwrap();
    assert!(channel.items().is_empty());
}

#[test]
fn test_feed_requires_site_url() {
    let temp = init_site(None);

    folio_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site URL is required"));

    folio_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("--site")
        .arg("https://cli.example.com")
        .assert()
        .success()
        .stdout(predicate::str::contains("<link>https://cli.example.com/</link>"));
}

#[test]
fn test_feed_writes_output_file() {
    let temp = init_site(Some("https://example.com"));
    write_post(
        temp.path(),
        "writing",
        "hello",
        "title = \"Hello\"\npublish_date = 2024-01-15",
        "Hi.\n",
    );
    let target = temp.path().join("dist/rss.xml");

    folio_cmd()
        .current_dir(temp.path())
        .arg("feed")
        .arg("--output")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote feed to"));

    let xml = fs::read_to_string(target).unwrap();
    assert!(xml.contains("https://example.com/writing/hello/"));
}
