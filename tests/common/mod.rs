#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn folio_cmd() -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.env_remove("FOLIO_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a post under `content/<collection>/<slug>.md`
pub fn write_post(root: &Path, collection: &str, slug: &str, front: &str, body: &str) {
    let dir = root.join("content").join(collection);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(format!("{}.md", slug)),
        format!("+++\n{}\n+++\n{}", front, body),
    )
    .unwrap();
}
