//! Shared fixtures for skeleton build tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ESY_JSON: &str = r##"{
  "name": "react-intl-auto-id-ppx",
  "version": "1.2.3",
  "description": "D",
  "homepage": "H",
  "license": "L",
  "repository": "R",
  "esy": { "build": "dune build -p #{self.name}" }
}"##;

/// A throwaway project root with every file the default layout copies.
pub struct FixtureProject {
    dir: TempDir,
}

impl FixtureProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp project");
        let project = Self { dir };
        project.write("esy.json", ESY_JSON);
        project.write("LICENSE", "MIT License\n");
        project.write("README.md", "# react-intl-auto-id-ppx\n");
        project.write("vendors/ReactIntl.re", "type message;\n");
        project.write(
            "script/release-postinstall.js",
            "#!/usr/bin/env node\nconsole.log('select platform binary')\n",
        );
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn release_dir(&self) -> PathBuf {
        self.root().join("_release")
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture dirs");
        }
        std::fs::write(path, contents).expect("write fixture file");
    }

    pub fn remove(&self, rel: &str) {
        std::fs::remove_file(self.root().join(rel)).expect("remove fixture file");
    }
}

/// Relative path -> bytes for every file below `root`.
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(|e| e.expect("walk release tree"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e
                .path()
                .strip_prefix(root)
                .expect("entry under root")
                .to_string_lossy()
                .replace('\\', "/");
            (rel, std::fs::read(e.path()).expect("read release file"))
        })
        .collect()
}

/// The files a default build must produce, sorted.
pub fn expected_files() -> Vec<&'static str> {
    vec![
        "LICENSE",
        "README.md",
        "package.json",
        "postinstall.js",
        "react-intl-auto-id-ppx.exe",
        "vendors/ReactIntl.re",
    ]
}
