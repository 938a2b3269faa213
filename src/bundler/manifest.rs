//! Release manifest (`package.json`) synthesis and serialization.
//!
//! The manifest is an explicit record with a fixed field set. Serde emits
//! struct fields in declaration order and `bin` is a sorted map, so identical
//! inputs always produce byte-identical JSON.

use super::{
    error::Result,
    settings::{MANIFEST_FILE_NAME, ProjectMetadata, SkeletonLayout},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// Lifecycle scripts declared by the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    /// Command npm runs right after unpacking.
    pub postinstall: String,
}

/// The generated package descriptor.
///
/// Serialized shape:
///
/// ```json
/// {
///   "name": "react-intl-auto-id-ppx",
///   "version": "1.2.3",
///   "description": "...",
///   "homepage": "...",
///   "license": "MIT",
///   "repository": "...",
///   "scripts": { "postinstall": "node postinstall.js" },
///   "bin": { "react-intl-auto-id-ppx": "react-intl-auto-id-ppx.exe" },
///   "files": ["platform-windows-x64/", "...", "postinstall.js", "react-intl-auto-id-ppx.exe"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseManifest {
    /// npm package name.
    pub name: String,
    /// Copied from [`ProjectMetadata::version`].
    pub version: String,
    /// Copied from [`ProjectMetadata::description`].
    pub description: String,
    /// Copied from [`ProjectMetadata::homepage`].
    pub homepage: String,
    /// Copied from [`ProjectMetadata::license`].
    pub license: String,
    /// Copied from [`ProjectMetadata::repository`].
    pub repository: serde_json::Value,
    /// Lifecycle scripts.
    pub scripts: Scripts,
    /// Command name to placeholder path.
    pub bin: BTreeMap<String, String>,
    /// Every path that must ship in the published tarball.
    pub files: Vec<String>,
}

impl ReleaseManifest {
    /// Returns the script path the postinstall command runs, if any.
    pub fn postinstall_script(&self) -> Option<&str> {
        self.scripts.postinstall.split_whitespace().last()
    }

    /// Returns `true` if `path` is listed in `files` directly or sits below a
    /// listed directory entry.
    pub fn ships(&self, path: &str) -> bool {
        self.files
            .iter()
            .any(|entry| entry == path || (entry.ends_with('/') && path.starts_with(entry.as_str())))
    }

    /// Checks that every `bin` target and the postinstall script are shipped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ManifestInvariant`](super::Error::ManifestInvariant)
    /// naming the first path missing from `files`.
    pub fn verify(&self) -> Result<()> {
        for (command, target) in &self.bin {
            if !self.ships(target) {
                return Err(super::Error::ManifestInvariant(format!(
                    "bin `{command}` points to `{target}` which is not listed in files"
                )));
            }
        }

        match self.postinstall_script() {
            Some(script) if self.ships(script) => Ok(()),
            Some(script) => Err(super::Error::ManifestInvariant(format!(
                "postinstall script `{script}` is not listed in files"
            ))),
            None => Err(super::Error::ManifestInvariant(
                "postinstall command is empty".to_string(),
            )),
        }
    }

    /// Serializes the manifest as pretty-printed JSON with two-space indent.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds the manifest for `metadata` under `layout`. Performs no I/O.
///
/// `files` lists the platform directories in declaration order, then the
/// postinstall script, then each binary placeholder.
pub fn synthesize_manifest(metadata: &ProjectMetadata, layout: &SkeletonLayout) -> ReleaseManifest {
    let hook = layout.postinstall();

    let bin = layout
        .binaries()
        .iter()
        .map(|b| (b.name().to_string(), b.path().to_string()))
        .collect();

    let mut files: Vec<String> = layout.platforms().iter().map(|p| p.files_entry()).collect();
    files.push(hook.script().to_string());
    for binary in layout.binaries() {
        if !files.iter().any(|f| f == binary.path()) {
            files.push(binary.path().to_string());
        }
    }

    ReleaseManifest {
        name: layout.package_name().to_string(),
        version: metadata.version.clone(),
        description: metadata.description.clone(),
        homepage: metadata.homepage.clone(),
        license: metadata.license.clone(),
        repository: metadata.repository.clone(),
        scripts: Scripts {
            postinstall: hook.command(),
        },
        bin,
        files,
    }
}

/// Writes `manifest` to `package.json` under `dest_root`, replacing any
/// existing file. Returns the written path.
pub async fn write_manifest(dest_root: &Path, manifest: &ReleaseManifest) -> Result<PathBuf> {
    let json = manifest.to_json()?;
    let path = dest_root.join(MANIFEST_FILE_NAME);
    super::utils::fs::write_file(&path, json).await?;
    log::info!("Wrote manifest: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{BundleBinary, LayoutBuilder, PostinstallHook};

    fn metadata() -> ProjectMetadata {
        ProjectMetadata {
            version: "1.2.3".into(),
            description: "D".into(),
            homepage: "H".into(),
            license: "L".into(),
            repository: serde_json::Value::from("R"),
        }
    }

    #[test]
    fn metadata_fields_pass_through() {
        let manifest = synthesize_manifest(&metadata(), &SkeletonLayout::default());
        assert_eq!(manifest.version, "1.2.3");
        assert_eq!(manifest.description, "D");
        assert_eq!(manifest.homepage, "H");
        assert_eq!(manifest.license, "L");
        assert_eq!(manifest.repository, serde_json::Value::from("R"));
    }

    #[test]
    fn default_layout_produces_published_shape() {
        let manifest = synthesize_manifest(&metadata(), &SkeletonLayout::default());
        assert_eq!(manifest.name, "react-intl-auto-id-ppx");
        assert_eq!(manifest.scripts.postinstall, "node postinstall.js");
        assert_eq!(
            manifest.bin.get("react-intl-auto-id-ppx").map(String::as_str),
            Some("react-intl-auto-id-ppx.exe")
        );
        assert_eq!(
            manifest.files,
            vec![
                "platform-windows-x64/",
                "platform-linux-x64/",
                "platform-darwin-x64/",
                "postinstall.js",
                "react-intl-auto-id-ppx.exe",
            ]
        );
        manifest.verify().unwrap();
    }

    #[test]
    fn json_keeps_field_order_and_two_space_indent() {
        let json = synthesize_manifest(&metadata(), &SkeletonLayout::default())
            .to_json()
            .unwrap();
        let keys = [
            "\"name\"",
            "\"version\"",
            "\"description\"",
            "\"homepage\"",
            "\"license\"",
            "\"repository\"",
            "\"scripts\"",
            "\"bin\"",
            "\"files\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(json.starts_with("{\n  \"name\": \"react-intl-auto-id-ppx\""));
    }

    #[test]
    fn every_bin_target_is_shipped_for_multi_binary_layouts() {
        let layout = LayoutBuilder::new()
            .binaries(vec![
                BundleBinary::with_default_path("tool"),
                BundleBinary::new("tool-lsp", "bin/tool-lsp.exe"),
            ])
            .build()
            .unwrap();
        let manifest = synthesize_manifest(&metadata(), &layout);
        for target in manifest.bin.values() {
            assert!(manifest.ships(target), "{target} missing from {:?}", manifest.files);
        }
        manifest.verify().unwrap();
    }

    #[test]
    fn directory_entries_cover_nested_paths() {
        let mut manifest = synthesize_manifest(&metadata(), &SkeletonLayout::default());
        manifest.files = vec!["bin/".into(), "postinstall.js".into()];
        manifest.bin = BTreeMap::from([("tool".to_string(), "bin/tool.exe".to_string())]);
        manifest.verify().unwrap();
    }

    #[test]
    fn verify_rejects_unshipped_bin_target() {
        let mut manifest = synthesize_manifest(&metadata(), &SkeletonLayout::default());
        manifest.files.retain(|f| f != "react-intl-auto-id-ppx.exe");
        let err = manifest.verify().unwrap_err();
        assert!(err.to_string().contains("react-intl-auto-id-ppx.exe"));
    }

    #[test]
    fn verify_rejects_unshipped_postinstall_script() {
        let layout = LayoutBuilder::new()
            .postinstall(PostinstallHook::new("node", "install.js", "script/install.js"))
            .build()
            .unwrap();
        let mut manifest = synthesize_manifest(&metadata(), &layout);
        manifest.files.retain(|f| f != "install.js");
        assert!(manifest.verify().is_err());
    }
}
