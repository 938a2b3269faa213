//! Release layout overrides from `release-skeleton.toml`.
//!
//! The file is optional. Every key is optional and replaces the matching
//! part of [`SkeletonLayout::default`]:
//!
//! ```toml
//! name = "my-tool"
//! output_dir = "_release"
//! assets = ["LICENSE", "README.md"]
//! postinstall_source = "script/release-postinstall.js"
//! platforms = ["linux-x64", "darwin-arm64", "windows-x64"]
//!
//! [[binaries]]
//! name = "my-tool"
//! # path defaults to "<name>.exe"
//! ```

use super::{MetadataError, read_descriptor};
use crate::{
    bundler::{BundleBinary, LayoutBuilder, PlatformTarget, SkeletonLayout, error::Context},
    error::Result,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Override file name, looked up in the project root.
pub const LAYOUT_FILE_NAME: &str = "release-skeleton.toml";

/// Parsed contents of `release-skeleton.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutOverrides {
    /// npm package name.
    #[serde(default)]
    pub name: Option<String>,

    /// Output directory relative to the project root.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Static assets copied verbatim.
    #[serde(default)]
    pub assets: Option<Vec<PathBuf>>,

    /// Source location of the postinstall script.
    #[serde(default)]
    pub postinstall_source: Option<PathBuf>,

    /// Commands exposed through `bin`.
    #[serde(default)]
    pub binaries: Option<Vec<BinaryOverride>>,

    /// Declared platform directories.
    #[serde(default)]
    pub platforms: Option<Vec<PlatformTarget>>,
}

/// One `[[binaries]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinaryOverride {
    /// Command name.
    pub name: String,
    /// Placeholder path; defaults to `<name>.exe`.
    #[serde(default)]
    pub path: Option<String>,
}

impl LayoutOverrides {
    /// Applies the overrides on top of the default layout.
    pub fn into_layout(self) -> crate::bundler::Result<SkeletonLayout> {
        let mut builder = LayoutBuilder::new();

        if let Some(name) = self.name {
            builder = builder.package_name(name);
        }
        if let Some(dir) = self.output_dir {
            builder = builder.output_dir(dir);
        }
        if let Some(assets) = self.assets {
            builder = builder.static_assets(assets);
        }
        if let Some(source) = self.postinstall_source {
            let mut hook = SkeletonLayout::default().postinstall().clone();
            hook.set_source(source);
            builder = builder.postinstall(hook);
        }
        if let Some(binaries) = self.binaries {
            builder = builder.binaries(
                binaries
                    .into_iter()
                    .map(|b| match b.path {
                        Some(path) => BundleBinary::new(b.name, path),
                        None => BundleBinary::with_default_path(b.name),
                    })
                    .collect(),
            );
        }
        if let Some(platforms) = self.platforms {
            builder = builder.platforms(platforms);
        }

        builder.build()
    }
}

/// Loads the release layout for `project_root`.
///
/// Returns [`SkeletonLayout::default`] when no override file exists.
pub fn load_layout(project_root: &Path) -> Result<SkeletonLayout> {
    let path = project_root.join(LAYOUT_FILE_NAME);
    if !path.is_file() {
        log::debug!("No {} found, using default layout", LAYOUT_FILE_NAME);
        return Ok(SkeletonLayout::default());
    }

    log::info!("Using layout overrides from {}", path.display());
    let raw = read_descriptor(&path)?;
    let overrides: LayoutOverrides =
        toml::from_str(&raw).map_err(|source| MetadataError::Toml {
            path: path.clone(),
            source,
        })?;
    let layout = overrides
        .into_layout()
        .context(format!("invalid layout in {}", path.display()))?;
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bundler::{Arch, Os},
        error::BundlerError,
    };

    #[test]
    fn missing_file_yields_default_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let layout = load_layout(tmp.path()).unwrap();
        assert_eq!(layout.package_name(), "react-intl-auto-id-ppx");
    }

    #[test]
    fn overrides_replace_only_given_keys() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(LAYOUT_FILE_NAME),
            r#"
name = "my-tool"
platforms = ["linux-x64", "darwin-arm64"]

[[binaries]]
name = "my-tool"

[[binaries]]
name = "my-tool-lsp"
path = "bin/my-tool-lsp.exe"
"#,
        )
        .unwrap();

        let layout = load_layout(tmp.path()).unwrap();
        assert_eq!(layout.package_name(), "my-tool");
        assert_eq!(layout.output_dir(), Path::new("_release"));
        assert_eq!(layout.static_assets().len(), 3);
        assert_eq!(
            layout.platforms(),
            &[
                PlatformTarget::new(Os::Linux, Arch::X64),
                PlatformTarget::new(Os::Darwin, Arch::Arm64),
            ]
        );
        assert_eq!(layout.binaries()[0].path(), "my-tool.exe");
        assert_eq!(layout.binaries()[1].path(), "bin/my-tool-lsp.exe");
    }

    #[test]
    fn postinstall_source_keeps_in_package_name() {
        let overrides = LayoutOverrides {
            postinstall_source: Some(PathBuf::from("tools/install.js")),
            ..Default::default()
        };
        let layout = overrides.into_layout().unwrap();
        assert_eq!(layout.postinstall().script(), "postinstall.js");
        assert_eq!(layout.postinstall().source(), Path::new("tools/install.js"));
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(LAYOUT_FILE_NAME), "platforms = [\"beos-x64\"]").unwrap();
        assert!(matches!(
            load_layout(tmp.path()).unwrap_err(),
            BundlerError::Metadata(MetadataError::Toml { .. })
        ));
    }

    #[test]
    fn unreadable_file_names_its_path() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(LAYOUT_FILE_NAME), [b'n', b'=', 0xff, 0xfe]).unwrap();

        let err = load_layout(tmp.path()).unwrap_err();
        assert!(matches!(err, BundlerError::Metadata(MetadataError::Read { .. })));
        assert!(err.to_string().contains(LAYOUT_FILE_NAME), "{err}");
    }

    #[test]
    fn invalid_layout_names_the_override_file() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(LAYOUT_FILE_NAME), "output_dir = \".\"").unwrap();

        let err = load_layout(tmp.path()).unwrap_err();
        assert!(matches!(err, BundlerError::Bundler(_)));
        assert!(err.to_string().contains(LAYOUT_FILE_NAME), "{err}");
    }
}
