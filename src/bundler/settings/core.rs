//! Core SkeletonLayout struct and implementations.

use super::{Arch, BundleBinary, Os, PlatformTarget, PostinstallHook};
use std::path::{Path, PathBuf};

/// Default package name published to npm.
pub const DEFAULT_PACKAGE_NAME: &str = "react-intl-auto-id-ppx";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "_release";

/// Manifest file written at the output root.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Every fixed value of a skeleton build.
///
/// Constructed via [`LayoutBuilder`](super::LayoutBuilder) or
/// [`SkeletonLayout::default`], which reproduces the published layout of
/// `react-intl-auto-id-ppx`.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_npm::bundler::SkeletonLayout;
///
/// let layout = SkeletonLayout::default();
/// assert_eq!(layout.package_name(), "react-intl-auto-id-ppx");
/// assert_eq!(layout.platforms().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SkeletonLayout {
    /// npm package name.
    package_name: String,

    /// Output directory, relative to the project root.
    output_dir: PathBuf,

    /// Files copied verbatim, relative to both roots.
    ///
    /// Order is copy order.
    static_assets: Vec<PathBuf>,

    /// Postinstall hook and its source script.
    postinstall: PostinstallHook,

    /// Commands exposed through `bin`.
    binaries: Vec<BundleBinary>,

    /// Platforms whose artifact directories are declared in `files`.
    platforms: Vec<PlatformTarget>,
}

impl SkeletonLayout {
    /// Returns the npm package name.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns the output directory relative to the project root.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Resolves the output directory against `project_root`.
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output_dir)
    }

    /// Returns the static assets in copy order.
    pub fn static_assets(&self) -> &[PathBuf] {
        &self.static_assets
    }

    /// Returns the postinstall hook.
    pub fn postinstall(&self) -> &PostinstallHook {
        &self.postinstall
    }

    /// Returns the binaries exposed through `bin`.
    pub fn binaries(&self) -> &[BundleBinary] {
        &self.binaries
    }

    /// Returns the declared platforms.
    pub fn platforms(&self) -> &[PlatformTarget] {
        &self.platforms
    }

    /// Creates a new layout (used by LayoutBuilder).
    pub(super) fn new(
        package_name: String,
        output_dir: PathBuf,
        static_assets: Vec<PathBuf>,
        postinstall: PostinstallHook,
        binaries: Vec<BundleBinary>,
        platforms: Vec<PlatformTarget>,
    ) -> Self {
        Self {
            package_name,
            output_dir,
            static_assets,
            postinstall,
            binaries,
            platforms,
        }
    }
}

impl Default for SkeletonLayout {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            static_assets: ["LICENSE", "README.md", "vendors/ReactIntl.re"]
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            postinstall: PostinstallHook::default(),
            binaries: vec![BundleBinary::with_default_path(DEFAULT_PACKAGE_NAME)],
            platforms: vec![
                PlatformTarget::new(Os::Windows, Arch::X64),
                PlatformTarget::new(Os::Linux, Arch::X64),
                PlatformTarget::new(Os::Darwin, Arch::X64),
            ],
        }
    }
}
