//! Builder for constructing SkeletonLayout.

use super::{BundleBinary, PlatformTarget, PostinstallHook, SkeletonLayout};
use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

/// Builder for constructing [`SkeletonLayout`].
///
/// Starts from [`SkeletonLayout::default`]; every setter replaces one part.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_npm::bundler::{BundleBinary, LayoutBuilder};
///
/// # fn example() -> kodegen_bundler_npm::bundler::Result<()> {
/// let layout = LayoutBuilder::new()
///     .package_name("my-tool")
///     .static_assets(["LICENSE", "README.md"])
///     .binaries(vec![BundleBinary::with_default_path("my-tool")])
///     .build()?;
/// assert_eq!(layout.binaries()[0].path(), "my-tool.exe");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    package_name: Option<String>,
    output_dir: Option<PathBuf>,
    static_assets: Option<Vec<PathBuf>>,
    postinstall: Option<PostinstallHook>,
    binaries: Option<Vec<BundleBinary>>,
    platforms: Option<Vec<PlatformTarget>>,
}

impl LayoutBuilder {
    /// Creates a new layout builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the npm package name.
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Sets the output directory relative to the project root.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the files copied verbatim into the release.
    pub fn static_assets<I, P>(mut self, assets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.static_assets = Some(
            assets
                .into_iter()
                .map(|p| p.as_ref().to_path_buf())
                .collect(),
        );
        self
    }

    /// Sets the postinstall hook.
    pub fn postinstall(mut self, hook: PostinstallHook) -> Self {
        self.postinstall = Some(hook);
        self
    }

    /// Sets the binaries exposed through `bin`.
    pub fn binaries(mut self, binaries: Vec<BundleBinary>) -> Self {
        self.binaries = Some(binaries);
        self
    }

    /// Sets the declared platforms.
    pub fn platforms(mut self, platforms: Vec<PlatformTarget>) -> Self {
        self.platforms = Some(platforms);
        self
    }

    /// Builds the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the package name is empty, no binary is declared,
    /// two binaries share a name, any path would escape the output directory,
    /// or the output directory is the project root, lies outside it, or
    /// contains a source file the build copies.
    pub fn build(self) -> crate::bundler::Result<SkeletonLayout> {
        let defaults = SkeletonLayout::default();

        let package_name = self
            .package_name
            .unwrap_or_else(|| defaults.package_name().to_string());
        if package_name.trim().is_empty() {
            crate::bail!("package name must not be empty");
        }

        let output_dir = self
            .output_dir
            .unwrap_or_else(|| defaults.output_dir().to_path_buf());

        let static_assets = self
            .static_assets
            .unwrap_or_else(|| defaults.static_assets().to_vec());
        for asset in &static_assets {
            ensure_relative(asset)?;
        }

        let postinstall = self
            .postinstall
            .unwrap_or_else(|| defaults.postinstall().clone());
        ensure_relative(Path::new(postinstall.script()))?;

        let sources: Vec<&Path> = static_assets
            .iter()
            .map(PathBuf::as_path)
            .chain([postinstall.source()])
            .collect();
        ensure_output_dir(&output_dir, &sources)?;

        let binaries = self
            .binaries
            .unwrap_or_else(|| defaults.binaries().to_vec());
        if binaries.is_empty() {
            crate::bail!("at least one binary must be declared");
        }
        let mut names = HashSet::new();
        for binary in &binaries {
            if !names.insert(binary.name()) {
                crate::bail!("binary `{}` is declared more than once", binary.name());
            }
            ensure_relative(Path::new(binary.path()))?;
        }

        let platforms = self
            .platforms
            .unwrap_or_else(|| defaults.platforms().to_vec());

        Ok(SkeletonLayout::new(
            package_name,
            output_dir,
            static_assets,
            postinstall,
            binaries,
            platforms,
        ))
    }
}

/// Rejects absolute paths and `..` components for files placed in the output.
fn ensure_relative(path: &Path) -> crate::bundler::Result<()> {
    let escapes = path.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || path.as_os_str().is_empty() {
        crate::bail!(
            "`{}` must be a relative path inside the release directory",
            path.display()
        );
    }
    Ok(())
}

/// Rejects output directories the forced reset must not remove: anything
/// outside the project, the project root itself, and any directory holding
/// one of `sources`.
fn ensure_output_dir(output_dir: &Path, sources: &[&Path]) -> crate::bundler::Result<()> {
    let escapes = output_dir.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        crate::bail!(
            "output directory `{}` must be relative to the project root",
            output_dir.display()
        );
    }

    let output = normal_components(output_dir);
    if output.as_os_str().is_empty() {
        crate::bail!(
            "output directory `{}` must not be the project root",
            output_dir.display()
        );
    }

    for source in sources {
        if normal_components(source).starts_with(&output) {
            crate::bail!(
                "output directory `{}` contains source file `{}`",
                output_dir.display(),
                source.display()
            );
        }
    }
    Ok(())
}

/// Drops `.` components so `./vendors` and `vendors` compare equal.
fn normal_components(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_matches_default_layout() {
        let built = LayoutBuilder::new().build().unwrap();
        let default = SkeletonLayout::default();
        assert_eq!(built.package_name(), default.package_name());
        assert_eq!(built.static_assets(), default.static_assets());
        assert_eq!(built.binaries(), default.binaries());
        assert_eq!(built.platforms(), default.platforms());
    }

    #[test]
    fn rejects_escaping_asset_path() {
        let err = LayoutBuilder::new()
            .static_assets(["../secrets.txt"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("relative path"));
    }

    #[test]
    fn rejects_missing_binaries() {
        assert!(LayoutBuilder::new().binaries(vec![]).build().is_err());
    }

    #[test]
    fn rejects_duplicate_binary_names() {
        let err = LayoutBuilder::new()
            .binaries(vec![
                BundleBinary::with_default_path("tool"),
                BundleBinary::new("tool", "bin/tool.exe"),
            ])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("`tool` is declared more than once"), "{err}");
    }

    #[test]
    fn rejects_project_root_as_output() {
        for dir in [".", "./.", ""] {
            let err = LayoutBuilder::new().output_dir(dir).build().unwrap_err();
            assert!(err.to_string().contains("project root"), "{dir:?}: {err}");
        }
    }

    #[test]
    fn rejects_output_outside_project() {
        for dir in ["..", "/", "../_release", "/tmp/_release"] {
            let err = LayoutBuilder::new().output_dir(dir).build().unwrap_err();
            assert!(err.to_string().contains("relative to the project root"), "{dir:?}: {err}");
        }
    }

    #[test]
    fn rejects_output_holding_sources() {
        // Default sources live under vendors/ and script/.
        for dir in ["vendors", "./vendors", "script", "LICENSE", "vendors/ReactIntl.re"] {
            let err = LayoutBuilder::new().output_dir(dir).build().unwrap_err();
            assert!(err.to_string().contains("contains source file"), "{dir:?}: {err}");
        }
    }

    #[test]
    fn accepts_nested_output_beside_sources() {
        let layout = LayoutBuilder::new()
            .output_dir("./dist/npm")
            .build()
            .unwrap();
        assert_eq!(layout.output_dir(), Path::new("./dist/npm"));
        assert!(LayoutBuilder::new().output_dir("vendors-out").build().is_ok());
    }
}
