//! Main skeleton orchestration.
//!
//! This module provides the [`SkeletonBuilder`] that runs the build steps in
//! their fixed order and reports what was produced.

use super::{checksum::calculate_tree_sha256, steps};
use crate::bundler::{
    ProjectMetadata, ReleaseManifest, Result, SkeletonLayout,
    error::Context,
    manifest::{synthesize_manifest, write_manifest},
};
use std::path::{Path, PathBuf};

/// Outcome of a successful skeleton build.
#[derive(Debug, Clone)]
pub struct SkeletonReport {
    /// Absolute or project-relative output directory.
    pub output_dir: PathBuf,
    /// Every file the build wrote, in creation order.
    pub files: Vec<PathBuf>,
    /// The manifest written to `package.json`.
    pub manifest: ReleaseManifest,
    /// SHA-256 over the whole output tree.
    pub checksum: String,
}

/// Release skeleton orchestrator.
///
/// Runs, strictly in order: reset, static asset copy, postinstall script
/// copy, placeholder creation, manifest synthesis, manifest write. Any
/// failure aborts the remaining steps; the output directory must then be
/// treated as invalid until the next successful build.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_npm::bundler::{ProjectMetadata, SkeletonBuilder, SkeletonLayout};
/// use std::path::Path;
///
/// # async fn example() -> kodegen_bundler_npm::bundler::Result<()> {
/// let metadata = ProjectMetadata {
///     version: "1.0.0".into(),
///     description: "My tool".into(),
///     homepage: "https://example.com".into(),
///     license: "MIT".into(),
///     repository: "github:me/tool".into(),
/// };
///
/// let builder = SkeletonBuilder::new(SkeletonLayout::default());
/// let report = builder.build(Path::new("."), &metadata).await?;
/// println!("Built {} ({})", report.output_dir.display(), report.checksum);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SkeletonBuilder {
    layout: SkeletonLayout,
}

impl SkeletonBuilder {
    /// Creates a builder for `layout`.
    pub fn new(layout: SkeletonLayout) -> Self {
        Self { layout }
    }

    /// Builds the release skeleton for `project_root` from `metadata`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step. Nothing is retried.
    pub async fn build(
        &self,
        project_root: &Path,
        metadata: &ProjectMetadata,
    ) -> Result<SkeletonReport> {
        let layout = &self.layout;
        let output_dir = layout.output_path(project_root);

        steps::reset_output_directory(&output_dir).await?;

        let mut files =
            steps::copy_static_assets(project_root, &output_dir, layout.static_assets()).await?;

        files.push(
            steps::copy_postinstall_script(project_root, &output_dir, layout.postinstall())
                .await?,
        );

        files.extend(steps::create_binary_placeholders(&output_dir, layout.binaries()).await?);

        let manifest = synthesize_manifest(metadata, layout);
        manifest.verify()?;
        files.push(write_manifest(&output_dir, &manifest).await?);

        let checksum = calculate_tree_sha256(&output_dir)
            .await
            .context("hashing release tree")?;
        log::info!(
            "Release skeleton for {}@{} ready in {} (sha256 {})",
            manifest.name,
            manifest.version,
            output_dir.display(),
            checksum
        );

        Ok(SkeletonReport {
            output_dir,
            files,
            manifest,
            checksum,
        })
    }
}
