//! The skeleton build command.

use crate::{
    bundler::{SkeletonBuilder, SkeletonReport},
    error::Result,
    metadata::{load_layout, load_metadata},
};
use std::path::Path;

/// Builds the release skeleton for `project_root`.
///
/// Loads metadata and layout, then hands both to [`SkeletonBuilder`]. The
/// output lands in `<project_root>/_release` unless the layout says
/// otherwise.
pub async fn build(project_root: &Path) -> Result<SkeletonReport> {
    let metadata = load_metadata(project_root)?;
    let layout = load_layout(project_root)?;

    let report = SkeletonBuilder::new(layout)
        .build(project_root, &metadata)
        .await?;

    log::info!("✓ Created release skeleton with {} files", report.files.len());
    Ok(report)
}
