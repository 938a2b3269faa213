//! Individual skeleton build steps.
//!
//! Each step takes every path it needs as an argument and leaves the
//! filesystem in the state the next step expects. None of them retries.

use crate::bundler::{
    BundleBinary, PostinstallHook, Result,
    utils::fs,
};
use std::path::{Path, PathBuf};

/// Destroys `path` if present, then recreates it with any missing ancestors.
///
/// Stale output from a previous run (binaries for dropped platforms, a file
/// squatting on the directory name) never survives this step.
pub async fn reset_output_directory(path: &Path) -> Result<()> {
    log::info!("Resetting output directory: {}", path.display());
    fs::create_dir_all(path, true).await
}

/// Copies each relative path in `assets` from `source_root` to `dest_root`.
///
/// Stops at the first missing source; the remaining assets are not copied.
pub async fn copy_static_assets(
    source_root: &Path,
    dest_root: &Path,
    assets: &[PathBuf],
) -> Result<Vec<PathBuf>> {
    let mut copied = Vec::with_capacity(assets.len());
    for asset in assets {
        let from = source_root.join(asset);
        let to = dest_root.join(asset);
        log::info!("Copying {}", asset.display());
        log::debug!("  {} -> {}", from.display(), to.display());
        fs::copy_file(&from, &to).await?;
        copied.push(to);
    }
    Ok(copied)
}

/// Copies the hook's source script to its in-package name.
pub async fn copy_postinstall_script(
    source_root: &Path,
    dest_root: &Path,
    hook: &PostinstallHook,
) -> Result<PathBuf> {
    let from = source_root.join(hook.source());
    let to = dest_root.join(hook.script());
    log::info!(
        "Copying postinstall script {} as {}",
        hook.source().display(),
        hook.script()
    );
    fs::copy_file(&from, &to).await?;
    Ok(to)
}

/// Writes an empty file at every binary's placeholder path.
pub async fn create_binary_placeholders(
    dest_root: &Path,
    binaries: &[BundleBinary],
) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(binaries.len());
    for binary in binaries {
        let path = dest_root.join(binary.path());
        log::info!("Creating placeholder for `{}`: {}", binary.name(), binary.path());
        fs::create_empty_file(&path).await?;
        created.push(path);
    }
    Ok(created)
}
