//! File system utilities for bundling.
//!
//! Provides the primitive operations the skeleton builder is made of:
//! forced recursive removal, directory creation, byte-exact copies with
//! automatic parent creation, and empty/whole-file writes. Every failure is
//! reported with the operation and the path involved.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Removes `path` and everything below it if it exists.
///
/// Directories are removed recursively; a regular file or symlink sitting at
/// `path` is unlinked. A missing path is not an error. Removal never asks for
/// confirmation.
pub async fn remove_all(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e).fs_context("inspecting path before removal", path),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing path", path),
    }
}

/// Creates all of the directories of the specified path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Creates the parent directory of `path` if it has one.
async fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent, false).await?;
    }
    Ok(())
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails with [`Error::MissingSource`] if the source doesn't exist and with a
/// generic error if it is not a regular file.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = match fs::metadata(from).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::MissingSource {
                path: from.to_path_buf(),
            });
        }
        Err(e) => return Err(e).fs_context("reading source metadata", from),
    };
    if !metadata.is_file() {
        return Err(Error::GenericError(format!(
            "{} is not a file",
            from.display()
        )));
    }

    ensure_parent(to).await?;
    fs::copy(from, to).await.fs_context("copying file to", to)?;
    Ok(())
}

/// Creates an empty file at `path`, truncating anything already there.
pub async fn create_empty_file(path: &Path) -> Result<()> {
    ensure_parent(path).await?;
    fs::write(path, b"")
        .await
        .fs_context("creating empty file", path)
}

/// Writes `contents` to `path`, replacing any existing file.
pub async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    ensure_parent(path).await?;
    fs::write(path, contents)
        .await
        .fs_context("writing file", path)
}
