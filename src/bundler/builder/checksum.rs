//! Output tree checksum calculation.
//!
//! Produces a single SHA-256 over a whole release directory so two builds
//! can be compared for reproducibility without diffing file by file.

use crate::bundler::{Result, error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates SHA256 checksum of a directory tree.
///
/// Recursively traverses the directory, hashing each file's relative path
/// and content in sorted order to ensure deterministic results. Timestamps
/// and permissions are ignored.
///
/// # Algorithm
///
/// 1. Recursively collect all files using walkdir
/// 2. Sort paths lexicographically for deterministic order
/// 3. For each file: hash(relative_path + NUL + length + file_content)
/// 4. Return final combined hash
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of entire directory tree
/// * `Err` - If directory cannot be traversed or a file cannot be read
pub async fn calculate_tree_sha256(dir_path: &Path) -> Result<String> {
    let mut entries = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).follow_links(false) {
        let entry = entry.map_err(|e| {
            crate::bundler::Error::GenericError(format!(
                "walking {} for checksum: {}",
                dir_path.display(),
                e
            ))
        })?;
        if entry.file_type().is_file() {
            entries.push(entry.into_path());
        }
    }

    // Sort by path for deterministic ordering
    entries.sort();

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    for path in entries {
        // Include relative path in hash (preserves directory structure)
        if let Ok(rel_path) = path.strip_prefix(dir_path) {
            hasher.update(rel_path.to_string_lossy().as_bytes());
            hasher.update([0u8]);
        }

        let len = tokio::fs::metadata(&path)
            .await
            .fs_context("reading file metadata for hashing", &path)?
            .len();
        hasher.update(len.to_le_bytes());

        let mut file = tokio::fs::File::open(&path)
            .await
            .fs_context("opening file for hashing", &path)?;

        loop {
            let n = file
                .read(&mut buffer)
                .await
                .fs_context("reading file for hash calculation", &path)?;
            if n == 0 {
                break;
            }
            hasher.update(&buffer[..n]);
        }
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identical_trees_hash_equal() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        for root in [a.path(), b.path()] {
            std::fs::create_dir_all(root.join("vendors")).unwrap();
            std::fs::write(root.join("vendors/x.re"), "let x = 1;").unwrap();
            std::fs::write(root.join("tool.exe"), "").unwrap();
        }
        assert_eq!(
            calculate_tree_sha256(a.path()).await.unwrap(),
            calculate_tree_sha256(b.path()).await.unwrap()
        );
    }

    #[tokio::test]
    async fn renamed_file_changes_hash() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        std::fs::write(a.path().join("postinstall.js"), "x").unwrap();
        std::fs::write(b.path().join("install.js"), "x").unwrap();
        assert_ne!(
            calculate_tree_sha256(a.path()).await.unwrap(),
            calculate_tree_sha256(b.path()).await.unwrap()
        );
    }
}
