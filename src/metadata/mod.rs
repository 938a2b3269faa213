//! Project metadata providers and release layout discovery.
//!
//! The bundler never reads project descriptors itself; it receives a
//! [`ProjectMetadata`] value from one of the providers here:
//!
//! - [`EsyJsonProvider`] reads `esy.json` (the descriptor of esy/OCaml projects)
//! - [`CargoTomlProvider`] reads the `[package]` table of `Cargo.toml`
//!
//! [`detect_provider`] picks whichever exists, preferring `esy.json`.

mod cargo;
mod esy;
mod layout;

pub use cargo::CargoTomlProvider;
pub use esy::EsyJsonProvider;
pub use layout::{LAYOUT_FILE_NAME, LayoutOverrides, load_layout};

use crate::bundler::ProjectMetadata;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading project metadata.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// No supported descriptor exists in the project root.
    #[error("no esy.json or Cargo.toml found in {}", .root.display())]
    NotFound {
        /// Project root that was searched
        root: PathBuf,
    },

    /// The descriptor could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Descriptor path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        /// Descriptor path
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// The descriptor is not valid TOML.
    #[error("failed to parse {}: {source}", .path.display())]
    Toml {
        /// Descriptor path
        path: PathBuf,
        /// Parser error
        #[source]
        source: toml::de::Error,
    },

    /// A required field is absent.
    #[error("missing `{field}` in {}", .path.display())]
    MissingField {
        /// Field name
        field: &'static str,
        /// Descriptor path
        path: PathBuf,
    },

    /// A required field has the wrong type.
    #[error("`{field}` in {} must be {expected}", .path.display())]
    InvalidField {
        /// Field name
        field: &'static str,
        /// Expected shape
        expected: &'static str,
        /// Descriptor path
        path: PathBuf,
    },
}

/// A source of [`ProjectMetadata`].
pub trait MetadataProvider: std::fmt::Debug {
    /// Path of the descriptor this provider reads.
    fn descriptor(&self) -> &Path;

    /// Reads and extracts the metadata.
    fn load(&self) -> Result<ProjectMetadata, MetadataError>;
}

/// Selects the metadata provider for `project_root`.
///
/// `esy.json` wins over `Cargo.toml` when both exist.
pub fn detect_provider(project_root: &Path) -> Result<Box<dyn MetadataProvider>, MetadataError> {
    let esy = project_root.join(esy::ESY_JSON);
    if esy.is_file() {
        log::debug!("Using metadata provider: {}", esy.display());
        return Ok(Box::new(EsyJsonProvider::new(esy)));
    }

    let cargo = project_root.join(cargo::CARGO_TOML);
    if cargo.is_file() {
        log::debug!("Using metadata provider: {}", cargo.display());
        return Ok(Box::new(CargoTomlProvider::new(cargo)));
    }

    Err(MetadataError::NotFound {
        root: project_root.to_path_buf(),
    })
}

/// Loads metadata for `project_root` through [`detect_provider`].
pub fn load_metadata(project_root: &Path) -> Result<ProjectMetadata, MetadataError> {
    detect_provider(project_root)?.load()
}

/// Reads a descriptor file into a string.
fn read_descriptor(path: &Path) -> Result<String, MetadataError> {
    std::fs::read_to_string(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })
}
