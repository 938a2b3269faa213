//! `Cargo.toml` metadata provider.

use super::{MetadataError, MetadataProvider, read_descriptor};
use crate::bundler::ProjectMetadata;
use std::path::{Path, PathBuf};

/// Descriptor file name.
pub(super) const CARGO_TOML: &str = "Cargo.toml";

/// Reads metadata from the `[package]` section of a `Cargo.toml`.
///
/// Workspace-inherited values (`version.workspace = true`) are not resolved
/// and are reported as invalid.
#[derive(Debug, Clone)]
pub struct CargoTomlProvider {
    path: PathBuf,
}

impl CargoTomlProvider {
    /// Creates a provider for the manifest at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn string_field(
        &self,
        package: &toml::Value,
        field: &'static str,
    ) -> Result<String, MetadataError> {
        match package.get(field) {
            Some(toml::Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(MetadataError::InvalidField {
                field,
                expected: "a string",
                path: self.path.clone(),
            }),
            None => Err(MetadataError::MissingField {
                field,
                path: self.path.clone(),
            }),
        }
    }
}

impl MetadataProvider for CargoTomlProvider {
    fn descriptor(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ProjectMetadata, MetadataError> {
        // Step 1: Read file once
        let manifest = read_descriptor(&self.path)?;
        log::info!("Using {}", self.path.display());

        // Step 2: Parse TOML once
        let toml_value: toml::Value =
            toml::from_str(&manifest).map_err(|source| MetadataError::Toml {
                path: self.path.clone(),
                source,
            })?;

        let package = toml_value
            .get("package")
            .ok_or_else(|| MetadataError::MissingField {
                field: "package",
                path: self.path.clone(),
            })?;

        // Step 3: Extract metadata from parsed TOML (no additional I/O)
        Ok(ProjectMetadata {
            version: self.string_field(package, "version")?,
            description: self.string_field(package, "description")?,
            homepage: self.string_field(package, "homepage")?,
            license: self.string_field(package, "license")?,
            repository: self.string_field(package, "repository")?.into(),
        })
    }
}
