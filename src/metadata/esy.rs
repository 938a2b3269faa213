//! `esy.json` metadata provider.

use super::{MetadataError, MetadataProvider, read_descriptor};
use crate::bundler::ProjectMetadata;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Descriptor file name.
pub(super) const ESY_JSON: &str = "esy.json";

/// Reads metadata from an `esy.json` descriptor.
#[derive(Debug, Clone)]
pub struct EsyJsonProvider {
    path: PathBuf,
}

impl EsyJsonProvider {
    /// Creates a provider for the descriptor at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn string_field(&self, json: &Value, field: &'static str) -> Result<String, MetadataError> {
        match json.get(field) {
            Some(Value::String(s)) => Ok(s.clone()),
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

impl MetadataProvider for EsyJsonProvider {
    fn descriptor(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ProjectMetadata, MetadataError> {
        let raw = read_descriptor(&self.path)?;
        log::info!("Using {}", self.path.display());
        log::debug!("{}", raw);

        let json: Value = serde_json::from_str(&raw).map_err(|source| MetadataError::Json {
            path: self.path.clone(),
            source,
        })?;

        let repository = json
            .get("repository")
            .cloned()
            .ok_or_else(|| MetadataError::MissingField {
                field: "repository",
                path: self.path.clone(),
            })?;

        Ok(ProjectMetadata {
            version: self.string_field(&json, "version")?,
            description: self.string_field(&json, "description")?,
            homepage: self.string_field(&json, "homepage")?,
            license: self.string_field(&json, "license")?,
            repository,
        })
    }
}
