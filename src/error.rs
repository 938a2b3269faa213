//! Top-level error types for the release skeleton command.
//!
//! Every failure aborts the build and ends up here; `main` prints it and
//! exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

use crate::metadata::MetadataError;

/// Result type alias for command-level operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all command-level operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Project metadata could not be loaded
    #[error("Metadata error: {0}")]
    Metadata(#[from] MetadataError),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// The project root does not exist or is not a directory
    #[error("Project root {} is not a directory", .path.display())]
    ProjectRootMissing {
        /// Path given on the command line
        path: PathBuf,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            Self::Metadata(MetadataError::NotFound { .. }) => vec![
                "Run the command from the project root or pass --project-root".to_string(),
            ],
            Self::Metadata(MetadataError::Read { path, .. } | MetadataError::Toml { path, .. }) => {
                vec![format!("Check that {} is readable and well-formed", path.display())]
            }
            Self::Metadata(_) => vec![
                "Make sure version, description, homepage, license and repository are set"
                    .to_string(),
            ],
            Self::Bundler(crate::bundler::Error::MissingSource { path }) => vec![format!(
                "Restore {} in the source tree, then rerun the build",
                path.display()
            )],
            Self::Bundler(crate::bundler::Error::ManifestInvariant(_)) => vec![
                format!("Check {}", crate::metadata::LAYOUT_FILE_NAME),
            ],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_suggestion_names_path() {
        let err = BundlerError::from(crate::bundler::Error::MissingSource {
            path: PathBuf::from("/p/LICENSE"),
        });
        let hints = err.recovery_suggestions();
        assert!(hints[0].contains("/p/LICENSE"));
        assert!(err.to_string().contains("/p/LICENSE"));
    }
}
