//! Error types for skeleton bundling operations.
//!
//! Filesystem failures always carry the operation that was running and the
//! path it touched, so a failed release names exactly what went wrong.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a release skeleton.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A filesystem operation failed on a specific path.
    #[error("{context} `{}`: {source}", .path.display())]
    Fs {
        /// What the bundler was doing.
        context: &'static str,
        /// Path the operation touched.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A file that must ship with the release is absent from the source tree.
    #[error("required source file `{}` does not exist", .path.display())]
    MissingSource {
        /// Absolute path of the missing file.
        path: PathBuf,
    },

    /// The manifest could not be encoded.
    #[error("failed to serialize release manifest: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The manifest references a path that is not shipped in `files`.
    #[error("release manifest is inconsistent: {0}")]
    ManifestInvariant(String),

    /// Error with additional context.
    #[error("{0}: {1}")]
    Context(String, Box<Error>),

    /// Free-form error.
    #[error("{0}")]
    GenericError(String),
}

/// Attach filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`] naming `context` and `path`.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Attach a human readable context message to a result.
pub trait Context<T> {
    /// Wraps the error with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
