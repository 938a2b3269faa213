//! npm release skeleton bundler library
//!
//! Assembles the package npm publishes for a tool that is compiled
//! separately per platform:
//! - static files (LICENSE, README, vendored sources)
//! - a postinstall hook that activates the right platform binary
//! - empty placeholders reserving the `bin` entries
//! - a deterministic `package.json`
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use cli::commands::build;
pub use error::{BundlerError, CliError, Result};
