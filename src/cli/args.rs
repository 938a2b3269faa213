//! Command line argument parsing and validation.

use clap::Parser;
use std::path::PathBuf;

/// npm release skeleton bundler for natively compiled tools
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_npm",
    version,
    about = "npm release skeleton bundler for natively compiled tools",
    long_about = "Builds the directory npm publishes for a tool compiled per platform.

Resets <project-root>/_release, copies LICENSE/README and the postinstall script,
reserves the bin entry with an empty placeholder and writes package.json.

Usage:
  kodegen_bundler_npm
  kodegen_bundler_npm --project-root ../react-intl-auto-id-ppx

Exit code 0 = the complete skeleton exists in the output directory."
)]
pub struct Args {
    /// Project root containing esy.json (or Cargo.toml)
    ///
    /// Defaults to the current directory.
    #[arg(short = 'p', long, value_name = "PATH", default_value = ".")]
    pub project_root: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), crate::error::CliError> {
        if !self.project_root.is_dir() {
            return Err(crate::error::CliError::ProjectRootMissing {
                path: self.project_root.clone(),
            });
        }
        Ok(())
    }
}
