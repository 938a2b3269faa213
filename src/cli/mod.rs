//! Command line interface for the npm skeleton bundler.

mod args;
pub mod commands;

pub use args::Args;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()?;

    commands::build(&args.project_root).await?;
    Ok(0)
}
