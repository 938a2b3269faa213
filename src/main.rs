//! Kodegen Bundler npm - release skeleton builder for multi-platform binaries.
//!
//! This binary resets the release directory and writes the npm package
//! skeleton (assets, postinstall hook, bin placeholders, package.json).

use kodegen_bundler_npm::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
