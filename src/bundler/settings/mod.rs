//! Configuration structures for skeleton bundling.
//!
//! This module provides the project metadata record, the fixed release
//! layout (assets, binaries, platforms, postinstall hook), and a builder
//! for constructing layouts.

mod builder;
mod bundle;
mod core;
mod package;
mod platform;

// Re-export all public types
pub use builder::LayoutBuilder;
pub use bundle::{BundleBinary, PostinstallHook};
pub use self::core::{DEFAULT_OUTPUT_DIR, DEFAULT_PACKAGE_NAME, MANIFEST_FILE_NAME, SkeletonLayout};
pub use package::ProjectMetadata;
pub use platform::{Arch, Os, PlatformTarget};
