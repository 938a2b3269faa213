//! npm release skeleton bundling.
//!
//! Produces the directory npm publishes for a natively compiled tool: the
//! static files, a postinstall hook, empty `bin` placeholders, and a
//! `package.json` declaring the per-platform artifact directories. The
//! postinstall hook picks the right platform binary on the user's machine.

pub mod builder;
pub mod error;
pub mod manifest;
pub mod settings;
pub mod utils;

pub use builder::{SkeletonBuilder, SkeletonReport};
pub use error::{Error, Result};
pub use manifest::{ReleaseManifest, Scripts, synthesize_manifest, write_manifest};
pub use settings::{
    Arch, BundleBinary, LayoutBuilder, Os, PlatformTarget, PostinstallHook, ProjectMetadata,
    SkeletonLayout,
};
