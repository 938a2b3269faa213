//! Project metadata copied into the release manifest.

use serde::{Deserialize, Serialize};

/// Project metadata supplied by a [`MetadataProvider`](crate::metadata::MetadataProvider).
///
/// Read-only to the bundler: every field is copied verbatim into the
/// generated manifest and never validated.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_npm::bundler::ProjectMetadata;
///
/// let metadata = ProjectMetadata {
///     version: "1.2.3".into(),
///     description: "Automatic ids for react-intl messages".into(),
///     homepage: "https://example.com".into(),
///     license: "MIT".into(),
///     repository: serde_json::json!({ "type": "git", "url": "https://github.com/example/tool" }),
/// };
/// assert_eq!(metadata.version, "1.2.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Version string, usually semver ("0.2.3-beta.1").
    pub version: String,

    /// Brief description of the tool.
    pub description: String,

    /// Homepage URL.
    pub homepage: String,

    /// License identifier or expression.
    pub license: String,

    /// Source-control location, opaque.
    ///
    /// npm accepts a shorthand string, `{ "url": ... }`, or an object with
    /// `type`, `url` and `directory`. Whatever the provider read is written
    /// back unchanged, unknown keys included.
    pub repository: serde_json::Value,
}
