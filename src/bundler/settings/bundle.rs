//! Binary entry points and the postinstall hook.

use std::path::PathBuf;

/// A command exposed through the manifest's `bin` mapping.
///
/// At packaging time `path` is an empty placeholder; the postinstall hook
/// replaces it with the real platform binary on the user's machine.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BundleBinary {
    /// Command name the package manager links onto `PATH`.
    name: String,
    /// Placeholder path, relative to the output root.
    path: String,
}

impl BundleBinary {
    /// Creates a binary with an explicit placeholder path.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Creates a binary whose placeholder is `<name>.exe` at the output root.
    ///
    /// The `.exe` suffix is used on every platform so the `bin` target is the
    /// same path regardless of where the package is installed.
    pub fn with_default_path(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!("{name}.exe");
        Self { name, path }
    }

    /// Returns the command name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the placeholder path relative to the output root.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// The script npm runs after unpacking the package.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostinstallHook {
    /// Program that runs the script.
    interpreter: String,
    /// Script path inside the package.
    script: String,
    /// Where the script lives in the source tree, relative to the project root.
    source: PathBuf,
}

impl PostinstallHook {
    /// Creates a hook run by `interpreter`, shipped as `script`, copied from `source`.
    pub fn new(
        interpreter: impl Into<String>,
        script: impl Into<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            interpreter: interpreter.into(),
            script: script.into(),
            source: source.into(),
        }
    }

    /// Returns the script path inside the package.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// Returns the script location in the source tree.
    pub fn source(&self) -> &std::path::Path {
        &self.source
    }

    /// Returns the command written to `scripts.postinstall`.
    pub fn command(&self) -> String {
        format!("{} {}", self.interpreter, self.script)
    }

    /// Replaces the source location.
    pub(crate) fn set_source(&mut self, source: PathBuf) {
        self.source = source;
    }
}

impl Default for PostinstallHook {
    fn default() -> Self {
        Self::new("node", "postinstall.js", "script/release-postinstall.js")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binary_path_appends_exe() {
        let bin = BundleBinary::with_default_path("react-intl-auto-id-ppx");
        assert_eq!(bin.path(), "react-intl-auto-id-ppx.exe");
    }

    #[test]
    fn default_hook_runs_node() {
        let hook = PostinstallHook::default();
        assert_eq!(hook.command(), "node postinstall.js");
        assert_eq!(hook.source(), std::path::Path::new("script/release-postinstall.js"));
    }
}
