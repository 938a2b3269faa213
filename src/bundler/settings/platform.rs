//! Platform targets declared in the release manifest.

use std::{fmt, str::FromStr};

/// Operating system part of a [`PlatformTarget`].
///
/// Names follow Node's `process.platform`, except `win32` which is spelled
/// `windows` in artifact directory names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Os {
    /// Microsoft Windows
    Windows,
    /// Linux (glibc)
    Linux,
    /// macOS
    Darwin,
}

/// CPU architecture part of a [`PlatformTarget`].
///
/// Names follow Node's `process.arch`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum Arch {
    /// x86_64 / AMD64
    X64,
    /// AArch64 / ARM64 - Apple Silicon, ARM servers
    Arm64,
}

/// One supported (OS, architecture) pair.
///
/// The bundler only cares about the directory name under which the
/// per-platform binary is published; the postinstall hook looks the
/// same name up on the end user's machine.
///
/// # Examples
///
/// ```
/// use kodegen_bundler_npm::bundler::PlatformTarget;
///
/// let target: PlatformTarget = "linux-x64".parse().unwrap();
/// assert_eq!(target.dir_name(), "platform-linux-x64");
/// assert_eq!(target.files_entry(), "platform-linux-x64/");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct PlatformTarget {
    /// Operating system
    pub os: Os,
    /// CPU architecture
    pub arch: Arch,
}

impl PlatformTarget {
    /// Creates a target from its parts.
    pub const fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Directory holding this platform's binary inside the package.
    pub fn dir_name(&self) -> String {
        format!("platform-{self}")
    }

    /// Directory entry as listed in the manifest's `files` array.
    pub fn files_entry(&self) -> String {
        format!("{}/", self.dir_name())
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Darwin => "darwin",
        })
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X64 => "x64",
            Self::Arm64 => "arm64",
        })
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

impl FromStr for PlatformTarget {
    type Err = crate::bundler::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((os, arch)) = s.split_once('-') else {
            crate::bail!("platform `{}` must look like `<os>-<arch>`", s);
        };

        let os = match os {
            "windows" | "win32" => Os::Windows,
            "linux" => Os::Linux,
            "darwin" | "macos" => Os::Darwin,
            _ => crate::bail!("unsupported operating system `{}` in platform `{}`", os, s),
        };

        let arch = match arch {
            "x64" | "x86_64" | "amd64" => Arch::X64,
            "arm64" | "aarch64" => Arch::Arm64,
            _ => crate::bail!("unsupported architecture `{}` in platform `{}`", arch, s),
        };

        Ok(Self { os, arch })
    }
}

impl<'de> serde::Deserialize<'de> for PlatformTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
