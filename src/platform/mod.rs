//! Host platform detection and the bundled aapt layout.
//!
//! The aapt binaries ship under `bin/<Darwin|Linux|Windows>/aapt_64[.exe]`
//! relative to a base directory. Everything here is a pure function of the
//! platform and that base directory so it can be tested without a real
//! installation.

pub mod permissions;
pub mod process;

mod constants;

pub use constants::{AAPT_BINARY_STEM, BIN_DIR, OWNER_RWX_MODE};

use crate::error::{ApkInfoError, Result};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Operating systems that have a bundled aapt build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTarget {
    Mac,
    Linux,
    Windows,
}

impl PlatformTarget {
    pub const ALL: [PlatformTarget; 3] = [
        PlatformTarget::Mac,
        PlatformTarget::Linux,
        PlatformTarget::Windows,
    ];

    /// Detect the platform this process is running on.
    pub fn current() -> Result<Self> {
        Self::from_str(std::env::consts::OS)
    }

    /// Name of the directory under `bin/` holding this platform's binary.
    pub fn dir_name(&self) -> &'static str {
        match self {
            PlatformTarget::Mac => "Darwin",
            PlatformTarget::Linux => "Linux",
            PlatformTarget::Windows => "Windows",
        }
    }

    pub fn executable_name(&self) -> String {
        format!("{AAPT_BINARY_STEM}{}", self.executable_suffix())
    }

    pub fn executable_suffix(&self) -> &'static str {
        match self {
            PlatformTarget::Windows => ".exe",
            PlatformTarget::Mac | PlatformTarget::Linux => "",
        }
    }

    /// Whether the binary needs its permission bits checked before running.
    pub fn uses_mode_bits(&self) -> bool {
        !matches!(self, PlatformTarget::Windows)
    }
}

impl FromStr for PlatformTarget {
    type Err = ApkInfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "macos" | "darwin" | "mac" => Ok(PlatformTarget::Mac),
            "linux" => Ok(PlatformTarget::Linux),
            "windows" => Ok(PlatformTarget::Windows),
            _ => Err(ApkInfoError::UnsupportedPlatform(s.to_string())),
        }
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Location of the bundled aapt binary for `platform` under `base_dir`.
pub fn resolve_executable_path(base_dir: &Path, platform: PlatformTarget) -> PathBuf {
    base_dir
        .join(BIN_DIR)
        .join(platform.dir_name())
        .join(platform.executable_name())
}

/// Directory containing the running executable, used as the default base
/// directory for the bundled binaries.
pub fn default_base_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::other(format!(
            "cannot determine directory of executable {}",
            exe.display()
        ))
    })
}
