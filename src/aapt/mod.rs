// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Invocation of the bundled aapt binary.
//!
//! [`AaptBinary`] finds and runs the executable; [`Aapt`] layers the aapt
//! subcommands on top of any [`ToolInvoker`] so callers can swap in canned
//! output.

use crate::config::ApkInfoConfig;
use crate::error::{ApkInfoError, Result};
use crate::platform::{self, PlatformTarget, permissions, process};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Runs aapt with an argument list and returns its raw text output.
#[cfg_attr(test, mockall::automock)]
pub trait ToolInvoker {
    fn invoke(&self, args: &[OsString]) -> Result<String>;
}

/// The aapt executable on disk.
#[derive(Debug, Clone)]
pub struct AaptBinary {
    executable: PathBuf,
    needs_mode_bits: bool,
}

impl AaptBinary {
    /// Locate the bundled binary for the host platform under `base_dir`.
    pub fn locate(base_dir: &Path) -> Result<Self> {
        let platform = PlatformTarget::current().inspect_err(|e| {
            log::error!("aapt error: {e}");
        })?;
        Ok(Self::for_platform(base_dir, platform))
    }

    pub fn for_platform(base_dir: &Path, platform: PlatformTarget) -> Self {
        Self {
            executable: platform::resolve_executable_path(base_dir, platform),
            needs_mode_bits: platform.uses_mode_bits(),
        }
    }

    /// Use an explicit executable instead of the bundled layout.
    pub fn at(executable: PathBuf) -> Self {
        Self {
            executable,
            needs_mode_bits: cfg!(unix),
        }
    }

    /// Resolve the binary from configuration: an explicit executable wins,
    /// then the configured base directory, then the directory of the running
    /// program.
    pub fn from_config(config: &ApkInfoConfig) -> Result<Self> {
        if let Some(executable) = &config.aapt.executable {
            log::debug!("Using configured aapt executable {}", executable.display());
            return Ok(Self::at(executable.clone()));
        }

        let base_dir = match &config.aapt.base_dir {
            Some(dir) => dir.clone(),
            None => platform::default_base_dir().map_err(base_dir_error)?,
        };
        log::debug!("Looking for bundled aapt under {}", base_dir.display());
        Self::locate(&base_dir)
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn invocation_error(&self, source: std::io::Error) -> ApkInfoError {
        let error = ApkInfoError::Invocation {
            path: self.executable.clone(),
            source,
        };
        log::error!("aapt error: {error}");
        error
    }
}

fn base_dir_error(source: std::io::Error) -> ApkInfoError {
    let error = ApkInfoError::Invocation {
        path: PathBuf::from(platform::AAPT_BINARY_STEM),
        source,
    };
    log::error!("aapt error: cannot resolve base directory: {error}");
    error
}

impl ToolInvoker for AaptBinary {
    fn invoke(&self, args: &[OsString]) -> Result<String> {
        if self.needs_mode_bits {
            permissions::ensure_executable(&self.executable)
                .map_err(|e| self.invocation_error(e))?;
        }

        log::debug!("Running {} {args:?}", self.executable.display());
        process::capture_text(&self.executable, args).map_err(|e| self.invocation_error(e))
    }
}

/// aapt subcommands on top of a [`ToolInvoker`].
#[derive(Debug, Clone)]
pub struct Aapt<I = AaptBinary> {
    invoker: I,
}

impl Aapt<AaptBinary> {
    pub fn from_config(config: &ApkInfoConfig) -> Result<Self> {
        Ok(Self::new(AaptBinary::from_config(config)?))
    }
}

impl<I: ToolInvoker> Aapt<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Run aapt with arbitrary arguments.
    pub fn invoke<A, S>(&self, args: A) -> Result<String>
    where
        A: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<OsString> = args
            .into_iter()
            .map(|arg| arg.as_ref().to_os_string())
            .collect();
        self.invoker.invoke(&args)
    }

    /// `l <apk>`
    pub fn list(&self, apk: &Path) -> Result<String> {
        self.invoke([OsStr::new("l"), apk.as_os_str()])
    }

    /// `d <section> <apk>`
    pub fn dump(&self, apk: &Path, section: &str) -> Result<String> {
        self.invoke([OsStr::new("d"), OsStr::new(section), apk.as_os_str()])
    }

    /// `p <command...> <apk>`
    pub fn package_command<S: AsRef<OsStr>>(&self, apk: &Path, command: &[S]) -> Result<String> {
        let mut args = vec![OsString::from("p")];
        args.extend(command.iter().map(|part| part.as_ref().to_os_string()));
        args.push(apk.as_os_str().to_os_string());
        self.invoker.invoke(&args)
    }

    /// `r <apk> <files...>`
    pub fn remove<S: AsRef<OsStr>>(&self, apk: &Path, files: &[S]) -> Result<String> {
        self.invoker.invoke(&with_files("r", apk, files))
    }

    /// `a <apk> <files...>`
    pub fn add<S: AsRef<OsStr>>(&self, apk: &Path, files: &[S]) -> Result<String> {
        self.invoker.invoke(&with_files("a", apk, files))
    }

    /// `c -S <resource_dir> -C <output_dir>`
    pub fn crunch(&self, resource_dir: &Path, output_dir: &Path) -> Result<String> {
        self.invoke([
            OsStr::new("c"),
            OsStr::new("-S"),
            resource_dir.as_os_str(),
            OsStr::new("-C"),
            output_dir.as_os_str(),
        ])
    }

    /// `s -i <input> -o <output>`
    pub fn single_crunch(&self, input: &Path, output: &Path) -> Result<String> {
        self.invoke([
            OsStr::new("s"),
            OsStr::new("-i"),
            input.as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
    }

    /// `v`
    pub fn version(&self) -> Result<String> {
        self.invoke(["v"])
    }
}

fn with_files<S: AsRef<OsStr>>(subcommand: &str, apk: &Path, files: &[S]) -> Vec<OsString> {
    let mut args = vec![OsString::from(subcommand), apk.as_os_str().to_os_string()];
    args.extend(files.iter().map(|file| file.as_ref().to_os_string()));
    args
}
