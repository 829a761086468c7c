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

use crate::error::{ApkInfoError, Result};
use crate::platform::process;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use zip::ZipArchive;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const MAX_PREALLOCATED_BYTES: u64 = 1024 * 1024;

/// How a single entry is read out of an APK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconExtractor {
    /// Read the entry in-process with the zip reader
    #[default]
    Builtin,
    /// Pipe the entry through `unzip -p`
    Unzip,
}

impl IconExtractor {
    /// Raw bytes of `entry` inside the archive at `apk`.
    pub fn read_entry(&self, apk: &Path, entry: &str) -> Result<Vec<u8>> {
        let result = match self {
            IconExtractor::Builtin => read_with_zip(apk, entry),
            IconExtractor::Unzip => read_with_unzip(apk, entry),
        };

        match result {
            Ok(bytes) => {
                log::debug!(
                    "Read {} bytes of '{entry}' from {}",
                    bytes.len(),
                    apk.display()
                );
                Ok(bytes)
            }
            Err(source) => {
                log::error!("Failed to read '{entry}' from {}: {source}", apk.display());
                Err(ApkInfoError::Extraction {
                    entry: entry.to_string(),
                    source,
                })
            }
        }
    }
}

impl FromStr for IconExtractor {
    type Err = ApkInfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "builtin" => Ok(IconExtractor::Builtin),
            "unzip" => Ok(IconExtractor::Unzip),
            _ => Err(ApkInfoError::ConfigError(format!(
                "Unknown icon extractor: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for IconExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IconExtractor::Builtin => "builtin",
            IconExtractor::Unzip => "unzip",
        };
        write!(f, "{name}")
    }
}

fn read_with_zip(apk: &Path, entry: &str) -> std::result::Result<Vec<u8>, BoxError> {
    let file = File::open(apk)?;
    let mut archive = ZipArchive::new(file)?;
    let mut zip_entry = archive.by_name(entry)?;

    // The declared size comes from the archive and may be forged
    let capacity = zip_entry.size().min(MAX_PREALLOCATED_BYTES);
    let mut bytes = Vec::with_capacity(capacity as usize);
    zip_entry.read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn read_with_unzip(apk: &Path, entry: &str) -> std::result::Result<Vec<u8>, BoxError> {
    let unzip = which::which("unzip")?;

    let output = process::run(&unzip, [OsStr::new("-p"), apk.as_os_str(), OsStr::new(entry)])
        .map_err(|source| ApkInfoError::Invocation {
            path: unzip.clone(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("unzip exited with {}: {}", output.status, stderr.trim()).into());
    }

    Ok(output.stdout)
}
