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

use std::io;
use std::path::Path;

/// Check whether the owner may execute the file
pub fn is_executable(path: &Path) -> io::Result<bool> {
    #[cfg(unix)]
    {
        is_executable_unix(path)
    }

    #[cfg(not(unix))]
    {
        std::fs::metadata(path).map(|metadata| metadata.is_file())
    }
}

/// Make the file owner read/write/executable unless it already is executable.
///
/// Returns `true` when the permission bits were changed. Safe to call
/// repeatedly and from several processes at once.
pub fn ensure_executable(path: &Path) -> io::Result<bool> {
    if is_executable(path)? {
        return Ok(false);
    }

    #[cfg(unix)]
    {
        set_owner_rwx_unix(path)?;
        log::debug!("Set mode 700 on {}", path.display());
        Ok(true)
    }

    #[cfg(not(unix))]
    {
        Ok(false)
    }
}

#[cfg(unix)]
fn is_executable_unix(path: &Path) -> io::Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a regular file", path.display()),
        ));
    }

    Ok(metadata.permissions().mode() & 0o100 != 0)
}

#[cfg(unix)]
fn set_owner_rwx_unix(path: &Path) -> io::Result<()> {
    use super::OWNER_RWX_MODE;
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(OWNER_RWX_MODE);
    std::fs::set_permissions(path, permissions)
}
