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

//! Shared fixtures: a fake aapt binary and small APK archives
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ICON_PATH: &str = "res/mipmap-xxhdpi-v4/ic_launcher.png";
pub const ICON_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfixture icon";

/// Shell script standing in for aapt. `d badging` prints a fixed report,
/// archives named `broken.apk` fail like aapt does, anything else echoes the
/// argument count and arguments.
const FAKE_AAPT: &str = r#"#!/bin/sh
case "$3" in
  *broken.apk)
    echo "ERROR: dump failed because no AndroidManifest.xml found" >&2
    exit 1
    ;;
esac
case "$1" in
  d)
    if [ "$2" = "badging" ]; then
      cat <<'BADGING'
package: name='com.example.app' versionCode='12' versionName='1.2.0' platformBuildVersionName='13'
sdkVersion:'21'
targetSdkVersion:'33'
uses-permission: name='android.permission.INTERNET'
uses-permission: name='android.permission.CAMERA'
uses-permission: name='android.permission.INTERNET'
application-label:'Example App'
application-icon-160:'res/mipmap-mdpi-v4/ic_launcher.png'
application-icon-480:'res/mipmap-xxhdpi-v4/ic_launcher.png'
application: label='Example App' icon='res/mipmap-xxhdpi-v4/ic_launcher.png'
launchable-activity: name='com.example.app.MainActivity'  label='' icon=''
BADGING
    else
      echo "argc=$# $*"
    fi
    ;;
  v)
    echo "Android Asset Packaging Tool, v0.2-fixture"
    ;;
  *)
    echo "argc=$# $*"
    ;;
esac
"#;

/// Install the fake aapt under `<base_dir>/bin/<Platform>/aapt_64` with mode
/// 0644, so the first invocation has to make it executable.
#[cfg(unix)]
pub fn install_fake_aapt(base_dir: &Path) -> PathBuf {
    use apkinfo::platform::{PlatformTarget, resolve_executable_path};
    use std::os::unix::fs::PermissionsExt;

    let platform = PlatformTarget::current().expect("host platform is supported");
    let aapt_path = resolve_executable_path(base_dir, platform);
    fs::create_dir_all(aapt_path.parent().unwrap()).unwrap();
    fs::write(&aapt_path, FAKE_AAPT).unwrap();

    let mut perms = fs::metadata(&aapt_path).unwrap().permissions();
    perms.set_mode(0o644);
    fs::set_permissions(&aapt_path, perms).unwrap();

    aapt_path
}

/// Create a minimal APK that carries the fixture icon.
pub fn create_test_apk(dir: &Path, name: &str) -> PathBuf {
    create_apk_with_entries(
        dir,
        name,
        &[
            ("AndroidManifest.xml", b"<manifest/>".as_slice()),
            (ICON_PATH, ICON_BYTES),
        ],
    )
}

pub fn create_apk_with_entries(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let apk_path = dir.join(name);

    let file = File::create(&apk_path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options: zip::write::FileOptions<'_, ()> = zip::write::FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (entry, contents) in entries {
        zip.start_file(*entry, options).unwrap();
        zip.write_all(contents).unwrap();
    }
    zip.finish().unwrap();

    apk_path
}
