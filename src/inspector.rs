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

use crate::aapt::{Aapt, AaptBinary, ToolInvoker};
use crate::badging;
use crate::config::ApkInfoConfig;
use crate::error::Result;
use crate::icon::IconExtractor;
use crate::models::InspectionResult;
use std::path::Path;

const BADGING_SECTION: &str = "badging";

/// Extracts package metadata from APKs via `aapt dump badging`.
pub struct PackageInspector<I = AaptBinary> {
    aapt: Aapt<I>,
    extractor: IconExtractor,
}

impl PackageInspector<AaptBinary> {
    pub fn from_config(config: &ApkInfoConfig) -> Result<Self> {
        Ok(Self::new(Aapt::from_config(config)?, config.icon.extractor))
    }
}

impl<I: ToolInvoker> PackageInspector<I> {
    pub fn new(aapt: Aapt<I>, extractor: IconExtractor) -> Self {
        Self { aapt, extractor }
    }

    /// Package name, version, label, permissions and launcher activity.
    /// `icon_bytes` is always `None`.
    pub fn get_package_info(&self, apk: &Path) -> Result<InspectionResult> {
        let output = self.aapt.dump(apk, BADGING_SECTION)?;

        let info = badging::parse_badging(&output).inspect_err(|e| {
            log::error!("Failed to parse badging for {}: {e}", apk.display());
            log::trace!("Raw badging output:\n{output}");
        })?;

        log::info!(
            "{}: {} {} ({})",
            apk.display(),
            info.package_name,
            info.version_name,
            info.version_code
        );
        Ok(info)
    }

    /// Like [`get_package_info`](Self::get_package_info), additionally
    /// reading the icon entry when the badging output names one.
    pub fn get_package_info_with_icon(&self, apk: &Path) -> Result<InspectionResult> {
        let mut info = self.get_package_info(apk)?;

        info.icon_bytes = match &info.icon_path {
            Some(icon_path) => Some(self.extractor.read_entry(apk, icon_path)?),
            None => {
                log::debug!("No icon declared in {}", apk.display());
                None
            }
        };

        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aapt::MockToolInvoker;
    use crate::error::{ApkInfoError, BadgingError};
    use std::ffi::OsString;

    const BADGING: &str = "package: name='com.example.app' versionCode='12' versionName='1.2.0'\n\
        application: label='Example App'\n\
        uses-permission: name='android.permission.INTERNET'\n\
        uses-permission: name='android.permission.CAMERA'\n\
        launchable-activity: name='com.example.app.MainActivity'";

    fn inspector_returning(output: &'static str) -> PackageInspector<MockToolInvoker> {
        let mut invoker = MockToolInvoker::new();
        invoker
            .expect_invoke()
            .withf(|args| {
                args == [
                    OsString::from("d"),
                    OsString::from("badging"),
                    OsString::from("/apks/app.apk"),
                ]
            })
            .times(1)
            .returning(move |_| Ok(output.to_string()));
        PackageInspector::new(Aapt::new(invoker), IconExtractor::Builtin)
    }

    #[test]
    fn test_get_package_info() {
        let inspector = inspector_returning(BADGING);
        let info = inspector
            .get_package_info(Path::new("/apks/app.apk"))
            .unwrap();

        assert_eq!(info.package_name, "com.example.app");
        assert_eq!(info.version_code, "12");
        assert_eq!(info.version_name, "1.2.0");
        assert_eq!(info.app_name, "Example App");
        assert_eq!(
            info.permissions,
            vec!["android.permission.INTERNET", "android.permission.CAMERA"]
        );
        assert_eq!(
            info.launchable_activity.as_deref(),
            Some("com.example.app.MainActivity")
        );
        assert!(info.icon_bytes.is_none());
    }

    #[test]
    fn test_get_package_info_parse_error() {
        let inspector = inspector_returning("ERROR: dump failed because the resource table is invalid");
        let err = inspector
            .get_package_info(Path::new("/apks/app.apk"))
            .unwrap_err();
        assert!(matches!(
            err,
            ApkInfoError::Parse(BadgingError::MissingPackage)
        ));
    }

    #[test]
    fn test_with_icon_skips_extraction_without_icon_path() {
        // The archive does not exist, so any extraction attempt would fail
        let inspector = inspector_returning(BADGING);
        let info = inspector
            .get_package_info_with_icon(Path::new("/apks/app.apk"))
            .unwrap();

        assert_eq!(info.icon_path, None);
        assert_eq!(info.icon_bytes, None);
    }

    #[test]
    fn test_with_icon_reports_extraction_failure() {
        let inspector = inspector_returning(
            "package: name='com.example.app' versionCode='12' versionName='1.2.0'\n\
             application: label='Example App' icon='res/icon.png'",
        );
        let err = inspector
            .get_package_info_with_icon(Path::new("/apks/app.apk"))
            .unwrap_err();

        match err {
            ApkInfoError::Extraction { entry, .. } => assert_eq!(entry, "res/icon.png"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_invocation_error_propagates() {
        let mut invoker = MockToolInvoker::new();
        invoker.expect_invoke().returning(|_| {
            Err(ApkInfoError::Invocation {
                path: "aapt_64".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        });
        let inspector = PackageInspector::new(Aapt::new(invoker), IconExtractor::Builtin);

        let err = inspector
            .get_package_info_with_icon(Path::new("/apks/app.apk"))
            .unwrap_err();
        assert!(matches!(err, ApkInfoError::Invocation { .. }));
    }
}
