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

use crate::config::ApkInfoConfig;
use crate::error::{ApkInfoError, Result};
use crate::inspector::PackageInspector;
use crate::models::InspectionResult;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct InfoOutput<'a> {
    #[serde(flatten)]
    info: &'a InspectionResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon_size: Option<usize>,
}

pub struct InfoCommand<'a> {
    config: &'a ApkInfoConfig,
}

impl<'a> InfoCommand<'a> {
    pub fn new(config: &'a ApkInfoConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(
        &self,
        apk: &Path,
        icon: bool,
        icon_out: Option<&Path>,
        json: bool,
    ) -> Result<()> {
        let inspector = PackageInspector::from_config(self.config)?;

        let info = if icon || icon_out.is_some() {
            inspector.get_package_info_with_icon(apk)?
        } else {
            inspector.get_package_info(apk)?
        };

        if let Some(icon_out) = icon_out {
            write_icon(&info, icon_out)?;
        }

        if json {
            println!("{}", format_json(&info)?);
        } else {
            print!("{}", format_text(&info));
        }

        Ok(())
    }
}

fn write_icon(info: &InspectionResult, destination: &Path) -> Result<()> {
    let bytes = info.icon_bytes.as_ref().ok_or_else(|| {
        ApkInfoError::ValidationError(format!(
            "{} does not declare an icon, nothing to write to {}",
            info.package_name,
            destination.display()
        ))
    })?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(destination, bytes)?;
    log::info!("Wrote {} bytes to {}", bytes.len(), destination.display());
    Ok(())
}

fn format_json(info: &InspectionResult) -> Result<String> {
    let output = InfoOutput {
        info,
        icon_size: info.icon_bytes.as_ref().map(Vec::len),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

fn format_text(info: &InspectionResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Package:     {}\n", info.package_name));
    output.push_str(&format!(
        "Version:     {} ({})\n",
        info.version_name, info.version_code
    ));
    output.push_str(&format!("Label:       {}\n", info.app_name));

    if let Some(activity) = &info.launchable_activity {
        output.push_str(&format!("Launcher:    {activity}\n"));
    }

    if let Some(icon_path) = &info.icon_path {
        match &info.icon_bytes {
            Some(bytes) => {
                output.push_str(&format!("Icon:        {icon_path} ({} bytes)\n", bytes.len()))
            }
            None => output.push_str(&format!("Icon:        {icon_path}\n")),
        }
    }

    if info.permissions.is_empty() {
        output.push_str("Permissions: none\n");
    } else {
        output.push_str(&format!("Permissions: {}\n", info.permissions.len()));
        for permission in &info.permissions {
            output.push_str(&format!("  {permission}\n"));
        }
    }

    output
}
