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

//! Parser for `aapt dump badging` output.
//!
//! This is the only place that looks at raw dump text. The lines it relies on:
//!
//! ```text
//! package: name='com.example.app' versionCode='12' versionName='1.2.0'
//! application-label:'Example App'
//! application-icon-160:'res/mipmap-mdpi/ic_launcher.png'
//! application: label='Example App' icon='res/mipmap-mdpi/ic_launcher.png'
//! uses-permission: name='android.permission.INTERNET'
//! launchable-activity: name='com.example.app.MainActivity'  label='' icon=''
//! ```

use crate::error::BadgingError;
use crate::models::InspectionResult;
use regex::Regex;
use std::sync::OnceLock;

struct Patterns {
    package: Regex,
    application_label: Regex,
    label_line: Regex,
    application_icon: Regex,
    density_icon: Regex,
    permission: Regex,
    launchable_activity: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| {
        let compile = |pattern: &str| Regex::new(pattern).expect("badging pattern is valid");
        Patterns {
            package: compile(
                r"^package: name='([^'\s]+)' versionCode='(\d+)' versionName='([^'\s]+)'",
            ),
            application_label: compile(r"application: label='((?:[^'\\]|\\.)*)'"),
            label_line: compile(r"application-label:'((?:[^'\\]|\\.)*)'"),
            application_icon: compile(r"application: [^\n]*\bicon='([^']+)'"),
            density_icon: compile(r"application-icon-(\d+):'([^']+)'"),
            permission: compile(r"uses-permission: name='([\w.-]+)'"),
            launchable_activity: compile(r"launchable-activity: name='([\w.-]+)'"),
        }
    })
}

/// Turn `dump badging` text into an [`InspectionResult`] with no icon bytes.
///
/// The `package:` line must open the text. Icon path and launchable activity
/// are optional; everything else is mandatory.
pub fn parse_badging(text: &str) -> Result<InspectionResult, BadgingError> {
    let patterns = patterns();

    let package = patterns
        .package
        .captures(text)
        .ok_or(BadgingError::MissingPackage)?;

    let app_name = find_app_name(text).ok_or(BadgingError::MissingApplicationLabel)?;

    Ok(InspectionResult {
        package_name: package[1].to_string(),
        version_code: package[2].to_string(),
        version_name: package[3].to_string(),
        app_name,
        icon_path: find_icon_path(text),
        permissions: find_permissions(text),
        launchable_activity: find_first(&patterns.launchable_activity, text),
        icon_bytes: None,
    })
}

fn find_app_name(text: &str) -> Option<String> {
    let patterns = patterns();
    find_first(&patterns.application_label, text)
        .or_else(|| find_first(&patterns.label_line, text))
        .map(|label| unescape(&label))
}

/// Undo aapt's quoting of `'`, `\` and newlines inside quoted values.
fn unescape(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => unescaped.push('\n'),
            Some(escaped) => unescaped.push(escaped),
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

/// Icon declared on the `application:` line, else the highest-density
/// `application-icon-<dpi>` entry.
pub fn find_icon_path(text: &str) -> Option<String> {
    let patterns = patterns();
    find_first(&patterns.application_icon, text).or_else(|| {
        patterns
            .density_icon
            .captures_iter(text)
            .filter_map(|caps| {
                let density = caps[1].parse::<u32>().ok()?;
                Some((density, caps[2].to_string()))
            })
            .max_by_key(|(density, _)| *density)
            .map(|(_, path)| path)
    })
}

pub fn find_permissions(text: &str) -> Vec<String> {
    patterns()
        .permission
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn find_first(regex: &Regex, text: &str) -> Option<String> {
    regex.captures(text).map(|caps| caps[1].to_string())
}
