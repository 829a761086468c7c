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

use crate::error::{ApkInfoError, BadgingError};
use std::fmt;
use std::io::ErrorKind;

pub struct ErrorContext<'a> {
    pub error: &'a ApkInfoError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a ApkInfoError) -> Self {
        let (suggestion, details) = match error {
            ApkInfoError::UnsupportedPlatform(os) => {
                let suggestion = Some(
                    "aapt binaries are only bundled for Darwin, Linux and Windows. Point \
                     'aapt.executable' in config.toml at a native aapt build instead."
                        .to_string(),
                );
                let details = Some(format!("Detected operating system: {os}"));
                (suggestion, details)
            }
            ApkInfoError::Invocation { path, source } => {
                let suggestion = match source.kind() {
                    ErrorKind::NotFound => Some(format!(
                        "Ensure the aapt binary exists at {} or pass --aapt-dir <DIR> pointing at \
                         the directory that contains 'bin/'.",
                        path.display()
                    )),
                    ErrorKind::PermissionDenied => {
                        if cfg!(unix) {
                            Some(format!(
                                "Make the binary executable: chmod u+x {}",
                                path.display()
                            ))
                        } else {
                            Some(format!(
                                "Ensure you are allowed to execute: {}",
                                path.display()
                            ))
                        }
                    }
                    _ => None,
                };
                let details = Some(format!("Process error: {source}"));
                (suggestion, details)
            }
            ApkInfoError::Parse(BadgingError::MissingPackage) => {
                let suggestion = Some(
                    "Ensure the file is a valid APK. Run 'apkinfo dump <APK> badging' to see the \
                     raw aapt output."
                        .to_string(),
                );
                let details =
                    Some("The output did not start with a 'package:' line.".to_string());
                (suggestion, details)
            }
            ApkInfoError::Parse(BadgingError::MissingApplicationLabel) => {
                let suggestion = Some(
                    "Run 'apkinfo dump <APK> badging' to inspect the raw aapt output.".to_string(),
                );
                let details = Some(
                    "Neither an 'application:' nor an 'application-label:' line was found."
                        .to_string(),
                );
                (suggestion, details)
            }
            ApkInfoError::Extraction { entry, source } => {
                let suggestion = Some(
                    "Check that the archive is readable. Set 'icon.extractor' in config.toml to \
                     switch between the builtin reader and unzip."
                        .to_string(),
                );
                let details = Some(format!("Entry '{entry}': {source}"));
                (suggestion, details)
            }
            ApkInfoError::ConfigError(msg) => {
                let suggestion = Some(
                    "Check the syntax of config.toml in your APKINFO_HOME directory.".to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            _ => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_details(mut self, details: String) -> Self {
        self.details = Some(details);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
