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

pub mod aapt;
pub mod badging;
pub mod commands;
pub mod config;
pub mod error;
pub mod icon;
pub mod inspector;
pub mod logging;
pub mod models;
pub mod platform;

pub use aapt::{Aapt, AaptBinary, ToolInvoker};
pub use badging::parse_badging;
pub use error::{ApkInfoError, BadgingError, Result};
pub use icon::IconExtractor;
pub use inspector::PackageInspector;
pub use models::InspectionResult;
pub use platform::{PlatformTarget, resolve_executable_path};
