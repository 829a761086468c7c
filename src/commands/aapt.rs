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

use crate::aapt::{Aapt, ToolInvoker};
use crate::config::ApkInfoConfig;
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// aapt subcommands whose output is printed unchanged.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AaptCommand {
    /// List the contents of an APK
    #[command(visible_alias = "l")]
    List {
        /// APK to list
        apk: PathBuf,
    },
    /// Dump a section of an APK (badging, permissions, resources, xmltree, ...)
    #[command(visible_alias = "d")]
    Dump {
        /// APK to inspect
        apk: PathBuf,
        /// Section to dump
        #[arg(default_value = "badging")]
        section: String,
    },
    /// Run an aapt package command against an APK
    #[command(visible_alias = "p")]
    Package {
        /// APK passed as the last argument
        apk: PathBuf,
        /// Package command arguments
        #[arg(required = true, allow_hyphen_values = true, trailing_var_arg = true, num_args = 1..)]
        command: Vec<String>,
    },
    /// Remove files from an APK
    #[command(visible_alias = "r")]
    Remove {
        apk: PathBuf,
        #[arg(required = true, num_args = 1..)]
        files: Vec<String>,
    },
    /// Add files to an APK
    #[command(visible_alias = "a")]
    Add {
        apk: PathBuf,
        #[arg(required = true, num_args = 1..)]
        files: Vec<String>,
    },
    /// Crunch PNG resources into an output directory
    #[command(visible_alias = "c")]
    Crunch {
        resource_dir: PathBuf,
        output_dir: PathBuf,
    },
    /// Crunch a single PNG file
    #[command(visible_alias = "s")]
    SingleCrunch { input: PathBuf, output: PathBuf },
    /// Print the aapt version
    #[command(visible_alias = "v")]
    Version,
}

impl AaptCommand {
    pub fn execute(&self, config: &ApkInfoConfig) -> Result<()> {
        let aapt = Aapt::from_config(config)?;
        let output = self.run(&aapt)?;
        println!("{output}");
        Ok(())
    }

    /// Run against `aapt` and return its raw output.
    pub fn run<I: ToolInvoker>(&self, aapt: &Aapt<I>) -> Result<String> {
        match self {
            AaptCommand::List { apk } => aapt.list(apk),
            AaptCommand::Dump { apk, section } => aapt.dump(apk, section),
            AaptCommand::Package { apk, command } => aapt.package_command(apk, command.as_slice()),
            AaptCommand::Remove { apk, files } => aapt.remove(apk, files.as_slice()),
            AaptCommand::Add { apk, files } => aapt.add(apk, files.as_slice()),
            AaptCommand::Crunch {
                resource_dir,
                output_dir,
            } => aapt.crunch(resource_dir, output_dir),
            AaptCommand::SingleCrunch { input, output } => aapt.single_crunch(input, output),
            AaptCommand::Version => aapt.version(),
        }
    }
}
