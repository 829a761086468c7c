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

use apkinfo::commands::aapt::AaptCommand;
use apkinfo::commands::info::InfoCommand;
use apkinfo::config::new_apkinfo_config;
use apkinfo::error::{Result, format_error_with_color, get_exit_code};
use apkinfo::logging;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apkinfo")]
#[command(author, version, about = "Inspect Android APKs with the bundled aapt", long_about = None)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory containing bin/<Platform>/aapt_64 (overrides aapt.base_dir)
    #[arg(long, value_name = "DIR", global = true)]
    aapt_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show package name, version, label, permissions and launcher activity
    #[command(visible_alias = "i")]
    Info {
        /// APK to inspect
        apk: PathBuf,

        /// Also read the launcher icon out of the archive
        #[arg(long)]
        icon: bool,

        /// Write the launcher icon to this file (implies --icon)
        #[arg(long, value_name = "FILE")]
        icon_out: Option<PathBuf>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    #[command(flatten)]
    Aapt(AaptCommand),
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    let use_color = std::io::stderr().is_terminal();

    let mut config = match new_apkinfo_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error_with_color(&e, use_color));
            std::process::exit(get_exit_code(&e));
        }
    };

    if let Some(dir) = cli.aapt_dir {
        log::debug!("Using aapt base directory from --aapt-dir: {}", dir.display());
        config.aapt.base_dir = Some(dir);
        config.aapt.executable = None;
    }

    let result: Result<()> = match cli.command {
        Commands::Info {
            apk,
            icon,
            icon_out,
            json,
        } => InfoCommand::new(&config)
            .and_then(|command| command.execute(&apk, icon, icon_out.as_deref(), json)),
        Commands::Aapt(command) => command.execute(&config),
    };

    if let Err(e) = result {
        eprintln!("{}", format_error_with_color(&e, use_color));
        std::process::exit(get_exit_code(&e));
    }
}
