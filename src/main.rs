use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;

use commands::{clean, install, settings_cmd, uninstall, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "sitemapgen")]
#[command(version = VERSION)]
#[command(about = "Manage the sitemap config script and generated sitemap files")]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the sample config script into the project if it is missing
    Install(install::InstallArgs),
    /// Remove the project's config script
    Uninstall(uninstall::UninstallArgs),
    /// Delete generated sitemap files from the output directory
    Clean(clean::CleanArgs),
    /// Show resolved settings for the project
    Settings(settings_cmd::SettingsArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs { root: cli.root };

    let (json_result, exit_code) = commands::run_json(cli.command, &global);
    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
