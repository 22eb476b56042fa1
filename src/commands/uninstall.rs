use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use sitemapgen::install::{Installer, UninstallOutcome};
use sitemapgen::templates::Templates;

use super::{CmdResult, GlobalArgs, Project};

#[derive(Args)]
pub struct UninstallArgs {}

#[derive(Serialize)]
pub struct UninstallOutput {
    pub command: &'static str,
    pub path: PathBuf,
    pub outcome: UninstallOutcome,
}

pub fn run(_args: UninstallArgs, global: &GlobalArgs) -> CmdResult<UninstallOutput> {
    let project = Project::load(global)?;
    let templates = Templates::resolve(&project.settings, &project.app);
    let installer = Installer::new(&project.fs, &project.app, &project.settings, &templates);

    let outcome = installer.uninstall()?;

    Ok((
        UninstallOutput {
            command: "uninstall",
            path: installer.target().clone(),
            outcome,
        },
        0,
    ))
}
