use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use sitemapgen::install::{InstallOutcome, Installer};
use sitemapgen::templates::Templates;

use super::{CmdResult, GlobalArgs, Project};

#[derive(Args)]
pub struct InstallArgs {
    /// Report whether the config script was created or already present
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(Serialize)]
pub struct InstallOutput {
    pub command: &'static str,
    pub path: PathBuf,
    pub outcome: InstallOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

pub fn run(args: InstallArgs, global: &GlobalArgs) -> CmdResult<InstallOutput> {
    let project = Project::load(global)?;
    let templates = Templates::resolve(&project.settings, &project.app);
    let installer = Installer::new(&project.fs, &project.app, &project.settings, &templates);

    let outcome = installer.install(args.verbose, &project.diag)?;

    Ok((
        InstallOutput {
            command: "install",
            path: installer.target().clone(),
            outcome,
            template_dir: templates.dir().cloned(),
        },
        0,
    ))
}
